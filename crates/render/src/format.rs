//! Price labels.

use shopfront_core::Price;

/// Currency label followed by the whole-unit amount in Indian digit grouping,
/// e.g. `₹12,34,567`.
pub fn format_price_label(currency: &str, price: Price) -> String {
    format!("{}{}", currency, group_indian(price.whole_units()))
}

/// Group digits the `en-IN` way: the last three digits, then pairs.
pub fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut out = String::with_capacity(digits.len() + digits.len() / 2);
    for (i, c) in head.chars().enumerate() {
        if i > 0 && (head.len() - i) % 2 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out.push(',');
    out.push_str(tail);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn groups_like_en_in() {
        assert_eq!(group_indian(0), "0");
        assert_eq!(group_indian(999), "999");
        assert_eq!(group_indian(1_000), "1,000");
        assert_eq!(group_indian(99_999), "99,999");
        assert_eq!(group_indian(1_00_000), "1,00,000");
        assert_eq!(group_indian(12_34_567), "12,34,567");
        assert_eq!(group_indian(1_23_45_67_890), "1,23,45,67,890");
    }

    #[test]
    fn label_rounds_to_whole_units() {
        let price = Price::parse("$149.99").unwrap();
        assert_eq!(format_price_label("$", price), "$150");

        let price = Price::new(1299.4).unwrap();
        assert_eq!(format_price_label("₹", price), "₹1,299");
    }

    proptest! {
        #[test]
        fn grouping_preserves_digits(value in any::<u64>()) {
            let grouped = group_indian(value);
            prop_assert_eq!(grouped.replace(',', ""), value.to_string());
            prop_assert!(!grouped.starts_with(','));
        }
    }
}
