//! Product price value object.
//!
//! Catalog documents carry prices either as JSON numbers or as display strings
//! with a currency prefix (`"$149.99"`, `"₹1,299"`). Both are normalised into a
//! plain numeric amount at the edge so sorting never compares text.

use core::cmp::Ordering;
use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// Largest accepted amount: every whole number up to here is exact in `f64`
/// and fits `u64`.
pub const MAX_AMOUNT: f64 = 9_007_199_254_740_991.0;

/// Numeric price in major currency units. Always finite, non-negative and at
/// most [`MAX_AMOUNT`].
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Price(f64);

impl ValueObject for Price {}

impl Price {
    pub fn new(amount: f64) -> DomainResult<Self> {
        if !amount.is_finite() || !(0.0..=MAX_AMOUNT).contains(&amount) {
            return Err(DomainError::invalid_price(amount.to_string()));
        }
        Ok(Self(amount))
    }

    /// Parse a display price such as `"$149.99"`, `"₹ 1,299"` or `"79.50"`.
    ///
    /// A leading currency prefix and `,` group separators are ignored, as is
    /// anything after the numeric part, including a second `.`.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let raw_trimmed = raw.trim();
        let start = numeric_start(raw_trimmed).ok_or_else(|| DomainError::invalid_price(raw))?;
        let body = &raw_trimmed[start..];

        let mut number = String::with_capacity(body.len());
        let mut seen_point = false;
        for (i, c) in body.char_indices() {
            match c {
                '0'..='9' => number.push(c),
                '.' if !seen_point => {
                    seen_point = true;
                    number.push(c);
                }
                ',' => {}
                '-' | '+' if i == 0 => number.push(c),
                _ => break,
            }
        }

        let amount = number
            .parse::<f64>()
            .map_err(|_| DomainError::invalid_price(raw))?;
        Self::new(amount).map_err(|_| DomainError::invalid_price(raw))
    }

    pub fn amount(&self) -> f64 {
        self.0
    }

    /// Total ordering by amount.
    pub fn cmp_amount(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }

    /// Amount rounded to a whole number, halves away from zero.
    pub fn whole_units(&self) -> u64 {
        self.0.round() as u64
    }
}

/// Byte offset of the first digit, or of a `.`/sign directly in front of one.
fn numeric_start(s: &str) -> Option<usize> {
    let mut chars = s.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if c.is_ascii_digit() {
            return Some(i);
        }
        if matches!(c, '.' | '-' | '+')
            && chars.peek().is_some_and(|(_, next)| next.is_ascii_digit())
        {
            return Some(i);
        }
    }
    None
}

impl FromStr for Price {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.0)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawPrice {
            Number(f64),
            Text(String),
        }

        let price = match RawPrice::deserialize(deserializer)? {
            RawPrice::Number(amount) => Price::new(amount),
            RawPrice::Text(text) => Price::parse(&text),
        };
        price.map_err(serde::de::Error::custom)
    }
}
