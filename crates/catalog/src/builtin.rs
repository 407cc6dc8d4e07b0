//! Sample catalog compiled into the binary.
//!
//! Used when no catalog document is configured. Replace the links with real
//! affiliate links before publishing.

use shopfront_core::{DomainResult, Price};

use crate::product::{Catalog, Product};

struct Entry {
    id: u64,
    title: &'static str,
    description: &'static str,
    image: &'static str,
    price: &'static str,
    link: &'static str,
}

const ENTRIES: &[Entry] = &[
    Entry {
        id: 1,
        title: "Wireless Noise-Cancelling Headphones",
        description: "Immerse yourself in music with these high-fidelity, noise-cancelling headphones. Long-lasting battery and crystal-clear audio.",
        image: "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?q=80&w=2070&auto=format&fit=crop",
        price: "$149.99",
        link: "https://amzn.to/45f06v4",
    },
    Entry {
        id: 2,
        title: "Smartwatch with Fitness Tracker",
        description: "Stay connected and track your fitness goals. Monitors heart rate, sleep, and steps. Sleek design for any occasion.",
        image: "https://images.unsplash.com/photo-1546868871-7041f2a55e12?q=80&w=1964&auto=format&fit=crop",
        price: "$199.00",
        link: "https://www.amazon.com/s?k=smartwatch",
    },
    Entry {
        id: 3,
        title: "Portable Bluetooth Speaker",
        description: "Take your music anywhere. This waterproof speaker delivers powerful sound and has a built-in microphone for calls.",
        image: "https://images.unsplash.com/photo-1589256469027-1c21a572d159?q=80&w=1974&auto=format&fit=crop",
        price: "$79.50",
        link: "https://www.amazon.com/s?k=bluetooth+speaker",
    },
    Entry {
        id: 4,
        title: "4K Action Camera",
        description: "Capture your adventures in stunning 4K. Waterproof, durable, and packed with features like image stabilization.",
        image: "https://images.unsplash.com/photo-1563298723-d07aa8228032?q=80&w=2070&auto=format&fit=crop",
        price: "$250.00",
        link: "https://www.amazon.com/s?k=action+camera",
    },
    Entry {
        id: 5,
        title: "Ergonomic Office Chair",
        description: "Improve your posture and comfort during long work hours. Fully adjustable with lumbar support and breathable mesh.",
        image: "https://images.unsplash.com/photo-1580480055273-228ff5388ef8?q=80&w=1974&auto=format&fit=crop",
        price: "$299.99",
        link: "https://www.amazon.com/s?k=office+chair",
    },
    Entry {
        id: 6,
        title: "Single Serve Coffee Maker",
        description: "Brew your favorite coffee in minutes. Compact design is perfect for small spaces. Compatible with K-Cup pods.",
        image: "https://images.unsplash.com/photo-1622483758336-a8342a342413?q=80&w=1974&auto=format&fit=crop",
        price: "$89.99",
        link: "https://www.amazon.com/s?k=coffee+maker",
    },
];

fn to_product(entry: &Entry) -> DomainResult<Product> {
    Ok(Product::new(entry.id, entry.title, Price::parse(entry.price)?, entry.link)
        .with_description(entry.description)
        .with_image(entry.image)
        .with_currency("$"))
}

/// The builtin sample catalog.
pub fn catalog() -> DomainResult<Catalog> {
    ENTRIES.iter().map(to_product).collect::<DomainResult<Vec<_>>>().map(Catalog::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_prices_parse() {
        let catalog = catalog().unwrap();
        assert_eq!(catalog.len(), 6);

        let prices: Vec<f64> = catalog.iter().map(|p| p.price().amount()).collect();
        assert_eq!(prices, vec![149.99, 199.0, 79.5, 250.0, 299.99, 89.99]);
        assert!(catalog.iter().all(|p| p.currency() == "$"));
    }

    #[test]
    fn builtin_ids_are_unique() {
        let catalog = catalog().unwrap();
        let mut ids: Vec<_> = catalog.iter().map(|p| p.id_typed()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
    }
}
