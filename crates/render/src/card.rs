//! Card descriptors for the product grid.

use serde::Serialize;

use shopfront_catalog::Product;
use shopfront_core::ProductId;

use crate::format::format_price_label;

/// Placeholder shown instead of cards when nothing matches.
pub const NO_RESULTS_MESSAGE: &str = "No products found. Try a different search or category.";

/// Link relation of the outbound button (affiliate disclosure included).
pub const LINK_REL: &str = "noopener noreferrer sponsored";

/// Browsing context for outbound navigation.
pub const LINK_TARGET: &str = "_blank";

/// Window features used when a card click opens the destination.
pub const WINDOW_FEATURES: &str = "noopener,noreferrer";

/// Everything an adapter needs to draw one product card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardDescriptor {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub image_alt: String,
    pub price_label: String,
    pub button_label: String,
    pub destination_url: String,
}

impl CardDescriptor {
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id_typed(),
            title: product.title().to_string(),
            description: product.description().to_string(),
            image_url: product.image().to_string(),
            image_alt: product.title().to_string(),
            price_label: format_price_label(product.currency(), product.price()),
            button_label: format!("View on {}", product.vendor()),
            destination_url: product.product_url().to_string(),
        }
    }

    /// What a click on this card should do.
    ///
    /// Clicks on the button itself are left to the browser, which follows the
    /// link with its own `target`/`rel`.
    pub fn on_click(&self, target: ClickTarget) -> CardAction {
        match target {
            ClickTarget::Link => CardAction::FollowLink,
            ClickTarget::Card => CardAction::Open {
                url: self.destination_url.clone(),
                target: LINK_TARGET,
                features: WINDOW_FEATURES,
            },
        }
    }
}

/// Element that received a click inside a card.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ClickTarget {
    /// The outbound `<a>` button.
    Link,
    /// Anywhere else on the card.
    Card,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardAction {
    FollowLink,
    Open {
        url: String,
        target: &'static str,
        features: &'static str,
    },
}

/// Declarative content of the product grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GridView {
    /// Exactly one placeholder message, no cards.
    Empty { message: String },
    Cards { cards: Vec<CardDescriptor> },
}

impl GridView {
    pub fn cards(&self) -> &[CardDescriptor] {
        match self {
            GridView::Empty { .. } => &[],
            GridView::Cards { cards } => cards,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, GridView::Empty { .. })
    }
}

/// Describe the grid for an ordered sequence of products.
pub fn describe_grid<'a, I>(products: I) -> GridView
where
    I: IntoIterator<Item = &'a Product>,
{
    let cards: Vec<CardDescriptor> = products.into_iter().map(CardDescriptor::from_product).collect();
    tracing::debug!(cards = cards.len(), "describing product grid");

    if cards.is_empty() {
        GridView::Empty {
            message: NO_RESULTS_MESSAGE.to_string(),
        }
    } else {
        GridView::Cards { cards }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_catalog::{Catalog, ViewState};
    use shopfront_core::Price;

    fn headphones() -> Product {
        Product::new(1, "Headphones", Price::new(1499.5).unwrap(), "https://amzn.to/h")
            .with_description("Noise cancelling")
            .with_image("img/h.jpg")
            .with_currency("₹")
    }

    #[test]
    fn empty_sequence_is_a_single_placeholder() {
        let grid = describe_grid(Vec::<&Product>::new());
        assert!(grid.is_empty());
        assert!(grid.cards().is_empty());
        assert_eq!(
            grid,
            GridView::Empty {
                message: NO_RESULTS_MESSAGE.to_string()
            }
        );
    }

    #[test]
    fn card_carries_product_fields() {
        let product = headphones();
        let grid = describe_grid([&product]);
        let card = &grid.cards()[0];

        assert_eq!(card.title, "Headphones");
        assert_eq!(card.image_alt, "Headphones");
        assert_eq!(card.price_label, "₹1,500");
        assert_eq!(card.button_label, "View on Amazon");
        assert_eq!(card.destination_url, "https://amzn.to/h");
    }

    #[test]
    fn vendor_label_is_used_for_button() {
        let product = headphones().with_vendor("Flipkart");
        assert_eq!(CardDescriptor::from_product(&product).button_label, "View on Flipkart");
    }

    #[test]
    fn card_click_opens_destination_without_opener() {
        let card = CardDescriptor::from_product(&headphones());

        assert_eq!(card.on_click(ClickTarget::Link), CardAction::FollowLink);
        assert_eq!(
            card.on_click(ClickTarget::Card),
            CardAction::Open {
                url: "https://amzn.to/h".to_string(),
                target: "_blank",
                features: "noopener,noreferrer",
            }
        );
    }

    #[test]
    fn grid_follows_derived_order() {
        let catalog = Catalog::new(vec![
            headphones(),
            Product::new(2, "Speaker", Price::new(80.0).unwrap(), "u"),
        ]);
        let state = ViewState::new().with_sort(shopfront_catalog::SortKey::PriceAsc);

        let grid = describe_grid(state.derive(&catalog));
        let titles: Vec<&str> = grid.cards().iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Speaker", "Headphones"]);
    }

    #[test]
    fn serializes_with_kind_tag() {
        let json = serde_json::to_value(describe_grid(Vec::<&Product>::new())).unwrap();
        assert_eq!(json["kind"], "empty");
    }
}
