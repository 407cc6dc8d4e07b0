use serde::{Deserialize, Serialize};

use shopfront_core::{Entity, Price, ProductId};

/// Currency label shown when a record carries none.
pub const DEFAULT_CURRENCY: &str = "₹";

/// Vendor label shown when a record carries none.
pub const DEFAULT_VENDOR: &str = "Amazon";

/// A single affiliate product as it appears in the catalog document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    id: ProductId,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    image: String,
    price: Price,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    vendor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    category: Option<String>,
    #[serde(alias = "amazonLink")]
    product_url: String,
}

impl Product {
    pub fn new(
        id: u64,
        title: impl Into<String>,
        price: Price,
        product_url: impl Into<String>,
    ) -> Self {
        Self {
            id: ProductId::new(id),
            title: title.into(),
            description: String::new(),
            image: String::new(),
            price,
            currency: None,
            vendor: None,
            category: None,
            product_url: product_url.into(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    pub fn with_vendor(mut self, vendor: impl Into<String>) -> Self {
        self.vendor = Some(vendor.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn price(&self) -> Price {
        self.price
    }

    /// Currency label, falling back to [`DEFAULT_CURRENCY`].
    pub fn currency(&self) -> &str {
        self.currency.as_deref().unwrap_or(DEFAULT_CURRENCY)
    }

    /// Vendor label, falling back to [`DEFAULT_VENDOR`].
    pub fn vendor(&self) -> &str {
        self.vendor.as_deref().unwrap_or(DEFAULT_VENDOR)
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Outbound affiliate link.
    pub fn product_url(&self) -> &str {
        &self.product_url
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Immutable snapshot of every product available to the page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for category in self.products.iter().filter_map(Product::category) {
            if !seen.contains(&category) {
                seen.push(category);
            }
        }
        seen
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Product> {
        self.products.iter()
    }

    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| *p.id() == id)
    }
}

impl From<Vec<Product>> for Catalog {
    fn from(products: Vec<Product>) -> Self {
        Self::new(products)
    }
}

impl FromIterator<Product> for Catalog {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = core::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}
