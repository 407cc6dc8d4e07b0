//! Filter/sort engine.
//!
//! Derives the ordered sequence shown to the user from the full catalog. The
//! input slice is only borrowed; results are references into it.

use core::fmt;

use shopfront_core::Entity;

use crate::product::Product;

/// Category sentinel that disables category filtering.
pub const ALL_CATEGORIES: &str = "all";

/// Category selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    /// Exact, case-sensitive category match.
    Only(String),
}

impl CategoryFilter {
    pub fn parse(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Only(value.to_string())
        }
    }

    /// Value carried by the matching `data-category` control.
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Only(category) => category,
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => product.category() == Some(category.as_str()),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort order of the derived sequence.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Ascending by product identifier.
    #[default]
    Default,
    PriceAsc,
    PriceDesc,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Default, SortKey::PriceAsc, SortKey::PriceDesc];

    /// Unknown keys fall back to [`SortKey::Default`].
    pub fn parse(value: &str) -> Self {
        match value {
            "price-asc" => Self::PriceAsc,
            "price-desc" => Self::PriceDesc,
            _ => Self::Default,
        }
    }

    /// Value carried by the matching `data-sort` control.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Default => "Featured",
            Self::PriceAsc => "Price: Low to High",
            Self::PriceDesc => "Price: High to Low",
        }
    }

    fn sort(&self, products: &mut [&Product]) {
        // `sort_by` is stable: equal keys keep their prior relative order.
        match self {
            Self::Default => products.sort_by(|a, b| a.id().cmp(b.id())),
            Self::PriceAsc => products.sort_by(|a, b| a.price().cmp_amount(&b.price())),
            Self::PriceDesc => products.sort_by(|a, b| b.price().cmp_amount(&a.price())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lowercased search needle. Empty matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    pub fn new(term: &str) -> Self {
        Self(term.to_lowercase())
    }

    /// Normalise raw search-box input: trimmed and lowercased.
    pub fn from_input(input: &str) -> Self {
        Self::new(input.trim())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Substring containment in title or description, ignoring case.
    pub fn matches(&self, product: &Product) -> bool {
        self.is_empty()
            || product.title().to_lowercase().contains(&self.0)
            || product.description().to_lowercase().contains(&self.0)
    }
}

/// Filter by category and search term, then sort.
pub fn filter_and_sort<'a>(
    all: &'a [Product],
    category: &CategoryFilter,
    sort: SortKey,
    search: &SearchTerm,
) -> Vec<&'a Product> {
    let mut derived: Vec<&Product> = all
        .iter()
        .filter(|p| category.matches(p))
        .filter(|p| search.matches(p))
        .collect();
    sort.sort(&mut derived);
    derived
}

/// String-keyed entry point mirroring the page controls:
/// `category` is `"all"` or a category name, `sort` is a `data-sort` value.
pub fn apply<'a>(all: &'a [Product], category: &str, sort: &str, search: &str) -> Vec<&'a Product> {
    filter_and_sort(
        all,
        &CategoryFilter::parse(category),
        SortKey::parse(sort),
        &SearchTerm::new(search),
    )
}
