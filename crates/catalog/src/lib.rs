//! Catalog domain module.
//!
//! Product records, the builtin sample catalog, the catalog loader and the
//! filter/sort engine that derives the sequence shown to the user.
//! Everything except the loader is deterministic and free of IO.

pub mod builtin;
pub mod loader;
pub mod product;
pub mod query;
pub mod view;

pub use loader::{
    CatalogError, CatalogFetcher, CatalogLoader, CatalogSource, FetchResponse, parse_catalog,
};
#[cfg(not(target_arch = "wasm32"))]
pub use loader::HttpFetcher;
pub use product::{Catalog, DEFAULT_CURRENCY, DEFAULT_VENDOR, Product};
pub use query::{ALL_CATEGORIES, CategoryFilter, SearchTerm, SortKey, apply, filter_and_sort};
pub use view::{ViewEvent, ViewState};

pub use shopfront_core::{Price, ProductId};
