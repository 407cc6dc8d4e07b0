//! Builder configuration from environment variables.

use std::path::PathBuf;

use shopfront_catalog::{CatalogSource, ViewEvent, ViewState};

pub const ENV_CATALOG: &str = "SHOPFRONT_CATALOG";
pub const ENV_OUT_DIR: &str = "SHOPFRONT_OUT_DIR";
pub const ENV_CATEGORY: &str = "SHOPFRONT_CATEGORY";
pub const ENV_SORT: &str = "SHOPFRONT_SORT";
pub const ENV_SEARCH: &str = "SHOPFRONT_SEARCH";
pub const ENV_TITLE: &str = "SHOPFRONT_TITLE";
pub const ENV_LOG_FORMAT: &str = "SHOPFRONT_LOG_FORMAT";
pub const ENV_SCRIPT: &str = "SHOPFRONT_SCRIPT";

pub const DEFAULT_OUT_DIR: &str = "dist";
pub const DEFAULT_TITLE: &str = "Shopfront";

#[derive(Debug, Clone, PartialEq)]
pub struct StorefrontConfig {
    pub catalog: CatalogSource,
    pub out_dir: PathBuf,
    pub title: String,
    /// View the page is rendered with before any interaction.
    pub initial_view: ViewState,
    /// `json` or `pretty`.
    pub log_format: String,
    /// Browser bundle loaded by the generated pages, if any.
    pub script: Option<String>,
}

impl StorefrontConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key/value source. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let catalog = match get(ENV_CATALOG) {
            Some(location) => CatalogSource::from_location(&location),
            None => CatalogSource::Builtin,
        };

        // Same event order as a visitor: category first, since it clears search.
        let mut initial_view = ViewState::new();
        if let Some(category) = get(ENV_CATEGORY) {
            initial_view = initial_view.reduce(&ViewEvent::SelectCategory(category));
        }
        if let Some(sort) = get(ENV_SORT) {
            initial_view = initial_view.reduce(&ViewEvent::SelectSort(sort));
        }
        if let Some(search) = get(ENV_SEARCH) {
            initial_view = initial_view.reduce(&ViewEvent::Search(search));
        }

        Self {
            catalog,
            out_dir: PathBuf::from(get(ENV_OUT_DIR).unwrap_or_else(|| DEFAULT_OUT_DIR.to_string())),
            title: get(ENV_TITLE).unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            initial_view,
            log_format: get(ENV_LOG_FORMAT).unwrap_or_else(|| "json".to_string()),
            script: get(ENV_SCRIPT).map(|script| script.trim().to_string()),
        }
    }
}
