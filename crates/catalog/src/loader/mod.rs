//! Catalog loading.
//!
//! [`CatalogLoader::try_load`] reports every failure as a [`CatalogError`];
//! [`CatalogLoader::load`] is the page-facing boundary that logs the failure
//! and degrades to an empty catalog instead.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;

use crate::builtin;
use crate::product::{Catalog, Product};

#[cfg(not(target_arch = "wasm32"))]
mod http;

#[cfg(not(target_arch = "wasm32"))]
pub use http::HttpFetcher;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP error! status: {0}")]
    Status(u16),
    #[error("malformed catalog: {0}")]
    Parse(String),
    #[error("failed to read {path}: {message}")]
    Io { path: String, message: String },
}

/// Status and body of a fetched catalog document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub status: u16,
    pub body: String,
}

impl FetchResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport used to fetch a catalog document.
///
/// Browser futures are not `Send`, so neither are these.
#[async_trait(?Send)]
pub trait CatalogFetcher {
    async fn fetch(&self, location: &str) -> Result<FetchResponse, CatalogError>;
}

/// Where the catalog comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogSource {
    /// The sample catalog compiled into the crate.
    Builtin,
    /// Products already in memory.
    Inline(Vec<Product>),
    /// A JSON document on the local filesystem.
    File(PathBuf),
    /// A JSON document fetched through the [`CatalogFetcher`].
    Url(String),
}

impl CatalogSource {
    /// `http://`/`https://` locations become [`CatalogSource::Url`]; anything
    /// else is a file path.
    pub fn from_location(location: &str) -> Self {
        let location = location.trim();
        if location.starts_with("http://") || location.starts_with("https://") {
            Self::Url(location.to_string())
        } else {
            Self::File(PathBuf::from(location))
        }
    }
}

/// Parse a catalog document: a JSON array of product records.
pub fn parse_catalog(body: &str) -> Result<Catalog, CatalogError> {
    serde_json::from_str::<Vec<Product>>(body)
        .map(Catalog::new)
        .map_err(|e| CatalogError::Parse(e.to_string()))
}

#[cfg(not(target_arch = "wasm32"))]
async fn read_file(path: &Path) -> Result<String, CatalogError> {
    tokio::fs::read_to_string(path).await.map_err(|e| CatalogError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

#[cfg(target_arch = "wasm32")]
async fn read_file(path: &Path) -> Result<String, CatalogError> {
    Err(CatalogError::Io {
        path: path.display().to_string(),
        message: "no filesystem in the browser".to_string(),
    })
}

pub struct CatalogLoader<F> {
    fetcher: F,
}

impl<F: CatalogFetcher> CatalogLoader<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    pub async fn try_load(&self, source: &CatalogSource) -> Result<Catalog, CatalogError> {
        match source {
            CatalogSource::Builtin => {
                builtin::catalog().map_err(|e| CatalogError::Parse(e.to_string()))
            }
            CatalogSource::Inline(products) => Ok(Catalog::new(products.clone())),
            CatalogSource::File(path) => parse_catalog(&read_file(path).await?),
            CatalogSource::Url(location) => {
                let response = self.fetcher.fetch(location).await?;
                if !response.is_success() {
                    return Err(CatalogError::Status(response.status));
                }
                parse_catalog(&response.body)
            }
        }
    }

    /// Load the catalog, never failing: errors are logged and yield an empty
    /// catalog, which the page renders as "no products found".
    pub async fn load(&self, source: &CatalogSource) -> Catalog {
        match self.try_load(source).await {
            Ok(catalog) => {
                tracing::info!(products = catalog.len(), "catalog loaded");
                catalog
            }
            Err(error) => {
                tracing::error!(%error, "could not fetch products");
                Catalog::empty()
            }
        }
    }
}
