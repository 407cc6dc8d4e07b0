//! `reqwest`-backed fetcher for native builds.

use async_trait::async_trait;
use reqwest::Url;

use super::{CatalogError, CatalogFetcher, FetchResponse};

/// Fetches catalog documents over HTTP.
///
/// Relative locations such as `products.json` are resolved against the base
/// URL, the way a page resolves them against its own address.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    base_url: Option<Url>,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: None,
        }
    }

    pub fn with_base(base_url: &str) -> Result<Self, CatalogError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| CatalogError::Network(format!("invalid base URL {base_url:?}: {e}")))?;
        Ok(Self {
            client: reqwest::Client::new(),
            base_url: Some(base_url),
        })
    }

    fn resolve(&self, location: &str) -> Result<Url, CatalogError> {
        let resolved = match &self.base_url {
            Some(base) => base.join(location),
            None => Url::parse(location),
        };
        resolved.map_err(|e| CatalogError::Network(format!("invalid catalog URL {location:?}: {e}")))
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl CatalogFetcher for HttpFetcher {
    async fn fetch(&self, location: &str) -> Result<FetchResponse, CatalogError> {
        let url = self.resolve(location)?;
        tracing::debug!(%url, "fetching catalog");

        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let status = resp.status().as_u16();
        let body = resp
            .text()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        Ok(FetchResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_relative_locations_against_base() {
        let fetcher = HttpFetcher::with_base("https://shop.example.com/public/index.html").unwrap();
        assert_eq!(
            fetcher.resolve("products.json").unwrap().as_str(),
            "https://shop.example.com/public/products.json"
        );
        assert_eq!(
            fetcher.resolve("https://cdn.example.com/p.json").unwrap().as_str(),
            "https://cdn.example.com/p.json"
        );
    }

    #[test]
    fn relative_location_without_base_is_rejected() {
        let fetcher = HttpFetcher::new();
        assert!(matches!(fetcher.resolve("products.json"), Err(CatalogError::Network(_))));
    }
}
