//! Catalog fetching through the browser `fetch` API.

use async_trait::async_trait;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Response, window};

use shopfront_catalog::{Catalog, CatalogError, CatalogFetcher, CatalogLoader, CatalogSource, FetchResponse};

/// Catalog document, relative to the page.
pub const CATALOG_PATH: &str = "products.json";

/// Fetcher backed by `window.fetch`; relative paths resolve against the page.
pub struct BrowserFetcher;

fn js_error(context: &str, err: wasm_bindgen::JsValue) -> CatalogError {
    CatalogError::Network(format!("{context}: {err:?}"))
}

#[async_trait(?Send)]
impl CatalogFetcher for BrowserFetcher {
    async fn fetch(&self, location: &str) -> Result<FetchResponse, CatalogError> {
        let window = window().ok_or_else(|| CatalogError::Network("no window object".to_string()))?;

        let response = JsFuture::from(window.fetch_with_str(location))
            .await
            .map_err(|e| js_error("fetch failed", e))?;
        let response: Response = response
            .dyn_into()
            .map_err(|e| js_error("fetch did not return a Response", e))?;

        let status = response.status();
        let text = response.text().map_err(|e| js_error("failed to read body", e))?;
        let body = JsFuture::from(text)
            .await
            .map_err(|e| js_error("failed to read body", e))?
            .as_string()
            .unwrap_or_default();

        Ok(FetchResponse { status, body })
    }
}

/// Load the page catalog; failures are logged and yield an empty catalog.
pub async fn load_catalog() -> Catalog {
    CatalogLoader::new(BrowserFetcher)
        .load(&CatalogSource::Url(CATALOG_PATH.to_string()))
        .await
}
