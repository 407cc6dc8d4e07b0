use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use shopfront_catalog::{CatalogError, CatalogLoader, CatalogSource, HttpFetcher, apply};

const DOCUMENT: &str = r#"[
    {"id": 1, "title": "Headphones", "price": 150, "category": "audio", "productUrl": "https://e.com/1"},
    {"id": 2, "title": "Speaker", "price": "₹80", "category": "audio", "productUrl": "https://e.com/2"}
]"#;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        let app = Router::new()
            .route("/public/products.json", get(|| async { DOCUMENT }))
            .route("/public/broken.json", get(|| async { "[{\"id\": 1," }))
            .route(
                "/public/down.json",
                get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "maintenance") }),
            );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}/public/", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }

    fn loader(&self) -> CatalogLoader<HttpFetcher> {
        CatalogLoader::new(HttpFetcher::with_base(&self.base_url).unwrap())
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn url(location: &str) -> CatalogSource {
    CatalogSource::Url(location.to_string())
}

#[tokio::test]
async fn fetches_relative_document_and_filters_it() {
    let server = TestServer::spawn().await;
    let catalog = server.loader().load(&url("products.json")).await;
    assert_eq!(catalog.len(), 2);

    let titles: Vec<&str> = apply(catalog.products(), "audio", "price-asc", "")
        .iter()
        .map(|p| p.title())
        .collect();
    assert_eq!(titles, vec!["Speaker", "Headphones"]);
}

#[tokio::test]
async fn missing_document_degrades_to_empty() {
    let server = TestServer::spawn().await;
    let loader = server.loader();

    assert!(matches!(
        loader.try_load(&url("missing.json")).await,
        Err(CatalogError::Status(404))
    ));
    assert!(loader.load(&url("missing.json")).await.is_empty());
}

#[tokio::test]
async fn server_error_degrades_to_empty() {
    let server = TestServer::spawn().await;
    let loader = server.loader();

    assert!(matches!(
        loader.try_load(&url("down.json")).await,
        Err(CatalogError::Status(503))
    ));
    assert!(loader.load(&url("down.json")).await.is_empty());
}

#[tokio::test]
async fn truncated_document_degrades_to_empty() {
    let server = TestServer::spawn().await;
    let loader = server.loader();

    assert!(matches!(
        loader.try_load(&url("broken.json")).await,
        Err(CatalogError::Parse(_))
    ));
    assert!(loader.load(&url("broken.json")).await.is_empty());
}

#[tokio::test]
async fn unreachable_host_degrades_to_empty() {
    // Bind then drop to get a port nothing listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let loader = CatalogLoader::new(HttpFetcher::new());
    let source = url(&format!("http://{}/products.json", addr));
    assert!(matches!(loader.try_load(&source).await, Err(CatalogError::Network(_))));
    assert!(loader.load(&source).await.is_empty());
}
