//! Static page builder: loads the catalog once and writes the pre-rendered
//! pages, `style.css` and a `products.json` snapshot for the browser frontend.

use std::path::{Path, PathBuf};

use anyhow::Context;
use shopfront_catalog::{Catalog, CatalogLoader, HttpFetcher, ViewState};
use shopfront_observability::LogFormat;
use shopfront_web::page::{STYLESHEET, linked_views, page_file};
use shopfront_web::{PageOptions, StorefrontConfig, render_page};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = StorefrontConfig::from_env();
    shopfront_observability::tracing::init(LogFormat::parse(&config.log_format));

    tracing::info!(source = ?config.catalog, out_dir = %config.out_dir.display(), "building storefront");

    // A failed load is logged by the loader and renders as "no products found".
    let catalog = CatalogLoader::new(HttpFetcher::new()).load(&config.catalog).await;

    let mut options = PageOptions::new(config.title.clone());
    options.script = config.script.clone();

    let written = write_site(&config.out_dir, &catalog, &config.initial_view, &options).await?;

    tracing::info!(products = catalog.len(), files = written.len(), "storefront written");
    Ok(())
}

/// Write `index.html` for `initial`, one page per linked view, the stylesheet
/// and the catalog snapshot. Returns the written paths.
async fn write_site(
    out_dir: &Path,
    catalog: &Catalog,
    initial: &ViewState,
    options: &PageOptions,
) -> anyhow::Result<Vec<PathBuf>> {
    tokio::fs::create_dir_all(out_dir)
        .await
        .with_context(|| format!("failed to create output directory at {:?}", out_dir))?;

    let mut files = vec![(
        "index.html".to_string(),
        render_page(catalog, initial, options),
    )];
    for view in linked_views(catalog) {
        files.push((
            page_file(view.category(), view.sort()),
            render_page(catalog, &view, options),
        ));
    }
    files.push(("style.css".to_string(), STYLESHEET.to_string()));
    let json = serde_json::to_string_pretty(catalog.products()).context("failed to serialize catalog")?;
    files.push(("products.json".to_string(), json));

    let mut written = Vec::with_capacity(files.len());
    for (name, contents) in files {
        let path = out_dir.join(name);
        tokio::fs::write(&path, contents)
            .await
            .with_context(|| format!("failed to write {:?}", path))?;
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_catalog::{Price, Product, SortKey};

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Product::new(1, "Headphones", Price::new(150.0).unwrap(), "https://e.com/1")
                .with_category("audio"),
            Product::new(2, "Lamp", Price::new(40.0).unwrap(), "https://e.com/2")
                .with_category("home"),
        ])
    }

    #[tokio::test]
    async fn writes_every_linked_page() {
        let dir = tempfile::tempdir().unwrap();
        let written = write_site(dir.path(), &catalog(), &ViewState::new(), &PageOptions::new("Shop"))
            .await
            .unwrap();

        // index + (all, audio, home) x 3 sorts + stylesheet + snapshot
        assert_eq!(written.len(), 1 + 9 + 2);
        for path in &written {
            assert!(path.exists(), "{path:?} missing");
        }

        let index = std::fs::read_to_string(dir.path().join("index.html")).unwrap();
        let linked = page_file(&shopfront_catalog::CategoryFilter::parse("home"), SortKey::Default);
        assert!(index.contains(&format!(r#"href="{linked}""#)));

        let home = std::fs::read_to_string(dir.path().join(linked)).unwrap();
        assert!(home.contains("Lamp"));
        assert!(!home.contains("Headphones"));
    }

    #[tokio::test]
    async fn snapshot_round_trips_catalog() {
        let dir = tempfile::tempdir().unwrap();
        write_site(dir.path(), &catalog(), &ViewState::new(), &PageOptions::new("Shop"))
            .await
            .unwrap();

        let json = std::fs::read_to_string(dir.path().join("products.json")).unwrap();
        let parsed = shopfront_catalog::parse_catalog(&json).unwrap();
        assert_eq!(parsed, catalog());
    }
}
