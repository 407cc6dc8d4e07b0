//! Static storefront page.
//!
//! The generated document follows the markup contract shared with the browser
//! frontend: `#search-bar`, `[data-category]`, `[data-sort]` and
//! `#product-grid`.
//!
//! Pages work without a script. Every category/sort combination is
//! pre-rendered to its own file ([`page_file`]) and the controls link to
//! those files. When [`PageOptions::script`] names the browser bundle, the
//! frontend takes over the `#storefront` root and search becomes live.

use std::fmt::Write;

use chrono::{DateTime, Datelike, Utc};
use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

use shopfront_catalog::{Catalog, CategoryFilter, SortKey, ViewState};
use shopfront_render::html::{render_controls, render_grid};
use shopfront_render::{Control, category_controls, describe_grid, sort_controls};

/// Stylesheet shared by the static page and the browser frontend.
pub const STYLESHEET: &str = include_str!("../assets/style.css");

/// Element the browser frontend mounts into.
pub const ROOT_ID: &str = "storefront";
/// Body class of pages not (yet) driven by the browser frontend.
pub const STATIC_CLASS: &str = "static";
pub const INITIAL_CATEGORY_ATTRIBUTE: &str = "data-initial-category";
pub const INITIAL_SORT_ATTRIBUTE: &str = "data-initial-sort";
pub const INITIAL_SEARCH_ATTRIBUTE: &str = "data-initial-search";

/// Presentation settings that are not part of the view state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOptions {
    pub title: String,
    pub generated_at: DateTime<Utc>,
    /// ES module of the browser bundle, relative to the page.
    pub script: Option<String>,
}

impl PageOptions {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            generated_at: Utc::now(),
            script: None,
        }
    }

    pub fn with_script(mut self, script: impl Into<String>) -> Self {
        self.script = Some(script.into());
        self
    }
}

/// File name of the pre-rendered page for a category and sort key.
///
/// Bytes outside `[A-Za-z0-9-]` are written as `_xx` so distinct categories
/// never share a file.
pub fn page_file(category: &CategoryFilter, sort: SortKey) -> String {
    let mut name = String::new();
    for byte in category.as_str().bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'-' {
            name.push(char::from(byte));
        } else {
            let _ = write!(name, "_{byte:02x}");
        }
    }
    format!("{name}--{}.html", sort.as_str())
}

/// Every view reachable from the controls: each category (including `all`)
/// with each sort key, search cleared.
pub fn linked_views(catalog: &Catalog) -> Vec<ViewState> {
    let base = ViewState::new();
    std::iter::once(shopfront_catalog::ALL_CATEGORIES)
        .chain(catalog.categories())
        .flat_map(|category| {
            let state = base.with_category(category);
            SortKey::ALL.into_iter().map(move |sort| state.with_sort(sort))
        })
        .collect()
}

/// Render the whole page for `state` over `catalog`.
pub fn render_page(catalog: &Catalog, state: &ViewState, options: &PageOptions) -> String {
    let derived = state.derive(catalog);
    let grid = describe_grid(derived);
    tracing::info!(
        shown = grid.cards().len(),
        total = catalog.len(),
        category = %state.category(),
        sort = %state.sort(),
        "rendering page"
    );

    let categories = catalog.categories();
    let category_href =
        |control: &Control| page_file(&CategoryFilter::parse(&control.value), state.sort());
    let sort_href =
        |control: &Control| page_file(state.category(), SortKey::parse(&control.value));

    // Search needs the browser frontend.
    let search_state = if options.script.is_some() { "" } else { " disabled" };
    let script = options
        .script
        .as_deref()
        .map(|src| {
            format!(
                "<script type=\"module\">import init from \"{}\"; init();</script>\n",
                attr(src)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<meta name="generator" content="shopfront {generated}">
<title>{title}</title>
<link rel="stylesheet" href="style.css">
</head>
<body class="{static_class}">
<div id="{root}" {category_attr}="{category}" {sort_attr}="{sort}" {search_attr}="{search}">
<header class="site-header">
<h1>{title}</h1>
<input type="search" id="search-bar" placeholder="Search products..." value="{search}"{search_state}>
</header>
<nav class="category-nav">
{categories}
</nav>
<nav class="sort-nav">
{sorts}
</nav>
<main>
<div id="product-grid" class="product-grid">
{grid}
</div>
</main>
<footer class="site-footer">
<p>As an affiliate, we earn from qualifying purchases. Prices may change on the seller's site.</p>
<p>&copy; {year} {title}</p>
</footer>
</div>
{script}</body>
</html>
"#,
        generated = options.generated_at.to_rfc3339(),
        title = text(&options.title),
        static_class = STATIC_CLASS,
        root = ROOT_ID,
        category_attr = INITIAL_CATEGORY_ATTRIBUTE,
        category = attr(state.category().as_str()),
        sort_attr = INITIAL_SORT_ATTRIBUTE,
        sort = state.sort().as_str(),
        search_attr = INITIAL_SEARCH_ATTRIBUTE,
        search = attr(state.search().as_str()),
        search_state = search_state,
        categories = render_controls(&category_controls(&categories, state), category_href),
        sorts = render_controls(&sort_controls(state), sort_href),
        grid = render_grid(&grid),
        year = options.generated_at.year(),
        script = script,
    )
}
