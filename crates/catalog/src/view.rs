//! Immutable view state driven by page-control events.
//!
//! Each event yields a fresh [`ViewState`]; the derived sequence is recomputed
//! from scratch against the catalog snapshot.

use crate::product::{Catalog, Product};
use crate::query::{CategoryFilter, SearchTerm, SortKey, filter_and_sort};

/// A single user interaction with the page controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    /// A `data-category` control was clicked.
    SelectCategory(String),
    /// A `data-sort` control was clicked.
    SelectSort(String),
    /// The search box content changed.
    Search(String),
}

/// Current category, sort and search term.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    category: CategoryFilter,
    sort: SortKey,
    search: SearchTerm,
}

impl ViewState {
    /// Category `all`, sort `default`, empty search.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn search(&self) -> &SearchTerm {
        &self.search
    }

    /// Selecting a category also clears the search term.
    pub fn with_category(&self, category: &str) -> Self {
        Self {
            category: CategoryFilter::parse(category),
            sort: self.sort,
            search: SearchTerm::default(),
        }
    }

    pub fn with_sort(&self, sort: SortKey) -> Self {
        Self {
            sort,
            ..self.clone()
        }
    }

    pub fn with_search(&self, input: &str) -> Self {
        Self {
            search: SearchTerm::from_input(input),
            ..self.clone()
        }
    }

    pub fn reduce(&self, event: &ViewEvent) -> Self {
        let next = match event {
            ViewEvent::SelectCategory(category) => self.with_category(category),
            ViewEvent::SelectSort(sort) => self.with_sort(SortKey::parse(sort)),
            ViewEvent::Search(input) => self.with_search(input),
        };
        tracing::debug!(
            category = %next.category,
            sort = %next.sort,
            search = next.search.as_str(),
            "view state changed"
        );
        next
    }

    /// Derived sequence for this state.
    pub fn derive<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        filter_and_sort(catalog.products(), &self.category, self.sort, &self.search)
    }
}
