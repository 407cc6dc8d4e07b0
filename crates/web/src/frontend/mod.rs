//! Leptos frontend for the browser build.

pub mod api;
pub mod app;
pub mod console;
pub mod reveal;

use leptos::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use shopfront_catalog::{ViewEvent, ViewState};

use self::app::App;

use crate::page::{
    INITIAL_CATEGORY_ATTRIBUTE, INITIAL_SEARCH_ATTRIBUTE, INITIAL_SORT_ATTRIBUTE, ROOT_ID,
    STATIC_CLASS,
};

/// WASM entry point for the frontend.
/// This is called automatically when the WASM module loads.
#[wasm_bindgen(start)]
pub fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();
    console::init_logging();

    match take_over_prerendered_root() {
        Some((root, initial)) => mount_to(root, move || view! { <App initial=initial/> }),
        None => mount_to_body(|| view! { <App/> }),
    }
}

/// Clear a pre-rendered page and return its root with the view it showed.
fn take_over_prerendered_root() -> Option<(HtmlElement, ViewState)> {
    let document = web_sys::window()?.document()?;
    let root = document.get_element_by_id(ROOT_ID)?;

    let attribute = |name: &str| root.get_attribute(name).filter(|value| !value.is_empty());
    let mut initial = ViewState::new();
    if let Some(category) = attribute(INITIAL_CATEGORY_ATTRIBUTE) {
        initial = initial.reduce(&ViewEvent::SelectCategory(category));
    }
    if let Some(sort) = attribute(INITIAL_SORT_ATTRIBUTE) {
        initial = initial.reduce(&ViewEvent::SelectSort(sort));
    }
    if let Some(search) = attribute(INITIAL_SEARCH_ATTRIBUTE) {
        initial = initial.reduce(&ViewEvent::Search(search));
    }

    root.set_inner_html("");
    if let Some(body) = document.body() {
        let _ = body.class_list().remove_1(STATIC_CLASS);
    }
    tracing::debug!(category = %initial.category(), "mounting over pre-rendered page");
    root.dyn_into::<HtmlElement>().ok().map(|root| (root, initial))
}
