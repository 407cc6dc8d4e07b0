//! Leptos storefront application.

use leptos::*;
use wasm_bindgen::JsCast;

use shopfront_catalog::{Catalog, ViewEvent, ViewState};
use shopfront_render::{
    CardAction, CardDescriptor, ClickTarget, Control, ControlGroup, GridView, LINK_REL, LINK_TARGET,
    category_controls, describe_grid, sort_controls,
};

use crate::frontend::api;
use crate::frontend::reveal::RevealObserver;

/// Main application component.
///
/// `initial` is the view a pre-rendered page was showing.
#[component]
pub fn App(#[prop(optional)] initial: ViewState) -> impl IntoView {
    let catalog = create_resource(|| (), |_| async move { api::load_catalog().await });

    // Raw search box text; the view state keeps the normalised term.
    let (search_input, set_search_input) = create_signal(initial.search().as_str().to_string());
    let (state, set_state) = create_signal(initial);

    let dispatch = move |event: ViewEvent| {
        if let ViewEvent::SelectCategory(_) = &event {
            set_search_input.set(String::new());
        }
        set_state.update(|current| *current = current.reduce(&event));
    };

    let grid = create_memo(move |_| {
        catalog
            .get()
            .map(|catalog| state.with(|state| describe_grid(state.derive(&catalog))))
    });

    let reveal = store_value(match RevealObserver::new() {
        Ok(observer) => Some(observer),
        Err(err) => {
            tracing::warn!(?err, "scroll reveal unavailable");
            None
        }
    });

    create_effect(move |_| {
        grid.with(|_| ());
        // Wait for the grid to be in the DOM before observing its cards.
        leptos::leptos_dom::helpers::request_animation_frame(move || {
            reveal.with_value(|observer| {
                if let Some(observer) = observer {
                    if let Err(err) = observer.observe_cards() {
                        tracing::warn!(?err, "failed to observe cards");
                    }
                }
            });
        });
    });

    view! {
        <div class="app">
            <header class="site-header">
                <h1>"Shopfront"</h1>
                <input
                    type="search"
                    id="search-bar"
                    placeholder="Search products..."
                    prop:value=move || search_input.get()
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        set_search_input.set(value.clone());
                        dispatch(ViewEvent::Search(value));
                    }
                />
            </header>

            <nav class="category-nav">
                {move || {
                    let categories = catalog
                        .get()
                        .map(|catalog| categories_of(&catalog))
                        .unwrap_or_default();
                    let categories: Vec<&str> = categories.iter().map(String::as_str).collect();
                    state
                        .with(|state| category_controls(&categories, state))
                        .into_iter()
                        .map(|control| control_view(control, dispatch))
                        .collect_view()
                }}
            </nav>

            <nav class="sort-nav">
                {move || {
                    state
                        .with(sort_controls)
                        .into_iter()
                        .map(|control| control_view(control, dispatch))
                        .collect_view()
                }}
            </nav>

            <main>
                <div id="product-grid" class="product-grid">
                    {move || match grid.get() {
                        None => view! { <p class="loading">"Loading products..."</p> }.into_view(),
                        Some(GridView::Empty { message }) => {
                            view! { <p class="no-results">{message}</p> }.into_view()
                        }
                        Some(GridView::Cards { cards }) => {
                            cards.into_iter().map(card_view).collect_view()
                        }
                    }}
                </div>
            </main>

            <footer class="site-footer">
                <p>"As an affiliate, we earn from qualifying purchases."</p>
            </footer>
        </div>
    }
}

fn categories_of(catalog: &Catalog) -> Vec<String> {
    catalog.categories().into_iter().map(str::to_string).collect()
}

/// One `data-category` / `data-sort` anchor.
fn control_view<F>(control: Control, dispatch: F) -> impl IntoView
where
    F: Fn(ViewEvent) + Copy + 'static,
{
    let class = if control.active { shopfront_render::ACTIVE_CLASS } else { "" };
    let value = control.value.clone();
    let on_click = move |ev: ev::MouseEvent| {
        ev.prevent_default();
        let event = match control.group {
            ControlGroup::Category => ViewEvent::SelectCategory(value.clone()),
            ControlGroup::Sort => ViewEvent::SelectSort(value.clone()),
        };
        dispatch(event);
    };

    match control.group {
        ControlGroup::Category => view! {
            <a href="#" data-category=control.value class=class on:click=on_click>{control.label}</a>
        },
        ControlGroup::Sort => view! {
            <a href="#" data-sort=control.value class=class on:click=on_click>{control.label}</a>
        },
    }
}

fn clicked_link(ev: &ev::MouseEvent) -> bool {
    ev.target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .is_some_and(|element| element.tag_name().eq_ignore_ascii_case("a"))
}

fn card_view(card: CardDescriptor) -> impl IntoView {
    let on_click = {
        let card = card.clone();
        move |ev: ev::MouseEvent| {
            let target = if clicked_link(&ev) { ClickTarget::Link } else { ClickTarget::Card };
            if let CardAction::Open { url, target, features } = card.on_click(target) {
                if let Some(window) = web_sys::window() {
                    let _ = window.open_with_url_and_target_and_features(&url, target, features);
                }
            }
        }
    };

    view! {
        <div
            class="product-card"
            data-product-id=card.id.to_string()
            data-product-url=card.destination_url.clone()
            on:click=on_click
        >
            <div class="product-image-container">
                <img src=card.image_url alt=card.image_alt class="product-image" loading="lazy"/>
            </div>
            <div class="product-info">
                <h3 class="product-title">{card.title}</h3>
                <p class="product-description">{card.description}</p>
                <p class="product-price">{card.price_label}</p>
                <a href=card.destination_url target=LINK_TARGET rel=LINK_REL class="buy-button">
                    {card.button_label}
                </a>
            </div>
        </div>
    }
}
