//! `IntersectionObserver` adapter for the fire-once card reveal.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use shopfront_render::{RevealTracker, VISIBILITY_THRESHOLD, VISIBLE_CLASS};

const CARD_SELECTOR: &str = ".product-card";
/// Render position of a card; product ids are not guaranteed unique.
const CARD_INDEX_ATTRIBUTE: &str = "data-card-index";

type Tracker = Rc<RefCell<RevealTracker<u32>>>;

pub struct RevealObserver {
    observer: IntersectionObserver,
    tracker: Tracker,
    // Keeps the JS callback alive as long as the observer.
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

fn card_index(element: &Element) -> Option<u32> {
    element.get_attribute(CARD_INDEX_ATTRIBUTE)?.parse().ok()
}

fn reveal_batch(tracker: &Tracker, entries: Array, observer: &IntersectionObserver) {
    let entries: Vec<IntersectionObserverEntry> = entries.iter().map(|e| e.unchecked_into()).collect();
    let elements: Vec<Element> = entries.iter().map(|e| e.target()).collect();

    let batch = entries
        .iter()
        .zip(&elements)
        .filter_map(|(entry, element)| Some((card_index(element)?, entry.is_intersecting())));
    let reveals = tracker.borrow_mut().on_visibility(batch);

    for reveal in reveals {
        let Some(element) = elements.iter().find(|el| card_index(el) == Some(reveal.key)) else {
            continue;
        };
        if let Some(html) = element.dyn_ref::<HtmlElement>() {
            let _ = html
                .style()
                .set_property("transition-delay", &format!("{}ms", reveal.delay_ms));
        }
        let _ = element.class_list().add_1(VISIBLE_CLASS);
        observer.unobserve(element);
    }
}

impl RevealObserver {
    pub fn new() -> Result<Self, JsValue> {
        let tracker: Tracker = Rc::new(RefCell::new(RevealTracker::new()));

        let callback_tracker = tracker.clone();
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                reveal_batch(&callback_tracker, entries, &observer);
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_root_margin("0px");
        init.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

        Ok(Self {
            observer,
            tracker,
            _callback: callback,
        })
    }

    /// Drop observations of previous cards and observe the ones now in the grid.
    pub fn observe_cards(&self) -> Result<(), JsValue> {
        self.observer.disconnect();
        self.tracker.borrow_mut().reset();

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let cards = document.query_selector_all(CARD_SELECTOR)?;

        for index in 0..cards.length() {
            let Some(card) = cards.item(index).and_then(|node| node.dyn_into::<Element>().ok()) else {
                continue;
            };
            card.set_attribute(CARD_INDEX_ATTRIBUTE, &index.to_string())?;
            self.tracker.borrow_mut().observe(index);
            self.observer.observe(&card);
        }

        tracing::debug!(cards = cards.length(), "observing cards for reveal");
        Ok(())
    }
}
