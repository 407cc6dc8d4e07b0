//! Rendering: from the derived product sequence to declarative card
//! descriptors, plus the HTML adapter that turns descriptors into markup.
//!
//! Nothing here touches a DOM. Browser adapters consume the descriptors and
//! the small state machines ([`RevealTracker`], [`mark_active`]) directly.

pub mod active;
pub mod card;
pub mod format;
pub mod html;
pub mod reveal;

pub use active::{
    ACTIVE_CLASS, Control, ControlGroup, ControlState, category_controls, mark_active, sort_controls,
};
pub use card::{
    CardAction, CardDescriptor, ClickTarget, GridView, LINK_REL, LINK_TARGET, NO_RESULTS_MESSAGE,
    WINDOW_FEATURES, describe_grid,
};
pub use format::{format_price_label, group_indian};
pub use reveal::{Reveal, RevealTracker, REVEAL_STAGGER_MS, VISIBILITY_THRESHOLD, VISIBLE_CLASS};
