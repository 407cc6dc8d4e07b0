//! Active-state indicator for the category and sort controls.

use shopfront_catalog::{ALL_CATEGORIES, SortKey, ViewState};

/// Highlight class shared by both control groups.
pub const ACTIVE_CLASS: &str = "active-category";

/// A group of page controls keyed by one data attribute.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ControlGroup {
    Category,
    Sort,
}

impl ControlGroup {
    pub fn data_attribute(&self) -> &'static str {
        match self {
            ControlGroup::Category => "data-category",
            ControlGroup::Sort => "data-sort",
        }
    }

    /// CSS selector matching every control of the group.
    pub fn selector(&self) -> &'static str {
        match self {
            ControlGroup::Category => "[data-category]",
            ControlGroup::Sort => "[data-sort]",
        }
    }

    /// Value of this group in the given view state.
    pub fn active_value<'a>(&self, state: &'a ViewState) -> &'a str {
        match self {
            ControlGroup::Category => state.category().as_str(),
            ControlGroup::Sort => state.sort().as_str(),
        }
    }
}

/// Whether one control carries the highlight class.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ControlState<'a> {
    pub value: &'a str,
    pub active: bool,
}

/// Exactly the controls whose value equals `active` are marked; all others
/// are cleared.
pub fn mark_active<'a, I>(values: I, active: &str) -> Vec<ControlState<'a>>
where
    I: IntoIterator<Item = &'a str>,
{
    values
        .into_iter()
        .map(|value| ControlState {
            value,
            active: value == active,
        })
        .collect()
}

/// A navigation control rendered by the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    pub group: ControlGroup,
    pub value: String,
    pub label: String,
    pub active: bool,
}

/// `All` followed by one control per catalog category.
pub fn category_controls(categories: &[&str], state: &ViewState) -> Vec<Control> {
    let values = std::iter::once(ALL_CATEGORIES).chain(categories.iter().copied());
    mark_active(values, ControlGroup::Category.active_value(state))
        .into_iter()
        .map(|control| Control {
            group: ControlGroup::Category,
            value: control.value.to_string(),
            label: category_label(control.value),
            active: control.active,
        })
        .collect()
}

pub fn sort_controls(state: &ViewState) -> Vec<Control> {
    let active = ControlGroup::Sort.active_value(state);
    SortKey::ALL
        .iter()
        .map(|key| Control {
            group: ControlGroup::Sort,
            value: key.as_str().to_string(),
            label: key.label().to_string(),
            active: key.as_str() == active,
        })
        .collect()
}

fn category_label(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_catalog::ViewEvent;

    #[test]
    fn only_matching_value_is_active() {
        let states = mark_active(["all", "audio", "home"], "audio");
        let active: Vec<&str> = states.iter().filter(|s| s.active).map(|s| s.value).collect();
        assert_eq!(active, vec!["audio"]);
    }

    #[test]
    fn no_match_clears_everything() {
        let states = mark_active(["all", "audio"], "garden");
        assert!(states.iter().all(|s| !s.active));
    }

    #[test]
    fn category_controls_follow_view_state() {
        let state = ViewState::new().reduce(&ViewEvent::SelectCategory("home".into()));
        let controls = category_controls(&["audio", "home"], &state);

        let labels: Vec<&str> = controls.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["All", "Audio", "Home"]);

        let active: Vec<&str> = controls
            .iter()
            .filter(|c| c.active)
            .map(|c| c.value.as_str())
            .collect();
        assert_eq!(active, vec!["home"]);
    }

    #[test]
    fn default_state_highlights_all_and_default_sort() {
        let state = ViewState::new();

        let categories = category_controls(&["audio"], &state);
        assert!(categories[0].active);
        assert!(!categories[1].active);

        let sorts = sort_controls(&state);
        assert_eq!(sorts.len(), 3);
        assert_eq!(sorts.iter().filter(|c| c.active).count(), 1);
        assert_eq!(sorts[0].value, "default");
        assert!(sorts[0].active);
    }

    #[test]
    fn attributes_and_selectors() {
        assert_eq!(ControlGroup::Category.data_attribute(), "data-category");
        assert_eq!(ControlGroup::Sort.selector(), "[data-sort]");
    }
}
