//! HTML adapter: descriptors to markup.
//!
//! Produces the inner HTML of the `product-grid` container and of the control
//! navigation. Text is escaped with `html_escape::encode_text`, attribute
//! values with `encode_double_quoted_attribute`.
//!
//! The markup works without a script: every card carries a stretched link to
//! its destination and controls link to pre-rendered pages.

use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

use crate::active::{ACTIVE_CLASS, Control};
use crate::card::{CardDescriptor, GridView, LINK_REL, LINK_TARGET};

/// Class of the link covering the whole card.
pub const CARD_LINK_CLASS: &str = "card-link";

pub fn render_card(card: &CardDescriptor) -> String {
    let url = attr(&card.destination_url);
    format!(
        concat!(
            r#"<div class="product-card" data-product-id="{id}" data-product-url="{url}">"#,
            r#"<a class="{card_link}" href="{url}" target="{target}" rel="{rel}" tabindex="-1" aria-hidden="true"></a>"#,
            r#"<div class="product-image-container">"#,
            r#"<img src="{image}" alt="{alt}" class="product-image" loading="lazy">"#,
            r#"</div>"#,
            r#"<div class="product-info">"#,
            r#"<h3 class="product-title">{title}</h3>"#,
            r#"<p class="product-description">{description}</p>"#,
            r#"<p class="product-price">{price}</p>"#,
            r#"<a href="{url}" target="{target}" rel="{rel}" class="buy-button">{button}</a>"#,
            r#"</div>"#,
            r#"</div>"#,
        ),
        id = card.id,
        url = url,
        card_link = CARD_LINK_CLASS,
        image = attr(&card.image_url),
        alt = attr(&card.image_alt),
        title = text(&card.title),
        description = text(&card.description),
        price = text(&card.price_label),
        target = LINK_TARGET,
        rel = LINK_REL,
        button = text(&card.button_label),
    )
}

/// Inner HTML of the grid container.
pub fn render_grid(grid: &GridView) -> String {
    match grid {
        GridView::Empty { message } => {
            format!(r#"<p class="no-results">{}</p>"#, text(message))
        }
        GridView::Cards { cards } => cards.iter().map(render_card).collect::<Vec<_>>().join("\n"),
    }
}

/// Anchor list for one control group. `href` gives the page each control
/// leads to.
pub fn render_controls<F>(controls: &[Control], href: F) -> String
where
    F: Fn(&Control) -> String,
{
    controls
        .iter()
        .map(|control| {
            let class = if control.active {
                format!(r#" class="{}""#, ACTIVE_CLASS)
            } else {
                String::new()
            };
            format!(
                r#"<a href="{href}" {data}="{value}"{class}>{label}</a>"#,
                href = attr(&href(control)),
                data = control.group.data_attribute(),
                value = attr(&control.value),
                class = class,
                label = text(&control.label),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::active::{category_controls, sort_controls};
    use crate::card::{NO_RESULTS_MESSAGE, describe_grid};
    use shopfront_catalog::{Product, ViewState};
    use shopfront_core::Price;

    fn fragment(control: &Control) -> String {
        format!("#{}", control.value)
    }

    #[test]
    fn escapes_text_and_attributes() {
        assert_eq!(text(r#"<b>"Tom" & Jerry</b>"#), r#"&lt;b&gt;"Tom" &amp; Jerry&lt;/b&gt;"#);
        assert_eq!(attr(r#"say "hi" & bye"#), "say &quot;hi&quot; &amp; bye");
    }

    #[test]
    fn empty_grid_renders_one_placeholder_and_no_cards() {
        let html = render_grid(&describe_grid(Vec::<&Product>::new()));
        assert_eq!(html.matches("no-results").count(), 1);
        assert_eq!(html.matches("product-card").count(), 0);
        assert!(html.contains(&*text(NO_RESULTS_MESSAGE)));
    }

    #[test]
    fn card_markup_has_outbound_link() {
        let product = Product::new(3, "Speaker <XL>", Price::new(79.5).unwrap(), "https://e.com/?a=1&b=2")
            .with_currency("$");
        let html = render_grid(&describe_grid([&product]));

        assert_eq!(html.matches(r#"class="product-card""#).count(), 1);
        assert!(html.contains(r#"rel="noopener noreferrer sponsored""#));
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains(r#"href="https://e.com/?a=1&amp;b=2""#));
        assert!(html.contains("Speaker &lt;XL&gt;"));
        assert!(html.contains(r#"<p class="product-price">$80</p>"#));
        assert!(html.contains("View on Amazon"));
    }

    #[test]
    fn whole_card_links_to_destination() {
        let product = Product::new(5, "Lamp", Price::new(40.0).unwrap(), "https://e.com/5");
        let html = render_card(&describe_grid([&product]).cards()[0]);

        assert!(html.contains(concat!(
            r#"<a class="card-link" href="https://e.com/5" target="_blank" "#,
            r#"rel="noopener noreferrer sponsored""#,
        )));
        assert_eq!(html.matches(r#"href="https://e.com/5""#).count(), 2);
    }

    #[test]
    fn controls_mark_active_class() {
        let state = ViewState::new();
        let html = render_controls(&category_controls(&["audio"], &state), fragment);
        assert!(html.contains(r#"data-category="all" class="active-category""#));
        assert!(html.contains(r##"<a href="#audio" data-category="audio">Audio</a>"##));

        let html = render_controls(&sort_controls(&state), fragment);
        assert_eq!(html.matches(ACTIVE_CLASS).count(), 1);
    }

    #[test]
    fn controls_link_to_given_pages() {
        let html = render_controls(&sort_controls(&ViewState::new()), |c| format!("{}.html", c.value));
        assert!(html.contains(r#"<a href="price-asc.html" data-sort="price-asc">"#));
    }
}
