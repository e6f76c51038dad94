//! View models and their markup adapters.
//!
//! Rendering is split in two layers so the interesting logic stays
//! testable without any UI environment:
//!
//! - pure functions from records to view models ([`CardModel`],
//!   [`PageControls`]) — no markup involved;
//! - thin adapters from view models to [`Element`] trees, matching the
//!   card and control structure the surrounding stylesheet expects.

use roster_markup::Element;

use crate::paging::{self, PageControls};
use crate::record::Record;

// ── CardModel ─────────────────────────────────────────────────────────────

/// Everything one student card displays, pre-composed as strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardModel {
    pub avatar_url: String,
    /// Alt text: `"{title} {first} {last}"`.
    pub avatar_alt: String,
    /// Heading: `"{first} {last}"`.
    pub full_name: String,
    pub email: String,
    /// `"Joined {registered.date}"` — the date is shown verbatim.
    pub joined: String,
}

impl CardModel {
    pub fn from_record(record: &Record) -> Self {
        Self {
            avatar_url: record.picture.large.clone(),
            avatar_alt: record.titled_name(),
            full_name: record.full_name(),
            email: record.email.clone(),
            joined: format!("Joined {}", record.registered.date),
        }
    }
}

/// Card models for the given 1-based page of `list`.
///
/// Out-of-range pages yield an empty vec (an empty render, not an
/// error).
pub fn cards_for_page(list: &[Record], page: usize) -> Vec<CardModel> {
    list[paging::page_window(list.len(), page)]
        .iter()
        .map(CardModel::from_record)
        .collect()
}

// ── Markup adapters ───────────────────────────────────────────────────────

/// One card: `li.student-item.cf` with details and joined-date blocks.
pub fn card_markup(card: &CardModel) -> Element {
    Element::with_attr("li", "class", "student-item cf")
        .child(
            Element::with_attr("div", "class", "student-details")
                .child(
                    Element::with_attr("img", "class", "avatar")
                        .attr("src", &card.avatar_url)
                        .attr("alt", &card.avatar_alt),
                )
                .child(Element::new("h3").text(&card.full_name))
                .child(Element::with_attr("span", "class", "email").text(&card.email)),
        )
        .child(
            Element::with_attr("div", "class", "joined-details")
                .child(Element::with_attr("span", "class", "date").text(&card.joined)),
        )
}

/// The list container: `ul.student-list` of cards.
///
/// The container always replaces whatever was rendered before, so
/// re-rendering the same `(list, page)` is idempotent.
pub fn list_markup(cards: &[CardModel]) -> Element {
    Element::with_attr("ul", "class", "student-list").children(cards.iter().map(card_markup))
}

/// The pagination region: `div.pagination` wrapping `ul.link-list`.
///
/// A hidden region (empty list) is emitted with `display: none` and no
/// controls; the active control's button is classed `active`.
pub fn pagination_markup(controls: &PageControls) -> Element {
    let region = Element::with_attr("div", "class", "pagination");
    if !controls.visible {
        return region.attr("style", "display: none");
    }
    let links = Element::with_attr("ul", "class", "link-list").children(
        controls.controls.iter().map(|c| {
            let mut button =
                Element::with_attr("button", "type", "button").text(c.number.to_string());
            if c.active {
                button = button.class("active");
            }
            Element::new("li").child(button)
        }),
    );
    region.child(links)
}

/// The "No result" notice, shown only when a search matched nothing.
pub fn no_results_markup() -> Element {
    Element::with_attr("p", "class", "no-results").text("No result")
}

/// The search control: a label-wrapped text input plus a decorative
/// icon button. Filtering is driven by input events, not the button.
pub fn search_block_markup() -> Element {
    Element::with_attr("label", "class", "student-search")
        .attr("for", "search")
        .child(
            Element::with_attr("input", "id", "search")
                .attr("placeholder", "Search by name..."),
        )
        .child(
            Element::with_attr("button", "type", "button").child(
                Element::with_attr("img", "src", "img/icn-search.svg")
                    .attr("alt", "Search icon"),
            ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paging::{PAGE_SIZE, page_controls};
    use crate::record::{Name, Portrait, Registration};

    fn rec(n: usize) -> Record {
        Record {
            name: Name {
                title: "Mr".to_string(),
                first: format!("First{n}"),
                last: format!("Last{n}"),
            },
            email: format!("user{n}@example.com"),
            picture: Portrait { large: format!("https://example.com/{n}.jpg") },
            registered: Registration { date: "03/15/2018".to_string() },
        }
    }

    fn dataset(len: usize) -> Vec<Record> {
        (0..len).map(rec).collect()
    }

    // ── CardModel ─────────────────────────────────────────────────────────

    #[test]
    fn card_fields_compose() {
        let card = CardModel::from_record(&rec(7));
        assert_eq!(card.avatar_alt, "Mr First7 Last7");
        assert_eq!(card.full_name, "First7 Last7");
        assert_eq!(card.joined, "Joined 03/15/2018");
        assert_eq!(card.email, "user7@example.com");
    }

    #[test]
    fn date_is_not_reformatted() {
        let mut r = rec(0);
        r.registered.date = "2 years ago".to_string();
        assert_eq!(CardModel::from_record(&r).joined, "Joined 2 years ago");
    }

    // ── cards_for_page ────────────────────────────────────────────────────

    #[test]
    fn full_first_page() {
        let cards = cards_for_page(&dataset(20), 1);
        assert_eq!(cards.len(), PAGE_SIZE);
        assert_eq!(cards[0].full_name, "First0 Last0");
        assert_eq!(cards[8].full_name, "First8 Last8");
    }

    #[test]
    fn short_last_page() {
        let cards = cards_for_page(&dataset(20), 3);
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].full_name, "First18 Last18");
        assert_eq!(cards[1].full_name, "First19 Last19");
    }

    #[test]
    fn out_of_range_page_is_empty() {
        assert!(cards_for_page(&dataset(20), 4).is_empty());
        assert!(cards_for_page(&[], 1).is_empty());
    }

    #[test]
    fn card_count_property() {
        let data = dataset(20);
        for page in 1..=5 {
            let expected = PAGE_SIZE.min(data.len().saturating_sub((page - 1) * PAGE_SIZE));
            assert_eq!(cards_for_page(&data, page).len(), expected, "page {page}");
        }
    }

    // ── markup adapters ───────────────────────────────────────────────────

    #[test]
    fn card_markup_structure() {
        let html = card_markup(&CardModel::from_record(&rec(1))).to_html();
        assert_eq!(
            html,
            "<li class=\"student-item cf\">\
             <div class=\"student-details\">\
             <img class=\"avatar\" src=\"https://example.com/1.jpg\" alt=\"Mr First1 Last1\">\
             <h3>First1 Last1</h3>\
             <span class=\"email\">user1@example.com</span>\
             </div>\
             <div class=\"joined-details\">\
             <span class=\"date\">Joined 03/15/2018</span>\
             </div>\
             </li>",
        );
    }

    #[test]
    fn rendering_is_idempotent() {
        let data = dataset(12);
        let a = list_markup(&cards_for_page(&data, 2));
        let b = list_markup(&cards_for_page(&data, 2));
        assert_eq!(a, b);
    }

    #[test]
    fn pagination_markup_controls_and_active() {
        let el = pagination_markup(&page_controls(20, 2));
        let links = el.child_elements().next().unwrap();
        assert!(links.has_class("link-list"));
        assert_eq!(links.child_elements().count(), 3);
        let html = el.to_html();
        assert_eq!(html.matches("<button").count(), 3);
        assert!(html.contains(r#"<button type="button" class="active">2</button>"#));
        assert_eq!(html.matches("active").count(), 1);
    }

    #[test]
    fn hidden_pagination_markup() {
        let html = pagination_markup(&page_controls(0, 1)).to_html();
        assert_eq!(html, r#"<div class="pagination" style="display: none"></div>"#);
    }

    #[test]
    fn search_block_markup_shape() {
        let html = search_block_markup().to_html();
        assert!(html.starts_with(r#"<label class="student-search" for="search">"#));
        assert!(html.contains(r#"<input id="search" placeholder="Search by name...">"#));
        assert!(html.contains(r#"<img src="img/icn-search.svg" alt="Search icon">"#));
    }

    #[test]
    fn no_results_notice() {
        assert_eq!(no_results_markup().to_html(), r#"<p class="no-results">No result</p>"#);
    }
}
