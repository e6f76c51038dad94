//! The directory session — explicit view state plus event handling.
//!
//! All mutable state lives here: the dataset, the active (possibly
//! filtered) list, and the current page. Events enter through a single
//! [`DirectorySession::handle_event`] entry point registered once by
//! the shell; rendering is recomputed from session state, so no
//! closure can capture a stale list and no handler accumulates across
//! re-renders.

use roster_markup::Element;

use crate::event::{EventResult, UiEvent};
use crate::filter::{FilterOutcome, filter_records, validate_query};
use crate::paging::{PageControls, page_controls};
use crate::record::Record;
use crate::view::{self, CardModel};

/// View state for one directory: dataset, filter, current page.
///
/// Two states: Unfiltered (the full dataset is active) and Filtered (a
/// search subset is active). Only [`UiEvent::SearchInput`] transitions
/// between them; page selection never does.
#[derive(Debug)]
pub struct DirectorySession {
    dataset: Vec<Record>,
    /// `None` in the Unfiltered state; the search subset otherwise.
    filtered: Option<Vec<Record>>,
    /// 1-based current page.
    page: usize,
}

impl DirectorySession {
    /// Start in the Unfiltered state at page 1.
    pub fn new(dataset: Vec<Record>) -> Self {
        Self { dataset, filtered: None, page: 1 }
    }

    // ── State accessors ───────────────────────────────────────────────────

    /// The list currently driving rendering — the full dataset, or the
    /// stored search subset.
    pub fn active_list(&self) -> &[Record] {
        self.filtered.as_deref().unwrap_or(&self.dataset)
    }

    /// 1-based current page.
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn is_filtered(&self) -> bool {
        self.filtered.is_some()
    }

    /// Whether the "No result" notice is shown: a search is active and
    /// matched nothing.
    pub fn no_results(&self) -> bool {
        self.filtered.as_ref().is_some_and(|list| list.is_empty())
    }

    // ── Event handling ────────────────────────────────────────────────────

    /// Apply one event to the session.
    ///
    /// `SearchInput` with a nonempty, valid query stores the filter
    /// subset and resets to page 1. An empty or invalid query resets
    /// to the Unfiltered state at page 1 — invalid input is logged by
    /// the validator and otherwise behaves like a cleared field.
    ///
    /// `PageSelected` moves the current page without touching the
    /// active list; selecting the already-current page is reported as
    /// [`EventResult::Ignored`] since the rendered view cannot change.
    pub fn handle_event(&mut self, event: &UiEvent) -> EventResult {
        match event {
            UiEvent::SearchInput { text } => {
                if !text.is_empty() && validate_query(text) {
                    match filter_records(&self.dataset, text) {
                        FilterOutcome::Matches(list) => self.filtered = Some(list),
                        FilterOutcome::Unfiltered => self.filtered = None,
                    }
                } else {
                    self.filtered = None;
                }
                self.page = 1;
                EventResult::Consumed
            }
            UiEvent::PageSelected { page } => {
                if *page == self.page {
                    return EventResult::Ignored;
                }
                self.page = *page;
                EventResult::Consumed
            }
        }
    }

    // ── Rendering ─────────────────────────────────────────────────────────

    /// Card models for the current page of the active list.
    pub fn page_cards(&self) -> Vec<CardModel> {
        view::cards_for_page(self.active_list(), self.page)
    }

    /// Page-selector view model for the active list, with the current
    /// page marked active.
    pub fn page_controls(&self) -> PageControls {
        page_controls(self.active_list().len(), self.page)
    }

    /// Markup for the page region: the student list, the "No result"
    /// notice when a search matched nothing (immediately before the
    /// pagination region), and the pagination region itself.
    ///
    /// Pure function of session state — re-rendering replaces, never
    /// appends.
    pub fn render_page(&self) -> Element {
        let mut page = Element::with_attr("div", "class", "page")
            .child(view::list_markup(&self.page_cards()));
        if self.no_results() {
            page = page.child(view::no_results_markup());
        }
        page.child(view::pagination_markup(&self.page_controls()))
    }
}
