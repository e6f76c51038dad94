//! Roster UI — paginated, searchable directory views over person
//! records.
//!
//! The crate is pure view logic: records in, view models and markup
//! out. All mutable state is held by one explicit
//! [`DirectorySession`](session::DirectorySession); the surrounding
//! shell feeds it [`UiEvent`](event::UiEvent)s and re-renders from its
//! accessors. Nothing here touches a live UI.
//!
//! # Quick start
//!
//! ```rust
//! use roster_ui::prelude::*;
//!
//! # fn records() -> Vec<Record> { Vec::new() }
//! let mut session = DirectorySession::new(records());
//!
//! // Initial render: full dataset, page 1.
//! let page = session.render_page();
//!
//! // A search-input event, then a page click.
//! session.handle_event(&UiEvent::SearchInput { text: "an".to_string() });
//! session.handle_event(&UiEvent::PageSelected { page: 2 });
//! let page = session.render_page();
//! # let _ = page;
//! ```
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`record`] | `Record` and its nested field types |
//! | [`filter`] | query validation, `FilterOutcome`, name search |
//! | [`paging`] | `PAGE_SIZE`, page arithmetic, `PageControls` |
//! | [`view`] | `CardModel` + markup adapters |
//! | [`event`] | `UiEvent`, `EventResult` |
//! | [`session`] | `DirectorySession` — state and event handling |
//! | [`logging`] | `init_logging` for shells |

pub mod event;
pub mod filter;
pub mod logging;
pub mod paging;
pub mod record;
pub mod session;
pub mod view;

pub use session::DirectorySession;

/// Everything a shell needs — import this in your binary.
pub mod prelude {
    pub use crate::event::{EventResult, UiEvent};
    pub use crate::filter::{FilterOutcome, filter_records, validate_query};
    pub use crate::logging::{LoggingConfig, init_logging};
    pub use crate::paging::{PAGE_SIZE, PageControl, PageControls, page_count};
    pub use crate::record::{Name, Portrait, Record, Registration};
    pub use crate::session::DirectorySession;
    pub use crate::view::{
        CardModel, cards_for_page, list_markup, no_results_markup, pagination_markup,
        search_block_markup,
    };

    // Re-export the markup primitives every shell ends up needing.
    pub use roster_markup::{Element, Node};
}
