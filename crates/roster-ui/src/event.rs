//! Input events routed to the directory session.

/// Events the surrounding shell feeds into
/// [`DirectorySession::handle_event`](crate::session::DirectorySession::handle_event).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// The search field's current value after an input change.
    ///
    /// Fired on every change — an empty `text` means the field was
    /// cleared.
    SearchInput { text: String },
    /// A page-selector control was chosen. `page` is the control's
    /// 1-based label.
    PageSelected { page: usize },
}

/// Result returned by event handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event changed the view — the shell should re-render.
    Consumed,
    /// Event left the view as it was.
    Ignored,
}

impl EventResult {
    #[inline]
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}
