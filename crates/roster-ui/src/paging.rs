//! Page arithmetic and the page-selector view model.

use std::ops::Range;

/// Maximum records per rendered page.
pub const PAGE_SIZE: usize = 9;

// ── Page arithmetic ───────────────────────────────────────────────────────

/// Number of pages needed for `len` records: `ceil(len / PAGE_SIZE)`.
pub fn page_count(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE)
}

/// The half-open index window `[(page-1)·SIZE, page·SIZE)` for a
/// 1-based `page`, clamped to `len`.
///
/// Out-of-range pages (including 0) clamp to an empty window — an
/// empty render, never an error.
pub fn page_window(len: usize, page: usize) -> Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(PAGE_SIZE).min(len);
    let end = page.saturating_mul(PAGE_SIZE).min(len);
    start..end
}

// ── PageControls ──────────────────────────────────────────────────────────

/// One clickable page selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageControl {
    /// 1-based page number, also the control's label.
    pub number: usize,
    /// Whether this control is the active (currently rendered) page.
    pub active: bool,
}

/// View model for the pagination region.
///
/// `visible` is false for an empty list — the region is hidden
/// entirely and carries no controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageControls {
    pub visible: bool,
    pub controls: Vec<PageControl>,
}

/// Build the page-selector view model for a list of `len` records
/// with `active_page` currently rendered.
///
/// Exactly one control is active: the one matching `active_page`, or
/// the first if `active_page` is out of range.
pub fn page_controls(len: usize, active_page: usize) -> PageControls {
    if len == 0 {
        return PageControls { visible: false, controls: Vec::new() };
    }
    let count = page_count(len);
    let active = if (1..=count).contains(&active_page) { active_page } else { 1 };
    let controls = (1..=count)
        .map(|number| PageControl { number, active: number == active })
        .collect();
    PageControls { visible: true, controls }
}
