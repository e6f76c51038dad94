//! Name search over the dataset.
//!
//! Filtering distinguishes "no query applied" from "query matched
//! nothing" with an explicit tagged result — callers branch on
//! [`FilterOutcome`], never on an empty list standing in for both.

use crate::record::Record;

// ── FilterOutcome ─────────────────────────────────────────────────────────

/// Result of [`filter_records`].
#[derive(Debug, Clone, PartialEq)]
pub enum FilterOutcome {
    /// No filtering requested — the query was empty. Display the full
    /// dataset.
    Unfiltered,
    /// The subsequence of records matching the query. May be empty.
    Matches(Vec<Record>),
}

impl FilterOutcome {
    pub fn is_unfiltered(&self) -> bool {
        matches!(self, FilterOutcome::Unfiltered)
    }
}

// ── Query validation ──────────────────────────────────────────────────────

/// Whether `query` contains only characters in `[A-Za-z0-9]`.
///
/// A query that fails validation is treated by callers as if it were
/// empty — the display stays unchanged. A diagnostic is logged so
/// rejected input is visible during development.
pub fn validate_query(query: &str) -> bool {
    if query.chars().all(|c| c.is_ascii_alphanumeric()) {
        true
    } else {
        log::warn!("invalid characters in search query: {query:?}");
        false
    }
}

// ── Filtering ─────────────────────────────────────────────────────────────

/// Filter `records` by a case-insensitive, unanchored substring match
/// on the first OR last name.
///
/// An empty `query` returns [`FilterOutcome::Unfiltered`].
pub fn filter_records(records: &[Record], query: &str) -> FilterOutcome {
    if query.is_empty() {
        return FilterOutcome::Unfiltered;
    }
    let needle = query.to_lowercase();
    let matches = records
        .iter()
        .filter(|r| {
            r.name.first.to_lowercase().contains(&needle)
                || r.name.last.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect();
    FilterOutcome::Matches(matches)
}
