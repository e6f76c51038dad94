//! Person records — the dataset this system renders.

use serde::Deserialize;

/// One person entry in the dataset.
///
/// The shape mirrors the upstream feed the dataset is exported from:
/// nested `name`, `picture`, and `registered` objects. Records are
/// read-only input — nothing in this crate mutates or writes them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Record {
    pub name: Name,
    pub email: String,
    pub picture: Portrait,
    pub registered: Registration,
}

/// Title and given/family names, all pre-formatted strings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Name {
    pub title: String,
    pub first: String,
    pub last: String,
}

/// Avatar image URLs. Only the large size is rendered.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Portrait {
    pub large: String,
}

/// Registration details. The date is pre-formatted and displayed
/// verbatim — it is never parsed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Registration {
    pub date: String,
}

impl Record {
    /// `"{first} {last}"` — the card heading.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name.first, self.name.last)
    }

    /// `"{title} {first} {last}"` — the avatar alt text.
    pub fn titled_name(&self) -> String {
        format!("{} {} {}", self.name.title, self.name.first, self.name.last)
    }
}
