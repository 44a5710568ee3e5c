//! Resume entry types.

use serde::{Deserialize, Serialize};

/// One resume line item (education or work experience).
///
/// Invariant: `title` is never empty for a retained entry. Candidates
/// whose extracted title is empty are dropped during parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Entry title, taken from a bold span in the source.
    pub title: String,

    /// Optional subtitle from italic runs after an em-dash; empty if absent.
    pub subtitle: String,

    /// Normalized free text. May open with a textual date range
    /// ("January 2023 - Present"), which the renderer recognizes and
    /// emits as its own line.
    pub body: String,
}

impl Entry {
    /// Create an entry with a title and no subtitle or body.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: String::new(),
            body: String::new(),
        }
    }

    /// Create an entry with all fields.
    pub fn with_parts(
        title: impl Into<String>,
        subtitle: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            body: body.into(),
        }
    }

    /// Whether a subtitle was captured for this entry.
    pub fn has_subtitle(&self) -> bool {
        !self.subtitle.is_empty()
    }
}
