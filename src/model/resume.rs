//! Top-level resume model.

use super::Entry;
use serde::{Deserialize, Serialize};

/// A parsed resume.
///
/// Owned by a single pipeline run: parsed from the markdown source,
/// rendered once, then discarded. There is no identity beyond the
/// structural text content.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Resume {
    /// Individual skill statements from the sidebar.
    pub skills: Vec<String>,

    /// Activities text from the sidebar.
    pub activities: String,

    /// The "gets me up in the morning" text from the sidebar.
    pub morning_motivation: String,

    /// Education entries from the main content column.
    pub education: Vec<Entry>,

    /// Work experience entries from the main content column.
    pub experience: Vec<Entry>,
}

impl Resume {
    /// Create a new empty resume.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of education and experience entries.
    pub fn entry_count(&self) -> usize {
        self.education.len() + self.experience.len()
    }

    /// Check whether nothing was parsed at all.
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
            && self.activities.is_empty()
            && self.morning_motivation.is_empty()
            && self.education.is_empty()
            && self.experience.is_empty()
    }
}
