//! Markdown resume parsing module.

mod entries;
mod inline;
mod options;
mod sections;
mod table;

pub use entries::EntryParser;
pub use inline::Normalizer;
pub use options::{Markers, ParseOptions};
pub use sections::{SectionSplitter, Sidebar};
pub use table::{extract_table, TableContent};

use crate::error::Result;
use crate::model::Resume;

/// Parser for the tabular markdown resume format.
///
/// Compiles its pattern machinery once from the configured
/// [`Markers`] table and runs the full extract → segment → normalize
/// pipeline in [`parse`](Self::parse).
pub struct ResumeParser {
    options: ParseOptions,
    normalizer: Normalizer,
    sections: SectionSplitter,
    entries: EntryParser,
}

impl ResumeParser {
    /// Create a parser with default options.
    pub fn new() -> Self {
        Self::with_options(ParseOptions::default())
    }

    /// Create a parser with custom options.
    pub fn with_options(options: ParseOptions) -> Self {
        let normalizer = Normalizer::new(&options.markers);
        let sections = SectionSplitter::new(&options.markers);
        Self {
            options,
            normalizer,
            sections,
            entries: EntryParser::new(),
        }
    }

    /// The options this parser was built with.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// The compiled normalizer, shared with rendering helpers.
    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Parse markdown source text into a [`Resume`].
    pub fn parse(&self, markdown: &str) -> Result<Resume> {
        let table = extract_table(markdown)?;

        let sidebar = self.sections.parse_sidebar(&table.sidebar, &self.normalizer);
        let (education_raw, experience_raw) = self.sections.split_main(&table.main);

        let markers = &self.options.markers;
        let education =
            self.entries
                .parse_segment(education_raw, &markers.education_header, &self.normalizer);
        let experience = self.entries.parse_segment(
            experience_raw,
            &markers.experience_header,
            &self.normalizer,
        );

        log::debug!(
            "Parsed {} education and {} experience entries",
            education.len(),
            experience.len()
        );

        Ok(Resume {
            skills: sidebar.skills,
            activities: sidebar.activities,
            morning_motivation: sidebar.morning_motivation,
            education,
            experience,
        })
    }
}

impl Default for ResumeParser {
    fn default() -> Self {
        Self::new()
    }
}
