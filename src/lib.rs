//! # resumd
//!
//! Sync a tabular markdown resume into a static HTML page.
//!
//! This library parses a fixed-layout markdown resume table into a
//! typed model, renders the model as a fixed-indentation HTML list
//! fragment, and splices the fragment into the uniquely-marked region
//! of a target document, leaving everything outside that region
//! byte-for-byte untouched.
//!
//! ## Quick Start
//!
//! ```no_run
//! use resumd::{parse_file, render};
//!
//! fn main() -> resumd::Result<()> {
//!     // Parse the markdown resume
//!     let resume = parse_file("Resume.md")?;
//!
//!     // Render the HTML fragment
//!     let options = render::RenderOptions::default();
//!     let html = render::to_html(&resume, &options)?;
//!     println!("{}", html);
//!
//!     Ok(())
//! }
//! ```
//!
//! Or run the whole pipeline in place:
//!
//! ```no_run
//! resumd::sync_file("Resume.md", "index.html")?;
//! # Ok::<(), resumd::Error>(())
//! ```
//!
//! ## Behavior notes
//!
//! The parser is permissive by design: structurally required pieces
//! (two table data rows, the target region) fail fatally, while
//! anything else degrades to empty strings or empty lists. The literal
//! patterns that drive recognition live in one [`Markers`] table so
//! the format can be extended without touching control flow.

pub mod error;
pub mod model;
pub mod parser;
pub mod render;
pub mod splice;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{Entry, Resume};
pub use parser::{Markers, Normalizer, ParseOptions, ResumeParser};
pub use render::{JsonFormat, RenderOptions};
pub use splice::RegionSplicer;

use std::fs;
use std::path::Path;

/// Parse a markdown resume file into a [`Resume`].
///
/// # Example
///
/// ```no_run
/// let resume = resumd::parse_file("Resume.md").unwrap();
/// println!("Entries: {}", resume.entry_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Resume> {
    let markdown = fs::read_to_string(path)?;
    parse_str(&markdown)
}

/// Parse a markdown resume file with custom options.
pub fn parse_file_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Resume> {
    let markdown = fs::read_to_string(path)?;
    ResumeParser::with_options(options).parse(&markdown)
}

/// Parse markdown resume text into a [`Resume`].
pub fn parse_str(markdown: &str) -> Result<Resume> {
    ResumeParser::new().parse(markdown)
}

/// Parse markdown resume text with custom options.
pub fn parse_str_with_options(markdown: &str, options: ParseOptions) -> Result<Resume> {
    ResumeParser::with_options(options).parse(markdown)
}

/// Run the full pipeline: parse the resume, render the fragment, and
/// rewrite the target file's marked region in place.
///
/// Returns the parsed resume so callers can report what was synced.
/// Rerunning with unchanged inputs rewrites the target with identical
/// bytes.
///
/// # Example
///
/// ```no_run
/// let resume = resumd::sync_file("Resume.md", "index.html").unwrap();
/// println!("Synced {} entries", resume.entry_count());
/// ```
pub fn sync_file<P: AsRef<Path>, Q: AsRef<Path>>(resume_path: P, target_path: Q) -> Result<Resume> {
    Resumd::new().sync(resume_path, target_path)
}

/// Builder for parsing, rendering, and syncing resumes.
///
/// # Example
///
/// ```no_run
/// use resumd::Resumd;
///
/// let html = Resumd::new()
///     .with_skill_lead_in("Adept")
///     .with_indent_level(2)
///     .parse("Resume.md")?
///     .to_html()?;
/// # Ok::<(), resumd::Error>(())
/// ```
pub struct Resumd {
    parse_options: ParseOptions,
    render_options: RenderOptions,
}

impl Resumd {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            parse_options: ParseOptions::default(),
            render_options: RenderOptions::default(),
        }
    }

    /// Replace the marker table for parsing, rendering, and splicing.
    pub fn with_markers(mut self, markers: Markers) -> Self {
        self.render_options = self.render_options.with_markers(markers.clone());
        self.parse_options = self.parse_options.with_markers(markers);
        self
    }

    /// Add a skill lead-in word.
    pub fn with_skill_lead_in(mut self, word: impl Into<String>) -> Self {
        self.parse_options = self.parse_options.with_skill_lead_in(word);
        self
    }

    /// Override the target region delimiters.
    pub fn with_region_markers(
        mut self,
        open: impl Into<String>,
        close: impl Into<String>,
    ) -> Self {
        self.parse_options = self.parse_options.with_region_markers(open, close);
        self.render_options.markers = self.parse_options.markers.clone();
        self
    }

    /// Set the fragment's base indentation depth in tabs.
    pub fn with_indent_level(mut self, level: usize) -> Self {
        self.render_options = self.render_options.with_indent_level(level);
        self
    }

    /// Parse a markdown resume file and return a result wrapper.
    pub fn parse<P: AsRef<Path>>(self, path: P) -> Result<ResumdResult> {
        let markdown = fs::read_to_string(path)?;
        self.parse_str(&markdown)
    }

    /// Parse markdown resume text and return a result wrapper.
    pub fn parse_str(self, markdown: &str) -> Result<ResumdResult> {
        let resume = ResumeParser::with_options(self.parse_options.clone()).parse(markdown)?;
        Ok(ResumdResult {
            resume,
            parse_options: self.parse_options,
            render_options: self.render_options,
        })
    }

    /// Run the full pipeline against the two files.
    pub fn sync<P: AsRef<Path>, Q: AsRef<Path>>(
        self,
        resume_path: P,
        target_path: Q,
    ) -> Result<Resume> {
        let target_path = target_path.as_ref();
        let result = self.parse(resume_path)?;
        let target = fs::read_to_string(target_path)?;
        let updated = result.splice_into(&target)?;
        fs::write(target_path, updated)?;
        Ok(result.resume)
    }
}

impl Default for Resumd {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of parsing a markdown resume.
pub struct ResumdResult {
    /// The parsed resume
    pub resume: Resume,
    parse_options: ParseOptions,
    render_options: RenderOptions,
}

impl ResumdResult {
    /// Render the HTML fragment.
    pub fn to_html(&self) -> Result<String> {
        render::to_html(&self.resume, &self.render_options)
    }

    /// Render the model as JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.resume, format)
    }

    /// Splice the rendered fragment into target document text.
    pub fn splice_into(&self, target: &str) -> Result<String> {
        let fragment = self.to_html()?;
        let splicer = RegionSplicer::new(&self.parse_options.markers);
        splicer.splice(target, &fragment)
    }

    /// Get the parsed resume.
    pub fn resume(&self) -> &Resume {
        &self.resume
    }
}
