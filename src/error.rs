//! Error types for the resumd library.

use std::io;
use thiserror::Error;

/// Result type alias for resumd operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while syncing a resume.
///
/// The taxonomy is deliberately small: only structural failures are fatal.
/// Irregularities inside sections (missing subtitle, absent optional
/// clauses) degrade to empty strings or empty lists instead of erroring.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The markdown source did not contain enough table data rows.
    #[error("Malformed resume table: expected at least 2 data rows, found {found}")]
    MalformedTable { found: usize },

    /// The target document does not contain the marked region.
    #[error("Target region not found: {0}")]
    RegionNotFound(String),

    /// The target document contains more than one candidate region.
    #[error("Ambiguous target region: marker {marker:?} matched {count} times, expected exactly 1")]
    AmbiguousRegion { marker: String, count: usize },

    /// Error during rendering (HTML fragment or JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}
