//! Resume model types.
//!
//! This module defines the intermediate representation that bridges
//! markdown parsing and HTML rendering. The model holds plain,
//! already-normalized text; rendering performs no further transformation.

mod entry;
mod resume;

pub use entry::Entry;
pub use resume::Resume;
