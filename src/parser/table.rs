//! Table extraction from the markdown source.
//!
//! The resume lives in one pipe-delimited table with a fixed shape:
//! a header row whose third cell is the sidebar, an alignment row, and
//! a body row whose second cell is the main content. This module pulls
//! out those two cells; it is not a general table parser.

use crate::error::{Error, Result};

/// The two resume table columns, raw (still markdown-formatted) text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableContent {
    /// Sidebar text: skills, activities, morning motivation.
    pub sidebar: String,

    /// Main content text: education and experience.
    pub main: String,
}

/// Extract the sidebar and main-content cells from the markdown source.
///
/// Data rows are lines beginning with `|` that are not alignment rows.
/// Fails with [`Error::MalformedTable`] when fewer than two data rows
/// are present. A missing cell degrades to an empty string.
pub fn extract_table(markdown: &str) -> Result<TableContent> {
    let data_rows: Vec<&str> = markdown
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with('|') && !is_alignment_row(line))
        .collect();

    if data_rows.len() < 2 {
        return Err(Error::MalformedTable {
            found: data_rows.len(),
        });
    }

    log::debug!("Found {} table data rows", data_rows.len());

    let sidebar = cell_at(data_rows[0], 2);
    let main = cell_at(data_rows[1], 1);

    Ok(TableContent { sidebar, main })
}

/// A row is an alignment row when every cell is made of dashes and
/// colons only (e.g. `| :---- | ----: |`).
fn is_alignment_row(line: &str) -> bool {
    let mut saw_dash = false;
    for cell in line.split('|') {
        let cell = cell.trim();
        if cell.is_empty() {
            continue;
        }
        if !cell.chars().all(|c| c == '-' || c == ':') {
            return false;
        }
        saw_dash = cell.contains('-') || saw_dash;
    }
    saw_dash
}

fn cell_at(row: &str, index: usize) -> String {
    row.split('|')
        .nth(index)
        .map(|cell| cell.trim().to_string())
        .unwrap_or_default()
}
