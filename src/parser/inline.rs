//! Inline text normalization and description splitting.
//!
//! Turns raw inline markdown into plain display text and peels apart
//! education descriptions along fixed textual cues (GPA line, coursework
//! clauses). Normalization is idempotent and splitting is never lossy:
//! re-joining the returned paragraphs reproduces the input modulo
//! whitespace.

use regex::Regex;

use super::options::Markers;

const MONTHS: &str = "January|February|March|April|May|June|July|August|September|October|November|December";

/// Compiled inline-text machinery, built once per parse run.
pub struct Normalizer {
    bold: Regex,
    italic: Regex,
    link: Regex,
    whitespace: Regex,
    date: Regex,
    gpa: Regex,
    coursework: Vec<Regex>,
}

impl Normalizer {
    /// Compile the normalizer from a marker table.
    pub fn new(markers: &Markers) -> Self {
        let month_year = format!(r"(?:{MONTHS})\s+\d{{4}}");
        Self {
            bold: Regex::new(r"\*\*(.+?)\*\*").unwrap(),
            italic: Regex::new(r"\*(.+?)\*").unwrap(),
            link: Regex::new(r"\[([^\]]+)\]\([^)]+\)").unwrap(),
            whitespace: Regex::new(r"\s+").unwrap(),
            date: Regex::new(&format!(
                r"(?s)^({my}\s*-\s*(?:Present|{my}))\s*(.*)$",
                my = month_year
            ))
            .unwrap(),
            gpa: Regex::new(&format!(
                r"(?s)^({}\s*\S+)\s*(.*)$",
                regex::escape(&markers.gpa_label)
            ))
            .unwrap(),
            coursework: markers
                .coursework_labels
                .iter()
                .map(|label| {
                    Regex::new(&format!(r"(?s)^({}.*?\.)\s*(.*)$", regex::escape(label))).unwrap()
                })
                .collect(),
        }
    }

    /// Remove inline markdown formatting, preserving the enclosed text.
    ///
    /// Strips bold and italic markers, rewrites links to their display
    /// text, un-escapes `\-`, and collapses all whitespace runs to
    /// single spaces. Idempotent.
    pub fn normalize(&self, text: &str) -> String {
        let text = self.bold.replace_all(text, "$1");
        let text = self.italic.replace_all(&text, "$1");
        let text = self.link.replace_all(&text, "$1");
        let text = text.replace("\\-", "-");
        let text = self.whitespace.replace_all(&text, " ");
        text.trim().to_string()
    }

    /// Split a leading date range off a normalized entry body.
    ///
    /// Recognizes `"<Month> <Year> - <Month> <Year>"` and the
    /// open-ended `"<Month> <Year> - Present"` form. Returns the date
    /// text and whatever follows it.
    pub fn split_date(&self, body: &str) -> Option<(String, String)> {
        self.date.captures(body).map(|caps| {
            (
                caps[1].trim().to_string(),
                caps[2].trim().to_string(),
            )
        })
    }

    /// Split an education description into logical paragraphs.
    ///
    /// Peels, in fixed order, a GPA clause, then each coursework clause
    /// up to its closing period; whatever remains becomes the final
    /// paragraph. Clauses that are absent are skipped, so an input with
    /// no recognized clause comes back as one paragraph.
    pub fn split_education_description(&self, desc: &str) -> Vec<String> {
        let mut parts = Vec::new();
        let mut remaining = desc.trim().to_string();

        if let Some(caps) = self.gpa.captures(&remaining) {
            parts.push(caps[1].to_string());
            remaining = caps[2].trim().to_string();
        }

        for re in &self.coursework {
            if let Some(caps) = re.captures(&remaining) {
                parts.push(caps[1].to_string());
                remaining = caps[2].trim().to_string();
            }
        }

        if !remaining.is_empty() {
            parts.push(remaining);
        }

        parts
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(&Markers::default())
    }
}
