//! Entry decomposition for education and experience segments.
//!
//! The source format double-purposes bold emphasis as structure: each
//! bold span opens an entry and its text is the entry title. This
//! module does one linear scan over the detected bold spans and carves
//! the segment into [`Entry`] records.

use regex::Regex;

use super::inline::Normalizer;
use crate::model::Entry;

pub struct EntryParser {
    bold_re: Regex,
    em_dash_re: Regex,
    italic_run_re: Regex,
}

impl EntryParser {
    pub fn new() -> Self {
        Self {
            bold_re: Regex::new(r"\*\*(.+?)\*\*").unwrap(),
            em_dash_re: Regex::new(r"^\s*—\s*").unwrap(),
            italic_run_re: Regex::new(r"^\*([^*]+)\*\s*").unwrap(),
        }
    }

    /// Parse one segment into entries.
    ///
    /// `section_header` is stripped as a prefix from the first entry's
    /// title (the segment opens with e.g. `**EDUCATION School Name**`).
    /// Candidates whose stripped title is empty are dropped. A body
    /// opening with an em-dash donates its leading italic run(s) to the
    /// subtitle before normalization.
    pub fn parse_segment(
        &self,
        raw: &str,
        section_header: &str,
        normalizer: &Normalizer,
    ) -> Vec<Entry> {
        let spans: Vec<_> = self.bold_re.captures_iter(raw).collect();
        let mut entries = Vec::with_capacity(spans.len());

        for (i, caps) in spans.iter().enumerate() {
            let title = strip_header_prefix(caps[1].trim(), section_header);
            if title.is_empty() {
                log::warn!("Dropping entry with empty title in {section_header} segment");
                continue;
            }

            let start = caps.get(0).map(|m| m.end()).unwrap_or(0);
            let end = spans
                .get(i + 1)
                .and_then(|next| next.get(0))
                .map(|m| m.start())
                .unwrap_or(raw.len());
            let mut rest = raw[start..end].trim();

            let mut subtitle_parts = Vec::new();
            if let Some(dash) = self.em_dash_re.find(rest) {
                let mut after_dash = &rest[dash.end()..];
                while let Some(caps) = self.italic_run_re.captures(after_dash) {
                    subtitle_parts.push(caps[1].to_string());
                    after_dash = &after_dash[caps.get(0).unwrap().end()..];
                }
                rest = after_dash.trim();
            }

            entries.push(Entry {
                title: title.to_string(),
                subtitle: subtitle_parts.join(" "),
                body: normalizer.normalize(rest),
            });
        }

        entries
    }
}

impl Default for EntryParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Strip a section header prefix from the first entry's title,
/// with or without a separating space.
fn strip_header_prefix<'a>(title: &'a str, header: &str) -> &'a str {
    title
        .strip_prefix(header)
        .map(|rest| rest.trim_start())
        .unwrap_or(title)
}
