//! Section segmentation for sidebar and main content.

use regex::Regex;

use super::inline::Normalizer;
use super::options::Markers;

/// Parsed sidebar content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sidebar {
    pub skills: Vec<String>,
    pub activities: String,
    pub morning_motivation: String,
}

/// Splits the two table columns into their named sections.
pub struct SectionSplitter {
    skills_re: Regex,
    activities_re: Regex,
    morning_re: Regex,
    work_re: Regex,
    lead_in_re: Regex,
}

impl SectionSplitter {
    /// Compile the splitter from a marker table.
    pub fn new(markers: &Markers) -> Self {
        let skills = regex::escape(&markers.skills_header);
        let activities = regex::escape(&markers.activities_header);
        let morning = regex::escape(&markers.morning_header);
        let work = regex::escape(&markers.experience_header);

        let lead_ins = markers
            .skill_lead_ins
            .iter()
            .map(|w| regex::escape(w))
            .collect::<Vec<_>>()
            .join("|");

        Self {
            skills_re: Regex::new(&format!(r"(?s){skills}\s+(.*?)\s*{activities}")).unwrap(),
            activities_re: Regex::new(&format!(r"(?s){activities}\s+(.*?)\s*{morning}")).unwrap(),
            morning_re: Regex::new(&format!(r"(?s){morning}\s+(.*)$")).unwrap(),
            work_re: Regex::new(&format!(r"\*\*{work}\s+")).unwrap(),
            lead_in_re: Regex::new(&format!("(?:{lead_ins})")).unwrap(),
        }
    }

    /// Parse the sidebar cell into skills, activities, and motivation.
    ///
    /// Each section is the text between its header and the next header.
    /// A missing section degrades to empty, never to an error.
    pub fn parse_sidebar(&self, raw: &str, normalizer: &Normalizer) -> Sidebar {
        let skills_raw = self
            .skills_re
            .captures(raw)
            .map(|c| c[1].trim().to_string())
            .unwrap_or_default();

        let skills: Vec<String> = self
            .split_skills(&skills_raw)
            .into_iter()
            .map(|s| normalizer.normalize(s))
            .filter(|s| !s.is_empty())
            .collect();

        let activities = self
            .activities_re
            .captures(raw)
            .map(|c| normalizer.normalize(&c[1]))
            .unwrap_or_default();

        let morning_motivation = self
            .morning_re
            .captures(raw)
            .map(|c| normalizer.normalize(&c[1]))
            .unwrap_or_default();

        log::debug!(
            "Sidebar: {} skills, activities {}present, motivation {}present",
            skills.len(),
            if activities.is_empty() { "not " } else { "" },
            if morning_motivation.is_empty() { "not " } else { "" },
        );

        Sidebar {
            skills,
            activities,
            morning_motivation,
        }
    }

    /// Split the main-content cell at the work-experience marker.
    ///
    /// Returns `(education, experience)`. When the marker is absent the
    /// whole cell is education and experience is empty.
    pub fn split_main<'a>(&self, raw: &'a str) -> (&'a str, &'a str) {
        match self.work_re.find(raw) {
            Some(m) => (raw[..m.start()].trim(), raw[m.start()..].trim()),
            None => (raw.trim(), ""),
        }
    }

    /// Split the skills text into individual statements.
    ///
    /// A new statement starts at a lead-in word sitting at a word
    /// boundary (preceded by a space). Skills phrased without a
    /// recognized lead-in merge with the previous statement; that is
    /// the source format's contract, not something to repair here.
    fn split_skills<'a>(&self, raw: &'a str) -> Vec<&'a str> {
        let mut pieces = Vec::new();
        let mut start = 0;

        for m in self.lead_in_re.find_iter(raw) {
            let at = m.start();
            if at <= start {
                continue;
            }
            if raw[..at].ends_with(' ') {
                pieces.push(raw[start..at - 1].trim_end());
                start = at;
            }
        }

        pieces.push(&raw[start..]);
        pieces.retain(|p| !p.trim().is_empty());
        pieces
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn splitter() -> SectionSplitter {
        SectionSplitter::new(&Markers::default())
    }

    #[test]
    fn test_parse_sidebar_sections() {
        let s = splitter();
        let n = Normalizer::default();
        let sidebar = s.parse_sidebar(
            "SKILLS Fluent in X. Experienced with Y. ACTIVITIES Reading. \
             GETS ME UP IN THE MORNING Coffee.",
            &n,
        );
        assert_eq!(sidebar.skills, vec!["Fluent in X.", "Experienced with Y."]);
        assert_eq!(sidebar.activities, "Reading.");
        assert_eq!(sidebar.morning_motivation, "Coffee.");
    }

    #[test]
    fn test_parse_sidebar_missing_sections() {
        let s = splitter();
        let n = Normalizer::default();
        let sidebar = s.parse_sidebar("no headers at all", &n);
        assert!(sidebar.skills.is_empty());
        assert!(sidebar.activities.is_empty());
        assert!(sidebar.morning_motivation.is_empty());
    }

    #[test]
    fn test_skill_split_at_lead_ins() {
        let s = splitter();
        let pieces = s.split_skills("Skilled with tools (Rust) Proficient in Go.");
        assert_eq!(
            pieces,
            vec!["Skilled with tools (Rust)", "Proficient in Go."]
        );
        // A lead-in stuck to another word does not start a statement.
        let pieces = s.split_skills("Self-taught inExperienced ways.");
        assert_eq!(pieces, vec!["Self-taught inExperienced ways."]);
    }

    #[test]
    fn test_skill_without_lead_in_merges() {
        let s = splitter();
        // "Good at Z." has no recognized lead-in, so it merges with the
        // preceding statement.
        let pieces = s.split_skills("Fluent in X. Good at Z. Practiced in W.");
        assert_eq!(pieces, vec!["Fluent in X. Good at Z.", "Practiced in W."]);
    }

    #[test]
    fn test_split_main_with_marker() {
        let s = splitter();
        let (edu, exp) = s.split_main("**EDUCATION A** stuff **WORK EXPERIENCE B** things");
        assert_eq!(edu, "**EDUCATION A** stuff");
        assert_eq!(exp, "**WORK EXPERIENCE B** things");
    }

    #[test]
    fn test_split_main_without_marker() {
        let s = splitter();
        let (edu, exp) = s.split_main("**EDUCATION A** only education here");
        assert_eq!(edu, "**EDUCATION A** only education here");
        assert_eq!(exp, "");
    }
}
