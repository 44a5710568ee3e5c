//! Parsing options and configuration.

/// The literal patterns the parser and splicer key on.
///
/// The source format is fixed-keyword markdown, so all recognition is
/// driven by this table rather than by a general parser. Extending the
/// format (a new section header, an extra skill lead-in) means editing
/// this table, not the control flow.
#[derive(Debug, Clone)]
pub struct Markers {
    /// Sidebar section header for skills.
    pub skills_header: String,

    /// Sidebar section header for activities.
    pub activities_header: String,

    /// Sidebar section header for the morning-motivation text.
    pub morning_header: String,

    /// Main-content section header for education entries.
    pub education_header: String,

    /// Main-content section header for work experience entries.
    pub experience_header: String,

    /// Lead-in words that start a new skill statement.
    ///
    /// This is a heuristic tokenizer: a skill phrased without one of
    /// these lead-ins merges with its neighbor. Documented behavior of
    /// the source format, not something the parser tries to repair.
    pub skill_lead_ins: Vec<String>,

    /// Label opening the GPA clause of an education description.
    pub gpa_label: String,

    /// Labels opening coursework clauses, peeled in this order.
    pub coursework_labels: Vec<String>,

    /// Opening delimiter of the owned region in the target document.
    pub region_open: String,

    /// Closing delimiter of the owned region in the target document.
    pub region_close: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            skills_header: "SKILLS".to_string(),
            activities_header: "ACTIVITIES".to_string(),
            morning_header: "GETS ME UP IN THE MORNING".to_string(),
            education_header: "EDUCATION".to_string(),
            experience_header: "WORK EXPERIENCE".to_string(),
            skill_lead_ins: [
                "Practiced",
                "Highly",
                "Fluent",
                "Experienced",
                "Proficient",
                "Skilled",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            gpa_label: "GPA:".to_string(),
            coursework_labels: vec![
                "Relevant CS Coursework:".to_string(),
                "Relevant Philosophy Coursework:".to_string(),
            ],
            region_open: "<ol class=\"resume-list\">".to_string(),
            region_close: "</ol>".to_string(),
        }
    }
}

/// Options for parsing the markdown resume.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// The marker table driving all pattern recognition.
    pub markers: Markers,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole marker table.
    pub fn with_markers(mut self, markers: Markers) -> Self {
        self.markers = markers;
        self
    }

    /// Add a skill lead-in word.
    pub fn with_skill_lead_in(mut self, word: impl Into<String>) -> Self {
        self.markers.skill_lead_ins.push(word.into());
        self
    }

    /// Override the target region delimiters.
    pub fn with_region_markers(
        mut self,
        open: impl Into<String>,
        close: impl Into<String>,
    ) -> Self {
        self.markers.region_open = open.into();
        self.markers.region_close = close.into();
        self
    }
}
