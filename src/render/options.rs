//! Rendering options and configuration.

use crate::parser::Markers;

/// Options for rendering the HTML fragment.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Number of tabs before each `<li>`; inner elements get one more.
    pub indent_level: usize,

    /// Tag label for education entries.
    pub education_tag: String,

    /// Tag label for experience entries.
    pub experience_tag: String,

    /// Tag label for the aggregate skills item.
    pub skills_tag: String,

    /// Tag label for the activities item.
    pub activities_tag: String,

    /// Tag label for the closing "about" item.
    pub about_tag: String,

    /// Heading shown inside the "about" item.
    pub about_heading: String,

    /// Marker table, used to recognize date ranges and description
    /// clauses inside entry bodies.
    pub markers: Markers,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base indentation depth in tabs.
    pub fn with_indent_level(mut self, level: usize) -> Self {
        self.indent_level = level;
        self
    }

    /// Set the marker table.
    pub fn with_markers(mut self, markers: Markers) -> Self {
        self.markers = markers;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent_level: 4,
            education_tag: "education".to_string(),
            experience_tag: "experience".to_string(),
            skills_tag: "skills".to_string(),
            activities_tag: "activities".to_string(),
            about_tag: "get to know me".to_string(),
            about_heading: "Gets Me Up In The Morning".to_string(),
            markers: Markers::default(),
        }
    }
}
