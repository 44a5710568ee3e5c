//! HTML fragment rendering for the resume model.
//!
//! Produces the fixed-indentation `<li>` list the target page expects:
//! education entries, experience entries, one aggregate skills item,
//! one activities item, and a closing "get to know me" item. Inputs
//! are assumed already normalized; no text transformation happens here.

use crate::error::Result;
use crate::model::{Entry, Resume};
use crate::parser::Normalizer;

use super::RenderOptions;

/// Convert a resume to the HTML list fragment.
pub fn to_html(resume: &Resume, options: &RenderOptions) -> Result<String> {
    let renderer = HtmlRenderer::new(options.clone());
    Ok(renderer.render(resume))
}

/// HTML fragment renderer.
pub struct HtmlRenderer {
    options: RenderOptions,
    normalizer: Normalizer,
    outer: String,
    inner: String,
}

impl HtmlRenderer {
    /// Create a new renderer.
    pub fn new(options: RenderOptions) -> Self {
        let normalizer = Normalizer::new(&options.markers);
        let outer = "\t".repeat(options.indent_level);
        let inner = "\t".repeat(options.indent_level + 1);
        Self {
            options,
            normalizer,
            outer,
            inner,
        }
    }

    /// Render the full fragment, deterministically.
    pub fn render(&self, resume: &Resume) -> String {
        let mut lines = Vec::new();

        for entry in &resume.education {
            self.render_entry(&mut lines, entry, &self.options.education_tag, true);
        }
        for entry in &resume.experience {
            self.render_entry(&mut lines, entry, &self.options.experience_tag, false);
        }

        self.open_item(&mut lines, &self.options.skills_tag);
        for skill in &resume.skills {
            lines.push(format!("{}<p>{}</p>", self.inner, skill));
        }
        self.close_item(&mut lines);

        self.open_item(&mut lines, &self.options.activities_tag);
        lines.push(format!("{}<p>{}</p>", self.inner, resume.activities));
        self.close_item(&mut lines);

        self.open_item(&mut lines, &self.options.about_tag);
        lines.push(format!("{}<h4>{}</h4>", self.inner, self.options.about_heading));
        lines.push(format!("{}<p>", self.inner));
        lines.push(format!("{}\t{}", self.inner, resume.morning_motivation));
        lines.push(format!("{}</p>", self.inner));
        self.close_item(&mut lines);

        lines.join("\n")
    }

    /// Render one entry: tag, optional heading, date line, paragraphs.
    fn render_entry(&self, lines: &mut Vec<String>, entry: &Entry, tag: &str, is_education: bool) {
        self.open_item(lines, tag);

        if entry.has_subtitle() {
            lines.push(format!(
                "{}<h4>{}&mdash;{}</h4>",
                self.inner, entry.title, entry.subtitle
            ));
        } else if !entry.title.is_empty() {
            lines.push(format!("{}<h4>{}</h4>", self.inner, entry.title));
        }

        if !entry.body.is_empty() {
            match self.normalizer.split_date(&entry.body) {
                Some((date, desc)) => {
                    lines.push(format!("{}<p>{}</p>", self.inner, date));
                    if !desc.is_empty() {
                        self.render_description(lines, &desc, is_education);
                    }
                }
                None => self.render_description(lines, &entry.body, is_education),
            }
        }

        self.close_item(lines);
    }

    /// Education descriptions split into logical paragraphs; experience
    /// descriptions render as a single paragraph.
    fn render_description(&self, lines: &mut Vec<String>, desc: &str, is_education: bool) {
        if is_education {
            for part in self.normalizer.split_education_description(desc) {
                lines.push(format!("{}<p>{}</p>", self.inner, part));
            }
        } else {
            lines.push(format!("{}<p>{}</p>", self.inner, desc));
        }
    }

    fn open_item(&self, lines: &mut Vec<String>, tag: &str) {
        lines.push(format!("{}<li>", self.outer));
        lines.push(format!("{}<h3 class=\"tag\">{}</h3>", self.inner, tag));
    }

    fn close_item(&self, lines: &mut Vec<String>) {
        lines.push(format!("{}</li>", self.outer));
    }
}
