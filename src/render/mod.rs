//! Rendering module for converting the resume model to output formats.

mod html;
mod json;
mod options;

pub use html::{to_html, HtmlRenderer};
pub use json::{to_json, JsonFormat};
pub use options::RenderOptions;
