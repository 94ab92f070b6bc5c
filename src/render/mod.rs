//! Rendering module for converting documents to various output formats.

mod filename;
mod html;
mod json;
mod markdown;
mod options;
mod restyle;
mod text;

pub use filename::{sanitize_filename, suggested_filename, FALLBACK_FILENAME, MAX_FILENAME_CHARS};
pub use html::to_html;
pub use json::{to_json, JsonFormat};
pub use markdown::{to_markdown, MarkdownRenderer};
pub use options::{RenderOptions, DEFAULT_FOOTER_CREDIT};
pub use restyle::restyle_text;
pub use text::to_text;
