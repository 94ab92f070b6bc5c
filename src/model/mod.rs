//! Document model types for generated blog content.
//!
//! This module defines the structured representation produced by the
//! synthesizer and consumed by every exporter. Exporters render directly
//! from these types; nothing downstream re-parses flattened text.

mod category;
mod document;
mod section;

pub use category::{Category, CategoryTemplate};
pub use document::{count_words, reading_time_minutes, Document, DocumentStats};
pub use section::Section;
