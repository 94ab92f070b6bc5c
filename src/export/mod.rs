//! Export of generated documents to files.
//!
//! An export bundles the rendered content with a filename derived from the
//! document title and the MIME type of the chosen format.
//!
//! # Example
//!
//! ```no_run
//! use blogforge::export::{export, ExportFormat, ExportOptions};
//!
//! fn main() -> blogforge::Result<()> {
//!     let doc = blogforge::generate("Remote Work")?;
//!     let exported = export(&doc, ExportFormat::Html, &ExportOptions::default())?;
//!     let path = exported.save("out")?;
//!     println!("Saved {}", path.display());
//!     Ok(())
//! }
//! ```

use crate::error::{Error, Result};
use crate::model::Document;
use crate::render::{self, JsonFormat, RenderOptions};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Options for exporting a document.
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    /// Rendering options
    pub render: RenderOptions,

    /// JSON layout for [`ExportFormat::Json`]
    pub json_format: JsonFormat,
}

impl ExportOptions {
    /// Create new export options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set rendering options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render = options;
        self
    }

    /// Set the JSON layout.
    pub fn with_json_format(mut self, format: JsonFormat) -> Self {
        self.json_format = format;
        self
    }
}

/// Export file format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportFormat {
    /// Plain text, identical to the clipboard payload
    #[default]
    Text,

    /// Styled, printable HTML page
    Html,

    /// Markdown
    Markdown,

    /// JSON structure
    Json,
}

impl ExportFormat {
    /// All formats, in menu order.
    pub const ALL: [ExportFormat; 4] = [
        ExportFormat::Text,
        ExportFormat::Html,
        ExportFormat::Markdown,
        ExportFormat::Json,
    ];

    /// File extension without the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Text => "txt",
            ExportFormat::Html => "html",
            ExportFormat::Markdown => "md",
            ExportFormat::Json => "json",
        }
    }

    /// MIME type of the rendered content.
    pub fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Text => "text/plain;charset=utf-8",
            ExportFormat::Html => "text/html;charset=utf-8",
            ExportFormat::Markdown => "text/markdown;charset=utf-8",
            ExportFormat::Json => "application/json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExportFormat::Text => "text",
            ExportFormat::Html => "html",
            ExportFormat::Markdown => "markdown",
            ExportFormat::Json => "json",
        };
        f.write_str(name)
    }
}

impl FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" | "plain" => Ok(ExportFormat::Text),
            "html" | "htm" | "pdf" => Ok(ExportFormat::Html),
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            "json" => Ok(ExportFormat::Json),
            _ => Err(Error::UnknownFormat(s.to_string())),
        }
    }
}

/// A rendered export ready to be written.
#[derive(Debug, Clone)]
pub struct Exported {
    /// Rendered content
    pub content: String,

    /// Sanitized filename including extension
    pub filename: String,

    /// MIME type of the content
    pub mime_type: &'static str,
}

impl Exported {
    /// Write the content into `dir` under [`Exported::filename`].
    ///
    /// The directory is created when missing. Returns the written path.
    pub fn save(&self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;

        let path = dir.join(&self.filename);
        if path.exists() {
            log::warn!("Overwriting existing file {}", path.display());
        }
        fs::write(&path, &self.content)?;

        log::info!("Wrote {} bytes to {}", self.content.len(), path.display());
        Ok(path)
    }

    /// Get content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Render `doc` in `format` and derive its filename from the title.
pub fn export(doc: &Document, format: ExportFormat, options: &ExportOptions) -> Result<Exported> {
    let content = match format {
        ExportFormat::Text => render::to_text(doc, &options.render)?,
        ExportFormat::Html => render::to_html(doc, &options.render)?,
        ExportFormat::Markdown => render::to_markdown(doc, &options.render)?,
        ExportFormat::Json => render::to_json(doc, options.json_format)?,
    };

    let filename = render::suggested_filename(doc.title(), format.extension());
    log::debug!(
        "Exported {} as {} ({} bytes)",
        filename,
        format,
        content.len()
    );

    Ok(Exported {
        content,
        filename,
        mime_type: format.mime_type(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Section};

    fn sample(title: &str) -> Document {
        let sections = vec![Section::new("Overview", vec!["One.".into(), "Two.".into()])];
        Document::new(
            "Topic",
            Category::Lifestyle,
            title,
            "Intro.",
            sections,
            "End.",
        )
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("md".parse::<ExportFormat>().unwrap(), ExportFormat::Markdown);
        assert_eq!(" HTML ".parse::<ExportFormat>().unwrap(), ExportFormat::Html);
        assert_eq!("txt".parse::<ExportFormat>().unwrap(), ExportFormat::Text);
        assert_eq!("pdf".parse::<ExportFormat>().unwrap(), ExportFormat::Html);
        assert!(matches!(
            "docx".parse::<ExportFormat>(),
            Err(Error::UnknownFormat(f)) if f == "docx"
        ));
    }

    #[test]
    fn test_format_display_round_trips() {
        for format in ExportFormat::ALL {
            assert_eq!(format.to_string().parse::<ExportFormat>().unwrap(), format);
        }
    }

    #[test]
    fn test_export_filename_and_mime() {
        let exported = export(
            &sample("Remote Work: A Guide!"),
            ExportFormat::Markdown,
            &ExportOptions::default(),
        )
        .unwrap();
        assert_eq!(exported.filename, "Remote_Work_A_Guide.md");
        assert_eq!(exported.mime_type, "text/markdown;charset=utf-8");
        assert!(exported.content.starts_with("# Remote Work: A Guide!"));
    }

    #[test]
    fn test_export_fallback_filename() {
        let options = ExportOptions::default();
        let exported = export(&sample("!!!"), ExportFormat::Json, &options).unwrap();
        assert_eq!(exported.filename, "blog_post.json");
    }

    #[test]
    fn test_export_text_matches_plain_text() {
        let doc = sample("Plain");
        let exported = export(&doc, ExportFormat::Text, &ExportOptions::default()).unwrap();
        assert_eq!(exported.content, doc.plain_text());
    }
}
