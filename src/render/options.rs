//! Rendering options and configuration.

use chrono::{DateTime, Utc};

/// Credit line used in the HTML footer by default.
pub const DEFAULT_FOOTER_CREDIT: &str = "AI Blog Generator";

/// Options for rendering generated documents.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Include YAML frontmatter with metadata (Markdown)
    pub include_frontmatter: bool,

    /// Character to use for Markdown unordered list markers
    pub list_marker: char,

    /// Character prefixing bullet points in plain text
    pub text_bullet: char,

    /// Escape special Markdown characters
    pub escape_special_chars: bool,

    /// Append the "Generated on" footer (HTML)
    pub include_footer: bool,

    /// Credit shown after the date in the HTML footer
    pub footer_credit: String,

    /// `strftime` pattern for the footer date
    pub date_format: String,

    /// Fixed footer timestamp; defaults to the document's own timestamp, or
    /// the current time when restyling free text
    pub footer_timestamp: Option<DateTime<Utc>>,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable frontmatter.
    pub fn with_frontmatter(mut self, include: bool) -> Self {
        self.include_frontmatter = include;
        self
    }

    /// Set the Markdown list marker character.
    pub fn with_list_marker(mut self, marker: char) -> Self {
        self.list_marker = marker;
        self
    }

    /// Set the plain-text bullet character.
    pub fn with_text_bullet(mut self, bullet: char) -> Self {
        self.text_bullet = bullet;
        self
    }

    /// Enable or disable Markdown escaping.
    pub fn with_escaping(mut self, escape: bool) -> Self {
        self.escape_special_chars = escape;
        self
    }

    /// Enable or disable the HTML footer.
    pub fn with_footer(mut self, include: bool) -> Self {
        self.include_footer = include;
        self
    }

    /// Set the footer credit line.
    pub fn with_footer_credit(mut self, credit: impl Into<String>) -> Self {
        self.footer_credit = credit.into();
        self
    }

    /// Set the footer date format.
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    /// Pin the footer timestamp.
    pub fn with_footer_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.footer_timestamp = Some(timestamp);
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            include_frontmatter: false,
            list_marker: '-',
            text_bullet: '•',
            escape_special_chars: true,
            include_footer: true,
            footer_credit: DEFAULT_FOOTER_CREDIT.to_string(),
            date_format: "%-m/%-d/%Y".to_string(),
            footer_timestamp: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_options_builder() {
        let options = RenderOptions::new()
            .with_frontmatter(true)
            .with_list_marker('*')
            .with_footer(false);

        assert!(options.include_frontmatter);
        assert_eq!(options.list_marker, '*');
        assert!(!options.include_footer);
        assert_eq!(options.text_bullet, '•');
    }

    #[test]
    fn test_render_options_defaults() {
        let options = RenderOptions::default();
        assert!(!options.include_frontmatter);
        assert!(options.escape_special_chars);
        assert_eq!(options.footer_credit, "AI Blog Generator");
        assert!(options.footer_timestamp.is_none());
    }
}
