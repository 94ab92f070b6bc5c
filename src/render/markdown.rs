//! Markdown rendering for generated documents.

use crate::error::Result;
use crate::model::{Document, Section};

use super::RenderOptions;

/// Convert a document to Markdown.
pub fn to_markdown(doc: &Document, options: &RenderOptions) -> Result<String> {
    let renderer = MarkdownRenderer::new(options.clone());
    renderer.render(doc)
}

/// Markdown renderer.
pub struct MarkdownRenderer {
    options: RenderOptions,
}

impl MarkdownRenderer {
    /// Create a new Markdown renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render a document to Markdown.
    pub fn render(&self, doc: &Document) -> Result<String> {
        let mut output = String::new();

        if self.options.include_frontmatter {
            output.push_str(&doc.to_yaml_frontmatter());
        }

        output.push_str("# ");
        output.push_str(&self.text(doc.title()));
        output.push_str("\n\n");

        output.push_str(&self.text(doc.introduction()));
        output.push_str("\n\n");

        for section in doc.sections() {
            self.render_section(&mut output, section);
        }

        output.push_str(&self.text(doc.conclusion()));

        Ok(output.trim().to_string())
    }

    fn render_section(&self, output: &mut String, section: &Section) {
        output.push_str("## ");
        output.push_str(&self.text(&section.heading));
        output.push_str("\n\n");

        for paragraph in &section.paragraphs {
            output.push_str(&self.text(paragraph));
            output.push_str("\n\n");
        }

        if section.has_bullets() {
            for point in section.bullets() {
                output.push(self.options.list_marker);
                output.push(' ');
                output.push_str(&self.text(point));
                output.push('\n');
            }
            output.push('\n');
        }
    }

    fn text(&self, text: &str) -> String {
        if self.options.escape_special_chars {
            escape_markdown(text)
        } else {
            text.to_string()
        }
    }
}

fn escape_markdown(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' | '`' | '*' | '_' | '[' | ']' | '|' => {
                result.push('\\');
                result.push(c);
            }
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;

    fn sample() -> Document {
        let sections = vec![
            Section::new("Overview", vec!["One.".into(), "Two.".into()]),
            Section::new("Action Steps", vec!["Three.".into(), "Four.".into()])
                .with_bullets(vec!["Plan".into(), "Act".into(), "Review".into()]),
        ];
        Document::new(
            "C_sharp *tips*",
            Category::Lifestyle,
            "All about C_sharp *tips*",
            "Intro.",
            sections,
            "Done.",
        )
    }

    #[test]
    fn test_escape_markdown() {
        assert_eq!(escape_markdown("Hello *world*"), "Hello \\*world\\*");
        assert_eq!(escape_markdown("[link]"), "\\[link\\]");
        assert_eq!(escape_markdown("it's fine."), "it's fine.");
    }

    #[test]
    fn test_render_structure() {
        let md = to_markdown(&sample(), &RenderOptions::new()).unwrap();
        assert!(md.starts_with("# All about C\\_sharp \\*tips\\*\n\nIntro.\n\n## Overview\n\n"));
        assert!(md.contains(
            "## Action Steps\n\nThree.\n\nFour.\n\n- Plan\n- Act\n- Review\n\nDone."
        ));
        assert!(md.ends_with("Done."));
    }

    #[test]
    fn test_render_without_escaping() {
        let options = RenderOptions::new()
            .with_escaping(false)
            .with_list_marker('*');
        let md = to_markdown(&sample(), &options).unwrap();
        assert!(md.starts_with("# All about C_sharp *tips*"));
        assert!(md.contains("* Plan\n"));
    }

    #[test]
    fn test_render_with_frontmatter() {
        let options = RenderOptions::new().with_frontmatter(true);
        let md = to_markdown(&sample(), &options).unwrap();
        assert!(md.starts_with("---\n"));
        assert!(md.contains("category: lifestyle"));
        assert!(md.contains("\n---\n# All about"));
    }
}
