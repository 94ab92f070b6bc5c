//! Document-level types.

use super::{Category, Section};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Average reading speed used for reading-time estimates.
const WORDS_PER_MINUTE: usize = 200;

/// A generated blog post.
///
/// Fields are read-only; the word count is computed once from the assembled
/// text when the document is constructed and can never drift from it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    title: String,
    introduction: String,
    sections: Vec<Section>,
    conclusion: String,
    word_count: usize,
    topic: String,
    category: Category,
    generated_at: DateTime<Utc>,
}

impl Document {
    /// Assemble a document, stamping the current time and counting words.
    pub fn new(
        topic: impl Into<String>,
        category: Category,
        title: impl Into<String>,
        introduction: impl Into<String>,
        sections: Vec<Section>,
        conclusion: impl Into<String>,
    ) -> Self {
        let mut doc = Self {
            title: title.into(),
            introduction: introduction.into(),
            sections,
            conclusion: conclusion.into(),
            word_count: 0,
            topic: topic.into(),
            category,
            generated_at: Utc::now(),
        };
        doc.word_count = doc.recount_words();
        doc
    }

    /// Replace the generation timestamp.
    pub fn with_generated_at(mut self, generated_at: DateTime<Utc>) -> Self {
        self.generated_at = generated_at;
        self
    }

    /// Get the title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the introduction paragraph.
    pub fn introduction(&self) -> &str {
        &self.introduction
    }

    /// Get the body sections.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Get the conclusion paragraph.
    pub fn conclusion(&self) -> &str {
        &self.conclusion
    }

    /// Get the stored word count.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Get the topic the document was generated from.
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Get the resolved content category.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Get the generation timestamp.
    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    /// Count words across every text field of the document.
    pub fn recount_words(&self) -> usize {
        count_words(&self.title)
            + count_words(&self.introduction)
            + count_words(&self.conclusion)
            + self.sections.iter().map(Section::word_count).sum::<usize>()
    }

    /// Estimated reading time in whole minutes.
    pub fn reading_time_minutes(&self) -> usize {
        reading_time_minutes(self.word_count)
    }

    /// Collect summary statistics.
    pub fn stats(&self) -> DocumentStats {
        DocumentStats {
            word_count: self.word_count,
            section_count: self.sections.len(),
            paragraph_count: self.sections.iter().map(|s| s.paragraphs.len()).sum(),
            bullet_count: self.sections.iter().map(|s| s.bullets().len()).sum(),
            reading_time_minutes: self.reading_time_minutes(),
        }
    }

    /// Flatten the document to its plain-text form.
    ///
    /// This is the clipboard payload and the `.txt` export body.
    pub fn plain_text(&self) -> String {
        self.plain_text_with_marker('•')
    }

    /// Flatten the document using a custom bullet marker.
    pub fn plain_text_with_marker(&self, marker: char) -> String {
        let mut out = String::new();
        out.push_str(&self.title);
        out.push_str("\n\n");
        out.push_str(&self.introduction);
        out.push_str("\n\n");

        for section in &self.sections {
            out.push_str(&section.heading);
            out.push_str("\n\n");
            for paragraph in &section.paragraphs {
                out.push_str(paragraph);
                out.push_str("\n\n");
            }
            if section.has_bullets() {
                for point in section.bullets() {
                    out.push(marker);
                    out.push(' ');
                    out.push_str(point);
                    out.push('\n');
                }
                out.push('\n');
            }
        }

        out.push_str(&self.conclusion);
        out
    }

    /// Convert document metadata to YAML frontmatter format.
    pub fn to_yaml_frontmatter(&self) -> String {
        let lines = [
            "---".to_string(),
            format!("title: \"{}\"", escape_yaml(&self.title)),
            format!("topic: \"{}\"", escape_yaml(&self.topic)),
            format!("category: {}", self.category),
            format!("word_count: {}", self.word_count),
            format!("reading_time: \"{} min read\"", self.reading_time_minutes()),
            format!("generated_at: {}", self.generated_at.to_rfc3339()),
            "---".to_string(),
            String::new(),
        ];
        lines.join("\n")
    }
}

/// Summary statistics for a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DocumentStats {
    /// Authoritative word count
    pub word_count: usize,

    /// Number of body sections
    pub section_count: usize,

    /// Number of body paragraphs across all sections
    pub paragraph_count: usize,

    /// Number of bullet points across all sections
    pub bullet_count: usize,

    /// Estimated reading time in minutes
    pub reading_time_minutes: usize,
}

/// Count whitespace-delimited tokens.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Reading time in minutes at 200 words per minute, rounded up.
pub fn reading_time_minutes(word_count: usize) -> usize {
    word_count.div_ceil(WORDS_PER_MINUTE)
}

/// Escape special characters for YAML strings.
fn escape_yaml(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
