//! Section-level types.

use serde::{Deserialize, Serialize};

use super::count_words;

/// A heading with its paragraphs and an optional bullet list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Title-cased heading text
    pub heading: String,

    /// Body paragraphs, in order
    pub paragraphs: Vec<String>,

    /// Bullet points, present only for some sections
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bullet_points: Option<Vec<String>>,
}

impl Section {
    /// Create a section without bullet points.
    pub fn new(heading: impl Into<String>, paragraphs: Vec<String>) -> Self {
        Self {
            heading: heading.into(),
            paragraphs,
            bullet_points: None,
        }
    }

    /// Attach bullet points. An empty list is stored as no list.
    pub fn with_bullets(mut self, bullets: Vec<String>) -> Self {
        self.bullet_points = if bullets.is_empty() {
            None
        } else {
            Some(bullets)
        };
        self
    }

    /// Bullet points as a slice (empty when the section has none).
    pub fn bullets(&self) -> &[String] {
        self.bullet_points.as_deref().unwrap_or(&[])
    }

    /// Check if the section carries a bullet list.
    pub fn has_bullets(&self) -> bool {
        !self.bullets().is_empty()
    }

    /// Count whitespace-delimited words in heading, paragraphs and bullets.
    pub fn word_count(&self) -> usize {
        let paragraphs: usize = self.paragraphs.iter().map(|p| count_words(p)).sum();
        let bullets: usize = self.bullets().iter().map(|b| count_words(b)).sum();
        count_words(&self.heading) + paragraphs + bullets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_without_bullets() {
        let section = Section::new("Key Benefits", vec!["One two.".into(), "Three.".into()]);
        assert!(!section.has_bullets());
        assert!(section.bullets().is_empty());
        assert_eq!(section.word_count(), 5);
    }

    #[test]
    fn test_empty_bullets_collapse_to_none() {
        let section = Section::new("Overview", vec!["a".into()]).with_bullets(Vec::new());
        assert!(section.bullet_points.is_none());
    }

    #[test]
    fn test_bullets_skipped_in_json_when_absent() {
        let section = Section::new("Overview", vec!["a".into()]);
        let json = serde_json::to_string(&section).unwrap();
        assert!(!json.contains("bullet_points"));
    }
}
