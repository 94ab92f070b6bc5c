//! Topic input handling: validation, normalization and statistics.

use crate::error::{Error, Result};
use unicode_normalization::UnicodeNormalization;

/// Example topics offered as quick picks.
pub const POPULAR_TOPICS: [&str; 6] = [
    "Digital Marketing",
    "Web Development",
    "AI Technology",
    "Productivity Tips",
    "Health & Wellness",
    "Sustainable Living",
];

/// Validate a raw topic, returning it trimmed.
///
/// Empty and whitespace-only topics are rejected before synthesis.
pub fn validate_topic(topic: &str) -> Result<&str> {
    let trimmed = topic.trim();
    if trimmed.is_empty() {
        return Err(Error::EmptyTopic);
    }
    Ok(trimmed)
}

/// Normalize a topic for display.
///
/// Applies NFC, trims, collapses whitespace runs and capitalizes each word
/// (first character upper-cased, the rest lower-cased).
pub fn format_topic(topic: &str) -> String {
    let normalized: String = topic.nfc().collect();
    normalized
        .split_whitespace()
        .map(capitalize_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Character and word counts of a topic as typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopicStats {
    /// Number of characters, including whitespace
    pub chars: usize,

    /// Number of whitespace-separated words
    pub words: usize,
}

impl TopicStats {
    /// Measure a topic string.
    pub fn of(topic: &str) -> Self {
        Self {
            chars: topic.chars().count(),
            words: topic.split_whitespace().count(),
        }
    }
}

impl std::fmt::Display for TopicStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} characters • {} words", self.chars, self.words)
    }
}
