//! Synthesis options and configuration.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Target word count used when none is given.
pub const DEFAULT_WORD_COUNT: u32 = 500;

/// Word-count presets offered to users, with their labels.
pub const WORD_COUNT_PRESETS: [(u32, &str); 4] = [
    (300, "Quick Read"),
    (500, "Standard"),
    (750, "Detailed"),
    (1000, "Comprehensive"),
];

/// Options for synthesizing a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthOptions {
    /// Sizing hint for section and paragraph budgets (must be > 0)
    pub target_word_count: u32,

    /// Writing tone (reserved; recorded but not used by the templates)
    pub tone: Option<Tone>,

    /// Whether to include an introduction (reserved; always included)
    pub include_intro: bool,

    /// Whether to include a conclusion (reserved; always included)
    pub include_conclusion: bool,

    /// Seed for reproducible fragment selection
    pub seed: Option<u64>,
}

impl SynthOptions {
    /// Create new synthesis options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target word count.
    pub fn with_word_count(mut self, words: u32) -> Self {
        self.target_word_count = words;
        self
    }

    /// Set the writing tone.
    pub fn with_tone(mut self, tone: Tone) -> Self {
        self.tone = Some(tone);
        self
    }

    /// Set whether an introduction is requested.
    pub fn with_intro(mut self, include: bool) -> Self {
        self.include_intro = include;
        self
    }

    /// Set whether a conclusion is requested.
    pub fn with_conclusion(mut self, include: bool) -> Self {
        self.include_conclusion = include;
        self
    }

    /// Seed the random source so output is reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check that the options describe a valid request.
    pub fn validate(&self) -> Result<()> {
        if self.target_word_count == 0 {
            return Err(Error::InvalidWordCount(self.target_word_count));
        }
        Ok(())
    }
}

impl Default for SynthOptions {
    fn default() -> Self {
        Self {
            target_word_count: DEFAULT_WORD_COUNT,
            tone: None,
            include_intro: true,
            include_conclusion: true,
            seed: None,
        }
    }
}

/// Writing tone requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// Formal, business-like
    Professional,
    /// Relaxed
    Casual,
    /// Scholarly
    Academic,
    /// Chatty, second person
    Conversational,
}

impl FromStr for Tone {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "professional" => Ok(Tone::Professional),
            "casual" => Ok(Tone::Casual),
            "academic" => Ok(Tone::Academic),
            "conversational" => Ok(Tone::Conversational),
            _ => Err(Error::Other(format!("Unknown tone: {}", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synth_options_builder() {
        let options = SynthOptions::new()
            .with_word_count(750)
            .with_tone(Tone::Casual)
            .with_seed(42);

        assert_eq!(options.target_word_count, 750);
        assert_eq!(options.tone, Some(Tone::Casual));
        assert_eq!(options.seed, Some(42));
        assert!(options.include_intro);
        assert!(options.include_conclusion);
    }

    #[test]
    fn test_default_word_count() {
        assert_eq!(SynthOptions::default().target_word_count, 500);
        assert!(SynthOptions::default().validate().is_ok());
    }

    #[test]
    fn test_zero_word_count_rejected() {
        let result = SynthOptions::new().with_word_count(0).validate();
        assert!(matches!(result, Err(Error::InvalidWordCount(0))));
    }

    #[test]
    fn test_tone_parse() {
        assert_eq!("ACADEMIC".parse::<Tone>().unwrap(), Tone::Academic);
        assert!("sarcastic".parse::<Tone>().is_err());
    }
}
