//! Content synthesis.
//!
//! Classifies a topic, picks the category template, fills in random
//! fragments and counts the words of the assembled document.

mod classify;
mod fragments;
mod options;
mod synthesizer;
mod topic;

pub use classify::{classify, matched_keyword};
pub use options::{SynthOptions, Tone, DEFAULT_WORD_COUNT, WORD_COUNT_PRESETS};
pub use synthesizer::{paragraphs_for_budget, section_budget, title_case, Synthesizer};
pub use topic::{format_topic, validate_topic, TopicStats, POPULAR_TOPICS};

use rand::Rng;
use std::time::Duration;

/// Minimum simulated generation latency.
const LATENCY_BASE_MS: u64 = 2000;

/// Extra random latency on top of the base.
const LATENCY_JITTER_MS: u64 = 2000;

/// Draw a simulated generation latency between two and four seconds.
pub fn simulated_latency<R: Rng + ?Sized>(rng: &mut R) -> Duration {
    Duration::from_millis(LATENCY_BASE_MS + rng.gen_range(0..LATENCY_JITTER_MS))
}
