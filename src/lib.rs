//! # blogforge
//!
//! Template-driven blog post synthesis for Rust.
//!
//! A topic is classified into one of four content categories, the category's
//! section template is filled with randomly chosen prose fragments, and the
//! resulting document can be exported as plain text, styled HTML, Markdown,
//! or JSON.
//!
//! ## Quick Start
//!
//! ```no_run
//! use blogforge::{generate, render};
//!
//! fn main() -> blogforge::Result<()> {
//!     let doc = generate("Machine Learning")?;
//!
//!     let options = render::RenderOptions::default();
//!     let markdown = render::to_markdown(&doc, &options)?;
//!     println!("{}", markdown);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Category templates**: technology, business, health, lifestyle
//! - **Injected randomness**: pass any `rand::Rng`, or a seed for reproducible posts
//! - **Multiple output formats**: plain text, HTML, Markdown, JSON
//! - **Legacy restyling**: turn flattened text back into a styled HTML page
//! - **Simulated latency**: `async` feature adds a delayed generation helper

pub mod error;
pub mod export;
pub mod model;
pub mod render;
pub mod synth;

// Re-export commonly used types
pub use error::{Error, Result};
pub use export::{ExportFormat, ExportOptions, Exported};
pub use model::{Category, CategoryTemplate, Document, DocumentStats, Section};
pub use render::{JsonFormat, RenderOptions};
pub use synth::{SynthOptions, Synthesizer, Tone};

use rand::Rng;

/// Generate a blog post for a topic with default options.
///
/// The topic is trimmed; empty or whitespace-only topics are rejected.
///
/// # Example
///
/// ```no_run
/// use blogforge::generate;
///
/// let doc = generate("Healthy Eating").unwrap();
/// println!("{} words", doc.word_count());
/// ```
pub fn generate(topic: &str) -> Result<Document> {
    generate_with_options(topic, SynthOptions::default())
}

/// Generate a blog post with custom options.
///
/// # Example
///
/// ```no_run
/// use blogforge::{generate_with_options, SynthOptions};
///
/// let options = SynthOptions::new().with_word_count(1000).with_seed(42);
/// let doc = generate_with_options("Startup Funding", options).unwrap();
/// ```
pub fn generate_with_options(topic: &str, options: SynthOptions) -> Result<Document> {
    let topic = synth::validate_topic(topic)?;
    options.validate()?;
    Ok(Synthesizer::with_options(options).synthesize(topic))
}

/// Synthesize a document without validating the topic.
///
/// Callers are expected to reject empty topics first; see
/// [`synth::validate_topic`].
pub fn synthesize(topic: &str, target_word_count: u32) -> Document {
    let options = SynthOptions::new().with_word_count(target_word_count);
    Synthesizer::with_options(options).synthesize(topic)
}

/// Synthesize a document drawing all random choices from `rng`.
pub fn synthesize_with_rng<R: Rng + ?Sized>(
    topic: &str,
    target_word_count: u32,
    rng: &mut R,
) -> Document {
    let options = SynthOptions::new().with_word_count(target_word_count);
    Synthesizer::with_options(options).synthesize_with_rng(topic, rng)
}

/// Wait for `delay`, then synthesize.
///
/// Mimics the latency of a remote generation service. The wait can be
/// cancelled by dropping the future; synthesis itself runs to completion.
#[cfg(feature = "async")]
pub async fn synthesize_delayed(
    topic: &str,
    options: SynthOptions,
    delay: std::time::Duration,
) -> Document {
    log::debug!("Simulating {} ms of generation latency", delay.as_millis());
    tokio::time::sleep(delay).await;
    Synthesizer::with_options(options).synthesize(topic)
}

/// Builder for generating and rendering blog posts.
///
/// # Example
///
/// ```no_run
/// use blogforge::Blogforge;
///
/// let markdown = Blogforge::new()
///     .with_word_count(750)
///     .with_seed(7)
///     .with_frontmatter()
///     .generate("Cloud Computing")?
///     .to_markdown()?;
/// # Ok::<(), blogforge::Error>(())
/// ```
pub struct Blogforge {
    synth_options: SynthOptions,
    export_options: ExportOptions,
}

impl Blogforge {
    /// Create a new Blogforge builder.
    pub fn new() -> Self {
        Self {
            synth_options: SynthOptions::default(),
            export_options: ExportOptions::default(),
        }
    }

    /// Set the target word count.
    pub fn with_word_count(mut self, words: u32) -> Self {
        self.synth_options = self.synth_options.with_word_count(words);
        self
    }

    /// Set the requested tone.
    pub fn with_tone(mut self, tone: Tone) -> Self {
        self.synth_options = self.synth_options.with_tone(tone);
        self
    }

    /// Seed the random generator for reproducible output.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.synth_options = self.synth_options.with_seed(seed);
        self
    }

    /// Enable frontmatter in Markdown output.
    pub fn with_frontmatter(mut self) -> Self {
        self.export_options.render = self.export_options.render.with_frontmatter(true);
        self
    }

    /// Replace the rendering options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.export_options.render = options;
        self
    }

    /// Set the JSON layout.
    pub fn with_json_format(mut self, format: JsonFormat) -> Self {
        self.export_options.json_format = format;
        self
    }

    /// Generate a post for `topic` and return a result wrapper.
    pub fn generate(self, topic: &str) -> Result<BlogforgeResult> {
        let document = generate_with_options(topic, self.synth_options)?;
        Ok(BlogforgeResult {
            document,
            export_options: self.export_options,
        })
    }
}

impl Default for Blogforge {
    fn default() -> Self {
        Self::new()
    }
}

/// Result wrapper carrying a generated document and its export options.
pub struct BlogforgeResult {
    document: Document,
    export_options: ExportOptions,
}

impl BlogforgeResult {
    /// Get the generated document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Take ownership of the generated document.
    pub fn into_document(self) -> Document {
        self.document
    }

    /// Render as plain text.
    pub fn to_text(&self) -> Result<String> {
        render::to_text(&self.document, &self.export_options.render)
    }

    /// Render as a styled HTML page.
    pub fn to_html(&self) -> Result<String> {
        render::to_html(&self.document, &self.export_options.render)
    }

    /// Render as Markdown.
    pub fn to_markdown(&self) -> Result<String> {
        render::to_markdown(&self.document, &self.export_options.render)
    }

    /// Render as JSON.
    pub fn to_json(&self) -> Result<String> {
        render::to_json(&self.document, self.export_options.json_format)
    }

    /// Render in `format` with a filename derived from the title.
    pub fn export(&self, format: ExportFormat) -> Result<Exported> {
        export::export(&self.document, format, &self.export_options)
    }
}
