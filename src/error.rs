//! Error types for blogforge library.

use std::io;
use thiserror::Error;

/// Result type alias for blogforge operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while preparing input or exporting documents.
///
/// Synthesis itself never fails; every variant here belongs to the input
/// surface or to the export surface around it.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when writing exported files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The topic was empty or contained only whitespace.
    #[error("Please enter a topic or keyword")]
    EmptyTopic,

    /// The target word count must be positive.
    #[error("Invalid target word count: {0} (must be greater than zero)")]
    InvalidWordCount(u32),

    /// An export format name was not recognized.
    #[error("Unknown export format: {0}")]
    UnknownFormat(String),

    /// Error during rendering (text, Markdown, HTML, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Render(format!("JSON serialization error: {}", err))
    }
}
