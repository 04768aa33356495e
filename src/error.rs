//! Error types for the lexis-spell library.
//!
//! All errors are represented by the [`SpellError`] enum. The correction
//! algorithm itself is total and returns plain values; errors only arise at
//! the boundaries (reading a corpus, compiling a tokenizer pattern).

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for lexis-spell operations.
#[derive(Error, Debug)]
pub enum SpellError {
    /// I/O errors (reading a corpus source, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization, invalid patterns, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with SpellError.
pub type Result<T> = std::result::Result<T, SpellError>;

impl SpellError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        SpellError::Analysis(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        SpellError::Other(msg.into())
    }
}
