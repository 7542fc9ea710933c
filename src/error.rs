//! Error types for the lexiko library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`LexikoError`] enum. Variants are grouped by pipeline stage so the CLI
//! can report which stage failed.
//!
//! # Examples
//!
//! ```
//! use lexiko::error::{LexikoError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LexikoError::corpus("unreadable corpus line"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for lexiko operations.
///
/// Uses the `thiserror` crate for the `Error` trait implementation and
/// provides constructor methods for the common cases.
#[derive(Error, Debug)]
pub enum LexikoError {
    /// I/O errors (reading the corpus, writing outputs).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Corpus parsing errors.
    #[error("Corpus error: {0}")]
    Corpus(String),

    /// Inflection aggregation errors.
    #[error("Aggregation error: {0}")]
    Aggregation(String),

    /// Stem/class inference errors.
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Lexicon emission errors.
    #[error("Lexicon error: {0}")]
    Lexicon(String),

    /// Lexc splicing errors (missing insertion marker, unknown category).
    #[error("Lexc error: {0}")]
    Lexc(String),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error.
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with LexikoError.
pub type Result<T> = std::result::Result<T, LexikoError>;

impl LexikoError {
    /// Create a new corpus error.
    pub fn corpus<S: Into<String>>(msg: S) -> Self {
        LexikoError::Corpus(msg.into())
    }

    /// Create a new aggregation error.
    pub fn aggregation<S: Into<String>>(msg: S) -> Self {
        LexikoError::Aggregation(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        LexikoError::Analysis(msg.into())
    }

    /// Create a new lexicon error.
    pub fn lexicon<S: Into<String>>(msg: S) -> Self {
        LexikoError::Lexicon(msg.into())
    }

    /// Create a new lexc error.
    pub fn lexc<S: Into<String>>(msg: S) -> Self {
        LexikoError::Lexc(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LexikoError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        LexikoError::Other(format!("Invalid argument: {}", msg.into()))
    }

    /// Create a new not found error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        LexikoError::Other(format!("Not found: {}", msg.into()))
    }
}
