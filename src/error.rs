//! Error types for the textprep library.
//!
//! All errors are represented by the [`TextprepError`] enum. Preprocessing steps
//! only fail while they are being constructed (an invalid regex, an unreadable
//! word list, a malformed pipeline config); applying a built step to a document
//! never fails.
//!
//! # Examples
//!
//! ```
//! use textprep::error::{TextprepError, Result};
//!
//! fn build_step() -> Result<()> {
//!     Err(TextprepError::config("missing substitution"))
//! }
//!
//! match build_step() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for textprep operations.
#[derive(Error, Debug)]
pub enum TextprepError {
    /// I/O errors (reading input files, writing output)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Invalid step or pipeline configuration (bad regex, bad parameters)
    #[error("Configuration error: {0}")]
    Config(String),

    /// A resource file (stopwords, synonyms, collocations) could not be loaded
    #[error("Resource error: {0}")]
    Resource(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with TextprepError.
pub type Result<T> = std::result::Result<T, TextprepError>;

impl TextprepError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        TextprepError::Config(msg.into())
    }

    /// Create a new resource error.
    pub fn resource<S: Into<String>>(msg: S) -> Self {
        TextprepError::Resource(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        TextprepError::Other(msg.into())
    }
}

impl From<regex::Error> for TextprepError {
    fn from(err: regex::Error) -> Self {
        TextprepError::Config(format!("Invalid regex pattern: {err}"))
    }
}
