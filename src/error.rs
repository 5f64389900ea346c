//! Error types for the faqrank library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`FaqRankError`] enum.
//!
//! # Examples
//!
//! ```
//! use faqrank::error::{FaqRankError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(FaqRankError::corpus("corpus file is empty"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for faqrank operations.
#[derive(Error, Debug)]
pub enum FaqRankError {
    /// I/O errors (corpus file access, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Corpus-related errors (loading, malformed entries)
    #[error("Corpus error: {0}")]
    Corpus(String),

    /// Index-related errors
    #[error("Index error: {0}")]
    Index(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with FaqRankError.
pub type Result<T> = std::result::Result<T, FaqRankError>;

impl FaqRankError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        FaqRankError::Analysis(msg.into())
    }

    /// Create a new corpus error.
    pub fn corpus<S: Into<String>>(msg: S) -> Self {
        FaqRankError::Corpus(msg.into())
    }

    /// Create a new index error.
    pub fn index<S: Into<String>>(msg: S) -> Self {
        FaqRankError::Index(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        FaqRankError::InvalidConfig(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        FaqRankError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = FaqRankError::analysis("Test analysis error");
        assert_eq!(error.to_string(), "Analysis error: Test analysis error");

        let error = FaqRankError::corpus("Test corpus error");
        assert_eq!(error.to_string(), "Corpus error: Test corpus error");

        let error = FaqRankError::invalid_config("b out of range");
        assert_eq!(error.to_string(), "Invalid configuration: b out of range");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let faqrank_error = FaqRankError::from(io_error);

        match faqrank_error {
            FaqRankError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
