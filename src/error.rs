//! Error types for the Javelin library.
//!
//! All errors are represented by the [`JavelinError`] enum, which provides
//! detailed information about what went wrong.
//!
//! # Examples
//!
//! ```
//! use javelin::error::{JavelinError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(JavelinError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {e}"),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Javelin operations.
#[derive(Error, Debug)]
pub enum JavelinError {
    /// I/O errors (document files, CLI input, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Expansion-related errors (vectorization, scoring, reordering)
    #[error("Expansion error: {0}")]
    Expansion(String),

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

/// Result type alias for operations that may fail with JavelinError.
pub type Result<T> = std::result::Result<T, JavelinError>;

impl JavelinError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        JavelinError::Analysis(msg.into())
    }

    /// Create a new expansion error.
    pub fn expansion<S: Into<String>>(msg: S) -> Self {
        JavelinError::Expansion(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        JavelinError::Other(format!("Invalid argument: {}", msg.into()))
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        JavelinError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = JavelinError::analysis("Test analysis error");
        assert_eq!(error.to_string(), "Analysis error: Test analysis error");

        let error = JavelinError::expansion("Test expansion error");
        assert_eq!(error.to_string(), "Expansion error: Test expansion error");

        let error = JavelinError::invalid_argument("bad input");
        assert_eq!(error.to_string(), "Error: Invalid argument: bad input");

        let error = JavelinError::other("Test other error");
        assert_eq!(error.to_string(), "Error: Test other error");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error: JavelinError = io_error.into();
        assert!(error.to_string().contains("I/O error"));
    }
}
