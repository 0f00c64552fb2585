//! Error handling module for the tinyt CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the tinyt CLI application.
#[derive(Error, Debug)]
pub enum TinytError {
    /// Error when the configuration cannot be found or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when a source file fails lexical analysis.
    #[error("{}: {source}", path.display())]
    Lex {
        /// File being analysed.
        path: PathBuf,
        /// Underlying lexical error.
        #[source]
        source: tinyc_lex::LexError,
    },

    /// Error when one or more files of a batch failed.
    #[error("{0} file(s) failed lexical analysis")]
    FilesFailed(usize),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using TinytError.
pub type Result<T> = std::result::Result<T, TinytError>;
