//! Common types and utilities for tinyt commands.
//!
//! This module provides shared helpers and message constants used by the
//! command implementations to keep their output consistent.

use std::path::{Path, PathBuf};

use tinyc_lex::{Keywords, Token};
use tracing::debug;

use crate::error::{Result, TinytError};

// ============================================================================
// Input Validation
// ============================================================================

/// Ensure at least one input file was given.
pub fn validate_input_files(input: &[PathBuf]) -> Result<()> {
    if input.is_empty() {
        return Err(TinytError::Validation(
            error_messages::NO_INPUT_FILES.to_string(),
        ));
    }
    Ok(())
}

/// Ensure an input path exists and is a regular file.
pub fn validate_input_file(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(TinytError::Validation(format!(
            "{} {}",
            error_messages::INPUT_PATH_NOT_EXIST,
            path.display()
        )));
    }
    if !path.is_file() {
        return Err(TinytError::Validation(format!(
            "{} {}",
            error_messages::INPUT_PATH_NOT_FILE,
            path.display()
        )));
    }
    Ok(())
}

// ============================================================================
// Lexing
// ============================================================================

/// Validate and tokenize one source file.
///
/// # Errors
/// `Validation` for a missing or non-file path, `Lex` for any lexical or
/// read error.
pub fn lex_file(path: &Path, keywords: &Keywords) -> Result<Vec<Token>> {
    validate_input_file(path)?;

    let tokens =
        tinyc_lex::from_file_with(path, keywords.clone()).map_err(|source| TinytError::Lex {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(path = %path.display(), tokens = tokens.len(), "file analysed");
    Ok(tokens)
}

/// Report a per-file failure on stderr.
pub fn report_file_error(path: &Path, error: &TinytError) {
    match error {
        // already prefixed with the path
        TinytError::Lex { .. } => eprintln!("{} {}", output_messages::ERROR, error),
        _ => eprintln!("{} {}: {}", output_messages::ERROR, path.display(), error),
    }
}

/// Turn a failure count into the command result.
pub fn check_for_failures(files_failed: usize) -> Result<()> {
    if files_failed > 0 {
        return Err(TinytError::FilesFailed(files_failed));
    }
    Ok(())
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message templates.
pub mod error_messages {
    /// Error when no input files are specified.
    pub const NO_INPUT_FILES: &str = "No input files specified";

    /// Error when input path does not exist.
    pub const INPUT_PATH_NOT_EXIST: &str = "Input path does not exist:";

    /// Error when input path is not a file.
    pub const INPUT_PATH_NOT_FILE: &str = "Input path is not a file:";
}

// ============================================================================
// Output Messages
// ============================================================================

/// Standard output message templates.
pub mod output_messages {
    /// Prefix for per-file errors.
    pub const ERROR: &str = "❌";

    /// Prefix for a file that passed.
    pub const OK: &str = "✅";

    /// Prefix for summary lines.
    pub const SUMMARY: &str = "📊";
}
