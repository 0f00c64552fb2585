//! Error types for tinyc-lex.
//!
//! Every lexical error is fatal: the first one aborts the analysis and no
//! partial token list is returned.

use std::path::PathBuf;

use thiserror::Error;

/// Why a numeric literal was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NumberFault {
    /// A `+` or `-` not followed by a digit or `.`.
    #[error("sign must be followed by a digit or '.'")]
    DanglingSign,

    /// A decimal point not followed by a digit.
    #[error("decimal point must be followed by a digit")]
    MissingFractionDigits,

    /// More than one decimal point.
    #[error("second decimal point")]
    SecondDecimalPoint,
}

/// Error type for lexical analysis.
#[derive(Debug, Error)]
pub enum LexError {
    /// A `/*` comment that never reaches `*/`.
    #[error("comment not matched: unterminated block comment")]
    UnterminatedComment,

    /// End of input before the closing quote.
    #[error("unterminated string literal: {literal}")]
    UnterminatedString {
        /// The literal read so far, opening quote included.
        literal: String,
    },

    /// A numeric literal that breaks the number automaton.
    #[error("malformed number literal '{literal}': {fault}")]
    MalformedNumber {
        /// The characters consumed before the fault.
        literal: String,
        /// Which rule was broken.
        fault: NumberFault,
    },

    /// A character no rule accepts.
    #[error("unexpected character '{0}'")]
    UnexpectedChar(char),

    /// A recognizer was started with no input left.
    #[error("unexpected end of input")]
    UnexpectedEnd,

    /// The source file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// The file that was requested.
        path: PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for lexing operations.
pub type LexResult<T> = std::result::Result<T, LexError>;
