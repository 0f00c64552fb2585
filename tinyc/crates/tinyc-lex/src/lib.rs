//! tinyc-lex - Lexical Analyzer for the tinyc Language
//!
//! This crate provides the lexer (tokenizer) for tinyc, a small C-like
//! language. It transforms source text into a flat list of typed tokens
//! for a later parser to consume.
//!
//! # Example Usage
//!
//! ```
//! use tinyc_lex::{analyse, Lexer, Token, TokenType};
//!
//! let tokens = analyse("var x = -1".chars()).unwrap();
//! assert_eq!(tokens[0], Token::new(TokenType::Keyword, "var"));
//! assert_eq!(tokens[3], Token::new(TokenType::Integer, "-1"));
//!
//! // Or get tokens one at a time
//! let mut lexer = Lexer::new("a <= b".chars());
//! assert_eq!(lexer.next_token().unwrap().unwrap().text(), "a");
//! assert_eq!(lexer.next_token().unwrap().unwrap().text(), "<=");
//! ```
//!
//! # Module Structure
//!
//! - [`stream`] - Peekable character stream with bounded put-back
//! - [`alphabet`] - Character classification
//! - [`token`] - Token and keyword table definitions
//! - [`lexer`] - Main lexer and the per-class recognizers
//! - [`error`] - Lexical errors
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! `var`, `if`, `else`, `for`, `while`, `break`, `func`, `return`, `int`,
//! `float`, `bool`, `void`, `string`
//!
//! ## Literals
//!
//! - **Integer**: `42`, `007`, `-3`
//! - **Float**: `3.14`, `.5`, `-2.5`
//! - **String**: `"hello"`, `'world'` (no escapes, quotes kept)
//! - **Boolean**: `true`, `false`
//!
//! ## Operators
//!
//! - **Arithmetic**: `+`, `-`, `*`, `/`, `%`, `++`, `--`
//! - **Comparison**: `==`, `!=`, `<`, `>`, `<=`, `>=`
//! - **Logical**: `&&`, `||`, `!`, `^^`
//! - **Assignment**: `=`, `+=`, `-=`, `*=`, `/=`, `%=`, `&=`, `|=`, `^=`
//! - **Bitwise**: `&`, `|`, `^`, `<<`, `>>`
//! - **Separator**: `,`
//!
//! ## Brackets
//!
//! `(`, `)`, `{`, `}`

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

use std::fs;
use std::path::Path;

use tracing::debug;

pub mod alphabet;
pub mod error;
pub mod lexer;
pub mod stream;
pub mod token;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use error::{LexError, LexResult, NumberFault};
pub use lexer::Lexer;
pub use stream::{Lookahead, PeekStream, CACHE_SIZE};
pub use token::{Keywords, Token, TokenType, KEYWORDS};

/// Tokenizes a whole character source with the standard keyword table.
///
/// # Errors
/// Returns the first lexical error; no partial token list is produced.
pub fn analyse<S: IntoIterator<Item = char>>(source: S) -> LexResult<Vec<Token>> {
    Lexer::new(source).analyse()
}

/// Tokenizes a whole character source against a custom keyword table.
pub fn analyse_with<S: IntoIterator<Item = char>>(
    source: S,
    keywords: Keywords,
) -> LexResult<Vec<Token>> {
    Lexer::with_keywords(source, keywords).analyse()
}

/// Reads a UTF-8 source file and tokenizes it.
///
/// # Errors
/// `LexError::Read` if the file cannot be read, otherwise any lexical error.
pub fn from_file(path: impl AsRef<Path>) -> LexResult<Vec<Token>> {
    from_file_with(path, Keywords::default())
}

/// Reads a UTF-8 source file and tokenizes it against `keywords`.
pub fn from_file_with(path: impl AsRef<Path>, keywords: Keywords) -> LexResult<Vec<Token>> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading source");

    let source = fs::read_to_string(path).map_err(|source| LexError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    analyse_with(source.chars(), keywords)
}
