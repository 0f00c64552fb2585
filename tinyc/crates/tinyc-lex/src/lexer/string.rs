//! String literal lexing.
//!
//! Strings are delimited by matching `"` or `'` quotes. There are no escape
//! sequences: everything between the quotes is copied verbatim, newlines
//! included.

use crate::error::{LexError, LexResult};
use crate::stream::Lookahead;
use crate::token::{Token, TokenType};
use crate::Lexer;

impl<I: Iterator<Item = char>> Lexer<I> {
    /// Lexes a string literal.
    ///
    /// The opening quote decides which quote closes the literal; the other
    /// kind is ordinary content.
    ///
    /// # Returns
    ///
    /// `STRING` token whose text includes both quotes
    ///
    /// # Errors
    ///
    /// `UnterminatedString` when input ends before the closing quote
    pub fn lex_string(&mut self) -> LexResult<Token> {
        let quote = match self.stream.next() {
            Lookahead::Value(c @ ('"' | '\'')) => c,
            Lookahead::Value(c) => return Err(LexError::UnexpectedChar(c)),
            Lookahead::End | Lookahead::Exhausted => return Err(LexError::UnexpectedEnd),
        };

        let mut text = String::from(quote);

        loop {
            match self.stream.next() {
                Lookahead::Value(c) => {
                    text.push(c);
                    if c == quote {
                        return Ok(Token::new(TokenType::String, text));
                    }
                },
                Lookahead::End | Lookahead::Exhausted => {
                    return Err(LexError::UnterminatedString { literal: text });
                },
            }
        }
    }
}
