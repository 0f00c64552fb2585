//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and its dispatch loop.

use tracing::{debug, trace};

use crate::alphabet::{is_digit, is_letter, is_operator};
use crate::error::{LexError, LexResult};
use crate::stream::{Lookahead, PeekStream};
use crate::token::{Keywords, Token, TokenType};

/// Lexer for the tinyc language.
///
/// The lexer makes a single forward pass over a [`PeekStream`] of
/// characters. It skips whitespace and comments, then hands each token off
/// to one of the recognizers.
///
/// # Example
///
/// ```
/// use tinyc_lex::{Lexer, TokenType};
///
/// let mut lexer = Lexer::new("var x = 1".chars());
/// let token = lexer.next_token().unwrap().unwrap();
/// assert_eq!(token.token_type(), TokenType::Keyword);
/// assert_eq!(token.text(), "var");
/// ```
pub struct Lexer<I: Iterator<Item = char>> {
    /// Character stream for source traversal.
    pub stream: PeekStream<I>,

    /// Reserved words for identifier classification.
    keywords: Keywords,

    /// Type of the most recently emitted token.
    last_emitted: Option<TokenType>,

    /// Set once an error has been returned through `Iterator::next`.
    failed: bool,
}

impl<I: Iterator<Item = char>> Lexer<I> {
    /// Creates a new lexer using the standard keyword table.
    pub fn new<S>(source: S) -> Self
    where
        S: IntoIterator<Item = char, IntoIter = I>,
    {
        Self::with_keywords(source, Keywords::default())
    }

    /// Creates a new lexer that classifies identifiers against `keywords`.
    pub fn with_keywords<S>(source: S, keywords: Keywords) -> Self
    where
        S: IntoIterator<Item = char, IntoIter = I>,
    {
        Self {
            stream: PeekStream::new(source.into_iter()),
            keywords,
            last_emitted: None,
            failed: false,
        }
    }

    /// Returns the keyword table this lexer classifies against.
    pub fn keywords(&self) -> &Keywords {
        &self.keywords
    }

    /// Returns the next token from the source.
    ///
    /// Whitespace and comments before the token are skipped.
    ///
    /// # Returns
    /// `Ok(None)` at end of input, or the first lexical error encountered.
    pub fn next_token(&mut self) -> LexResult<Option<Token>> {
        while self.stream.has_next() {
            let c = match self.stream.next() {
                Lookahead::Value(c) => c,
                Lookahead::End | Lookahead::Exhausted => break,
            };
            let lookahead = self.stream.peek();

            let token = match c {
                ' ' | '\n' | '\r' => continue,
                '/' if lookahead == Lookahead::Value('/') => {
                    self.skip_line_comment();
                    continue;
                },
                '/' if lookahead == Lookahead::Value('*') => {
                    self.skip_block_comment()?;
                    continue;
                },
                '(' | ')' | '{' | '}' => Token::new(TokenType::Bracket, c),
                '"' | '\'' => {
                    self.stream.put_back();
                    self.lex_string()?
                },
                c if is_letter(c) => {
                    self.stream.put_back();
                    self.lex_identifier()
                },
                c if is_digit(c) => {
                    self.stream.put_back();
                    self.lex_number()?
                },
                // a sign directly before a digit belongs to the literal
                // unless it follows an operand
                '+' | '-' if lookahead.is_char(is_digit) && !self.follows_value() => {
                    self.stream.put_back();
                    self.lex_number()?
                },
                c if is_operator(c) => {
                    self.stream.put_back();
                    self.lex_operator()?
                },
                c => return Err(LexError::UnexpectedChar(c)),
            };

            trace!(%token, "emitted");
            self.last_emitted = Some(token.token_type());
            return Ok(Some(token));
        }

        Ok(None)
    }

    /// Runs the lexer to completion.
    ///
    /// # Returns
    /// Every token in source order, or the first lexical error. No partial
    /// result is returned on failure.
    pub fn analyse(mut self) -> LexResult<Vec<Token>> {
        debug!(keywords = self.keywords.len(), "lexical analysis started");
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        debug!(tokens = tokens.len(), "lexical analysis finished");
        Ok(tokens)
    }

    /// Whether the previous token can stand as an operand.
    fn follows_value(&self) -> bool {
        self.last_emitted.is_some_and(TokenType::is_value)
    }
}

impl<I: Iterator<Item = char>> Iterator for Lexer<I> {
    type Item = LexResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.next_token() {
            Ok(token) => token.map(Ok),
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            },
        }
    }
}
