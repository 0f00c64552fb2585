//! Identifier and keyword lexing.

use crate::alphabet::is_literal;
use crate::stream::Lookahead;
use crate::token::Token;
use crate::Lexer;

impl<I: Iterator<Item = char>> Lexer<I> {
    /// Lexes an identifier, keyword or boolean literal.
    ///
    /// Consumes identifier characters for as long as `peek` yields one; the
    /// first other character stays in the stream. The scanned word is then
    /// checked against the keyword table, then against `true`/`false`.
    ///
    /// # Returns
    ///
    /// A `KEYWORD`, `BOOLEAN` or `VARIABLE` token
    pub fn lex_identifier(&mut self) -> Token {
        let mut text = String::new();

        while let Lookahead::Value(c) = self.stream.peek() {
            if !is_literal(c) {
                break;
            }
            text.push(c);
            self.stream.next();
        }

        let token_type = self.keywords().classify(&text);
        Token::new(token_type, text)
    }
}
