//! Comment skipping.
//!
//! Both helpers are entered with the leading `/` already consumed and the
//! second comment character still in the stream.

use crate::error::{LexError, LexResult};
use crate::stream::Lookahead;
use crate::Lexer;

impl<I: Iterator<Item = char>> Lexer<I> {
    /// Skips a line comment up to, but not including, the newline.
    pub fn skip_line_comment(&mut self) {
        while self.stream.peek().is_char(|c| c != '\n') {
            self.stream.next();
        }
    }

    /// Skips a block comment through the first `*/`.
    ///
    /// The search starts at the `*` of the opening `/*`, so `/*/` is a
    /// complete comment. Block comments do not nest.
    pub fn skip_block_comment(&mut self) -> LexResult<()> {
        loop {
            match self.stream.next() {
                Lookahead::Value('*') => {
                    if self.stream.peek() == Lookahead::Value('/') {
                        self.stream.next();
                        return Ok(());
                    }
                },
                Lookahead::Value(_) => {},
                Lookahead::End | Lookahead::Exhausted => {
                    return Err(LexError::UnterminatedComment);
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Lexer, LexError, Token, TokenType};

    fn lex_all(source: &str) -> Result<Vec<Token>, LexError> {
        Lexer::new(source.chars()).analyse()
    }

    fn var(text: &str) -> Token {
        Token::new(TokenType::Variable, text)
    }

    #[test]
    fn test_skip_line_comment() {
        assert_eq!(lex_all("// comment\nhello").unwrap(), vec![var("hello")]);
    }

    #[test]
    fn test_line_comment_at_end() {
        assert_eq!(lex_all("a // trailing").unwrap(), vec![var("a")]);
    }

    #[test]
    fn test_skip_block_comment() {
        assert_eq!(lex_all("/* comment */hello").unwrap(), vec![var("hello")]);
    }

    #[test]
    fn test_multiline_block_comment() {
        assert_eq!(
            lex_all("a /* one\n * two\n */ b").unwrap(),
            vec![var("a"), var("b")]
        );
    }

    #[test]
    fn test_block_comment_with_stars() {
        assert_eq!(lex_all("/*** x ***/y").unwrap(), vec![var("y")]);
    }

    #[test]
    fn test_block_comments_do_not_nest() {
        let tokens = lex_all("/* outer /* inner */ x").unwrap();
        assert_eq!(tokens, vec![var("x")]);
    }

    #[test]
    fn test_unterminated_block_comment() {
        assert!(matches!(
            lex_all("/* never closed"),
            Err(LexError::UnterminatedComment)
        ));
        assert!(matches!(lex_all("/*"), Err(LexError::UnterminatedComment)));
        assert!(matches!(lex_all("/**"), Err(LexError::UnterminatedComment)));
    }

    #[test]
    fn test_opening_star_can_close() {
        assert_eq!(lex_all("a /*/ b").unwrap(), vec![var("a"), var("b")]);
        assert!(lex_all("/**/").unwrap().is_empty());
    }

    #[test]
    fn test_slash_alone_is_operator() {
        assert_eq!(
            lex_all("a/b").unwrap(),
            vec![var("a"), Token::new(TokenType::Operator, "/"), var("b")]
        );
    }

    #[test]
    fn test_comments_only() {
        assert!(lex_all("// comment\n/* block */\n// another").unwrap().is_empty());
    }
}
