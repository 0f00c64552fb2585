//! Operator lexing.
//!
//! Every operator is one or two characters long. The first character selects
//! an [`OperatorState`]; exactly one more character is read to decide
//! whether it extends the operator. If it does not, it is put back.

use crate::error::{LexError, LexResult};
use crate::stream::Lookahead;
use crate::token::{Token, TokenType};
use crate::Lexer;

/// State entered after the first character of an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OperatorState {
    Plus,
    Minus,
    Star,
    Slash,
    Greater,
    Less,
    Assign,
    Bang,
    Ampersand,
    Pipe,
    Caret,
    Percent,
}

impl OperatorState {
    fn from_char(c: char) -> Option<Self> {
        let state = match c {
            '+' => Self::Plus,
            '-' => Self::Minus,
            '*' => Self::Star,
            '/' => Self::Slash,
            '>' => Self::Greater,
            '<' => Self::Less,
            '=' => Self::Assign,
            '!' => Self::Bang,
            '&' => Self::Ampersand,
            '|' => Self::Pipe,
            '^' => Self::Caret,
            '%' => Self::Percent,
            _ => return None,
        };
        Some(state)
    }

    /// The operator when the next character does not extend it.
    fn single(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Greater => ">",
            Self::Less => "<",
            Self::Assign => "=",
            Self::Bang => "!",
            Self::Ampersand => "&",
            Self::Pipe => "|",
            Self::Caret => "^",
            Self::Percent => "%",
        }
    }

    /// The two-character operator formed with `next`, if any.
    fn extend(self, next: char) -> Option<&'static str> {
        let op = match (self, next) {
            (Self::Plus, '+') => "++",
            (Self::Plus, '=') => "+=",
            (Self::Minus, '-') => "--",
            (Self::Minus, '=') => "-=",
            (Self::Star, '=') => "*=",
            (Self::Slash, '=') => "/=",
            (Self::Greater, '=') => ">=",
            (Self::Greater, '>') => ">>",
            (Self::Less, '=') => "<=",
            (Self::Less, '<') => "<<",
            (Self::Assign, '=') => "==",
            (Self::Bang, '=') => "!=",
            (Self::Ampersand, '&') => "&&",
            (Self::Ampersand, '=') => "&=",
            (Self::Pipe, '|') => "||",
            (Self::Pipe, '=') => "|=",
            (Self::Caret, '^') => "^^",
            (Self::Caret, '=') => "^=",
            (Self::Percent, '=') => "%=",
            _ => return None,
        };
        Some(op)
    }
}

impl<I: Iterator<Item = char>> Lexer<I> {
    /// Lexes an operator or separator.
    ///
    /// Handles: `+ ++ +=`, `- -- -=`, `* *=`, `/ /=`, `> >= >>`,
    /// `< <= <<`, `= ==`, `! !=`, `& && &=`, `| || |=`, `^ ^^ ^=`,
    /// `% %=`, and the separators `,` `;`
    ///
    /// Longer combinations such as `<<=` are not operators; the shorter
    /// form is returned and the rest is left for the next token.
    pub fn lex_operator(&mut self) -> LexResult<Token> {
        let state = match self.stream.next() {
            Lookahead::Value(c @ (',' | ';')) => return Ok(Token::new(TokenType::Operator, c)),
            Lookahead::Value(c) => OperatorState::from_char(c).ok_or(LexError::UnexpectedChar(c))?,
            Lookahead::End | Lookahead::Exhausted => return Err(LexError::UnexpectedEnd),
        };

        let text = match self.stream.next().value().and_then(|c| state.extend(c)) {
            Some(op) => op,
            None => {
                self.stream.put_back();
                state.single()
            },
        };

        Ok(Token::new(TokenType::Operator, text))
    }
}
