//! Number literal lexing.
//!
//! This module handles integer and floating-point literals with an optional
//! leading sign. The literal text is kept as written; conversion to a numeric
//! value is left to later phases.

use crate::alphabet::is_digit;
use crate::error::{LexError, LexResult, NumberFault};
use crate::stream::Lookahead;
use crate::token::{Token, TokenType};
use crate::Lexer;

/// States of the number automaton.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumberState {
    /// Nothing consumed yet.
    Start,
    /// One or more leading zeros.
    LeadingZero,
    /// Integer digits, not all zeros.
    Digits,
    /// A `+` or `-` with nothing after it yet.
    Sign,
    /// A decimal point awaiting its first fraction digit.
    Point,
    /// Digits after the decimal point.
    Fraction,
}

/// Outcome of feeding one lookahead character to the automaton.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transition {
    /// Consume the character and move to the given state.
    Shift(NumberState),
    /// Leave the character in the stream; the literal is complete.
    Accept(TokenType),
    /// The literal is malformed.
    Reject(NumberFault),
    /// The first character cannot start a number.
    NotANumber,
}

impl NumberState {
    fn step(self, lookahead: Lookahead<char>) -> Transition {
        use NumberState::*;
        use Transition::*;

        let c = lookahead.value();
        let digit = c.is_some_and(is_digit);

        match self {
            Start => match c {
                Some('0') => Shift(LeadingZero),
                Some('+' | '-') => Shift(Sign),
                Some('.') => Shift(Point),
                _ if digit => Shift(Digits),
                _ => NotANumber,
            },
            LeadingZero | Digits => match c {
                Some('0') if self == LeadingZero => Shift(LeadingZero),
                Some('.') => Shift(Point),
                _ if digit => Shift(Digits),
                _ => Accept(TokenType::Integer),
            },
            Sign => match c {
                Some('.') => Shift(Point),
                _ if digit => Shift(Digits),
                _ => Reject(NumberFault::DanglingSign),
            },
            Point => match c {
                Some('.') => Reject(NumberFault::SecondDecimalPoint),
                _ if digit => Shift(Fraction),
                _ => Reject(NumberFault::MissingFractionDigits),
            },
            Fraction => match c {
                Some('.') => Reject(NumberFault::SecondDecimalPoint),
                _ if digit => Shift(Fraction),
                _ => Accept(TokenType::Float),
            },
        }
    }
}

impl<I: Iterator<Item = char>> Lexer<I> {
    /// Lexes a number literal.
    ///
    /// # Number Formats
    ///
    /// - Integer: `42`, `0`, `007`, `-3`, `+12`
    /// - Float: `3.14`, `0.5`, `-.5`, `+1.0`
    ///
    /// Recognition stops in front of the first character that cannot extend
    /// the literal, so `12ab` yields `12` and leaves `ab` in the stream.
    ///
    /// # Returns
    ///
    /// Either an `INTEGER` or a `FLOAT` token
    ///
    /// # Errors
    ///
    /// `MalformedNumber` for a dangling sign, a decimal point without a
    /// following digit, or a second decimal point
    pub fn lex_number(&mut self) -> LexResult<Token> {
        let mut state = NumberState::Start;
        let mut text = String::new();

        loop {
            let lookahead = self.stream.peek();

            match state.step(lookahead) {
                Transition::Shift(next) => {
                    if let Lookahead::Value(c) = lookahead {
                        text.push(c);
                    }
                    self.stream.next();
                    state = next;
                },
                Transition::Accept(token_type) => return Ok(Token::new(token_type, text)),
                Transition::Reject(fault) => {
                    return Err(LexError::MalformedNumber {
                        literal: text,
                        fault,
                    });
                },
                Transition::NotANumber => {
                    return Err(match lookahead {
                        Lookahead::Value(c) => LexError::UnexpectedChar(c),
                        Lookahead::End | Lookahead::Exhausted => LexError::UnexpectedEnd,
                    });
                },
            }
        }
    }
}
