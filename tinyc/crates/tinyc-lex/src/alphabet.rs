//! Character classes used by the tinyc lexer.
//!
//! Only ASCII letters and digits are recognized; everything else is either
//! an operator symbol or an unexpected character.

/// Checks if a character is an ASCII letter.
///
/// # Example
///
/// ```
/// use tinyc_lex::alphabet::is_letter;
///
/// assert!(is_letter('a'));
/// assert!(is_letter('Z'));
/// assert!(!is_letter('_'));
/// assert!(!is_letter('α'));
/// ```
#[inline]
pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Checks if a character is an ASCII decimal digit.
///
/// # Example
///
/// ```
/// use tinyc_lex::alphabet::is_digit;
///
/// assert!(is_digit('0'));
/// assert!(is_digit('9'));
/// assert!(!is_digit('a'));
/// ```
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Checks if a character may appear inside an identifier.
///
/// # Example
///
/// ```
/// use tinyc_lex::alphabet::is_literal;
///
/// assert!(is_literal('a'));
/// assert!(is_literal('_'));
/// assert!(is_literal('7'));
/// assert!(!is_literal('-'));
/// ```
#[inline]
pub fn is_literal(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Checks if a character starts an operator.
///
/// The set is `+ - * / > < = ! & | ^ % ,`. The semicolon is recognized by
/// the operator automaton but is not part of this class.
///
/// # Example
///
/// ```
/// use tinyc_lex::alphabet::is_operator;
///
/// assert!(is_operator('+'));
/// assert!(is_operator(','));
/// assert!(!is_operator(';'));
/// assert!(!is_operator('('));
/// ```
#[inline]
pub fn is_operator(c: char) -> bool {
    matches!(
        c,
        '+' | '-' | '*' | '/' | '>' | '<' | '=' | '!' | '&' | '|' | '^' | '%' | ','
    )
}
