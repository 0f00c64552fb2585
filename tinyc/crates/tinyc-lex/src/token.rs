//! Token definitions for the tinyc language.
//!
//! A token is a `(type, text)` pair. The text is the verbatim lexeme:
//! strings keep their quotes, numbers keep their sign and decimal point.

use std::fmt;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Reserved words of the language.
pub const KEYWORDS: &[&str] = &[
    "var", "if", "else", "for", "while", "break", "func", "return", "int", "float", "bool",
    "void", "string",
];

/// Classification of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TokenType {
    /// Reserved word, e.g. `if`.
    Keyword,
    /// Identifier that is not reserved.
    Variable,
    /// Operator or separator, e.g. `+=` or `,`.
    Operator,
    /// One of `(`, `)`, `{`, `}`.
    Bracket,
    /// Integer literal, possibly signed.
    Integer,
    /// Floating point literal, possibly signed.
    Float,
    /// `true` or `false`.
    Boolean,
    /// Quoted string literal.
    String,
}

impl TokenType {
    /// Returns the upper-case name of this type.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenType::Keyword => "KEYWORD",
            TokenType::Variable => "VARIABLE",
            TokenType::Operator => "OPERATOR",
            TokenType::Bracket => "BRACKET",
            TokenType::Integer => "INTEGER",
            TokenType::Float => "FLOAT",
            TokenType::Boolean => "BOOLEAN",
            TokenType::String => "STRING",
        }
    }

    /// Returns true for literal values: integers, floats, strings, booleans.
    pub fn is_scalar(self) -> bool {
        matches!(
            self,
            TokenType::Integer | TokenType::Float | TokenType::String | TokenType::Boolean
        )
    }

    /// Returns true for anything that can stand as an operand.
    pub fn is_value(self) -> bool {
        self.is_scalar() || self == TokenType::Variable
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single lexeme together with its classification.
///
/// Tokens are created by the recognizers and never modified afterwards.
///
/// # Example
///
/// ```
/// use tinyc_lex::{Token, TokenType};
///
/// let token = Token::new(TokenType::Integer, "42");
/// assert!(token.is_scalar());
/// assert!(token.is_value());
/// assert_eq!(token.text(), "42");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    #[serde(rename = "type")]
    token_type: TokenType,
    text: String,
}

impl Token {
    /// Creates a token of the given type.
    pub fn new(token_type: TokenType, text: impl Into<String>) -> Self {
        Self {
            token_type,
            text: text.into(),
        }
    }

    /// Returns the classification of this token.
    pub fn token_type(&self) -> TokenType {
        self.token_type
    }

    /// Returns the verbatim lexeme.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consumes the token, returning its lexeme.
    pub fn into_text(self) -> String {
        self.text
    }

    /// Returns true for literal values: integers, floats, strings, booleans.
    pub fn is_scalar(&self) -> bool {
        self.token_type.is_scalar()
    }

    /// Returns true for anything that can stand as an operand.
    pub fn is_value(&self) -> bool {
        self.token_type.is_value()
    }

    /// Returns true for non-reserved identifiers.
    pub fn is_variable(&self) -> bool {
        self.token_type == TokenType::Variable
    }

    /// Returns true for reserved words.
    pub fn is_keyword(&self) -> bool {
        self.token_type == TokenType::Keyword
    }

    /// Returns true for operators and separators.
    pub fn is_operator(&self) -> bool {
        self.token_type == TokenType::Operator
    }

    /// Returns true for `(`, `)`, `{`, `}`.
    pub fn is_bracket(&self) -> bool {
        self.token_type == TokenType::Bracket
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "type {}, value {}", self.token_type, self.text)
    }
}

/// The table of reserved words a lexer classifies identifiers against.
///
/// Each lexer owns its own table; there is no global keyword state.
///
/// # Example
///
/// ```
/// use tinyc_lex::Keywords;
///
/// let keywords = Keywords::default();
/// assert!(keywords.contains("while"));
/// assert!(!keywords.contains("loop"));
///
/// let extended = Keywords::with_extra(["loop"]);
/// assert!(extended.contains("loop"));
/// assert!(extended.contains("while"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keywords {
    words: FxHashSet<String>,
}

impl Keywords {
    /// Creates a table from exactly the given words.
    pub fn new<S: Into<String>>(words: impl IntoIterator<Item = S>) -> Self {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates the standard table extended with `extra` words.
    pub fn with_extra<S: Into<String>>(extra: impl IntoIterator<Item = S>) -> Self {
        let mut keywords = Self::default();
        keywords.words.extend(extra.into_iter().map(Into::into));
        keywords
    }

    /// Returns true if `word` is reserved.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of reserved words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if nothing is reserved.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Classifies a fully scanned identifier.
    pub fn classify(&self, ident: &str) -> TokenType {
        if self.contains(ident) {
            TokenType::Keyword
        } else if ident == "true" || ident == "false" {
            TokenType::Boolean
        } else {
            TokenType::Variable
        }
    }
}

impl Default for Keywords {
    fn default() -> Self {
        Self::new(KEYWORDS.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_and_value() {
        let cases = [
            (TokenType::Keyword, false, false),
            (TokenType::Variable, false, true),
            (TokenType::Operator, false, false),
            (TokenType::Bracket, false, false),
            (TokenType::Integer, true, true),
            (TokenType::Float, true, true),
            (TokenType::Boolean, true, true),
            (TokenType::String, true, true),
        ];
        for (ty, scalar, value) in cases {
            let token = Token::new(ty, "x");
            assert_eq!(token.is_scalar(), scalar, "{ty}");
            assert_eq!(token.is_value(), value, "{ty}");
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Token::new(TokenType::Keyword, "if").to_string(),
            "type KEYWORD, value if"
        );
        assert_eq!(TokenType::Float.to_string(), "FLOAT");
    }

    #[test]
    fn test_default_keywords() {
        let keywords = Keywords::default();
        assert_eq!(keywords.len(), KEYWORDS.len());
        for word in KEYWORDS {
            assert_eq!(keywords.classify(word), TokenType::Keyword);
        }
    }

    #[test]
    fn test_classify() {
        let keywords = Keywords::default();
        assert_eq!(keywords.classify("true"), TokenType::Boolean);
        assert_eq!(keywords.classify("false"), TokenType::Boolean);
        assert_eq!(keywords.classify("iffy"), TokenType::Variable);
        assert_eq!(keywords.classify("If"), TokenType::Variable);
    }

    #[test]
    fn test_custom_table() {
        let keywords = Keywords::new(["let"]);
        assert_eq!(keywords.classify("let"), TokenType::Keyword);
        assert_eq!(keywords.classify("var"), TokenType::Variable);
        assert!(Keywords::new(Vec::<String>::new()).is_empty());
    }

    #[test]
    fn test_serialize_shape() {
        let token = Token::new(TokenType::String, "\"hi\"");
        let json = serde_json::to_string(&token).unwrap();
        assert_eq!(json, r#"{"type":"STRING","text":"\"hi\""}"#);
        let back: Token = serde_json::from_str(&json).unwrap();
        assert_eq!(back, token);
    }
}
