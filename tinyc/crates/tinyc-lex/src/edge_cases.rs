//! Edge case tests for tinyc-lex

#[cfg(test)]
mod tests {
    use crate::{analyse, LexError, Lexer, NumberFault, Token, TokenType};

    fn lex_all(source: &str) -> Vec<Token> {
        analyse(source.chars()).unwrap()
    }

    fn lex_err(source: &str) -> LexError {
        analyse(source.chars()).unwrap_err()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_edge_single_char_ident() {
        assert_eq!(lex_all("x"), vec![Token::new(TokenType::Variable, "x")]);
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let t = lex_all(&format!("var {} = 1", name));
        assert_eq!(t[1], Token::new(TokenType::Variable, name));
    }

    #[test]
    fn test_edge_long_string_beyond_window() {
        let body = "z".repeat(500);
        let t = lex_all(&format!("\"{}\"", body));
        assert_eq!(t[0].text().len(), 502);
    }

    #[test]
    fn test_edge_keywords_not_idents() {
        let t = lex_all("func var if");
        assert!(t.iter().all(Token::is_keyword));
    }

    #[test]
    fn test_edge_identifier_with_digits_then_number() {
        let t = lex_all("x1 1x");
        assert_eq!(t[0], Token::new(TokenType::Variable, "x1"));
        assert_eq!(t[1], Token::new(TokenType::Integer, "1"));
        assert_eq!(t[2], Token::new(TokenType::Variable, "x"));
    }

    #[test]
    fn test_edge_underscore_cannot_start_identifier() {
        assert!(matches!(lex_err("_x"), LexError::UnexpectedChar('_')));
        assert_eq!(lex_all("x_")[0].text(), "x_");
    }

    #[test]
    fn test_edge_empty_strings() {
        let t = lex_all("\"\" ''");
        assert_eq!(t[0].text(), "\"\"");
        assert_eq!(t[1].text(), "''");
    }

    #[test]
    fn test_edge_all_operators() {
        let t = lex_all("+ - * / % == != < > <= >= && || ! ^^");
        assert_eq!(t.len(), 15);
        assert!(t.iter().all(Token::is_operator));
    }

    #[test]
    fn test_edge_adjacent_operators() {
        let t = lex_all("a+++b");
        let texts: Vec<&str> = t.iter().map(Token::text).collect();
        assert_eq!(texts, vec!["a", "++", "+", "b"]);
    }

    #[test]
    fn test_edge_sign_after_closing_bracket_joins_literal() {
        let t = lex_all("(a)-1");
        assert_eq!(t.len(), 4);
        assert_eq!(t[3], Token::new(TokenType::Integer, "-1"));
    }

    #[test]
    fn test_edge_sign_after_boolean() {
        let t = lex_all("true-1");
        assert_eq!(t[1], Token::new(TokenType::Operator, "-"));
    }

    #[test]
    fn test_edge_double_sign() {
        let t = lex_all("x = --1");
        assert_eq!(t[2], Token::new(TokenType::Operator, "--"));
        assert_eq!(t[3], Token::new(TokenType::Integer, "1"));
    }

    #[test]
    fn test_edge_sign_before_point_is_operator() {
        let t = lex_all("-x");
        assert_eq!(t[0], Token::new(TokenType::Operator, "-"));
        assert!(matches!(lex_err("-.5"), LexError::UnexpectedChar('.')));
    }

    #[test]
    fn test_edge_bare_point() {
        assert!(matches!(lex_err("."), LexError::UnexpectedChar('.')));
    }

    #[test]
    fn test_edge_trailing_point() {
        assert!(matches!(
            lex_err("1."),
            LexError::MalformedNumber {
                fault: NumberFault::MissingFractionDigits,
                ..
            }
        ));
    }

    #[test]
    fn test_edge_number_then_identifier() {
        let t = lex_all("1.5e3");
        assert_eq!(t[0], Token::new(TokenType::Float, "1.5"));
        assert_eq!(t[1], Token::new(TokenType::Variable, "e3"));
    }

    #[test]
    fn test_edge_comment_at_eof_without_newline() {
        assert_eq!(lex_all("a //").len(), 1);
    }

    #[test]
    fn test_edge_block_comment_star_slash_split() {
        assert_eq!(lex_all("/* * / */x").len(), 1);
    }

    #[test]
    fn test_edge_block_opener_star_closes() {
        assert_eq!(lex_all("/*/ x").len(), 1);
        assert_eq!(lex_all("/**/x").len(), 1);
        assert!(matches!(lex_err("/*"), LexError::UnterminatedComment));
    }

    #[test]
    fn test_edge_crlf_line_endings() {
        let t = lex_all("var a\r\n// c\r\nvar b\r\n");
        assert_eq!(t.len(), 4);
    }

    #[test]
    fn test_edge_non_ascii_rejected() {
        assert!(matches!(lex_err("é"), LexError::UnexpectedChar('é')));
        assert!(matches!(lex_err("x = ١"), LexError::UnexpectedChar('١')));
    }

    #[test]
    fn test_edge_non_ascii_inside_string_and_comment() {
        let t = lex_all("'héllo' // ünïcode");
        assert_eq!(t, vec![Token::new(TokenType::String, "'héllo'")]);
    }

    #[test]
    fn test_edge_lexer_reusable_after_none() {
        let mut lexer = Lexer::new("".chars());
        assert_eq!(lexer.next_token().unwrap(), None);
        assert_eq!(lexer.next_token().unwrap(), None);
    }

    #[test]
    fn test_edge_roundtrip_strips_whitespace_and_comments() {
        let source = "var x=1 // one\n/* two */ if(x>=-2.5){x+=1}";
        let joined: String = lex_all(source).iter().map(Token::text).collect();
        assert_eq!(joined, "varx=1if(x>=-2.5){x+=1}");
    }
}
