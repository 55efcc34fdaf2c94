//! Edge case tests for pl0c-lex

#[cfg(test)]
mod tests {
    use crate::{tokenize, LexError, Lexer, TokenKind};

    fn lex_all(source: &str) -> Vec<TokenKind> {
        let mut lexer = Lexer::new(source);
        let mut kinds = Vec::new();
        loop {
            let token = lexer.next_token().unwrap();
            if token.is_end_of_input() {
                break;
            }
            kinds.push(token.kind);
        }
        kinds
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_edge_whitespace_only() {
        assert!(lex_all(" \t\r\n\x0b\x0c").is_empty());
    }

    #[test]
    fn test_edge_comment_only() {
        assert!(lex_all("{ nothing here }").is_empty());
        assert!(lex_all("{}").is_empty());
    }

    #[test]
    fn test_edge_single_char_ident() {
        assert_eq!(lex_all("x"), vec![TokenKind::Identifier]);
        assert_eq!(lex_all("_"), vec![TokenKind::Identifier]);
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let tokens = tokenize(&name).unwrap();
        assert_eq!(tokens[0].text.len(), 10000);
    }

    #[test]
    fn test_edge_no_whitespace_between_tokens() {
        assert_eq!(
            lex_all("x:=x+1;"),
            vec![
                TokenKind::Identifier,
                TokenKind::Assign,
                TokenKind::Identifier,
                TokenKind::Plus,
                TokenKind::Number,
                TokenKind::Semicolon,
            ]
        );
    }

    #[test]
    fn test_edge_nested_parens() {
        let kinds = lex_all("((()))");
        assert_eq!(kinds.iter().filter(|k| **k == TokenKind::LeftParen).count(), 3);
    }

    #[test]
    fn test_edge_case_sensitivity() {
        assert_eq!(lex_all("Odd odd"), vec![TokenKind::Identifier, TokenKind::Odd]);
    }

    #[test]
    fn test_edge_crlf_counts_one_line() {
        let tokens = tokenize("a\r\nb\r\n\r\nc").unwrap();
        let lines: Vec<_> = tokens.iter().map(|t| t.line()).collect();
        assert_eq!(lines, vec![1, 2, 4, 4]);
    }

    #[test]
    fn test_edge_bare_carriage_return_is_not_a_newline() {
        let tokens = tokenize("a\rb").unwrap();
        assert_eq!(tokens[1].line(), 1);
    }

    #[test]
    fn test_edge_end_of_input_line_after_trailing_newlines() {
        let tokens = tokenize("x\n\n\n").unwrap();
        assert_eq!(tokens[1].line(), 4);
    }

    #[test]
    fn test_edge_tokens_after_written_dot_are_not_scanned() {
        assert_eq!(tokenize("end. ?").unwrap().len(), 2);
    }

    #[test]
    fn test_edge_next_token_continues_after_written_dot() {
        let mut lexer = Lexer::new(". x");
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Dot);
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Identifier);
    }

    #[test]
    fn test_edge_leading_nul() {
        let tokens = tokenize("\0begin").unwrap();
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].is_end_of_input());
    }

    #[test]
    fn test_edge_error_after_valid_tokens() {
        let mut lexer = Lexer::new("var x;\n  x ! 1");
        let results: Vec<_> = lexer.by_ref().collect();
        assert_eq!(results.len(), 5);
        let err = results[4].clone().unwrap_err();
        assert_eq!(err, LexError::UnexpectedChar {
            ch: '!',
            span: pl0c_util::Span::new(11, 12, 2, 5),
        });
    }

    #[test]
    fn test_edge_non_ascii_identifier_is_rejected() {
        let err = tokenize("café").unwrap_err();
        assert!(matches!(err, LexError::UnexpectedChar { ch: 'é', .. }));
    }

    #[test]
    fn test_edge_byte_order_mark_is_rejected() {
        assert!(matches!(
            tokenize("\u{feff}var x;"),
            Err(LexError::UnexpectedChar { ch: '\u{feff}', .. })
        ));
    }

    #[test]
    fn test_edge_colon_before_comment() {
        let err = tokenize(":{=}").unwrap_err();
        assert!(matches!(err, LexError::MalformedAssign { found: Some('{'), .. }));
    }

    #[test]
    fn test_edge_zero_and_max() {
        let tokens = tokenize("0 9223372036854775807").unwrap();
        assert_eq!(tokens[0].text, "0");
        assert_eq!(tokens[1].text, "9223372036854775807");
    }

    #[test]
    fn test_edge_diagnostic_for_unterminated_comment() {
        let err = tokenize("begin\n{ never closed\n").unwrap_err();
        let rendered = err.to_diagnostic().render("pl0c");
        assert_eq!(
            rendered,
            "pl0c: error: 3: unterminated comment\n  = note: comment opened on line 2"
        );
    }
}
