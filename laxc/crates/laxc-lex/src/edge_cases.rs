//! Edge case tests for laxc-lex

#[cfg(test)]
mod tests {
    use crate::{Lexer, LexerOptions, Token, TokenKind, TokenValue};
    use laxc_util::Handler;

    fn lex_all(source: &str) -> Vec<Token> {
        let handler = Handler::new();
        let mut lexer = Lexer::new(source, "edge.lax", &handler);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.advance().unwrap();
            if token.kind == TokenKind::Eos {
                break;
            }
            tokens.push(token);
        }
        tokens
    }

    fn kinds(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.kind.as_str()).collect()
    }

    // ==================== INPUT SHAPES ====================

    #[test]
    fn test_edge_only_newlines() {
        let t = lex_all("\n\n\n");
        assert_eq!(kinds(&t), vec!["newline", "newline", "newline"]);
        assert_eq!(t[2].line, 4);
    }

    #[test]
    fn test_edge_leading_indent() {
        let t = lex_all("\n  aa");
        assert_eq!(t[0], Token::new(TokenKind::Indent, 2, Some(TokenValue::Width(2))));
        assert_eq!(kinds(&t), vec!["indent", "text", "outdent"]);
    }

    #[test]
    fn test_edge_trailing_indent_at_eof() {
        // Whitespace after the last newline still opens a block.
        let t = lex_all("aa\n  ");
        assert_eq!(kinds(&t), vec!["text", "indent", "outdent"]);
    }

    #[test]
    fn test_edge_long_line() {
        let line = "x".repeat(10_000);
        let t = lex_all(&line);
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].text(), Some(line.as_str()));
    }

    #[test]
    fn test_edge_unicode_text() {
        let t = lex_all("héllo wörld\n  日本語");
        assert_eq!(t[0].text(), Some("héllo wörld"));
        assert_eq!(t[2].text(), Some("日本語"));
    }

    #[test]
    fn test_edge_only_carriage_returns() {
        let t = lex_all("\r\r\n\r");
        assert_eq!(kinds(&t), vec!["newline", "newline", "newline"]);
    }

    // ==================== INDENTATION ====================

    #[test]
    fn test_edge_deep_nesting_unwinds() {
        let mut source = String::from("root");
        for depth in 1..=50 {
            source.push('\n');
            source.push_str(&" ".repeat(depth));
            source.push_str("node");
        }
        source.push_str("\nend");

        let t = lex_all(&source);
        let outdents = t.iter().filter(|t| t.kind == TokenKind::Outdent).count();
        let indents = t.iter().filter(|t| t.kind == TokenKind::Indent).count();
        assert_eq!(indents, 50);
        assert_eq!(outdents, 50);
        assert_eq!(t.last().and_then(Token::text), Some("end"));
    }

    #[test]
    fn test_edge_tab_indentation() {
        let t = lex_all("aa\n\tbb\n\t\tcc\ndd");
        assert_eq!(
            kinds(&t),
            vec!["text", "indent", "text", "indent", "text", "outdent", "outdent", "text"]
        );
        assert_eq!(t[1].width(), Some(1));
        assert_eq!(t[3].width(), Some(2));
    }

    #[test]
    fn test_edge_tabs_and_spaces_share_widths() {
        // A tab block of width 2 and a space block of width 2 are the same level.
        let t = lex_all("aa\n\t\tbb\n  cc");
        assert_eq!(kinds(&t), vec!["text", "indent", "text", "newline", "text", "outdent"]);
    }

    #[test]
    fn test_edge_blank_lines_inside_block() {
        let t = lex_all("aa\n  bb\n\n\n  cc");
        assert_eq!(
            kinds(&t),
            vec!["text", "indent", "text", "newline", "newline", "newline", "text", "outdent"]
        );
    }

    // ==================== QUEUES ====================

    #[test]
    fn test_edge_lookahead_past_eos() {
        let handler = Handler::new();
        let mut lexer = Lexer::new("aa", "edge.lax", &handler);
        assert_eq!(lexer.lookahead(5).unwrap().kind, TokenKind::Eos);
        assert_eq!(lexer.advance().unwrap().text(), Some("aa"));
        for _ in 0..6 {
            assert_eq!(lexer.advance().unwrap().kind, TokenKind::Eos);
        }
    }

    #[test]
    fn test_edge_lookahead_across_outdents() {
        let handler = Handler::new();
        let mut lexer = Lexer::new("aa\n  bb\n    cc\ndd", "edge.lax", &handler);
        for _ in 0..5 {
            lexer.advance().unwrap();
        }

        // One scan yields two outdents; lookahead must see both in order.
        assert_eq!(lexer.lookahead(1).unwrap().kind, TokenKind::Outdent);
        assert_eq!(lexer.lookahead(2).unwrap().kind, TokenKind::Outdent);
        assert_eq!(lexer.lookahead(3).unwrap().text(), Some("dd"));
        assert_eq!(lexer.advance().unwrap().kind, TokenKind::Outdent);
        assert_eq!(lexer.advance().unwrap().kind, TokenKind::Outdent);
        assert_eq!(lexer.advance().unwrap().text(), Some("dd"));
    }

    #[test]
    fn test_edge_defer_after_eos() {
        let handler = Handler::new();
        let mut lexer = Lexer::new("", "edge.lax", &handler);
        assert_eq!(lexer.advance().unwrap().kind, TokenKind::Eos);

        let replay = Token::new(TokenKind::from_name("replay"), 1, None);
        lexer.defer(replay.clone());
        assert_eq!(lexer.advance().unwrap(), replay);
        assert_eq!(lexer.advance().unwrap().kind, TokenKind::Eos);
    }

    #[test]
    fn test_edge_defer_is_seen_by_lookahead() {
        let handler = Handler::new();
        let mut lexer = Lexer::new("aa\nbb", "edge.lax", &handler);
        let replay = Token::new(TokenKind::Newline, 9, None);
        lexer.defer(replay.clone());
        assert_eq!(lexer.lookahead(1).unwrap(), &replay);
        assert_eq!(lexer.lookahead(2).unwrap().text(), Some("aa"));
    }

    // ==================== SELECT ====================

    #[test]
    fn test_edge_select_empty_match_falls_through() {
        let handler = Handler::new();
        let options = LexerOptions::new().with_select("select maybe", "^(x?)");
        let tokens = crate::tokenize("aa\nxbb", "edge.lax", &options, &handler).unwrap();

        assert_eq!(kinds(&tokens), vec!["text", "newline", "maybe", "text"]);
        assert_eq!(tokens[0].text(), Some("aa"));
        assert_eq!(tokens[2].text(), Some("x"));
    }

    #[test]
    fn test_edge_select_multiple_keys_per_entry() {
        let handler = Handler::new();
        let options = LexerOptions::from_json_str(
            r##"[{"select tag": "^(#[a-z]+)", "select id": "^@([a-z]+)"}, {"select class": "^\\.([a-z]+)"}]"##,
        )
        .unwrap();
        let mut lexer = Lexer::with_options("@main.wide#x", "edge.lax", &options, &handler).unwrap();

        let t: Vec<_> = (0..3).map(|_| lexer.advance().unwrap()).collect();
        assert_eq!(kinds(&t), vec!["id", "class", "tag"]);
        assert_eq!(t[0].text(), Some("main"));
        assert_eq!(t[1].text(), Some("wide"));
        assert_eq!(t[2].text(), Some("#x"));
    }
}
