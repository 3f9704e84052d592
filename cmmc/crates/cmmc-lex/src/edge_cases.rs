//! Edge case tests for cmmc-lex

use crate::{tokenize, IllegalChar, Lexer, ScanState, TokenKind};
use cmmc_util::Handler;

fn lex_all(source: &[u8]) -> Vec<(TokenKind, Vec<u8>)> {
    tokenize(source)
        .unwrap()
        .into_iter()
        .map(|t| (t.kind, t.lexeme.to_vec()))
        .collect()
}

// ==================== EDGE CASES ====================

#[test]
fn test_edge_empty_source() {
    assert!(lex_all(b"").is_empty());
}

#[test]
fn test_edge_only_trivia() {
    assert!(lex_all(b"  \n\t# only a comment\n\r\n").is_empty());
}

#[test]
fn test_edge_no_trailing_newline() {
    let t = lex_all(b"return x");
    assert_eq!(t.last(), Some(&(TokenKind::Id, b"x".to_vec())));
}

#[test]
fn test_edge_single_char_ident() {
    assert_eq!(lex_all(b"x"), vec![(TokenKind::Id, b"x".to_vec())]);
}

#[test]
fn test_edge_long_identifier() {
    let name = "a".repeat(10000);
    let t = lex_all(format!("int {};", name).as_bytes());
    assert_eq!(t[1], (TokenKind::Id, name.into_bytes()));
}

#[test]
fn test_edge_keywords_adjacent_to_symbols() {
    let t = lex_all(b"if(x)then{return;}else:");
    let kinds: Vec<_> = t.into_iter().map(|(k, _)| k).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::If,
            TokenKind::LParen,
            TokenKind::Id,
            TokenKind::RParen,
            TokenKind::Then,
            TokenKind::LBrace,
            TokenKind::Return,
            TokenKind::Semicolon,
            TokenKind::RBrace,
            TokenKind::Else,
            TokenKind::Colon,
        ]
    );
}

#[test]
fn test_edge_keyword_followed_by_digit() {
    assert_eq!(lex_all(b"int2"), vec![(TokenKind::Id, b"int2".to_vec())]);
}

#[test]
fn test_edge_comment_directly_after_token() {
    let t = lex_all(b"x;#c\ny");
    assert_eq!(t.len(), 3);
}

#[test]
fn test_edge_crlf_line_endings() {
    let err = tokenize(b"int a;\r\nint b;\r\n@").unwrap_err();
    assert_eq!(err.line(), 3);
}

#[test]
fn test_edge_error_on_first_byte() {
    let err = tokenize(b"@int x;").unwrap_err();
    assert_eq!(err.span().start, 0);
    assert_eq!(err.line(), 1);
}

#[test]
fn test_edge_error_on_last_byte() {
    let err = tokenize(b"int x;\n\n\n?").unwrap_err();
    assert_eq!(err.line(), 4);
}

#[test]
fn test_edge_error_line_after_multiline_trivia() {
    let err = tokenize(b"# one\n# two\n\n   \t`").unwrap_err();
    assert_eq!(err.to_string(), "Lexical error: '`' in line number 4");
}

#[test]
fn test_edge_multibyte_illegal_char() {
    let err = tokenize("x = π;".as_bytes()).unwrap_err();
    assert_eq!(err.ch(), IllegalChar::Char('π'));
    assert_eq!(err.span().len(), 2);
}

#[test]
fn test_edge_invalid_utf8_byte() {
    let err = tokenize(b"x \xc3(").unwrap_err();
    assert_eq!(err.ch(), IllegalChar::Byte(0xc3));
}

#[test]
fn test_edge_nul_byte_is_illegal() {
    let err = tokenize(b"x\0").unwrap_err();
    assert_eq!(err.ch(), IllegalChar::Char('\0'));
}

#[test]
fn test_edge_byte_order_mark_is_illegal() {
    let err = tokenize("\u{feff}int x;".as_bytes()).unwrap_err();
    assert_eq!(err.ch(), IllegalChar::Char('\u{feff}'));
}

#[test]
fn test_edge_string_then_error_in_same_line() {
    let err = tokenize(br#"write("ok"); $"#).unwrap_err();
    assert_eq!(err.span().start, 13);
}

#[test]
fn test_edge_number_exponent_sign_only() {
    let t = lex_all(b"3e+");
    assert_eq!(
        t,
        vec![
            (TokenKind::IntegerNum, b"3".to_vec()),
            (TokenKind::Id, b"e".to_vec()),
            (TokenKind::Addop, b"+".to_vec()),
        ]
    );
}

#[test]
fn test_edge_deep_nesting() {
    let source = format!("{}{}", "(".repeat(500), ")".repeat(500));
    assert_eq!(lex_all(source.as_bytes()).len(), 1000);
}

#[test]
fn test_edge_state_after_completion() {
    let mut handler = Handler::new();
    let mut lexer = Lexer::new("x", &mut handler);
    assert!(lexer.by_ref().all(|t| t.is_ok()));
    assert_eq!(lexer.state(), ScanState::Done);
    assert!(lexer.next().is_none());
}

#[test]
fn test_edge_lexemes_reconstruct_source() {
    let source: &[u8] = b"int f(float y) {\n  # note\n  write(\"a\\tb\");\r\n  return y*2.5e3;\n}";
    let mut handler = Handler::new();
    let mut lexer = Lexer::new(source, &mut handler);
    let mut rebuilt = Vec::new();
    loop {
        let token = lexer.next_lexeme().unwrap();
        if token.is_eof() {
            break;
        }
        rebuilt.extend_from_slice(token.lexeme);
    }
    assert_eq!(rebuilt, source);
}
