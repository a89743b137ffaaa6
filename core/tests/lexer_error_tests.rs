use tyger::lexer::{lex, lex_strict, token::TokenKind};

#[test]
fn illegal_byte_becomes_a_token() {
    let tokens = lex("@");
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Illegal);
    assert_eq!(tokens[0].literal, "@");
    assert_eq!(tokens[1].kind, TokenKind::Eof);
}

#[test]
fn scanning_continues_after_illegal_byte() {
    let kinds: Vec<TokenKind> = lex("a @ b").into_iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Ident,
            TokenKind::Illegal,
            TokenKind::Ident,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn each_illegal_byte_is_reported_separately() {
    let tokens = lex("#@");
    assert_eq!(tokens[0].kind, TokenKind::Illegal);
    assert_eq!(tokens[0].literal, "#");
    assert_eq!(tokens[1].kind, TokenKind::Illegal);
    assert_eq!(tokens[1].literal, "@");
    assert_eq!(tokens[2].kind, TokenKind::Eof);
}

#[test]
fn illegal_non_ascii_character_is_one_token() {
    let tokens = lex("§");
    assert_eq!(tokens[0].kind, TokenKind::Illegal);
    assert_eq!(tokens[0].literal, "§");
    assert_eq!(tokens[1].kind, TokenKind::Eof);
}

#[test]
fn lex_strict_accepts_clean_source() {
    let tokens = lex_strict("var x = 10;").expect("clean source should lex");
    assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
}

#[test]
fn lex_strict_reports_first_illegal_byte() {
    let err = lex_strict("var @ x").expect_err("illegal byte should fail strict lexing");
    assert_eq!(err.span.offset(), 4);
    assert_eq!(err.span.len(), 1);
    assert!(err.message.contains("illegal character '@'"));
}

#[test]
fn lex_strict_allows_unterminated_strings() {
    // Unterminated strings are truncated at end of input, not errors.
    let tokens = lex_strict(r#"println("oops"#).expect("unterminated string is not an error");
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Println,
            TokenKind::LeftParen,
            TokenKind::String,
            TokenKind::Eof,
        ]
    );
    assert_eq!(tokens[2].literal, "oops");
}
