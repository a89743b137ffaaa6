use serde::Serialize;

/// Source position where a token begins.
///
/// Only the byte offset is maintained while scanning; `line` and `col` stay
/// zero. Use `diagnostics::SourceMap` to recover line/column from the offset.
// TODO: track line/col in the cursor instead of recovering them after the fact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub col: usize,
}

impl Position {
    pub fn new(offset: usize, line: usize, col: usize) -> Self {
        Self { offset, line, col }
    }

    /// Position carrying only a byte offset.
    pub fn at_offset(offset: usize) -> Self {
        Self {
            offset,
            line: 0,
            col: 0,
        }
    }
}

/// A single classified token with its literal text and start position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub pos: Position,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>, pos: Position) -> Self {
        Self {
            kind,
            literal: literal.into(),
            pos,
        }
    }
}

/// Closed set of token categories. Adding a member is a breaking change for
/// every consumer of the token stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    Eof,
    Illegal,

    // Punctuation
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,
    Semicolon,

    // Arithmetic operators
    Plus,
    Minus,
    Star,
    Slash,

    // Assignment, logical and relational operators
    Assign,
    Bang,
    Less,
    Greater,
    LessEq,
    GreaterEq,
    EqEq,
    NotEq,

    // Literals and identifiers
    Integer,
    String,
    Ident,

    // Keywords and builtins
    Var,
    Println,
}

impl TokenKind {
    /// Every kind, in declaration order. Drives the `--defs` listing.
    pub const ALL: [TokenKind; 26] = [
        TokenKind::Eof,
        TokenKind::Illegal,
        TokenKind::LeftParen,
        TokenKind::RightParen,
        TokenKind::LeftBrace,
        TokenKind::RightBrace,
        TokenKind::LeftBracket,
        TokenKind::RightBracket,
        TokenKind::Semicolon,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Star,
        TokenKind::Slash,
        TokenKind::Assign,
        TokenKind::Bang,
        TokenKind::Less,
        TokenKind::Greater,
        TokenKind::LessEq,
        TokenKind::GreaterEq,
        TokenKind::EqEq,
        TokenKind::NotEq,
        TokenKind::Integer,
        TokenKind::String,
        TokenKind::Ident,
        TokenKind::Var,
        TokenKind::Println,
    ];

    /// Upper-case name used by the fixture and defs output formats.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Eof => "EOF",
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::LeftParen => "LPAREN",
            TokenKind::RightParen => "RPAREN",
            TokenKind::LeftBrace => "LBRACE",
            TokenKind::RightBrace => "RBRACE",
            TokenKind::LeftBracket => "LBRACKET",
            TokenKind::RightBracket => "RBRACKET",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Star => "ASTERISK",
            TokenKind::Slash => "SLASH",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Bang => "BANG",
            TokenKind::Less => "LT",
            TokenKind::Greater => "GT",
            TokenKind::LessEq => "LTE",
            TokenKind::GreaterEq => "GTE",
            TokenKind::EqEq => "EQ",
            TokenKind::NotEq => "NOT_EQ",
            TokenKind::Integer => "INTEGER",
            TokenKind::String => "STRING",
            TokenKind::Ident => "IDENT",
            TokenKind::Var => "VAR",
            TokenKind::Println => "PRINTLN",
        }
    }
}

const PUNCTUATION: [(u8, TokenKind); 7] = [
    (b'(', TokenKind::LeftParen),
    (b')', TokenKind::RightParen),
    (b'{', TokenKind::LeftBrace),
    (b'}', TokenKind::RightBrace),
    (b'[', TokenKind::LeftBracket),
    (b']', TokenKind::RightBracket),
    (b';', TokenKind::Semicolon),
];

const ARITHMETIC: [(u8, TokenKind); 4] = [
    (b'+', TokenKind::Plus),
    (b'-', TokenKind::Minus),
    (b'*', TokenKind::Star),
    (b'/', TokenKind::Slash),
];

const KEYWORDS_AND_BUILTINS: [(&str, TokenKind); 2] =
    [("var", TokenKind::Var), ("println", TokenKind::Println)];

pub(super) fn punctuation_kind(ch: u8) -> Option<TokenKind> {
    PUNCTUATION
        .iter()
        .find(|(c, _)| *c == ch)
        .map(|(_, kind)| *kind)
}

pub(super) fn arithmetic_kind(ch: u8) -> Option<TokenKind> {
    ARITHMETIC
        .iter()
        .find(|(c, _)| *c == ch)
        .map(|(_, kind)| *kind)
}

pub(super) fn keyword_or_builtin(text: &str) -> Option<TokenKind> {
    KEYWORDS_AND_BUILTINS
        .iter()
        .find(|(word, _)| *word == text)
        .map(|(_, kind)| *kind)
}
