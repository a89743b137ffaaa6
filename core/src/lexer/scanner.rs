use super::cursor::Cursor;
use super::token::{self, Position, Token, TokenKind};

/// Literal carried by the end-of-input token, the NUL sentinel.
pub const EOF_LITERAL: &str = "\0";

/// Scans source text into a sequence of classified tokens.
///
/// The scanner never fails: bytes that match no category come back as
/// `TokenKind::Illegal` tokens and scanning continues from the next byte.
pub struct Scanner<'src> {
    pub(super) cursor: Cursor<'src>,
}

impl<'src> Scanner<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            cursor: Cursor::new(source),
        }
    }

    /// Collect every token up to and including the end-of-input token.
    pub fn scan_tokens(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token();
            let done = token.kind == TokenKind::Eof;
            tokens.push(token);
            if done {
                break;
            }
        }

        tokens
    }

    /// Produce the next token, advancing the cursor past it.
    ///
    /// Once the source is exhausted, every further call returns an
    /// end-of-input token at the same terminal position.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();
        let start = self.cursor.pos();

        let Some(ch) = self.cursor.advance() else {
            return Token::new(TokenKind::Eof, EOF_LITERAL, Position::at_offset(start));
        };

        if let Some(kind) = token::punctuation_kind(ch).or_else(|| token::arithmetic_kind(ch)) {
            return self.token_from(kind, start);
        }

        match ch {
            b'!' => {
                let kind = if self.cursor.match_char(b'=') {
                    TokenKind::NotEq
                } else {
                    TokenKind::Bang
                };
                self.token_from(kind, start)
            }
            b'=' => {
                let kind = if self.cursor.match_char(b'=') {
                    TokenKind::EqEq
                } else {
                    TokenKind::Assign
                };
                self.token_from(kind, start)
            }
            b'<' => {
                let kind = if self.cursor.match_char(b'=') {
                    TokenKind::LessEq
                } else {
                    TokenKind::Less
                };
                self.token_from(kind, start)
            }
            b'>' => {
                let kind = if self.cursor.match_char(b'=') {
                    TokenKind::GreaterEq
                } else {
                    TokenKind::Greater
                };
                self.token_from(kind, start)
            }
            b'"' => self.scan_string(start),
            c if c.is_ascii_digit() => self.scan_integer(start),
            c if c.is_ascii_alphabetic() => self.scan_identifier(start),
            _ => {
                // Consume any UTF-8 continuation bytes so the illegal
                // literal is a whole character.
                while let Some(c) = self.cursor.peek() {
                    if c & 0xC0 == 0x80 {
                        self.cursor.advance();
                    } else {
                        break;
                    }
                }
                self.token_from(TokenKind::Illegal, start)
            }
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\r' | b'\n') = self.cursor.peek() {
            self.cursor.advance();
        }
    }

    /// Token whose literal is the source span from `start` to the cursor.
    pub(super) fn token_from(&self, kind: TokenKind, start: usize) -> Token {
        Token::new(kind, self.cursor.slice_from(start), Position::at_offset(start))
    }
}
