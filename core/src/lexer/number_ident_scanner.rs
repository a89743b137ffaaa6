use super::scanner::Scanner;
use super::token::{self, Token, TokenKind};

impl Scanner<'_> {
    /// Read the maximal run of ASCII digits starting at `start`. No sign,
    /// decimal point or exponent handling; the language has integers only.
    pub(super) fn scan_integer(&mut self, start: usize) -> Token {
        while let Some(c) = self.cursor.peek() {
            if c.is_ascii_digit() {
                self.cursor.advance();
            } else {
                break;
            }
        }

        self.token_from(TokenKind::Integer, start)
    }

    /// Read an identifier-or-keyword span: a letter followed by the maximal
    /// run of ASCII alphanumerics. The span is checked against the
    /// keyword/builtin table before falling back to `Ident`.
    pub(super) fn scan_identifier(&mut self, start: usize) -> Token {
        while let Some(c) = self.cursor.peek() {
            if c.is_ascii_alphanumeric() {
                self.cursor.advance();
            } else {
                break;
            }
        }

        let text = self.cursor.slice_from(start);
        let kind = token::keyword_or_builtin(text).unwrap_or(TokenKind::Ident);
        self.token_from(kind, start)
    }
}
