use super::scanner::Scanner;
use super::token::{Position, Token, TokenKind};

impl Scanner<'_> {
    /// Read a string literal. The opening quote has already been consumed;
    /// `start` is its byte offset.
    ///
    /// The literal is the span between the quotes, with `\"` sequences kept
    /// verbatim (no unescaping). An unterminated string silently ends at the
    /// end of input.
    pub(super) fn scan_string(&mut self, start: usize) -> Token {
        let content_start = self.cursor.pos();

        loop {
            match self.cursor.peek() {
                None | Some(b'"') => break,
                Some(b'\\') if self.cursor.peek_next() == Some(b'"') => {
                    self.cursor.advance();
                    self.cursor.advance();
                }
                Some(_) => {
                    self.cursor.advance();
                }
            }
        }

        let literal = self.cursor.slice_from(content_start).to_owned();
        self.cursor.advance(); // closing quote, if the string was terminated

        Token::new(TokenKind::String, literal, Position::at_offset(start))
    }
}
