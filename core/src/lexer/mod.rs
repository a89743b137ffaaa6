pub mod cursor;
mod number_ident_scanner;
pub mod scanner;
mod string_scanner;
pub mod token;

use crate::errors::SyntaxError;
use token::{Token, TokenKind};

/// Tokenize source text into a list of tokens, end-of-input token included.
///
/// Never fails: unrecognized bytes come back as `TokenKind::Illegal` tokens.
pub fn lex(source: &str) -> Vec<Token> {
    let mut scanner = scanner::Scanner::new(source);
    scanner.scan_tokens()
}

/// Tokenize source text, failing on the first illegal byte.
pub fn lex_strict(source: &str) -> Result<Vec<Token>, SyntaxError> {
    let tokens = lex(source);

    if let Some(bad) = tokens.iter().find(|t| t.kind == TokenKind::Illegal) {
        return Err(SyntaxError::new(
            format!("illegal character '{}'", bad.literal),
            bad.pos.offset,
            bad.literal.len(),
        ));
    }

    Ok(tokens)
}
