pub mod diagnostics;
pub mod errors;
pub mod lexer;

pub use lexer::token::{Position, Token, TokenKind};
pub use lexer::{lex, lex_strict};
