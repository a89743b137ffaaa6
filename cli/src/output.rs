//! Token-stream rendering for the CLI: pretty listings, the C++ fixture
//! record format, the X-macro defs listing, and JSON.

use clap::ValueEnum;
use owo_colors::OwoColorize;

use tyger::diagnostics::SourceMap;
use tyger::{Token, TokenKind};

/// Output format for the token stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// One colored line per token
    Pretty,
    /// Positional records usable as literal C++ test fixtures
    Fixtures,
    /// serde_json serialization of the token vector
    Json,
}

pub fn print_tokens(tokens: &[Token], source: &str, format: Format) {
    match format {
        Format::Pretty => {
            let map = SourceMap::from_source(source);
            for token in tokens {
                println!("{}", pretty_token(token, &map));
            }
        }
        Format::Fixtures => {
            for token in tokens {
                println!("{}", fixture_record(token));
            }
        }
        Format::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(tokens).expect("token stream should serialize")
            );
        }
    }
}

/// Human-readable token line: `line:col KIND "literal"`.
pub fn pretty_token(token: &Token, map: &SourceMap) -> String {
    let pos = map.byte_to_pos(token.pos.offset);
    format!(
        "{} {} {:?}",
        format!("{}:{}", pos.line, pos.col).bright_black(),
        token.kind.name().bright_blue(),
        token.literal
    )
}

/// One fixture record in the layout the original C++ test suite consumes:
/// `Token{ Location{ pos, col, line }, String_View{ pos, len }, TK_KIND  },`
pub fn fixture_record(token: &Token) -> String {
    format!(
        "Token{{ Location{{ {}, {}, {} }}, String_View{{ {}, {} }}, TK_{}  }},",
        token.pos.offset,
        token.pos.col,
        token.pos.line,
        token.pos.offset,
        token.literal.len(),
        token.kind.name()
    )
}

/// Emit the closed kind set as X-macro lines, one per kind in declaration
/// order, ready for inclusion in a `.def` file.
pub fn print_defs() {
    for kind in TokenKind::ALL {
        println!("X({}) \\", kind.name());
    }
}
