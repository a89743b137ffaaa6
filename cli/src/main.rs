use std::fs;
use std::process;

use clap::Parser;
use owo_colors::OwoColorize;

mod output;
mod repl;

use output::Format;

#[derive(Parser)]
#[command(name = "tyger", about = "Tokenizer for the Tyger toy language")]
struct Cli {
    /// Path to a source file to tokenize
    file: Option<String>,
    /// Tokenize inline source text
    #[arg(long)]
    eval: Option<String>,
    /// Output format for the token stream
    #[arg(long, value_enum, default_value = "pretty")]
    format: Format,
    /// Emit the token-kind list as X-macro defs and exit
    #[arg(long)]
    defs: bool,
    /// Fail on the first illegal character
    #[arg(long)]
    strict: bool,
    /// Print version and exit
    #[arg(long)]
    version: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.version {
        println!(
            "{} {}",
            "tyger".bright_cyan().bold(),
            env!("CARGO_PKG_VERSION").bright_black()
        );
        return;
    }

    if cli.defs {
        output::print_defs();
        return;
    }

    if cli.file.is_none() && cli.eval.is_none() {
        if let Err(err) = repl::run() {
            eprintln!("{} {err}", "error:".red().bold());
            process::exit(1);
        }
        return;
    }

    let (source, source_path) = if let Some(code) = cli.eval {
        (code, std::path::PathBuf::from("."))
    } else {
        let file = cli.file.expect("checked above");
        match fs::read_to_string(&file) {
            Ok(s) => (s, std::path::PathBuf::from(file)),
            Err(e) => {
                eprintln!(
                    "{} could not read '{}': {e}",
                    "error:".red().bold(),
                    file.yellow()
                );
                process::exit(1);
            }
        }
    };

    let tokens = if cli.strict {
        match tyger::lex_strict(&source) {
            Ok(tokens) => tokens,
            Err(err) => {
                eprintln!("{}", format_syntax_error(&source, &source_path, &err));
                process::exit(1);
            }
        }
    } else {
        tyger::lex(&source)
    };

    output::print_tokens(&tokens, &source, cli.format);
}

fn format_syntax_error(
    source: &str,
    source_path: &std::path::Path,
    err: &tyger::errors::SyntaxError,
) -> String {
    let map = tyger::diagnostics::SourceMap::from_source(source);
    let pos = map.byte_to_pos(err.span.offset());
    format!(
        "{} at {}:{}:{}: {}",
        "syntax error".red().bold(),
        source_path.display().to_string().cyan(),
        pos.line,
        pos.col,
        err.message.bright_white()
    )
}
