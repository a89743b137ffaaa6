use owo_colors::OwoColorize;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use tyger::TokenKind;
use tyger::diagnostics::SourceMap;

use crate::output;

pub fn run() -> Result<(), ReadlineError> {
    let mut rl = DefaultEditor::new()?;

    println!(
        "{} {}",
        "tyger".bright_cyan().bold(),
        env!("CARGO_PKG_VERSION").bright_black()
    );
    println!("{}", "Type .help for REPL commands".bright_black());

    loop {
        match rl.readline("tyger> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }

                if handle_command(trimmed) {
                    continue;
                }

                let _ = rl.add_history_entry(trimmed);
                print_tokens(trimmed);
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "^C".yellow());
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "bye".bright_black());
                break;
            }
            Err(err) => {
                eprintln!("{} {err}", "repl error:".red().bold());
                break;
            }
        }
    }

    Ok(())
}

fn handle_command(trimmed: &str) -> bool {
    if trimmed == ".exit" || trimmed == "exit" {
        std::process::exit(0);
    }
    if trimmed == ".help" {
        println!("{}", ".help                show commands".bright_blue());
        println!("{}", ".exit                exit REPL".bright_blue());
        return true;
    }
    false
}

fn print_tokens(source: &str) {
    let map = SourceMap::from_source(source);
    for token in tyger::lex(source) {
        if token.kind == TokenKind::Eof {
            break;
        }
        println!("    {}", output::pretty_token(&token, &map));
    }
}
