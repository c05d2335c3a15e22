use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use refsep::{BracketKind, locate, rewrite};

/// Prepares Java-like source for grammar-based parsing: every `::` method
/// reference qualified by a generic type-argument list gains a `:REF:`
/// marker immediately before the opening `<`.
#[derive(Parser, Debug)]
#[command(name = "refsep")]
#[command(version)]
struct Cli {
    /// Source file to scan
    input: PathBuf,

    /// Destination for the marked copy; overwritten if it exists
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    run(&Cli::parse())
}

fn run(cli: &Cli) -> Result<()> {
    let text = fs::read(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;

    let found = locate(&text);
    for unmatched in found.unmatched() {
        let (line, column) = line_column(&text, unmatched.reference);
        let bracket = match unmatched.kind {
            BracketKind::Angle => '>',
            BracketKind::Square => ']',
        };
        log::warn!(
            "{}:{line}:{column}: unmatched '{bracket}' before '::', reference left unmarked",
            cli.input.display(),
        );
    }

    let marked = rewrite(&text, found.points())?;
    fs::write(&cli.output, &marked)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;
    Ok(())
}

/// 1-based line and column of a byte offset, counted bytewise.
fn line_column(text: &[u8], offset: usize) -> (usize, usize) {
    let mut line = 1;
    let mut column = 1;
    for &byte in &text[..offset] {
        if byte == b'\n' {
            line += 1;
            column = 1;
        } else {
            column += 1;
        }
    }
    (line, column)
}
