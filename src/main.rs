use std::{fs::read_to_string, path::PathBuf, process::ExitCode, time::Instant};

use clap::{ArgAction, Parser as ClapParser};
use contractc::{
    errors::errors::Error,
    format_diagnostic,
    lexer::{buffer::TokenStream, lexer::tokenize},
    parser::parser::parse,
};
use tracing::Level;

/// Parses a contract source file and prints its syntax tree.
#[derive(ClapParser, Debug)]
#[command(name = "contractc", version, about)]
struct Cli {
    /// Contract source file
    file: PathBuf,

    /// Print the token stream before parsing
    #[arg(long)]
    tokens: bool,

    /// Print the scope tree after a successful parse
    #[arg(long)]
    scopes: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_max_level(level)
        .init();

    let file_name = cli
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| cli.file.to_string_lossy().into_owned());

    let source = match read_to_string(&cli.file) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Error: failed to read {}: {}", cli.file.display(), error);
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();

    let tokens = match tokenize(&source) {
        Ok(tokens) => tokens,
        Err(error) => return report(&error, &source, &file_name),
    };
    tracing::info!(elapsed = ?start.elapsed(), "tokenized");

    if cli.tokens {
        for token in &tokens {
            println!("{}:{} {}", token.line, token.column, token);
        }
    }

    let parse_start = Instant::now();
    let (parser, contract) = parse(TokenStream::new(tokens));
    tracing::info!(elapsed = ?parse_start.elapsed(), "parsed");

    let contract = match contract {
        Ok(contract) => contract,
        Err(error) => return report(&error, &source, &file_name),
    };

    println!("{}", contract);

    if cli.scopes {
        print!("{}", parser.scopes().dump());
    }

    tracing::info!(elapsed = ?start.elapsed(), "total");
    ExitCode::SUCCESS
}

fn report(error: &Error, source: &str, file_name: &str) -> ExitCode {
    eprintln!("{}", format_diagnostic(error, source, file_name));
    ExitCode::FAILURE
}
