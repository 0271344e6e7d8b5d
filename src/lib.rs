#![allow(clippy::module_inception)]

use std::fmt::Display;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod symbol;

/// 1-based line and column of a token in its source. Tokens built by hand in
/// tests carry `0:0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn null() -> Self {
        Position::default()
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Returns the text of the 1-based `line` of `source` without its line ending.
pub fn get_line(source: &str, line: u32) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source
        .split('\n')
        .nth(line as usize - 1)
        .map(|text| text.trim_end_matches('\r'))
}

/// Renders `error` as a caret-marked report against `source`.
///
/// ```text
/// Error: UnexpectedToken (expected `Rparen`, found `Int ("3")`)
/// -> token.ct:3:12
///   |
/// 3 | return add(1 3)
///   | -----------^
/// ```
///
/// When the position does not point into `source` only the header lines are
/// produced.
pub fn format_diagnostic(error: &Error, source: &str, file: &str) -> String {
    Diagnostic {
        error,
        source,
        file,
    }
    .to_string()
}

struct Diagnostic<'a> {
    error: &'a Error,
    source: &'a str,
    file: &'a str,
}

impl Display for Diagnostic<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let position = self.error.get_position();

        if let ErrorTip::None = self.error.get_tip() {
            writeln!(f, "Error: {}", self.error.get_error_name())?;
        } else {
            writeln!(f, "Error: {} ({})", self.error.get_error_name(), self.error.get_tip())?;
        }
        write!(f, "-> {}:{}", self.file, position)?;

        let Some(line_text) = get_line(self.source, position.line) else {
            return Ok(());
        };

        let line_string = position.line.to_string();
        let padding = line_string.len() + 2;

        let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
        writeln!(f)?;
        writeln!(f, "{:>padding$}", "|")?;
        writeln!(f, "{} | {}", line_string, line_text_removed.trim_end())?;

        let arrows = (position.column as usize)
            .saturating_sub(removed_whitespace)
            .max(1);
        write!(f, "{:>padding$} {:->arrows$}", "|", "^")
    }
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let start = string
        .chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .count();

    (&string[start..], start)
}
