//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token at the lexer's current line and column
//! - `MK_DEFAULT_HANDLER!` - Creates a lexer handler for fixed-text tokens
//!
//! These macros reduce boilerplate in the lexer pattern table.

/// Creates a Token positioned at the lexer cursor.
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Int, "42", lexer);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $lexer:expr) => {
        Token {
            kind: $kind,
            value: String::from($value),
            line: $lexer.line,
            column: $lexer.column,
        }
    };
}

/// Creates a handler for patterns whose match is the whole token.
///
/// The generated handler pushes a token of `$kind` carrying the matched text
/// and moves the cursor past it.
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^\\+").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Plus),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr) => {
        |lexer: &mut Lexer, matched: &str| {
            lexer.push(MK_TOKEN!($kind, matched, lexer));
            lexer.advance(matched);
        }
    };
}
