//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::ast::ast::Expression;
use crate::ast::expressions::BooleanLiteral;
use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::lexer::tokens::{Token, TokenKind};
use crate::Position;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: Token::at(TokenKind::Illegal, "@", 2, 7),
        },
        Position { line: 2, column: 7 },
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_position_comes_from_token() {
    let error = Error::unexpected_token(
        Token::at(TokenKind::Int, "3", 4, 12),
        TokenKind::Rparen,
    );

    assert_eq!(error.get_position(), &Position { line: 4, column: 12 });
}

#[test]
fn test_unexpected_token_error() {
    let error = Error::unexpected_token(Token::new(TokenKind::Int, "3"), TokenKind::Rparen);

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(
        error.get_tip().to_string(),
        "expected `Rparen`, found `Int (\"3\")`"
    );
    assert_eq!(
        error.kind().to_string(),
        "expected next token to be Rparen, got Int (\"3\") instead"
    );
}

#[test]
fn test_missing_semicolon_tip() {
    let error = Error::unexpected_token(Token::new(TokenKind::Ident, "b"), TokenKind::Semicolon);

    assert_eq!(
        error.get_tip().to_string(),
        "expected `Semicolon`, found `Ident (\"b\")`, did you miss a semicolon?"
    );
}

#[test]
fn test_invalid_prefix_operand_error() {
    let error = Error::invalid_prefix_operand(
        Token::new(TokenKind::Minus, "-"),
        Expression::BooleanLiteral(BooleanLiteral { value: true }),
    );

    assert_eq!(error.get_error_name(), "InvalidPrefixOperand");
    assert_eq!(
        error.kind().to_string(),
        "invalid operand true for prefix operator -"
    );
}

#[test]
fn test_symbol_errors() {
    let declared = Error::symbol_already_declared(Token::new(TokenKind::Ident, "a"));
    let missing = Error::symbol_not_declared(Token::new(TokenKind::Ident, "b"));

    assert_eq!(declared.get_error_name(), "SymbolAlreadyDeclared");
    assert_eq!(declared.get_tip().to_string(), "Symbol `a` already declared");
    assert_eq!(missing.get_error_name(), "SymbolNotDeclared");
    assert_eq!(missing.kind().to_string(), "symbol \"b\" not declared");
}

#[test]
fn test_literal_conversion_keeps_message() {
    let message = "99999999999999999999".parse::<i64>().unwrap_err();
    let error = Error::literal_conversion(Token::new(TokenKind::Int, "99999999999999999999"), message);

    assert_eq!(error.get_error_name(), "LiteralConversion");
    assert_eq!(error.kind().to_string(), "number too large to fit in target type");
}

#[test]
fn test_syntax_error() {
    let error = Error::syntax(Token::new(TokenKind::Plus, "+"), "prefix parse function not defined");

    assert_eq!(error.get_error_name(), "Syntax");
    assert_eq!(error.kind().to_string(), "prefix parse function not defined: Plus");
    assert_eq!(error.get_tip().to_string(), "prefix parse function not defined");
}

#[test]
fn test_errors_compare_by_value() {
    let a = Error::unexpected_token(Token::new(TokenKind::Eof, "eof"), TokenKind::Rbrace);
    let b = Error::unexpected_token(Token::new(TokenKind::Eof, "eof"), TokenKind::Rbrace);
    let c = Error::unexpected_token(Token::new(TokenKind::Eof, "eof"), TokenKind::Rparen);

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_error_display_includes_position() {
    let error = Error::symbol_not_declared(Token::at(TokenKind::Ident, "x", 3, 9));
    assert_eq!(error.to_string(), "symbol \"x\" not declared at 3:9");
}
