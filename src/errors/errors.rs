use std::fmt::Display;

use thiserror::Error;

use crate::{
    ast::ast::Expression,
    lexer::tokens::{Token, TokenKind},
    Position,
};

/// A front-end failure together with where it happened.
///
/// Errors are plain values. Two errors are equal when they describe the same
/// failure at the same position, so tests assert on them directly.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    /// The current token was not of the required kind.
    pub fn unexpected_token(token: Token, expected: TokenKind) -> Self {
        let position = token.get_position();
        Error::new(ErrorImpl::UnexpectedToken { token, expected }, position)
    }

    /// A unary operator was applied directly to a literal it cannot take.
    pub fn invalid_prefix_operand(operator: Token, operand: Expression) -> Self {
        let position = operator.get_position();
        Error::new(ErrorImpl::InvalidPrefixOperand { operator, operand }, position)
    }

    pub fn symbol_already_declared(token: Token) -> Self {
        let position = token.get_position();
        Error::new(ErrorImpl::SymbolAlreadyDeclared { token }, position)
    }

    pub fn symbol_not_declared(token: Token) -> Self {
        let position = token.get_position();
        Error::new(ErrorImpl::SymbolNotDeclared { token }, position)
    }

    /// The literal text of `token` could not be converted, `message` is the
    /// conversion failure as reported by the standard library.
    pub fn literal_conversion(token: Token, message: impl Display) -> Self {
        let position = token.get_position();
        Error::new(
            ErrorImpl::LiteralConversion {
                token,
                message: message.to_string(),
            },
            position,
        )
    }

    pub fn syntax(token: Token, reason: impl Into<String>) -> Self {
        let position = token.get_position();
        Error::new(
            ErrorImpl::Syntax {
                token,
                reason: reason.into(),
            },
            position,
        )
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::InvalidPrefixOperand { .. } => "InvalidPrefixOperand",
            ErrorImpl::SymbolAlreadyDeclared { .. } => "SymbolAlreadyDeclared",
            ErrorImpl::SymbolNotDeclared { .. } => "SymbolNotDeclared",
            ErrorImpl::LiteralConversion { .. } => "LiteralConversion",
            ErrorImpl::Syntax { .. } => "Syntax",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { token, expected } => {
                let tip = format!("expected `{}`, found `{}`", expected, token);
                if *expected == TokenKind::Semicolon {
                    ErrorTip::Suggestion(format!("{}, did you miss a semicolon?", tip))
                } else {
                    ErrorTip::Suggestion(tip)
                }
            }
            ErrorImpl::InvalidPrefixOperand { operator, operand } => ErrorTip::Suggestion(
                format!("Operator `{}` cannot be applied to `{}`", operator.value, operand),
            ),
            ErrorImpl::SymbolAlreadyDeclared { token } => {
                ErrorTip::Suggestion(format!("Symbol `{}` already declared", token.value))
            }
            ErrorImpl::SymbolNotDeclared { token } => {
                ErrorTip::Suggestion(format!("Symbol `{}` not declared", token.value))
            }
            ErrorImpl::LiteralConversion { token, message } => {
                ErrorTip::Suggestion(format!("Invalid literal `{}`: {}", token.value, message))
            }
            ErrorImpl::Syntax { reason, .. } => ErrorTip::Suggestion(reason.clone()),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.internal_error, self.position)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {:?}", .token.value)]
    UnrecognisedToken { token: Token },
    #[error("expected next token to be {expected}, got {token} instead")]
    UnexpectedToken { token: Token, expected: TokenKind },
    #[error("invalid operand {operand} for prefix operator {}", .operator.value)]
    InvalidPrefixOperand { operator: Token, operand: Expression },
    #[error("symbol {:?} already declared", .token.value)]
    SymbolAlreadyDeclared { token: Token },
    #[error("symbol {:?} not declared", .token.value)]
    SymbolNotDeclared { token: Token },
    #[error("{message}")]
    LiteralConversion { token: Token, message: String },
    #[error("{reason}: {token}")]
    Syntax { token: Token, reason: String },
}
