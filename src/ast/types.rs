//! Type annotations as they appear in source.
//!
//! The front end only records declared types. Checking values against them is
//! left to later phases.

use std::fmt::Display;

use crate::lexer::tokens::TokenKind;

use super::expressions::Identifier;

/// Represents the builtin data types that can be written in a declaration or
/// as a function return type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    Int,
    String,
    Bool,
    Void,
}

impl DataType {
    /// Maps a type keyword to its data type, `None` for any other token kind.
    pub fn from_keyword(kind: TokenKind) -> Option<DataType> {
        match kind {
            TokenKind::IntType => Some(DataType::Int),
            TokenKind::StringType => Some(DataType::String),
            TokenKind::BoolType => Some(DataType::Bool),
            TokenKind::VoidType => Some(DataType::Void),
            _ => None,
        }
    }
}

impl Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataType::Int => write!(f, "int"),
            DataType::String => write!(f, "string"),
            DataType::Bool => write!(f, "bool"),
            DataType::Void => write!(f, "void"),
        }
    }
}

/// Function Parameter
/// A `<name> <type>` pair in a function signature.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub identifier: Identifier,
    pub data_type: DataType,
}

impl Display for Parameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Parameter : (Identifier: {}, Type: {})",
            self.identifier, self.data_type
        )
    }
}
