use std::fmt::Display;

use crate::{ast::expressions::Identifier, lexer::tokens::TokenKind};

/// What a declared name stands for. Fixed by the declaring keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Integer,
    String,
    Boolean,
    Function,
}

impl SymbolKind {
    /// Maps a declaring keyword to the symbol kind it introduces.
    pub fn from_keyword(kind: TokenKind) -> Option<SymbolKind> {
        match kind {
            TokenKind::IntType => Some(SymbolKind::Integer),
            TokenKind::StringType => Some(SymbolKind::String),
            TokenKind::BoolType => Some(SymbolKind::Boolean),
            TokenKind::Function => Some(SymbolKind::Function),
            _ => None,
        }
    }
}

impl Display for SymbolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A named entry in a scope. Renders as its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub kind: SymbolKind,
    pub identifier: Identifier,
}

impl Symbol {
    pub fn new(kind: SymbolKind, name: impl Into<String>) -> Self {
        Symbol {
            kind,
            identifier: Identifier::new(name),
        }
    }

    pub fn name(&self) -> &str {
        &self.identifier.name
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.identifier)
    }
}
