use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Position;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("contract", TokenKind::Contract);
        map.insert("func", TokenKind::Function);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("return", TokenKind::Return);
        map.insert("int", TokenKind::IntType);
        map.insert("string", TokenKind::StringType);
        map.insert("bool", TokenKind::BoolType);
        map.insert("void", TokenKind::VoidType);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Illegal,
    Eof,

    Ident,
    Int,
    String,
    True,
    False,

    Lparen,
    Rparen,
    Lbrace,
    Rbrace,
    Comma,
    Semicolon, // `;` or newline

    Assign,   // =
    Equals,   // ==
    NotEquals, // !=
    Bang,     // !

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    And, // &&
    Or,  // ||

    Plus,
    Minus,
    Asterisk,
    Slash,
    Percent,

    // Reserved
    Contract,
    Function,
    If,
    Else,
    Return,

    // Types
    IntType,
    StringType,
    BoolType,
    VoidType,
}

impl TokenKind {
    /// Whether the kind is one of the type keywords usable in a declaration.
    pub fn is_data_type(&self) -> bool {
        matches!(self, TokenKind::IntType | TokenKind::StringType | TokenKind::BoolType)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A lexical unit. Two tokens are equal when their kind and literal text match,
/// regardless of where they were found.
#[derive(Debug, Clone, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub line: u32,
    pub column: u32,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>) -> Self {
        Token {
            kind,
            value: value.into(),
            line: 0,
            column: 0,
        }
    }

    pub fn at(kind: TokenKind, value: impl Into<String>, line: u32, column: u32) -> Self {
        Token {
            kind,
            value: value.into(),
            line,
            column,
        }
    }

    pub fn get_position(&self) -> Position {
        Position {
            line: self.line,
            column: self.column,
        }
    }

    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.value == other.value
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_one_of_many(&[TokenKind::Ident, TokenKind::Int, TokenKind::String]) {
            write!(f, "{} ({:?})", self.kind, self.value)
        } else {
            write!(f, "{}", self.kind)
        }
    }
}
