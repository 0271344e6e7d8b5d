//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an Abstract Syntax Tree. It uses a Pratt parser for expressions
//! with a fixed operator precedence table and recursive descent for
//! statements. Names are declared and resolved against the scope tree
//! while parsing, so an undeclared identifier or a duplicate declaration
//! stops the parse immediately.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
