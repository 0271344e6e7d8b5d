use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{
    ast::ast::Expression,
    errors::errors::Error,
    lexer::{
        buffer::{PeekNumber, TokenBuffer},
        tokens::TokenKind,
    },
};

use super::{expr::*, parser::Parser};

/// Operator precedence, lowest first.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum Precedence {
    Lowest,
    LogicalOr,
    LogicalAnd,
    Equality,
    Relational,
    Sum,
    Product,
    Prefix,
    Call,
}

lazy_static! {
    pub static ref PRECEDENCE_LOOKUP: HashMap<TokenKind, Precedence> = {
        let mut map = HashMap::new();
        map.insert(TokenKind::Or, Precedence::LogicalOr);
        map.insert(TokenKind::And, Precedence::LogicalAnd);
        map.insert(TokenKind::Equals, Precedence::Equality);
        map.insert(TokenKind::NotEquals, Precedence::Equality);
        map.insert(TokenKind::Less, Precedence::Relational);
        map.insert(TokenKind::LessEquals, Precedence::Relational);
        map.insert(TokenKind::Greater, Precedence::Relational);
        map.insert(TokenKind::GreaterEquals, Precedence::Relational);
        map.insert(TokenKind::Plus, Precedence::Sum);
        map.insert(TokenKind::Minus, Precedence::Sum);
        map.insert(TokenKind::Asterisk, Precedence::Product);
        map.insert(TokenKind::Slash, Precedence::Product);
        map.insert(TokenKind::Percent, Precedence::Product);
        map.insert(TokenKind::Lparen, Precedence::Call);
        map
    };
}

/// Precedence of `kind` in operator position, `Lowest` for non-operators.
pub fn precedence_of(kind: TokenKind) -> Precedence {
    PRECEDENCE_LOOKUP
        .get(&kind)
        .copied()
        .unwrap_or(Precedence::Lowest)
}

pub fn current_precedence(buffer: &dyn TokenBuffer) -> Precedence {
    precedence_of(buffer.peek(PeekNumber::Current).kind)
}

pub fn next_precedence(buffer: &dyn TokenBuffer) -> Precedence {
    precedence_of(buffer.peek(PeekNumber::Next).kind)
}

pub type PrefixHandler = fn(&mut Parser) -> Result<Expression, Error>;
pub type InfixHandler = fn(&mut Parser, Expression) -> Result<Expression, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Logical
    parser.infix(TokenKind::Or, parse_infix_expression);
    parser.infix(TokenKind::And, parse_infix_expression);

    // Equality and relational
    parser.infix(TokenKind::Equals, parse_infix_expression);
    parser.infix(TokenKind::NotEquals, parse_infix_expression);
    parser.infix(TokenKind::Less, parse_infix_expression);
    parser.infix(TokenKind::LessEquals, parse_infix_expression);
    parser.infix(TokenKind::Greater, parse_infix_expression);
    parser.infix(TokenKind::GreaterEquals, parse_infix_expression);

    // Sum and product
    parser.infix(TokenKind::Plus, parse_infix_expression);
    parser.infix(TokenKind::Minus, parse_infix_expression);
    parser.infix(TokenKind::Asterisk, parse_infix_expression);
    parser.infix(TokenKind::Slash, parse_infix_expression);
    parser.infix(TokenKind::Percent, parse_infix_expression);

    parser.infix(TokenKind::Lparen, parse_call_expression);

    // Literals and symbols
    parser.prefix(TokenKind::Ident, parse_identifier);
    parser.prefix(TokenKind::Int, parse_integer_literal);
    parser.prefix(TokenKind::True, parse_boolean_literal);
    parser.prefix(TokenKind::False, parse_boolean_literal);
    parser.prefix(TokenKind::String, parse_string_literal);
    parser.prefix(TokenKind::Lparen, parse_grouped_expression);
    parser.prefix(TokenKind::Minus, parse_prefix_expression);
    parser.prefix(TokenKind::Bang, parse_prefix_expression);
    parser.prefix(TokenKind::Function, parse_function_literal);
}

// Lookup tables inside parser struct, one set per parse
pub type PrefixLookup = HashMap<TokenKind, PrefixHandler>;
pub type InfixLookup = HashMap<TokenKind, InfixHandler>;
