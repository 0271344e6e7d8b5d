use std::fmt::Display;

use super::{
    expressions::{
        BooleanLiteral, CallExpression, FunctionLiteral, Identifier, InfixExpression,
        IntegerLiteral, PrefixExpression, StringLiteral,
    },
    statements::{
        AssignStatement, BlockStatement, ContractStatement, ExpressionStatement,
        FunctionStatement, IfStatement, ReassignStatement, ReturnStatement,
    },
};

/// Statement
///
/// Every statement form the grammar produces. Rendering a statement gives the
/// canonical text used when printing a parsed contract.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Contract(ContractStatement),
    Function(FunctionStatement),
    Block(BlockStatement),
    If(IfStatement),
    Return(ReturnStatement),
    Assign(AssignStatement),
    Reassign(ReassignStatement),
    Expression(ExpressionStatement),
}

impl Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Statement::Contract(stmt) => stmt.fmt(f),
            Statement::Function(stmt) => stmt.fmt(f),
            Statement::Block(stmt) => stmt.fmt(f),
            Statement::If(stmt) => stmt.fmt(f),
            Statement::Return(stmt) => stmt.fmt(f),
            Statement::Assign(stmt) => stmt.fmt(f),
            Statement::Reassign(stmt) => stmt.fmt(f),
            Statement::Expression(stmt) => stmt.fmt(f),
        }
    }
}

/// Expression
///
/// Defines the various kinds of expressions in the AST.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(Identifier),
    IntegerLiteral(IntegerLiteral),
    BooleanLiteral(BooleanLiteral),
    StringLiteral(StringLiteral),
    Prefix(PrefixExpression),
    Infix(InfixExpression),
    Call(CallExpression),
    FunctionLiteral(FunctionLiteral),
}

impl Expression {
    /// Whether the expression is a literal written directly in source.
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            Expression::IntegerLiteral(_)
                | Expression::BooleanLiteral(_)
                | Expression::StringLiteral(_)
        )
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expression::Identifier(expr) => expr.fmt(f),
            Expression::IntegerLiteral(expr) => expr.fmt(f),
            Expression::BooleanLiteral(expr) => expr.fmt(f),
            Expression::StringLiteral(expr) => expr.fmt(f),
            Expression::Prefix(expr) => expr.fmt(f),
            Expression::Infix(expr) => expr.fmt(f),
            Expression::Call(expr) => expr.fmt(f),
            Expression::FunctionLiteral(expr) => expr.fmt(f),
        }
    }
}
