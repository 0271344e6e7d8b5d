use crate::{
    ast::{
        ast::Expression,
        expressions::{
            BooleanLiteral, CallExpression, FunctionLiteral, Identifier, InfixExpression,
            IntegerLiteral, PrefixExpression, StringLiteral,
        },
        types::{DataType, Parameter},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    symbol::symbol::SymbolKind,
};

use super::{
    lookups::{precedence_of, Precedence},
    parser::Parser,
    stmt::parse_block_statement,
};

pub fn parse_expression(parser: &mut Parser, min: Precedence) -> Result<Expression, Error> {
    // First parse the prefix
    let token_kind = parser.current_token_kind();
    let Some(prefix_fn) = parser.get_prefix_lookup().get(&token_kind).copied() else {
        return Err(Error::syntax(
            parser.current_token().clone(),
            "prefix parse function not defined",
        ));
    };

    let mut left = prefix_fn(parser)?;

    // While the operator after the operand binds tighter than `min`, keep extending lhs
    while parser.current_precedence() > min {
        let token_kind = parser.current_token_kind();
        let Some(infix_fn) = parser.get_infix_lookup().get(&token_kind).copied() else {
            break;
        };

        left = infix_fn(parser, left)?;
    }

    Ok(left)
}

pub fn parse_identifier(parser: &mut Parser) -> Result<Expression, Error> {
    let token = parser.expect_next(TokenKind::Ident)?;

    let is_function = match parser.scopes().resolve(&token.value) {
        Some(symbol) => symbol.kind == SymbolKind::Function,
        None => return Err(Error::symbol_not_declared(token)),
    };

    let identifier = Expression::Identifier(Identifier::new(token.value));
    if is_function && parser.cur_token_is(TokenKind::Lparen) {
        return parse_call_expression(parser, identifier);
    }

    Ok(identifier)
}

pub fn parse_integer_literal(parser: &mut Parser) -> Result<Expression, Error> {
    let token = parser.expect_next(TokenKind::Int)?;

    match token.value.parse::<i64>() {
        Ok(value) => Ok(Expression::IntegerLiteral(IntegerLiteral { value })),
        Err(err) => Err(Error::literal_conversion(token, err)),
    }
}

pub fn parse_boolean_literal(parser: &mut Parser) -> Result<Expression, Error> {
    if !parser
        .current_token()
        .is_one_of_many(&[TokenKind::True, TokenKind::False])
    {
        return Err(Error::unexpected_token(
            parser.current_token().clone(),
            TokenKind::BoolType,
        ));
    }

    let token = parser.read();
    match token.value.parse::<bool>() {
        Ok(value) => Ok(Expression::BooleanLiteral(BooleanLiteral { value })),
        Err(err) => Err(Error::literal_conversion(token, err)),
    }
}

pub fn parse_string_literal(parser: &mut Parser) -> Result<Expression, Error> {
    let token = parser.expect_next(TokenKind::String)?;

    Ok(Expression::StringLiteral(StringLiteral { value: token.value }))
}

pub fn parse_grouped_expression(parser: &mut Parser) -> Result<Expression, Error> {
    parser.expect_next(TokenKind::Lparen)?;
    let expression = parse_expression(parser, Precedence::Lowest)?;
    parser.expect_next(TokenKind::Rparen)?;

    Ok(expression)
}

pub fn parse_prefix_expression(parser: &mut Parser) -> Result<Expression, Error> {
    let operator = parser.read();
    let operand = parse_expression(parser, Precedence::Prefix)?;

    // Only literals written directly after the operator are checked
    let rejected = operand.is_literal()
        && match operator.kind {
            TokenKind::Minus => !matches!(operand, Expression::IntegerLiteral(_)),
            TokenKind::Bang => !matches!(operand, Expression::BooleanLiteral(_)),
            _ => false,
        };

    if rejected {
        return Err(Error::invalid_prefix_operand(operator, operand));
    }

    Ok(Expression::Prefix(PrefixExpression {
        operator,
        operand: Box::new(operand),
    }))
}

pub fn parse_infix_expression(parser: &mut Parser, left: Expression) -> Result<Expression, Error> {
    let operator = parser.read();
    let right = parse_expression(parser, precedence_of(operator.kind))?;

    Ok(Expression::Infix(InfixExpression {
        operator,
        left: Box::new(left),
        right: Box::new(right),
    }))
}

/// Parses the argument list of a call on `callee`. Only a name can be called.
pub fn parse_call_expression(parser: &mut Parser, callee: Expression) -> Result<Expression, Error> {
    if !matches!(callee, Expression::Identifier(_)) {
        return Err(Error::unexpected_token(
            parser.current_token().clone(),
            TokenKind::Ident,
        ));
    }

    let arguments = parse_call_arguments(parser)?;

    Ok(Expression::Call(CallExpression {
        callee: Box::new(callee),
        arguments,
    }))
}

/// Parses `( <expr>, ... )`.
pub fn parse_call_arguments(parser: &mut Parser) -> Result<Vec<Expression>, Error> {
    parser.expect_next(TokenKind::Lparen)?;

    let mut arguments = vec![];
    if parser.cur_token_is(TokenKind::Rparen) {
        parser.read();
        return Ok(arguments);
    }

    loop {
        arguments.push(parse_expression(parser, Precedence::Lowest)?);

        if parser.cur_token_is(TokenKind::Comma) {
            parser.read();
        } else {
            break;
        }
    }

    parser.expect_next(TokenKind::Rparen)?;
    Ok(arguments)
}

pub fn parse_function_literal(parser: &mut Parser) -> Result<Expression, Error> {
    parse_function(parser).map(Expression::FunctionLiteral)
}

/// Parses `func <name> ( <params> ) <type>? { <body> }`.
///
/// The name goes into the enclosing scope. Parameters and the body live in a
/// new child scope which is left again whether or not parsing succeeds.
pub fn parse_function(parser: &mut Parser) -> Result<FunctionLiteral, Error> {
    let keyword = parser.expect_next(TokenKind::Function)?;
    let name = parser.expect_next(TokenKind::Ident)?;
    parser.declare_symbol(&name, &keyword)?;

    parser.scopes_mut().enter_scope();
    let function = parse_function_rest(parser, Identifier::new(name.value));
    parser.scopes_mut().leave_scope();

    function
}

fn parse_function_rest(parser: &mut Parser, name: Identifier) -> Result<FunctionLiteral, Error> {
    parser.expect_next(TokenKind::Lparen)?;
    let parameters = parse_function_parameter_list(parser)?;

    let return_type = if parser.cur_token_is(TokenKind::Lbrace) {
        DataType::Void
    } else {
        match DataType::from_keyword(parser.current_token_kind()) {
            Some(data_type) => {
                parser.read();
                data_type
            }
            None => {
                return Err(Error::syntax(
                    parser.current_token().clone(),
                    "invalid function return type",
                ))
            }
        }
    };

    let body = parse_block_statement(parser)?;

    Ok(FunctionLiteral {
        name,
        parameters,
        return_type,
        body,
    })
}

/// Parses the parameters after the opening `(`, consuming the closing `)`.
/// Every parameter is declared into the current scope.
pub fn parse_function_parameter_list(parser: &mut Parser) -> Result<Vec<Parameter>, Error> {
    let mut parameters = vec![];

    if parser.cur_token_is(TokenKind::Rparen) {
        parser.read();
        return Ok(parameters);
    }

    loop {
        if !parser.cur_token_is(TokenKind::Ident) {
            return Err(Error::unexpected_token(
                parser.current_token().clone(),
                TokenKind::Rparen,
            ));
        }
        let ident = parser.read();

        let data_type = match DataType::from_keyword(parser.current_token_kind()) {
            Some(data_type) if parser.current_token().kind.is_data_type() => data_type,
            _ => {
                return Err(Error::unexpected_token(
                    parser.current_token().clone(),
                    TokenKind::Rparen,
                ))
            }
        };
        let type_token = parser.read();

        parser.declare_symbol(&ident, &type_token)?;
        parameters.push(Parameter {
            identifier: Identifier::new(ident.value),
            data_type,
        });

        match parser.current_token_kind() {
            TokenKind::Comma => {
                parser.read();
            }
            TokenKind::Rparen => {
                parser.read();
                return Ok(parameters);
            }
            _ => {
                return Err(Error::unexpected_token(
                    parser.current_token().clone(),
                    TokenKind::Rparen,
                ))
            }
        }
    }
}
