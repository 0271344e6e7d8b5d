use crate::{
    ast::{
        ast::Statement,
        expressions::Identifier,
        statements::{
            AssignStatement, BlockStatement, ContractStatement, ExpressionStatement,
            FunctionStatement, IfStatement, ReassignStatement, ReturnStatement,
        },
        types::DataType,
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{
    expr::{parse_expression, parse_function},
    lookups::Precedence,
    parser::Parser,
};

/// Parses `contract { <function>* }` followed by the end of the stream.
pub fn parse_contract(parser: &mut Parser) -> Result<ContractStatement, Error> {
    parser.skip_terminators();
    parser.expect_next(TokenKind::Contract)?;
    parser.expect_next(TokenKind::Lbrace)?;

    let mut functions = vec![];

    loop {
        parser.skip_terminators();

        match parser.current_token_kind() {
            TokenKind::Rbrace => {
                parser.read();
                break;
            }
            TokenKind::Function => {
                functions.push(parse_function_statement(parser)?);
                expect_terminator(parser)?;
            }
            _ => {
                return Err(Error::unexpected_token(
                    parser.current_token().clone(),
                    TokenKind::Rbrace,
                ))
            }
        }
    }

    parser.skip_terminators();
    if !parser.cur_token_is(TokenKind::Eof) {
        return Err(Error::unexpected_token(
            parser.current_token().clone(),
            TokenKind::Eof,
        ));
    }

    Ok(ContractStatement { functions })
}

/// After a statement only a terminator or the end of the enclosing body may
/// follow.
fn expect_terminator(parser: &Parser) -> Result<(), Error> {
    if parser
        .current_token()
        .is_one_of_many(&[TokenKind::Semicolon, TokenKind::Rbrace, TokenKind::Eof])
    {
        Ok(())
    } else {
        Err(Error::unexpected_token(
            parser.current_token().clone(),
            TokenKind::Semicolon,
        ))
    }
}

pub fn parse_statement(parser: &mut Parser) -> Result<Statement, Error> {
    let kind = parser.current_token_kind();
    tracing::trace!(token = %parser.current_token(), depth = parser.scopes().depth(), "parse statement");

    match kind {
        TokenKind::IntType | TokenKind::StringType | TokenKind::BoolType => {
            parse_assign_statement(parser).map(Statement::Assign)
        }
        TokenKind::If => parse_if_statement(parser).map(Statement::If),
        TokenKind::Return => parse_return_statement(parser).map(Statement::Return),
        TokenKind::Ident if parser.next_token_is(TokenKind::Assign) => {
            parse_reassign_statement(parser).map(Statement::Reassign)
        }
        TokenKind::Ident => parse_expression_statement(parser).map(Statement::Expression),
        _ => Err(Error::unexpected_token(
            parser.current_token().clone(),
            TokenKind::Ident,
        )),
    }
}

pub fn parse_function_statement(parser: &mut Parser) -> Result<FunctionStatement, Error> {
    let function = parse_function(parser)?;
    Ok(FunctionStatement { function })
}

/// Parses `{ <statement>* }` in a new child scope. The scope is left again on
/// both the success and the error path.
pub fn parse_block_statement(parser: &mut Parser) -> Result<BlockStatement, Error> {
    parser.expect_next(TokenKind::Lbrace)?;

    parser.scopes_mut().enter_scope();
    let block = parse_block_body(parser);
    parser.scopes_mut().leave_scope();

    block
}

fn parse_block_body(parser: &mut Parser) -> Result<BlockStatement, Error> {
    let mut statements = vec![];

    loop {
        parser.skip_terminators();

        match parser.current_token_kind() {
            TokenKind::Rbrace => {
                parser.read();
                return Ok(BlockStatement { statements });
            }
            TokenKind::Eof => {
                return Err(Error::unexpected_token(
                    parser.current_token().clone(),
                    TokenKind::Rbrace,
                ))
            }
            _ => {
                statements.push(parse_statement(parser)?);
                expect_terminator(parser)?;
            }
        }
    }
}

pub fn parse_if_statement(parser: &mut Parser) -> Result<IfStatement, Error> {
    parser.expect_next(TokenKind::If)?;
    parser.expect_next(TokenKind::Lparen)?;
    let condition = parse_expression(parser, Precedence::Lowest)?;
    parser.expect_next(TokenKind::Rparen)?;

    let consequence = parse_block_statement(parser)?;

    let alternative = if parser.cur_token_is(TokenKind::Else) {
        parser.read();
        Some(parse_block_statement(parser)?)
    } else {
        None
    };

    Ok(IfStatement {
        condition,
        consequence,
        alternative,
    })
}

pub fn parse_return_statement(parser: &mut Parser) -> Result<ReturnStatement, Error> {
    parser.expect_next(TokenKind::Return)?;

    if parser
        .current_token()
        .is_one_of_many(&[TokenKind::Semicolon, TokenKind::Rbrace, TokenKind::Eof])
    {
        return Ok(ReturnStatement { value: None });
    }

    let value = parse_expression(parser, Precedence::Lowest)?;
    Ok(ReturnStatement { value: Some(value) })
}

/// Parses `<type> <name> = <expr>`. The name is declared before the `=` is
/// checked, and the value's type is not compared with the declared one.
pub fn parse_assign_statement(parser: &mut Parser) -> Result<AssignStatement, Error> {
    let type_token = parser.read();
    let ident = parser.expect_next(TokenKind::Ident)?;

    // `void` and `func` never name a variable type
    let data_type = match DataType::from_keyword(type_token.kind) {
        Some(data_type) if type_token.kind.is_data_type() => data_type,
        _ => {
            return Err(Error::syntax(
                type_token.clone(),
                format!("unexpected symbol type [{}]", type_token.kind),
            ))
        }
    };
    parser.declare_symbol(&ident, &type_token)?;

    parser.expect_next(TokenKind::Assign)?;
    let value = parse_expression(parser, Precedence::Lowest)?;

    Ok(AssignStatement {
        data_type,
        variable: Identifier::new(ident.value),
        value,
    })
}

pub fn parse_reassign_statement(parser: &mut Parser) -> Result<ReassignStatement, Error> {
    let ident = parser.expect_next(TokenKind::Ident)?;
    if parser.scopes().resolve(&ident.value).is_none() {
        return Err(Error::symbol_not_declared(ident));
    }

    parser.expect_next(TokenKind::Assign)?;
    let value = parse_expression(parser, Precedence::Lowest)?;

    Ok(ReassignStatement {
        variable: Identifier::new(ident.value),
        value,
    })
}

/// Parses a call used as a statement, `<name>(<args>)`.
pub fn parse_expression_statement(parser: &mut Parser) -> Result<ExpressionStatement, Error> {
    let token = parser.current_token().clone();
    if token.kind != TokenKind::Ident {
        return Err(Error::unexpected_token(token, TokenKind::Ident));
    }
    if parser.scopes().resolve(&token.value).is_none() {
        return Err(Error::symbol_not_declared(token));
    }
    if !parser.next_token_is(TokenKind::Lparen) {
        return Err(Error::unexpected_token(
            parser.next_token().clone(),
            TokenKind::Lparen,
        ));
    }

    let expression = parse_expression(parser, Precedence::Lowest)?;
    Ok(ExpressionStatement { expression })
}
