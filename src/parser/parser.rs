//! Parser state and the parse entry point.
//!
//! A [`Parser`] owns everything one parse needs: the token buffer, the scope
//! tree names are declared into, and the prefix/infix handler tables. Nothing
//! is shared between parsers.

use std::collections::HashMap;

use crate::{
    ast::statements::ContractStatement,
    errors::errors::Error,
    lexer::{
        buffer::{PeekNumber, TokenBuffer},
        tokens::{Token, TokenKind},
    },
    symbol::{
        scope::ScopeTree,
        symbol::{Symbol, SymbolKind},
    },
};

use super::{
    lookups::{
        create_token_lookups, current_precedence, next_precedence, InfixHandler, InfixLookup,
        Precedence, PrefixHandler, PrefixLookup,
    },
    stmt::parse_contract,
};

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// Source of tokens, read front to back
    buffer: Box<dyn TokenBuffer + Send>,
    /// Scopes opened so far, the current one receives declarations
    scopes: ScopeTree,
    /// Lookup table for prefix expression handlers
    prefix_lookup: PrefixLookup,
    /// Lookup table for infix expression handlers
    infix_lookup: InfixLookup,
}

impl Parser {
    /// Creates a parser over `buffer` with a fresh root scope and registers
    /// every expression handler.
    pub fn new(buffer: impl TokenBuffer + Send + 'static) -> Self {
        let mut parser = Parser {
            buffer: Box::new(buffer),
            scopes: ScopeTree::new(),
            prefix_lookup: HashMap::new(),
            infix_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);
        parser
    }

    /// Returns the current token and advances past it.
    pub fn read(&mut self) -> Token {
        self.buffer.read()
    }

    pub fn peek(&self, n: PeekNumber) -> &Token {
        self.buffer.peek(n)
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        self.buffer.peek(PeekNumber::Current)
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    pub fn next_token(&self) -> &Token {
        self.buffer.peek(PeekNumber::Next)
    }

    pub fn cur_token_is(&self, kind: TokenKind) -> bool {
        self.current_token_kind() == kind
    }

    pub fn next_token_is(&self, kind: TokenKind) -> bool {
        self.next_token().kind == kind
    }

    pub fn current_precedence(&self) -> Precedence {
        current_precedence(&*self.buffer)
    }

    pub fn next_precedence(&self) -> Precedence {
        next_precedence(&*self.buffer)
    }

    /// Consumes and returns the current token if it is of `kind`. Otherwise
    /// nothing is consumed and the mismatch is returned as an error.
    pub fn expect_next(&mut self, kind: TokenKind) -> Result<Token, Error> {
        if self.cur_token_is(kind) {
            Ok(self.read())
        } else {
            Err(Error::unexpected_token(self.current_token().clone(), kind))
        }
    }

    /// Skips a run of statement terminators.
    pub fn skip_terminators(&mut self) {
        while self.cur_token_is(TokenKind::Semicolon) {
            self.read();
        }
    }

    /// Declares `ident` in the current scope as the kind of symbol `keyword`
    /// introduces.
    pub fn declare_symbol(&mut self, ident: &Token, keyword: &Token) -> Result<(), Error> {
        if self
            .scopes
            .lookup_local(self.scopes.current(), &ident.value)
            .is_some()
        {
            return Err(Error::symbol_already_declared(ident.clone()));
        }

        let Some(kind) = SymbolKind::from_keyword(keyword.kind) else {
            return Err(Error::syntax(
                keyword.clone(),
                format!("unexpected symbol type [{}]", keyword.kind),
            ));
        };

        self.scopes.declare(Symbol::new(kind, ident.value.clone()), ident)
    }

    pub fn scopes(&self) -> &ScopeTree {
        &self.scopes
    }

    pub fn scopes_mut(&mut self) -> &mut ScopeTree {
        &mut self.scopes
    }

    /// Returns a reference to the prefix lookup table.
    pub fn get_prefix_lookup(&self) -> &PrefixLookup {
        &self.prefix_lookup
    }

    /// Returns a reference to the infix lookup table.
    pub fn get_infix_lookup(&self) -> &InfixLookup {
        &self.infix_lookup
    }

    /// Registers a prefix handler for a token.
    pub fn prefix(&mut self, kind: TokenKind, prefix_fn: PrefixHandler) {
        self.prefix_lookup.insert(kind, prefix_fn);
    }

    /// Registers an infix handler for an operator token. Its precedence comes
    /// from the shared precedence table.
    pub fn infix(&mut self, kind: TokenKind, infix_fn: InfixHandler) {
        self.infix_lookup.insert(kind, infix_fn);
    }
}

/// Parses one contract from `buffer`.
///
/// # Returns
///
/// A tuple containing:
/// - The Parser instance, whose scope tree holds every declaration made
/// - Result containing either the root ContractStatement or the first Error
pub fn parse(buffer: impl TokenBuffer + Send + 'static) -> (Parser, Result<ContractStatement, Error>) {
    let mut parser = Parser::new(buffer);

    tracing::debug!("parsing contract");
    let contract = parse_contract(&mut parser);

    match &contract {
        Ok(contract) => tracing::debug!(
            functions = contract.functions.len(),
            scopes = parser.scopes().children(parser.scopes().root()).len(),
            "parsed contract"
        ),
        Err(error) => tracing::debug!(error = %error, "parse failed"),
    }

    (parser, contract)
}
