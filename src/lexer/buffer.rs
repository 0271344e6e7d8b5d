//! Sequential, peekable access to a lexed token stream.
//!
//! The parser only ever needs to look at the current token and the one after
//! it, so the lookahead offset is a two-variant enum rather than an integer.

use std::convert::TryFrom;

use super::tokens::{Token, TokenKind};

/// Lookahead offset accepted by [`TokenBuffer::peek`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeekNumber {
    /// The token `read` would return next.
    Current = 0,
    /// The token after that.
    Next = 1,
}

impl TryFrom<i32> for PeekNumber {
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(PeekNumber::Current),
            1 => Ok(PeekNumber::Next),
            other => Err(other),
        }
    }
}

pub trait TokenBuffer {
    /// Returns the current token and advances by one. Once the last token is
    /// reached the position stops moving, so it is returned on every later read.
    fn read(&mut self) -> Token;
    /// Looks at the current or next token without consuming anything.
    fn peek(&self, n: PeekNumber) -> &Token;
}

/// [`TokenBuffer`] over an owned vector of tokens.
#[derive(Debug, Clone)]
pub struct TokenStream {
    tokens: Vec<Token>,
    sp: usize,
}

impl TokenStream {
    /// Wraps `tokens`, appending an `Eof` token when the stream does not already
    /// end with one.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::Eof) {
            let (line, column) = tokens
                .last()
                .map(|token| (token.line, token.column))
                .unwrap_or((0, 0));
            tokens.push(Token::at(TokenKind::Eof, "eof", line, column));
        }

        TokenStream { tokens, sp: 0 }
    }

    pub fn position(&self) -> usize {
        self.sp
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl From<Vec<Token>> for TokenStream {
    fn from(tokens: Vec<Token>) -> Self {
        TokenStream::new(tokens)
    }
}

impl TokenBuffer for TokenStream {
    fn read(&mut self) -> Token {
        let token = self.tokens[self.sp].clone();
        if self.sp + 1 < self.tokens.len() {
            self.sp += 1;
        }
        token
    }

    fn peek(&self, n: PeekNumber) -> &Token {
        let index = (self.sp + n as usize).min(self.tokens.len() - 1);
        &self.tokens[index]
    }
}
