//! Symbols and the lexical scopes they are declared in.
//!
//! The parser owns one [`scope::ScopeTree`] per parse and declares and
//! resolves names in it while it descends.

pub mod scope;
pub mod symbol;

#[cfg(test)]
mod tests;
