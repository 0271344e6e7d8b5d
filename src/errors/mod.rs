//! Error types and error handling for the front end.
//!
//! Every failure raised while lexing or parsing is one of the variants of
//! [`errors::ErrorImpl`], wrapped together with the position of the offending
//! token. Parsing stops at the first error.

pub mod errors;

#[cfg(test)]
mod tests;
