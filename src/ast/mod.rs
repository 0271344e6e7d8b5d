/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The `Expression` and `Statement` enums
/// - expressions: Definitions for the expression nodes
/// - statements: Definitions for the statement nodes
/// - types: Declared data types and function parameters
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;
