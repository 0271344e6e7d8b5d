use crate::errors::errors::Error;
use crate::lexer::tokens::{Token, TokenKind};
use crate::symbol::scope::ScopeTree;
use crate::symbol::symbol::{Symbol, SymbolKind};

fn ident(name: &str) -> Token {
    Token::new(TokenKind::Ident, name)
}

#[test]
fn test_declare_and_resolve() {
    let mut tree = ScopeTree::new();
    tree.declare(Symbol::new(SymbolKind::Integer, "a"), &ident("a")).unwrap();

    let symbol = tree.resolve("a").unwrap();
    assert_eq!(symbol.kind, SymbolKind::Integer);
    assert_eq!(symbol.to_string(), "a");
    assert!(tree.resolve("b").is_none());
}

#[test]
fn test_duplicate_in_same_scope() {
    let mut tree = ScopeTree::new();
    tree.declare(Symbol::new(SymbolKind::String, "a"), &ident("a")).unwrap();

    let result = tree.declare(Symbol::new(SymbolKind::Boolean, "a"), &ident("a"));
    assert_eq!(result, Err(Error::symbol_already_declared(ident("a"))));
    assert_eq!(tree.resolve("a").unwrap().kind, SymbolKind::String);
}

#[test]
fn test_shadowing_in_child_scope() {
    let mut tree = ScopeTree::new();
    tree.declare(Symbol::new(SymbolKind::Integer, "a"), &ident("a")).unwrap();

    tree.enter_scope();
    tree.declare(Symbol::new(SymbolKind::Boolean, "a"), &ident("a")).unwrap();
    assert_eq!(tree.resolve("a").unwrap().kind, SymbolKind::Boolean);

    tree.leave_scope();
    assert_eq!(tree.resolve("a").unwrap().kind, SymbolKind::Integer);
}

#[test]
fn test_enter_leave_keeps_inner_scope() {
    let mut tree = ScopeTree::new();
    let root = tree.root();
    tree.declare(Symbol::new(SymbolKind::Integer, "outer"), &ident("outer")).unwrap();

    let inner = tree.enter_scope();
    assert_eq!(tree.current(), inner);
    assert_eq!(tree.depth(), 1);
    tree.declare(Symbol::new(SymbolKind::Integer, "inner"), &ident("inner")).unwrap();
    assert!(tree.resolve("outer").is_some());

    tree.leave_scope();
    assert_eq!(tree.current(), root);
    assert_eq!(tree.depth(), 0);
    assert!(tree.resolve("inner").is_none());
    assert_eq!(tree.children(root).last(), Some(&inner));
    assert!(tree.lookup_local(inner, "inner").is_some());
    assert!(tree.resolve_from(inner, "outer").is_some());
}

#[test]
fn test_siblings_are_not_searched() {
    let mut tree = ScopeTree::new();

    let first = tree.enter_scope();
    tree.declare(Symbol::new(SymbolKind::Integer, "x"), &ident("x")).unwrap();
    tree.leave_scope();

    let second = tree.enter_scope();
    assert!(tree.resolve("x").is_none());
    assert!(tree.resolve_from(first, "x").is_some());
    assert!(tree.lookup_local(second, "x").is_none());
}

#[test]
fn test_leave_root_is_noop() {
    let mut tree = ScopeTree::new();
    tree.leave_scope();
    assert_eq!(tree.current(), tree.root());
}

#[test]
fn test_symbol_kind_from_keyword() {
    assert_eq!(SymbolKind::from_keyword(TokenKind::IntType), Some(SymbolKind::Integer));
    assert_eq!(SymbolKind::from_keyword(TokenKind::StringType), Some(SymbolKind::String));
    assert_eq!(SymbolKind::from_keyword(TokenKind::BoolType), Some(SymbolKind::Boolean));
    assert_eq!(SymbolKind::from_keyword(TokenKind::Function), Some(SymbolKind::Function));
    assert_eq!(SymbolKind::from_keyword(TokenKind::VoidType), None);
}

#[test]
fn test_dump() {
    let mut tree = ScopeTree::new();
    tree.declare(Symbol::new(SymbolKind::Function, "main"), &ident("main")).unwrap();
    tree.enter_scope();
    tree.declare(Symbol::new(SymbolKind::String, "b"), &ident("b")).unwrap();
    tree.declare(Symbol::new(SymbolKind::Integer, "a"), &ident("a")).unwrap();
    tree.enter_scope();
    tree.leave_scope();
    tree.leave_scope();

    assert_eq!(
        tree.dump(),
        "scope 0 { main: Function }\n  scope 1 { a: Integer, b: String }\n    scope 2\n"
    );
}

#[test]
fn test_scope_is_empty() {
    let mut tree = ScopeTree::new();
    let child = tree.enter_scope();
    tree.declare(Symbol::new(SymbolKind::Boolean, "flag"), &ident("flag")).unwrap();
    tree.leave_scope();

    assert!(tree.get(tree.root()).unwrap().is_empty());
    assert!(!tree.get(child).unwrap().is_empty());
    assert_eq!(tree.to_string(), "scope 0\n  scope 1 { flag: Boolean }\n");
}
