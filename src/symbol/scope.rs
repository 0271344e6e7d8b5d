use std::{
    collections::HashMap,
    fmt::{self, Display},
};

use crate::{errors::errors::Error, lexer::tokens::Token};

use super::symbol::Symbol;

/// Index of a scope inside its [`ScopeTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScopeId(usize);

impl ScopeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// One lexical scope. Holds the names declared directly in it and the ids of
/// the scopes opened while it was current.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    symbols: HashMap<String, Symbol>,
    children: Vec<ScopeId>,
    parent: Option<ScopeId>,
}

impl Scope {
    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(name)
    }

    pub fn children(&self) -> &[ScopeId] {
        &self.children
    }

    pub fn parent(&self) -> Option<ScopeId> {
        self.parent
    }

    /// Whether nothing has been declared directly in this scope.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbols of this scope ordered by name.
    pub fn symbols(&self) -> Vec<&Symbol> {
        let mut symbols: Vec<&Symbol> = self.symbols.values().collect();
        symbols.sort_by(|a, b| a.name().cmp(b.name()));
        symbols
    }
}

/// Arena of every scope opened during one parse.
///
/// Scopes are never removed, so a scope that is no longer current can still be
/// inspected through its parent's children.
#[derive(Debug, Clone)]
pub struct ScopeTree {
    scopes: Vec<Scope>,
    current: ScopeId,
}

impl Default for ScopeTree {
    fn default() -> Self {
        ScopeTree::new()
    }
}

impl ScopeTree {
    pub fn new() -> Self {
        ScopeTree {
            scopes: vec![Scope::default()],
            current: ScopeId(0),
        }
    }

    pub fn root(&self) -> ScopeId {
        ScopeId(0)
    }

    pub fn current(&self) -> ScopeId {
        self.current
    }

    pub fn get(&self, id: ScopeId) -> Option<&Scope> {
        self.scopes.get(id.0)
    }

    pub fn children(&self, id: ScopeId) -> &[ScopeId] {
        self.get(id).map(Scope::children).unwrap_or(&[])
    }

    /// Number of scopes between the current scope and the root.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut id = self.current;
        while let Some(parent) = self.scopes[id.0].parent {
            depth += 1;
            id = parent;
        }
        depth
    }

    /// Opens a child of the current scope and makes it current.
    pub fn enter_scope(&mut self) -> ScopeId {
        let id = ScopeId(self.scopes.len());
        self.scopes.push(Scope {
            parent: Some(self.current),
            ..Scope::default()
        });
        self.scopes[self.current.0].children.push(id);
        self.current = id;

        tracing::trace!(scope = id.0, depth = self.depth(), "enter scope");
        id
    }

    /// Makes the parent of the current scope current. Does nothing at the root.
    pub fn leave_scope(&mut self) {
        if let Some(parent) = self.scopes[self.current.0].parent {
            tracing::trace!(scope = self.current.0, depth = self.depth(), "leave scope");
            self.current = parent;
        }
    }

    /// Adds `symbol` to the current scope. `source` is the token that named it
    /// and is reported when the name is already taken in this scope.
    pub fn declare(&mut self, symbol: Symbol, source: &Token) -> Result<(), Error> {
        let scope = &mut self.scopes[self.current.0];
        if scope.symbols.contains_key(symbol.name()) {
            return Err(Error::symbol_already_declared(source.clone()));
        }

        scope.symbols.insert(symbol.name().to_string(), symbol);
        Ok(())
    }

    pub fn lookup_local(&self, id: ScopeId, name: &str) -> Option<&Symbol> {
        self.get(id).and_then(|scope| scope.get(name))
    }

    /// Looks `name` up from the current scope towards the root.
    pub fn resolve(&self, name: &str) -> Option<&Symbol> {
        self.resolve_from(self.current, name)
    }

    /// Looks `name` up from `id` towards the root. Siblings and children are
    /// never searched.
    pub fn resolve_from(&self, id: ScopeId, name: &str) -> Option<&Symbol> {
        let mut cursor = Some(id);
        while let Some(id) = cursor {
            let scope = self.get(id)?;
            if let Some(symbol) = scope.get(name) {
                return Some(symbol);
            }
            cursor = scope.parent;
        }
        None
    }

    /// Renders the tree one scope per line, children indented under their
    /// parent and symbols sorted by name.
    pub fn dump(&self) -> String {
        self.to_string()
    }

    fn fmt_scope(&self, f: &mut fmt::Formatter<'_>, id: ScopeId, indent: usize) -> fmt::Result {
        let Some(scope) = self.get(id) else {
            return Ok(());
        };

        write!(f, "{:indent$}scope {}", "", id.0, indent = indent * 2)?;
        if !scope.is_empty() {
            let symbols = scope
                .symbols()
                .iter()
                .map(|symbol| format!("{}: {}", symbol.name(), symbol.kind))
                .collect::<Vec<String>>()
                .join(", ");
            write!(f, " {{ {} }}", symbols)?;
        }
        writeln!(f)?;

        for child in &scope.children {
            self.fmt_scope(f, *child, indent + 1)?;
        }
        Ok(())
    }
}

impl Display for ScopeTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_scope(f, self.root(), 0)
    }
}
