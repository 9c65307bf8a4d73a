use std::fmt::{Display, Write};

use crate::type_checker::typed_ast::SemType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    Var,
}

impl Display for SymbolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SymbolKind::Var => write!(f, "VAR"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    pub kind: SymbolKind,
    pub ty: SemType,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct Scope {
    pub name: String,
    /// Insertion order.
    pub symbols: Vec<Symbol>,
    pub parent: Option<ScopeId>,
    pub children: Vec<ScopeId>,
}

#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    scopes: Vec<Scope>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable { scopes: vec![] }
    }

    /// Allocates a scope and links it as the last child of `parent`.
    pub fn create_scope(&mut self, name: &str, parent: Option<ScopeId>) -> ScopeId {
        let id = ScopeId(self.scopes.len());
        self.scopes.push(Scope {
            name: name.to_string(),
            symbols: vec![],
            parent,
            children: vec![],
        });

        if let Some(parent) = parent.and_then(|parent| self.scopes.get_mut(parent.0)) {
            parent.children.push(id);
        }

        id
    }

    pub fn scope(&self, id: ScopeId) -> Option<&Scope> {
        self.scopes.get(id.0)
    }

    /// Appends a symbol to `scope`. Duplicates are not checked here; callers
    /// look the name up with `get` first.
    pub fn put(&mut self, scope: ScopeId, kind: SymbolKind, ty: SemType, name: &str) {
        if let Some(scope) = self.scopes.get_mut(scope.0) {
            scope.symbols.push(Symbol {
                kind,
                ty,
                name: name.to_string(),
            });
        }
    }

    /// Looks `name` up in `scope` only; parents are not searched.
    pub fn get(&self, scope: ScopeId, name: &str) -> Option<&Symbol> {
        self.scope(scope)?
            .symbols
            .iter()
            .find(|symbol| symbol.name == name)
    }

    /// `name\tVAR\tTYPE` lines under a header, in insertion order.
    pub fn dump(&self, scope: ScopeId) -> String {
        let mut out = String::from("===== Global Symbol Table =====\n");
        if let Some(scope) = self.scope(scope) {
            for symbol in &scope.symbols {
                let _ = writeln!(out, "{}\t{}\t{}", symbol.name, symbol.kind, symbol.ty);
            }
        }
        out
    }
}
