//! Unit tests for the symbol table.

use super::symbols::{SymbolKind, SymbolTable};
use crate::type_checker::typed_ast::SemType;

#[test]
fn test_put_and_get() {
    let mut table = SymbolTable::new();
    let global = table.create_scope("global", None);

    table.put(global, SymbolKind::Var, SemType::Point, "p");
    table.put(global, SymbolKind::Var, SemType::Int, "x");

    let symbol = table.get(global, "p").unwrap();
    assert_eq!(symbol.ty, SemType::Point);
    assert_eq!(symbol.kind, SymbolKind::Var);
    assert!(table.get(global, "q").is_none());
}

#[test]
fn test_put_does_not_check_duplicates() {
    let mut table = SymbolTable::new();
    let global = table.create_scope("global", None);

    table.put(global, SymbolKind::Var, SemType::Int, "x");
    table.put(global, SymbolKind::Var, SemType::Matrix, "x");

    assert_eq!(table.scope(global).unwrap().symbols.len(), 2);
    // The first insertion wins on lookup.
    assert_eq!(table.get(global, "x").unwrap().ty, SemType::Int);
}

#[test]
fn test_nested_scopes_are_linked() {
    let mut table = SymbolTable::new();
    let global = table.create_scope("global", None);
    let first = table.create_scope("first", Some(global));
    let second = table.create_scope("second", Some(global));

    assert_eq!(table.scope(global).unwrap().children, vec![first, second]);
    assert_eq!(table.scope(second).unwrap().parent, Some(global));
    assert_eq!(table.scope(first).unwrap().name, "first");
}

#[test]
fn test_get_does_not_search_parents() {
    let mut table = SymbolTable::new();
    let global = table.create_scope("global", None);
    let inner = table.create_scope("inner", Some(global));

    table.put(global, SymbolKind::Var, SemType::Vector, "v");

    assert!(table.get(global, "v").is_some());
    assert!(table.get(inner, "v").is_none());
}

#[test]
fn test_dump() {
    let mut table = SymbolTable::new();
    let global = table.create_scope("global", None);
    table.put(global, SymbolKind::Var, SemType::Int, "x");
    table.put(global, SymbolKind::Var, SemType::Matrix, "m");

    assert_eq!(
        table.dump(global),
        "===== Global Symbol Table =====\nx\tVAR\tINT\nm\tVAR\tMATRIX\n"
    );
}
