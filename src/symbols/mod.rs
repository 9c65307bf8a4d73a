//! Symbol table for the semantic checker.
//!
//! Scopes live in an arena and refer to each other by `ScopeId`. The
//! language only ever populates the global scope, but scopes can be nested.

pub mod symbols;

#[cfg(test)]
mod tests;
