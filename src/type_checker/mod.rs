//! Type checking and semantic analysis module.
//!
//! This module performs type checking and semantic analysis on the AST.
//! It transforms the untyped AST into a typed AST while:
//!
//! - Resolving identifiers against the symbol table
//! - Applying the operator compatibility rules to every expression
//! - Enforcing lvalue rules for assignment and member access
//! - Validating integer literals and composite literal components
//!
//! Errors accumulate in a diagnostics collector; one pass reports every
//! semantic error in the program.

pub mod lattice;
pub mod type_checker;
pub mod typed_ast;
