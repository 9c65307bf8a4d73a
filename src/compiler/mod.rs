//! Code generation module for the compiler.
//!
//! This module translates the checked, annotated tree into C source that
//! calls into a small vector/matrix runtime. It handles:
//!
//! - Static declarations and initialisation of program variables
//! - Statement and expression emission
//! - Operator lowering through fixed dispatch tables
//! - The C runtime carried alongside the generated code

pub mod compiler;
pub mod dispatch;
pub mod expr;
pub mod runtime;
pub mod stmt;
