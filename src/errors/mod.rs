//! Error types and error handling for the compiler.
//!
//! This module defines the error types used throughout the compilation
//! process. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for every compilation phase
//! - The `Diagnostics` collector that replaces per-phase error flags

pub mod errors;
