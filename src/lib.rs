#![allow(clippy::module_inception)]

use std::fmt::Display;

pub mod ast;
pub mod compiler;
pub mod driver;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod symbols;
pub mod type_checker;

extern crate regex;

/// A 1-based (line, column) location in the source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }

    /// Used for diagnostics that are not tied to the source (build, usage).
    pub fn null() -> Self {
        Position { line: 0, column: 0 }
    }

    pub fn is_null(&self) -> bool {
        self.line == 0
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Line {}, column {}", self.line, self.column)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

#[cfg(test)]
mod tests {
    use super::Position;

    #[test]
    fn test_position_display() {
        assert_eq!(Position::new(3, 14).to_string(), "Line 3, column 14");
        assert!(Position::null().is_null());
        assert!(!Position::new(1, 1).is_null());
    }
}
