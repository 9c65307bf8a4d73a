use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("int", TokenKind::Int);
        map.insert("point", TokenKind::Point);
        map.insert("vector", TokenKind::Vector);
        map.insert("matrix", TokenKind::Matrix);
        map.insert("print", TokenKind::Print);
        map.insert("dot", TokenKind::DotProduct);
        map.insert("cross", TokenKind::CrossProduct);
        map.insert("transpose", TokenKind::Transpose);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Number,
    Identifier,

    OpenBracket,
    CloseBracket,
    OpenParen,
    CloseParen,

    Assignment, // =

    Dot,
    Semicolon,
    Comma,

    Plus,
    Dash,
    Star,

    // Reserved
    Int,
    Point,
    Vector,
    Matrix,
    Print,
    DotProduct,
    CrossProduct,
    Transpose,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Identifier | TokenKind::Number => write!(f, "{} ({})", self.kind, self.value),
            TokenKind::EOF => write!(f, "end of input"),
            _ => write!(f, "'{}'", self.value),
        }
    }
}

impl Token {
    fn is_one_of_many(&self, tokens: &[TokenKind]) -> bool {
        tokens.contains(&self.kind)
    }

    /// One line per token, as printed by the driver in debug mode.
    pub fn debug(&self) -> String {
        if self.is_one_of_many(&[TokenKind::Identifier, TokenKind::Number]) {
            format!(
                "{}:{} {} ({})",
                self.span.start.line, self.span.start.column, self.kind, self.value
            )
        } else {
            format!(
                "{}:{} {} ()",
                self.span.start.line, self.span.start.column, self.kind
            )
        }
    }
}
