use std::fmt::Display;

use crate::Position;

use super::expressions::Expr;

/// The declared type of a variable, as written in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKeyword {
    Int,
    Point,
    Vector,
    Matrix,
}

impl Display for TypeKeyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let keyword = match self {
            TypeKeyword::Int => "int",
            TypeKeyword::Point => "point",
            TypeKeyword::Vector => "vector",
            TypeKeyword::Matrix => "matrix",
        };
        write!(f, "{}", keyword)
    }
}

/// Variable Declaration Statement
///
/// `position` is the type keyword; `name_position` is the declared name.
#[derive(Debug, Clone, PartialEq)]
pub struct VarDeclStmt<A = ()> {
    pub ty: TypeKeyword,
    pub name: String,
    pub name_position: Position,
    pub initializer: Option<Expr<A>>,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrintStmt<A = ()> {
    pub expression: Expr<A>,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt<A = ()> {
    VarDecl(VarDeclStmt<A>),
    Print(PrintStmt<A>),
    Expression(Expr<A>),
}

impl<A> Stmt<A> {
    pub fn position(&self) -> Position {
        match self {
            Stmt::VarDecl(decl) => decl.position,
            Stmt::Print(print) => print.position,
            Stmt::Expression(expr) => expr.position,
        }
    }
}

/// The root of the tree: top-level statements in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct Program<A = ()> {
    pub body: Vec<Stmt<A>>,
}

impl<A> Program<A> {
    pub fn declarations(&self) -> impl Iterator<Item = &VarDeclStmt<A>> {
        self.body.iter().filter_map(|stmt| match stmt {
            Stmt::VarDecl(decl) => Some(decl),
            _ => None,
        })
    }
}
