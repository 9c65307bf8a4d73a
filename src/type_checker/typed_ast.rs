//! Typed Abstract Syntax Tree definitions.
//!
//! The checker does not mutate the parsed tree. It builds a new tree of the
//! same shape whose annotation slot holds a `SemInfo` for every expression
//! node, so "every expression is annotated" holds by construction.
//!
//! This typed AST is consumed by the code generator to produce C.

use std::fmt::Display;

use crate::ast::{
    ast::Annotation,
    expressions::Expr,
    statements::{Program, Stmt, TypeKeyword},
};

/// Semantic Type
///
/// The result of type inference. `Undefined` marks a node whose check failed;
/// it is a valid annotation, not the absence of one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemType {
    Int,
    Point,
    Vector,
    Matrix,
    Undefined,
}

impl SemType {
    pub fn is_defined(&self) -> bool {
        *self != SemType::Undefined
    }

    /// Point and Vector share one runtime representation.
    pub fn is_vector_like(&self) -> bool {
        matches!(self, SemType::Point | SemType::Vector)
    }
}

impl Display for SemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SemType::Int => "INT",
            SemType::Point => "POINT",
            SemType::Vector => "VECTOR",
            SemType::Matrix => "MATRIX",
            SemType::Undefined => "UNDEF",
        };
        write!(f, "{}", name)
    }
}

impl From<TypeKeyword> for SemType {
    fn from(keyword: TypeKeyword) -> Self {
        match keyword {
            TypeKeyword::Int => SemType::Int,
            TypeKeyword::Point => SemType::Point,
            TypeKeyword::Vector => SemType::Vector,
            TypeKeyword::Matrix => SemType::Matrix,
        }
    }
}

/// Semantic annotation of one expression node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SemInfo {
    pub ty: SemType,
    pub is_lvalue: bool,
}

impl SemInfo {
    pub fn rvalue(ty: SemType) -> Self {
        SemInfo {
            ty,
            is_lvalue: false,
        }
    }

    pub fn lvalue(ty: SemType) -> Self {
        SemInfo {
            ty,
            is_lvalue: true,
        }
    }

    pub fn undefined() -> Self {
        SemInfo::rvalue(SemType::Undefined)
    }
}

impl Annotation for SemInfo {
    fn describe(&self) -> Option<String> {
        if !self.ty.is_defined() {
            return Some(format!(" - {}", self.ty));
        }

        let value = if self.is_lvalue { "Lvalue" } else { "Rvalue" };
        Some(format!(" - {} - {}", self.ty, value))
    }
}

pub type TypedExpr = Expr<SemInfo>;
pub type TypedStmt = Stmt<SemInfo>;
pub type TypedProgram = Program<SemInfo>;

impl TypedExpr {
    pub fn ty(&self) -> SemType {
        self.info.ty
    }

    pub fn is_lvalue(&self) -> bool {
        self.info.is_lvalue
    }
}
