use std::fmt::Display;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

use super::ast::count_siblings;

/// Binary operators, including the `dot(a, b)` and `cross(a, b)` builtins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mult,
    Dot,
    Cross,
}

impl Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mult => "*",
            BinaryOp::Dot => "dot",
            BinaryOp::Cross => "cross",
        };
        write!(f, "{}", symbol)
    }
}

/// Unary operators. `Transpose` is the `transpose(m)` builtin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Neg,
    Transpose,
}

impl Display for UnaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            UnaryOp::Neg => "-",
            UnaryOp::Transpose => "transpose",
        };
        write!(f, "{}", symbol)
    }
}

/// Expression
///
/// `A` is the annotation slot: `()` straight out of the parser, the
/// checker's semantic info afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr<A = ()> {
    pub kind: ExprKind<A>,
    pub position: Position,
    pub info: A,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind<A = ()> {
    Id(String),
    /// Raw literal text; validated by the checker.
    IntLit(String),
    PointLit(Box<[Expr<A>; 3]>),
    /// Row-major.
    MatrixLit(Box<[Expr<A>; 16]>),
    Assign {
        target: Box<Expr<A>>,
        value: Box<Expr<A>>,
    },
    Binary {
        op: BinaryOp,
        lhs: Box<Expr<A>>,
        rhs: Box<Expr<A>>,
    },
    Unary {
        op: UnaryOp,
        operand: Box<Expr<A>>,
    },
    At {
        target: Box<Expr<A>>,
        attribute: String,
    },
}

pub const POINT_COMPONENTS: usize = 3;
pub const MATRIX_COMPONENTS: usize = 16;

// Construction helpers used by the parser. Fixed-arity nodes are validated
// here; nothing downstream checks arity again.
impl Expr<()> {
    pub fn id(name: String, position: Position) -> Result<Self, Error> {
        if name.is_empty() {
            return Err(Error::new(
                ErrorImpl::EmptyPayload {
                    node: "Id".to_string(),
                },
                position,
            ));
        }

        Ok(Self::bare(ExprKind::Id(name), position))
    }

    pub fn int_lit(text: String, position: Position) -> Result<Self, Error> {
        if text.is_empty() {
            return Err(Error::new(
                ErrorImpl::EmptyPayload {
                    node: "IntLit".to_string(),
                },
                position,
            ));
        }

        Ok(Self::bare(ExprKind::IntLit(text), position))
    }

    pub fn point_lit(components: Vec<Expr>, position: Position) -> Result<Self, Error> {
        let received = count_siblings(&components);
        let components: Box<[Expr; POINT_COMPONENTS]> =
            components.try_into().map_err(|_| {
                Error::new(
                    ErrorImpl::ArityMismatch {
                        node: "Point literal".to_string(),
                        expected: POINT_COMPONENTS,
                        received,
                    },
                    position,
                )
            })?;

        Ok(Self::bare(ExprKind::PointLit(components), position))
    }

    pub fn matrix_lit(components: Vec<Expr>, position: Position) -> Result<Self, Error> {
        let received = count_siblings(&components);
        let components: Box<[Expr; MATRIX_COMPONENTS]> =
            components.try_into().map_err(|_| {
                Error::new(
                    ErrorImpl::ArityMismatch {
                        node: "Matrix literal".to_string(),
                        expected: MATRIX_COMPONENTS,
                        received,
                    },
                    position,
                )
            })?;

        Ok(Self::bare(ExprKind::MatrixLit(components), position))
    }

    pub fn assign(target: Expr, value: Expr, position: Position) -> Self {
        Self::bare(
            ExprKind::Assign {
                target: Box::new(target),
                value: Box::new(value),
            },
            position,
        )
    }

    pub fn binary(op: BinaryOp, lhs: Expr, rhs: Expr, position: Position) -> Self {
        Self::bare(
            ExprKind::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            },
            position,
        )
    }

    pub fn unary(op: UnaryOp, operand: Expr, position: Position) -> Self {
        Self::bare(
            ExprKind::Unary {
                op,
                operand: Box::new(operand),
            },
            position,
        )
    }

    pub fn at(target: Expr, attribute: String, position: Position) -> Result<Self, Error> {
        if attribute.is_empty() {
            return Err(Error::new(
                ErrorImpl::EmptyPayload {
                    node: "At".to_string(),
                },
                position,
            ));
        }

        Ok(Self::bare(
            ExprKind::At {
                target: Box::new(target),
                attribute,
            },
            position,
        ))
    }

    fn bare(kind: ExprKind, position: Position) -> Self {
        Expr {
            kind,
            position,
            info: (),
        }
    }
}
