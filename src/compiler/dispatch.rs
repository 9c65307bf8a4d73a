use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{
    ast::expressions::{BinaryOp, UnaryOp},
    type_checker::typed_ast::SemType::{self, Int, Matrix, Point, Vector},
};

use super::runtime::*;

/// Argument order of a runtime call relative to the source operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgOrder {
    Source,
    Swapped,
}

/// How one operator application is spelled in C.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lowering {
    /// A C operator on `int`s.
    Native(&'static str),
    Call {
        name: &'static str,
        order: ArgOrder,
    },
}

const VECTOR_LIKE: [SemType; 2] = [Point, Vector];

fn call(name: &'static str) -> Lowering {
    Lowering::Call {
        name,
        order: ArgOrder::Source,
    }
}

fn swapped(name: &'static str) -> Lowering {
    Lowering::Call {
        name,
        order: ArgOrder::Swapped,
    }
}

lazy_static! {
    static ref BINARY_LOWERINGS: HashMap<(BinaryOp, SemType, SemType), Lowering> = {
        let mut map = HashMap::new();

        map.insert((BinaryOp::Add, Int, Int), Lowering::Native("+"));
        map.insert((BinaryOp::Sub, Int, Int), Lowering::Native("-"));
        map.insert((BinaryOp::Mult, Int, Int), Lowering::Native("*"));

        map.insert((BinaryOp::Add, Matrix, Matrix), call(MATRIX_ADD));
        map.insert((BinaryOp::Sub, Matrix, Matrix), call(MATRIX_SUB));
        map.insert((BinaryOp::Mult, Matrix, Matrix), call(MATRIX_MULT_MATRIX));

        // Scalar products always take the vector or matrix first.
        map.insert((BinaryOp::Mult, Matrix, Int), call(MATRIX_MULT_SCALAR));
        map.insert((BinaryOp::Mult, Int, Matrix), swapped(MATRIX_MULT_SCALAR));

        for vector in VECTOR_LIKE {
            map.insert((BinaryOp::Mult, vector, Int), call(VECTOR_MULT_SCALAR));
            map.insert((BinaryOp::Mult, Int, vector), swapped(VECTOR_MULT_SCALAR));
            map.insert((BinaryOp::Mult, Matrix, vector), call(MATRIX_MULT_VECTOR));
            map.insert((BinaryOp::Mult, vector, Matrix), call(VECTOR_MULT_MATRIX));

            for other in VECTOR_LIKE {
                map.insert((BinaryOp::Add, vector, other), call(VECTOR_ADD));
                map.insert((BinaryOp::Sub, vector, other), call(VECTOR_SUB));
                map.insert((BinaryOp::Dot, vector, other), call(VECTOR_DOT));
                map.insert((BinaryOp::Cross, vector, other), call(VECTOR_CROSS));
            }
        }

        map
    };

    static ref UNARY_LOWERINGS: HashMap<(UnaryOp, SemType), Lowering> = {
        let mut map = HashMap::new();

        map.insert((UnaryOp::Neg, Int), Lowering::Native("-"));
        map.insert((UnaryOp::Neg, Point), call(VECTOR_NEG));
        map.insert((UnaryOp::Neg, Vector), call(VECTOR_NEG));
        map.insert((UnaryOp::Transpose, Matrix), call(MATRIX_TRANSPOSE));

        map
    };
}

pub fn binary_lowering(op: BinaryOp, lhs: SemType, rhs: SemType) -> Option<Lowering> {
    BINARY_LOWERINGS.get(&(op, lhs, rhs)).copied()
}

pub fn unary_lowering(op: UnaryOp, operand: SemType) -> Option<Lowering> {
    UNARY_LOWERINGS.get(&(op, operand)).copied()
}

/// Runtime print routine for a value of type `ty`.
pub fn print_function(ty: SemType) -> Option<&'static str> {
    match ty {
        Int => Some(PRINT_INT),
        Point => Some(PRINT_POINT),
        Vector => Some(PRINT_VECTOR),
        Matrix => Some(PRINT_MATRIX),
        SemType::Undefined => None,
    }
}
