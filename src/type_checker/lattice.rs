//! Operator compatibility rules.
//!
//! Pure functions from operand types to the result type, `Undefined` when
//! the operation is not permitted. Lookups are by ordered (lhs, rhs) pair;
//! every direction is spelled out.

use super::typed_ast::SemType::{self, Int, Matrix, Point, Undefined, Vector};

pub fn can_add(lhs: SemType, rhs: SemType) -> SemType {
    match (lhs, rhs) {
        (Int, Int) => Int,
        (Matrix, Matrix) => Matrix,
        (Point, Point) => Point,
        (Point, Vector) => Point,
        (Vector, Point) => Point,
        (Vector, Vector) => Vector,
        _ => Undefined,
    }
}

pub fn can_sub(lhs: SemType, rhs: SemType) -> SemType {
    match (lhs, rhs) {
        (Int, Int) => Int,
        (Matrix, Matrix) => Matrix,
        (Point, Point) => Point,
        (Point, Vector) => Point,
        (Vector, Point) => Point,
        (Vector, Vector) => Vector,
        _ => Undefined,
    }
}

pub fn can_mult(lhs: SemType, rhs: SemType) -> SemType {
    match (lhs, rhs) {
        (Int, Int) => Int,
        (Int, Matrix) => Matrix,
        (Int, Point) => Point,
        (Int, Vector) => Vector,
        (Matrix, Int) => Matrix,
        (Point, Int) => Point,
        (Vector, Int) => Vector,
        (Matrix, Matrix) => Matrix,
        (Matrix, Point) => Point,
        (Matrix, Vector) => Vector,
        (Point, Matrix) => Point,
        (Vector, Matrix) => Vector,
        _ => Undefined,
    }
}

pub fn can_negate(operand: SemType) -> SemType {
    match operand {
        Int => Int,
        Point => Point,
        Vector => Vector,
        _ => Undefined,
    }
}

pub fn can_transpose(operand: SemType) -> SemType {
    match operand {
        Matrix => Matrix,
        _ => Undefined,
    }
}

pub fn can_dot(lhs: SemType, rhs: SemType) -> SemType {
    match (lhs, rhs) {
        (Point | Vector, Point | Vector) => Int,
        _ => Undefined,
    }
}

pub fn can_cross(lhs: SemType, rhs: SemType) -> SemType {
    match (lhs, rhs) {
        (Point | Vector, Point | Vector) => Vector,
        _ => Undefined,
    }
}

/// Lvalue-ness of the target is the caller's concern.
pub fn can_assign(lhs: SemType, rhs: SemType) -> SemType {
    match (lhs, rhs) {
        (Int, Int) => Int,
        (Matrix, Matrix) => Matrix,
        (Point, Point | Vector) => Point,
        (Vector, Point | Vector) => Vector,
        _ => Undefined,
    }
}

/// Component index of `attribute` on `target`: `x`, `y`, `z` on points and
/// vectors, `rc` (row, column in 1..=4) on matrices, row-major.
pub fn attribute_offset(target: SemType, attribute: &str) -> Option<usize> {
    match target {
        Point | Vector => match attribute {
            "x" => Some(0),
            "y" => Some(1),
            "z" => Some(2),
            _ => None,
        },
        Matrix => {
            let bytes = attribute.as_bytes();
            if bytes.len() != 2 {
                return None;
            }
            let row = (bytes[0] as char).to_digit(10)?;
            let column = (bytes[1] as char).to_digit(10)?;
            if (1..=4).contains(&row) && (1..=4).contains(&column) {
                Some(((row - 1) * 4 + (column - 1)) as usize)
            } else {
                None
            }
        }
        _ => None,
    }
}

/// Integer literal text to its value. A leading zero is only allowed for
/// `"0"` itself; out-of-range values are rejected.
pub fn parse_int_literal(text: &str) -> Option<i32> {
    if text.len() > 1 && text.starts_with('0') {
        return None;
    }
    text.parse::<i32>().ok()
}

/// Value of `-text` for a literal written directly under a unary minus.
/// This is the only way to spell `-2147483648`.
pub fn parse_negated_int_literal(text: &str) -> Option<i32> {
    if !text.bytes().all(|b| b.is_ascii_digit()) || (text.len() > 1 && text.starts_with('0')) {
        return None;
    }
    let magnitude = text.parse::<i64>().ok()?;
    i32::try_from(-magnitude).ok()
}
