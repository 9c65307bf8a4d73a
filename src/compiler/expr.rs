use crate::{
    ast::{
        ast::NodeRef,
        expressions::{BinaryOp, ExprKind, UnaryOp},
    },
    errors::errors::{Error, ErrorImpl},
    type_checker::{
        lattice::{attribute_offset, parse_int_literal, parse_negated_int_literal},
        typed_ast::TypedExpr,
    },
    Position,
};

use super::{
    dispatch::{binary_lowering, unary_lowering, ArgOrder, Lowering},
    runtime::{MATRIX_FROM_COMPS, VECTOR_FROM_COMPS},
};

/// Every source variable is emitted with this prefix. No prefixed name is a
/// C keyword, `main`, or a runtime or libc symbol.
pub const VARIABLE_PREFIX: &str = "hc_";

/// The C name of the source variable `name`.
pub fn c_variable(name: &str) -> String {
    format!("{}{}", VARIABLE_PREFIX, name)
}

/// Renders `expression` as a C expression.
///
/// Lowering is chosen from the annotations alone. A node the checker should
/// have rejected comes back as a translation error and nothing of it is
/// emitted.
pub fn gen_expression(expression: &TypedExpr) -> Result<String, Error> {
    match &expression.kind {
        ExprKind::Id(name) => Ok(c_variable(name)),
        ExprKind::IntLit(text) => gen_int_literal(text, expression.position),
        ExprKind::PointLit(components) => Ok(format!(
            "{}({}, 1)",
            VECTOR_FROM_COMPS,
            gen_components(components.as_slice())?
        )),
        ExprKind::MatrixLit(components) => Ok(format!(
            "{}({})",
            MATRIX_FROM_COMPS,
            gen_components(components.as_slice())?
        )),
        ExprKind::Assign { target, value } => Ok(format!("({})", gen_assignment(target, value)?)),
        ExprKind::Binary { op, lhs, rhs } => gen_binary(*op, lhs, rhs, expression.position),
        ExprKind::Unary { op, operand } => gen_unary(*op, operand, expression.position),
        ExprKind::At { target, attribute } => gen_member(target, attribute, expression.position),
    }
}

/// `target = value`, without parentheses.
pub fn gen_assignment(target: &TypedExpr, value: &TypedExpr) -> Result<String, Error> {
    Ok(format!(
        "{} = {}",
        gen_lvalue(target)?,
        gen_expression(value)?
    ))
}

/// Renders an assignable expression. An assignment used as a place
/// evaluates the assignment and then designates its target.
pub fn gen_lvalue(expression: &TypedExpr) -> Result<String, Error> {
    match &expression.kind {
        ExprKind::Id(name) => Ok(c_variable(name)),
        ExprKind::At { target, attribute } => gen_member(target, attribute, expression.position),
        ExprKind::Assign { target, value } => Ok(format!(
            "(*({}, &{}))",
            gen_assignment(target, value)?,
            gen_place(target)?
        )),
        _ => Err(unexpected_node(expression)),
    }
}

/// The storage an lvalue designates, with any assignments stripped off.
fn gen_place(expression: &TypedExpr) -> Result<String, Error> {
    match &expression.kind {
        ExprKind::Id(name) => Ok(c_variable(name)),
        ExprKind::Assign { target, .. } => gen_place(target),
        ExprKind::At { target, attribute } => Ok(format!(
            "{}.comps[{}]",
            gen_place(target)?,
            component_index(target, attribute, expression.position)?
        )),
        _ => Err(unexpected_node(expression)),
    }
}

fn gen_int_literal(text: &str, position: Position) -> Result<String, Error> {
    match parse_int_literal(text) {
        Some(value) => Ok(value.to_string()),
        None => Err(Error::new(
            ErrorImpl::UnexpectedNode {
                node: format!("IntLit({})", text),
            },
            position,
        )),
    }
}

/// `INT_MIN` has no positive literal in C, so it is spelled as a difference.
fn gen_negated_int_literal(text: &str, position: Position) -> Result<String, Error> {
    match parse_negated_int_literal(text) {
        Some(i32::MIN) => Ok(format!("({} - 1)", i32::MIN + 1)),
        Some(value) => Ok(format!("-({})", -value)),
        None => Err(Error::new(
            ErrorImpl::UnexpectedNode {
                node: format!("IntLit(-{})", text),
            },
            position,
        )),
    }
}

fn gen_components(components: &[TypedExpr]) -> Result<String, Error> {
    let rendered = components
        .iter()
        .map(gen_expression)
        .collect::<Result<Vec<String>, Error>>()?;
    Ok(rendered.join(", "))
}

fn gen_binary(
    op: BinaryOp,
    lhs: &TypedExpr,
    rhs: &TypedExpr,
    position: Position,
) -> Result<String, Error> {
    let lowering = binary_lowering(op, lhs.ty(), rhs.ty()).ok_or_else(|| {
        Error::new(
            ErrorImpl::UnexpectedOperands {
                operator: op.to_string(),
                lhs: lhs.ty().to_string(),
                rhs: rhs.ty().to_string(),
            },
            position,
        )
    })?;

    let lhs = gen_expression(lhs)?;
    let rhs = gen_expression(rhs)?;

    Ok(match lowering {
        Lowering::Native(operator) => format!("({} {} {})", lhs, operator, rhs),
        Lowering::Call {
            name,
            order: ArgOrder::Source,
        } => format!("{}({}, {})", name, lhs, rhs),
        Lowering::Call {
            name,
            order: ArgOrder::Swapped,
        } => format!("{}({}, {})", name, rhs, lhs),
    })
}

fn gen_unary(op: UnaryOp, operand: &TypedExpr, position: Position) -> Result<String, Error> {
    if let (UnaryOp::Neg, ExprKind::IntLit(text)) = (op, &operand.kind) {
        return gen_negated_int_literal(text, operand.position);
    }

    let lowering = unary_lowering(op, operand.ty()).ok_or_else(|| {
        Error::new(
            ErrorImpl::UnexpectedOperand {
                operator: op.to_string(),
                operand: operand.ty().to_string(),
            },
            position,
        )
    })?;

    let operand = gen_expression(operand)?;

    Ok(match lowering {
        Lowering::Native(operator) => format!("{}({})", operator, operand),
        Lowering::Call { name, .. } => format!("{}({})", name, operand),
    })
}

fn gen_member(target: &TypedExpr, attribute: &str, position: Position) -> Result<String, Error> {
    let index = component_index(target, attribute, position)?;
    Ok(format!("{}.comps[{}]", gen_lvalue(target)?, index))
}

fn component_index(target: &TypedExpr, attribute: &str, position: Position) -> Result<usize, Error> {
    attribute_offset(target.ty(), attribute).ok_or_else(|| {
        Error::new(
            ErrorImpl::UnexpectedOperand {
                operator: format!(".{}", attribute),
                operand: target.ty().to_string(),
            },
            position,
        )
    })
}

fn unexpected_node(expression: &TypedExpr) -> Error {
    Error::new(
        ErrorImpl::UnexpectedNode {
            node: NodeRef::Expr(expression).kind().to_string(),
        },
        expression.position,
    )
}
