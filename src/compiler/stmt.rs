use std::io::Write;

use log::trace;

use crate::{
    ast::{
        expressions::ExprKind,
        statements::{TypeKeyword, VarDeclStmt},
    },
    errors::errors::{Error, ErrorImpl},
    type_checker::typed_ast::{SemInfo, SemType, TypedExpr, TypedStmt},
};

use super::{
    compiler::Compiler,
    dispatch::print_function,
    expr::{c_variable, gen_assignment, gen_expression},
    runtime::{INT_TYPE, MATRIX_IDENTITY, MATRIX_TYPE, VECTOR_TYPE, VECTOR_ZERO},
};

fn storage_type(ty: TypeKeyword) -> &'static str {
    match ty {
        TypeKeyword::Int => INT_TYPE,
        TypeKeyword::Point | TypeKeyword::Vector => VECTOR_TYPE,
        TypeKeyword::Matrix => MATRIX_TYPE,
    }
}

/// `static <type> hc_<name>;`
pub fn gen_declaration<W: Write>(
    compiler: &mut Compiler<W>,
    decl: &VarDeclStmt<SemInfo>,
) -> Result<(), Error> {
    compiler.emit_line(
        0,
        &format!("static {} {};", storage_type(decl.ty), c_variable(&decl.name)),
    )
}

/// Gives a declared variable its starting value inside `main`: the
/// initializer when there is one, otherwise zero, the zero vector or the
/// identity matrix.
pub fn gen_initialization<W: Write>(
    compiler: &mut Compiler<W>,
    decl: &VarDeclStmt<SemInfo>,
) -> Result<(), Error> {
    let name = c_variable(&decl.name);
    let line = match &decl.initializer {
        Some(initializer) => match gen_expression(initializer) {
            Ok(value) => format!("{} = {};", name, value),
            Err(error) => {
                compiler.report(error);
                return Ok(());
            }
        },
        None => match decl.ty {
            TypeKeyword::Int => format!("{} = 0;", name),
            TypeKeyword::Point | TypeKeyword::Vector => {
                format!("{}(&{});", VECTOR_ZERO, name)
            }
            TypeKeyword::Matrix => format!("{}(&{});", MATRIX_IDENTITY, name),
        },
    };

    trace!("initializing {}: {}", decl.name, line);
    compiler.emit_line(1, &line)
}

/// Emits one statement of `main`. Declarations were already handled by
/// the declaration and initialisation sections.
pub fn gen_statement<W: Write>(
    compiler: &mut Compiler<W>,
    statement: &TypedStmt,
) -> Result<(), Error> {
    let line = match statement {
        TypedStmt::VarDecl(_) => return Ok(()),
        TypedStmt::Print(print) => gen_print(&print.expression),
        TypedStmt::Expression(expr) => gen_expression_statement(expr),
    };

    match line {
        Ok(line) => {
            trace!("emitting {}", line);
            compiler.emit_line(1, &line)
        }
        Err(error) => {
            compiler.report(error);
            Ok(())
        }
    }
}

fn gen_print(expression: &TypedExpr) -> Result<String, Error> {
    let function = match print_function(expression.ty()) {
        Some(function) => function,
        None => {
            return Err(Error::new(
                ErrorImpl::UnexpectedOperand {
                    operator: "print".to_string(),
                    operand: SemType::Undefined.to_string(),
                },
                expression.position,
            ))
        }
    };

    Ok(format!("{}({});", function, gen_expression(expression)?))
}

/// A top-level assignment needs no surrounding parentheses.
fn gen_expression_statement(expr: &TypedExpr) -> Result<String, Error> {
    let code = match &expr.kind {
        ExprKind::Assign { target, value } => gen_assignment(target, value)?,
        _ => gen_expression(expr)?,
    };
    Ok(format!("{};", code))
}
