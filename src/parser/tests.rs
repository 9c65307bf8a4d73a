//! Unit tests for the parser module.
//!
//! This module contains tests for parsing the language constructs:
//! - Variable declarations with and without initializers
//! - Print and expression statements
//! - Operator precedence and associativity
//! - Point and matrix literals, builtins and member access
//! - Syntax errors

use super::parser::parse;
use crate::{
    ast::{
        expressions::{BinaryOp, Expr, ExprKind, UnaryOp},
        statements::{Program, Stmt, TypeKeyword},
    },
    errors::errors::Error,
    lexer::lexer::tokenize,
    Position,
};

fn parse_source(source: &str) -> Result<Program, Error> {
    parse(tokenize(source).unwrap())
}

fn single_expr(source: &str) -> Expr {
    let program = parse_source(source).unwrap();
    match program.body.into_iter().next() {
        Some(Stmt::Expression(expr)) => expr,
        other => panic!("expected an expression statement, got {:?}", other),
    }
}

#[test]
fn test_parse_variable_declarations() {
    let program = parse_source("int x; point p = (1, 2, 3);\nmatrix m;\nvector v = p;").unwrap();
    assert_eq!(program.body.len(), 4);

    let Stmt::VarDecl(decl) = &program.body[1] else {
        panic!("expected a declaration");
    };
    assert_eq!(decl.ty, TypeKeyword::Point);
    assert_eq!(decl.name, "p");
    assert_eq!(decl.position, Position::new(1, 8));
    assert_eq!(decl.name_position, Position::new(1, 14));
    assert!(matches!(
        decl.initializer.as_ref().map(|e| &e.kind),
        Some(ExprKind::PointLit(_))
    ));

    let Stmt::VarDecl(decl) = &program.body[2] else {
        panic!("expected a declaration");
    };
    assert_eq!(decl.ty, TypeKeyword::Matrix);
    assert!(decl.initializer.is_none());
}

#[test]
fn test_parse_print_statement() {
    let program = parse_source("print 1 + 2;").unwrap();

    let Stmt::Print(print) = &program.body[0] else {
        panic!("expected a print statement");
    };
    assert_eq!(print.position, Position::new(1, 1));
    assert!(matches!(
        print.expression.kind,
        ExprKind::Binary {
            op: BinaryOp::Add,
            ..
        }
    ));
}

#[test]
fn test_multiplication_binds_tighter_than_addition() {
    let expr = single_expr("a + b * c;");

    let ExprKind::Binary { op, lhs, rhs } = expr.kind else {
        panic!("expected a binary expression");
    };
    assert_eq!(op, BinaryOp::Add);
    assert_eq!(lhs.kind, ExprKind::Id("a".to_string()));
    assert!(matches!(
        rhs.kind,
        ExprKind::Binary {
            op: BinaryOp::Mult,
            ..
        }
    ));
}

#[test]
fn test_subtraction_is_left_associative() {
    let expr = single_expr("a - b - c;");

    let ExprKind::Binary { op, lhs, rhs } = expr.kind else {
        panic!("expected a binary expression");
    };
    assert_eq!(op, BinaryOp::Sub);
    assert_eq!(rhs.kind, ExprKind::Id("c".to_string()));
    assert!(matches!(
        lhs.kind,
        ExprKind::Binary {
            op: BinaryOp::Sub,
            ..
        }
    ));
}

#[test]
fn test_assignment_is_right_associative() {
    let expr = single_expr("a = b = c;");

    let ExprKind::Assign { target, value } = expr.kind else {
        panic!("expected an assignment");
    };
    assert_eq!(target.kind, ExprKind::Id("a".to_string()));
    assert!(matches!(value.kind, ExprKind::Assign { .. }));
}

#[test]
fn test_operator_position_is_operator_token() {
    let expr = single_expr("a = b * c;");

    assert_eq!(expr.position, Position::new(1, 3));
    let ExprKind::Assign { value, .. } = expr.kind else {
        panic!("expected an assignment");
    };
    assert_eq!(value.position, Position::new(1, 7));
}

#[test]
fn test_unary_minus_binds_tighter_than_multiplication() {
    let expr = single_expr("-a * b;");

    let ExprKind::Binary { op, lhs, .. } = expr.kind else {
        panic!("expected a binary expression");
    };
    assert_eq!(op, BinaryOp::Mult);
    assert!(matches!(
        lhs.kind,
        ExprKind::Unary {
            op: UnaryOp::Neg,
            ..
        }
    ));
}

#[test]
fn test_member_access_binds_tighter_than_unary_minus() {
    let expr = single_expr("-p.x;");

    let ExprKind::Unary { op, operand } = expr.kind else {
        panic!("expected a unary expression");
    };
    assert_eq!(op, UnaryOp::Neg);
    assert!(matches!(operand.kind, ExprKind::At { .. }));
}

#[test]
fn test_member_access_attributes() {
    let expr = single_expr("m.23 = p.y;");

    let ExprKind::Assign { target, value } = expr.kind else {
        panic!("expected an assignment");
    };
    let ExprKind::At { attribute, target: inner } = target.kind else {
        panic!("expected member access");
    };
    assert_eq!(attribute, "23");
    assert_eq!(inner.kind, ExprKind::Id("m".to_string()));
    assert!(matches!(value.kind, ExprKind::At { ref attribute, .. } if attribute == "y"));
}

#[test]
fn test_grouping_is_not_a_point() {
    let expr = single_expr("(a + b) * c;");

    let ExprKind::Binary { op, lhs, .. } = expr.kind else {
        panic!("expected a binary expression");
    };
    assert_eq!(op, BinaryOp::Mult);
    assert!(matches!(
        lhs.kind,
        ExprKind::Binary {
            op: BinaryOp::Add,
            ..
        }
    ));
}

#[test]
fn test_point_literal_components_may_be_expressions() {
    let expr = single_expr("(1, a + 2, -3);");

    let ExprKind::PointLit(components) = expr.kind else {
        panic!("expected a point literal");
    };
    assert_eq!(components[0].kind, ExprKind::IntLit("1".to_string()));
    assert!(matches!(components[1].kind, ExprKind::Binary { .. }));
    assert!(matches!(components[2].kind, ExprKind::Unary { .. }));
}

#[test]
fn test_matrix_literal() {
    let expr = single_expr("[1,0,0,0, 0,1,0,0, 0,0,1,0, 0,0,0,1];");

    let ExprKind::MatrixLit(components) = expr.kind else {
        panic!("expected a matrix literal");
    };
    assert_eq!(components[5].kind, ExprKind::IntLit("1".to_string()));
    assert_eq!(components[15].kind, ExprKind::IntLit("1".to_string()));
}

#[test]
fn test_builtins() {
    let expr = single_expr("dot(a, cross(b, c));");
    let ExprKind::Binary { op, rhs, .. } = expr.kind else {
        panic!("expected a binary expression");
    };
    assert_eq!(op, BinaryOp::Dot);
    assert!(matches!(
        rhs.kind,
        ExprKind::Binary {
            op: BinaryOp::Cross,
            ..
        }
    ));

    let expr = single_expr("transpose(m * n);");
    assert!(matches!(
        expr.kind,
        ExprKind::Unary {
            op: UnaryOp::Transpose,
            ..
        }
    ));
}

#[test]
fn test_point_literal_with_wrong_arity_is_a_syntax_error() {
    let error = parse_source("point p = (1, 2);").unwrap_err();

    assert_eq!(error.get_error_name(), "ArityMismatch");
    assert_eq!(*error.get_position(), Position::new(1, 11));
}

#[test]
fn test_matrix_literal_with_wrong_arity_is_a_syntax_error() {
    let error = parse_source("matrix m = [1, 2, 3];").unwrap_err();
    assert_eq!(error.get_error_name(), "ArityMismatch");
}

#[test]
fn test_missing_semicolon() {
    let error = parse_source("int x = 3\nprint x;").unwrap_err();

    assert_eq!(error.get_error_name(), "UnexpectedTokenDetailed");
    assert_eq!(*error.get_position(), Position::new(2, 1));
}

#[test]
fn test_missing_identifier_in_declaration() {
    let error = parse_source("int = 3;").unwrap_err();

    assert_eq!(error.get_error_name(), "UnexpectedTokenDetailed");
    assert_eq!(*error.get_position(), Position::new(1, 5));
}

#[test]
fn test_unexpected_token_in_expression() {
    let error = parse_source("print ;").unwrap_err();
    assert_eq!(error.get_error_name(), "UnexpectedToken");
}

#[test]
fn test_empty_program() {
    let program = parse_source("// nothing here\n").unwrap();
    assert!(program.body.is_empty());
}
