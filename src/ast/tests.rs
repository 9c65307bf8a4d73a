//! Unit tests for the AST module.
//!
//! Covers the validating constructors, the `NodeRef` navigation contract and
//! the debug dump of an unannotated tree.

use super::{
    ast::{add_sibling, count_siblings, sibling_by_kind, NodeKind, NodeRef},
    expressions::{BinaryOp, Expr, ExprKind, UnaryOp},
    printer::dump,
    statements::{PrintStmt, Program, Stmt, TypeKeyword, VarDeclStmt},
};
use crate::Position;

fn pos(line: u32, column: u32) -> Position {
    Position::new(line, column)
}

fn int(text: &str) -> Expr {
    Expr::int_lit(text.to_string(), pos(1, 1)).unwrap()
}

fn id(name: &str) -> Expr {
    Expr::id(name.to_string(), pos(1, 1)).unwrap()
}

#[test]
fn test_point_literal_requires_three_components() {
    let ok = Expr::point_lit(vec![int("1"), int("2"), int("3")], pos(1, 1));
    assert!(matches!(ok.unwrap().kind, ExprKind::PointLit(_)));

    let error = Expr::point_lit(vec![int("1"), int("2")], pos(2, 4)).unwrap_err();
    assert_eq!(error.get_error_name(), "ArityMismatch");
    assert_eq!(*error.get_position(), pos(2, 4));
    assert_eq!(
        error.to_string(),
        "Line 2, column 4: Point literal requires 3 components, received 2"
    );
}

#[test]
fn test_matrix_literal_requires_sixteen_components() {
    let sixteen: Vec<Expr> = (0..16).map(|i| int(&i.to_string())).collect();
    assert!(Expr::matrix_lit(sixteen, pos(1, 1)).is_ok());

    let fifteen: Vec<Expr> = (0..15).map(|i| int(&i.to_string())).collect();
    let error = Expr::matrix_lit(fifteen, pos(1, 1)).unwrap_err();
    assert_eq!(error.get_error_name(), "ArityMismatch");
}

#[test]
fn test_empty_payloads_are_rejected() {
    assert!(Expr::id(String::new(), pos(1, 1)).is_err());
    assert!(Expr::int_lit(String::new(), pos(1, 1)).is_err());
    assert!(Expr::at(id("p"), String::new(), pos(1, 1)).is_err());
}

#[test]
fn test_add_sibling_and_count() {
    let list = add_sibling(vec![1, 2], Some(3));
    assert_eq!(list, vec![1, 2, 3]);

    let list = add_sibling(list, None);
    assert_eq!(count_siblings(&list), 3);

    let empty: Vec<i32> = vec![];
    assert_eq!(count_siblings(&empty), 0);
}

fn sample_program() -> Program {
    Program {
        body: vec![
            Stmt::VarDecl(VarDeclStmt {
                ty: TypeKeyword::Point,
                name: "p".to_string(),
                name_position: pos(1, 7),
                initializer: Some(
                    Expr::point_lit(vec![int("1"), int("2"), int("3")], pos(1, 11)).unwrap(),
                ),
                position: pos(1, 1),
            }),
            Stmt::Print(PrintStmt {
                expression: Expr::at(id("p"), "x".to_string(), pos(2, 8)).unwrap(),
                position: pos(2, 1),
            }),
            Stmt::Expression(Expr::assign(
                id("p"),
                Expr::unary(UnaryOp::Neg, id("p"), pos(3, 5)),
                pos(3, 3),
            )),
        ],
    }
}

#[test]
fn test_declaration_children() {
    let program = sample_program();
    let root = NodeRef::Program(&program);
    let decl = root.child_at(0).unwrap();

    assert_eq!(decl.kind(), NodeKind::VarDecl);
    assert_eq!(decl.child_at(0).unwrap().kind(), NodeKind::Point);

    let name = decl.child_at(1).unwrap();
    assert_eq!(name.kind(), NodeKind::Id);
    assert_eq!(name.payload(), Some("p"));
    assert_eq!(name.position(), pos(1, 7));

    assert_eq!(decl.child_at(2).unwrap().kind(), NodeKind::PointLit);
    assert!(decl.child_at(3).is_none());
}

#[test]
fn test_declaration_without_initializer_has_two_children() {
    let program: Program = Program {
        body: vec![Stmt::VarDecl(VarDeclStmt {
            ty: TypeKeyword::Matrix,
            name: "m".to_string(),
            name_position: pos(1, 8),
            initializer: None,
            position: pos(1, 1),
        })],
    };
    let decl = NodeRef::Program(&program).child_at(0).unwrap();

    assert_eq!(count_siblings(&decl.children()), 2);
    assert!(decl.child_at(2).is_none());
}

#[test]
fn test_member_access_target_is_child_zero() {
    let program = sample_program();
    let print = NodeRef::Program(&program).child_at(1).unwrap();
    let at = print.child_at(0).unwrap();

    assert_eq!(at.kind(), NodeKind::At);
    assert_eq!(at.payload(), Some("x"));
    assert_eq!(at.child_at(0).unwrap().payload(), Some("p"));
}

#[test]
fn test_sibling_by_kind() {
    let program = sample_program();
    let statements = NodeRef::Program(&program).children();

    let print = sibling_by_kind(NodeKind::Print, &statements).unwrap();
    assert_eq!(print.position(), pos(2, 1));

    let assign = sibling_by_kind(NodeKind::Assign, &statements).unwrap();
    assert_eq!(assign.position(), pos(3, 3));

    assert!(sibling_by_kind(NodeKind::MatrixLit, &statements).is_none());
}

#[test]
fn test_binary_node_children_are_ordered() {
    let expr = Expr::binary(BinaryOp::Sub, id("a"), id("b"), pos(1, 3));
    let node = NodeRef::Expr(&expr);

    assert_eq!(node.kind(), NodeKind::Sub);
    assert_eq!(node.child_at(0).unwrap().payload(), Some("a"));
    assert_eq!(node.child_at(1).unwrap().payload(), Some("b"));
}

#[test]
fn test_dump_unannotated_tree() {
    let program = sample_program();
    let expected = "\
Program
..VarDecl
....Point
....Id(p)
....PointLit
......IntLit(1)
......IntLit(2)
......IntLit(3)
..Print
....At(x)
......Id(p)
..Assign
....Id(p)
....Neg
......Id(p)
";

    assert_eq!(dump(NodeRef::Program(&program)), expected);
}
