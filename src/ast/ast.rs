use std::fmt::Display;

use crate::Position;

use super::{
    expressions::{BinaryOp, Expr, ExprKind, UnaryOp},
    statements::{Program, Stmt, TypeKeyword, VarDeclStmt},
};

/// Node Kinds
///
/// The closed set of tags every node in the tree carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Program,
    VarDecl,
    Print,
    Assign,
    Id,
    IntLit,
    PointLit,
    MatrixLit,
    Add,
    Sub,
    Mult,
    Neg,
    Transpose,
    At,
    Dot,
    Cross,
    // Type keywords
    Int,
    Point,
    Vector,
    Matrix,
}

impl Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl From<BinaryOp> for NodeKind {
    fn from(op: BinaryOp) -> Self {
        match op {
            BinaryOp::Add => NodeKind::Add,
            BinaryOp::Sub => NodeKind::Sub,
            BinaryOp::Mult => NodeKind::Mult,
            BinaryOp::Dot => NodeKind::Dot,
            BinaryOp::Cross => NodeKind::Cross,
        }
    }
}

impl From<UnaryOp> for NodeKind {
    fn from(op: UnaryOp) -> Self {
        match op {
            UnaryOp::Neg => NodeKind::Neg,
            UnaryOp::Transpose => NodeKind::Transpose,
        }
    }
}

impl From<TypeKeyword> for NodeKind {
    fn from(keyword: TypeKeyword) -> Self {
        match keyword {
            TypeKeyword::Int => NodeKind::Int,
            TypeKeyword::Point => NodeKind::Point,
            TypeKeyword::Vector => NodeKind::Vector,
            TypeKeyword::Matrix => NodeKind::Matrix,
        }
    }
}

/// Annotation Trait
///
/// Implemented by whatever fills the annotation slot of the tree so the
/// dump can render it.
pub trait Annotation {
    /// Text appended to a node's dump line, or `None` for no annotation.
    fn describe(&self) -> Option<String>;
}

impl Annotation for () {
    fn describe(&self) -> Option<String> {
        None
    }
}

/// Node Reference
///
/// A borrowed, uniform view over any node of a `Program<A>`. Statements,
/// expressions and the type keyword of a declaration all look alike through
/// it: a kind tag, an optional payload, a position, an optional annotation
/// and an ordered list of children.
pub enum NodeRef<'a, A> {
    Program(&'a Program<A>),
    Stmt(&'a Stmt<A>),
    Expr(&'a Expr<A>),
    TypeKeyword(TypeKeyword, Position),
    /// The declared name of a `VarDecl`, seen as an `Id`.
    Name(&'a VarDeclStmt<A>),
}

impl<A> Clone for NodeRef<'_, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A> Copy for NodeRef<'_, A> {}

impl<'a, A> NodeRef<'a, A> {
    pub fn kind(&self) -> NodeKind {
        match *self {
            NodeRef::Program(_) => NodeKind::Program,
            NodeRef::Stmt(Stmt::VarDecl(_)) => NodeKind::VarDecl,
            NodeRef::Stmt(Stmt::Print(_)) => NodeKind::Print,
            NodeRef::Stmt(Stmt::Expression(expr)) => NodeRef::Expr(expr).kind(),
            NodeRef::Expr(expr) => match &expr.kind {
                ExprKind::Id(_) => NodeKind::Id,
                ExprKind::IntLit(_) => NodeKind::IntLit,
                ExprKind::PointLit(_) => NodeKind::PointLit,
                ExprKind::MatrixLit(_) => NodeKind::MatrixLit,
                ExprKind::Assign { .. } => NodeKind::Assign,
                ExprKind::Binary { op, .. } => (*op).into(),
                ExprKind::Unary { op, .. } => (*op).into(),
                ExprKind::At { .. } => NodeKind::At,
            },
            NodeRef::TypeKeyword(keyword, _) => keyword.into(),
            NodeRef::Name(_) => NodeKind::Id,
        }
    }

    /// Identifier name, literal text or member attribute.
    pub fn payload(&self) -> Option<&'a str> {
        match *self {
            NodeRef::Stmt(Stmt::Expression(expr)) => NodeRef::Expr(expr).payload(),
            NodeRef::Expr(expr) => match &expr.kind {
                ExprKind::Id(name) => Some(name.as_str()),
                ExprKind::IntLit(text) => Some(text.as_str()),
                ExprKind::At { attribute, .. } => Some(attribute.as_str()),
                _ => None,
            },
            NodeRef::Name(decl) => Some(decl.name.as_str()),
            _ => None,
        }
    }

    pub fn position(&self) -> Position {
        match *self {
            NodeRef::Program(program) => program
                .body
                .first()
                .map(|stmt| stmt.position())
                .unwrap_or_default(),
            NodeRef::Stmt(stmt) => stmt.position(),
            NodeRef::Expr(expr) => expr.position,
            NodeRef::TypeKeyword(_, position) => position,
            NodeRef::Name(decl) => decl.name_position,
        }
    }

    /// Only expression nodes carry annotations.
    pub fn annotation(&self) -> Option<&'a A> {
        match *self {
            NodeRef::Stmt(Stmt::Expression(expr)) => Some(&expr.info),
            NodeRef::Expr(expr) => Some(&expr.info),
            _ => None,
        }
    }

    pub fn children(&self) -> Vec<NodeRef<'a, A>> {
        match *self {
            NodeRef::Program(program) => program.body.iter().map(NodeRef::Stmt).collect(),
            NodeRef::Stmt(Stmt::VarDecl(decl)) => {
                let mut children = vec![NodeRef::TypeKeyword(decl.ty, decl.position)];
                children = add_sibling(children, Some(NodeRef::Name(decl)));
                add_sibling(children, decl.initializer.as_ref().map(NodeRef::Expr))
            }
            NodeRef::Stmt(Stmt::Print(print)) => vec![NodeRef::Expr(&print.expression)],
            NodeRef::Stmt(Stmt::Expression(expr)) => NodeRef::Expr(expr).children(),
            NodeRef::Expr(expr) => match &expr.kind {
                ExprKind::Id(_) | ExprKind::IntLit(_) => vec![],
                ExprKind::PointLit(components) => components.iter().map(NodeRef::Expr).collect(),
                ExprKind::MatrixLit(components) => components.iter().map(NodeRef::Expr).collect(),
                ExprKind::Assign { target, value } => {
                    vec![NodeRef::Expr(target), NodeRef::Expr(value)]
                }
                ExprKind::Binary { lhs, rhs, .. } => vec![NodeRef::Expr(lhs), NodeRef::Expr(rhs)],
                ExprKind::Unary { operand, .. } => vec![NodeRef::Expr(operand)],
                ExprKind::At { target, .. } => vec![NodeRef::Expr(target)],
            },
            NodeRef::TypeKeyword(..) | NodeRef::Name(_) => vec![],
        }
    }

    /// The `index`-th child (0-based), or `None` when out of range.
    ///
    /// For a declaration: 0 is the type keyword, 1 the declared name, 2 the
    /// initializer if there is one.
    pub fn child_at(&self, index: usize) -> Option<NodeRef<'a, A>> {
        self.children().get(index).copied()
    }
}

/// Appends `sibling` to the end of `list` and returns the list. A missing
/// sibling leaves the list untouched.
pub fn add_sibling<T>(mut list: Vec<T>, sibling: Option<T>) -> Vec<T> {
    if let Some(sibling) = sibling {
        list.push(sibling);
    }
    list
}

pub fn count_siblings<T>(list: &[T]) -> usize {
    list.len()
}

/// First node of `list` tagged `kind`.
pub fn sibling_by_kind<'n, 'a, A>(
    kind: NodeKind,
    list: &'n [NodeRef<'a, A>],
) -> Option<&'n NodeRef<'a, A>> {
    list.iter().find(|node| node.kind() == kind)
}
