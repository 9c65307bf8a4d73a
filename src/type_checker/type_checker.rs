use log::{debug, trace};

use crate::{
    ast::{
        expressions::{BinaryOp, Expr, ExprKind, UnaryOp},
        statements::{PrintStmt, Program, Stmt, VarDeclStmt},
    },
    errors::errors::{Diagnostics, ErrorImpl},
    symbols::symbols::{ScopeId, SymbolKind, SymbolTable},
    Position,
};

use super::{
    lattice::{
        attribute_offset, can_add, can_assign, can_cross, can_dot, can_mult, can_negate, can_sub,
        can_transpose, parse_int_literal, parse_negated_int_literal,
    },
    typed_ast::{SemInfo, SemType, TypedExpr, TypedProgram, TypedStmt},
};

/// Walks the parsed tree once, resolving names against the symbol table and
/// building the typed tree. Errors are collected, never raised: a failing
/// node is annotated `Undefined` and checking carries on.
#[derive(Debug)]
pub struct TypeChecker {
    pub symbols: SymbolTable,
    pub scope: ScopeId,
    pub diagnostics: Diagnostics,
}

impl Default for TypeChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeChecker {
    pub fn new() -> Self {
        let mut symbols = SymbolTable::new();
        let scope = symbols.create_scope("global", None);

        TypeChecker {
            symbols,
            scope,
            diagnostics: Diagnostics::new(),
        }
    }

    fn report(&mut self, error: ErrorImpl, position: Position) {
        debug!("semantic error at {}: {}", position, error);
        self.diagnostics.report(error, position);
    }

    pub fn check_program(&mut self, program: &Program) -> TypedProgram {
        let body = program
            .body
            .iter()
            .map(|stmt| self.check_stmt(stmt))
            .collect();

        TypedProgram { body }
    }

    pub fn check_stmt(&mut self, stmt: &Stmt) -> TypedStmt {
        trace!("checking statement at {}", stmt.position());
        match stmt {
            Stmt::VarDecl(decl) => Stmt::VarDecl(self.check_var_decl(decl)),
            Stmt::Print(print) => Stmt::Print(PrintStmt {
                expression: self.check_expr(&print.expression),
                position: print.position,
            }),
            Stmt::Expression(expr) => Stmt::Expression(self.check_expr(expr)),
        }
    }

    fn check_var_decl(&mut self, decl: &VarDeclStmt) -> VarDeclStmt<SemInfo> {
        let declared = SemType::from(decl.ty);

        if self.symbols.get(self.scope, &decl.name).is_some() {
            self.report(
                ErrorImpl::SymbolAlreadyDefined {
                    symbol: decl.name.clone(),
                },
                decl.name_position,
            );
        } else {
            debug!("declaring {} as {}", decl.name, declared);
            self.symbols
                .put(self.scope, SymbolKind::Var, declared, &decl.name);
        }

        let initializer = decl.initializer.as_ref().map(|init| self.check_expr(init));

        if let Some(init) = &initializer {
            // Declarations need the coerced type to be exactly the slot type.
            if init.ty().is_defined() && can_assign(declared, init.ty()) != declared {
                self.report(
                    ErrorImpl::CannotAssign {
                        lhs: declared.to_string(),
                        rhs: init.ty().to_string(),
                    },
                    init.position,
                );
            }
        }

        VarDeclStmt {
            ty: decl.ty,
            name: decl.name.clone(),
            name_position: decl.name_position,
            initializer,
            position: decl.position,
        }
    }

    pub fn check_expr(&mut self, expr: &Expr) -> TypedExpr {
        let (kind, info) = match &expr.kind {
            ExprKind::Id(name) => {
                let info = self.check_id(name, expr.position);
                (ExprKind::Id(name.clone()), info)
            }
            ExprKind::IntLit(text) => {
                let info = self.check_int_lit(text, false, expr.position);
                (ExprKind::IntLit(text.clone()), info)
            }
            ExprKind::PointLit(components) => {
                let typed = components.each_ref().map(|component| self.check_expr(component));
                let info = self.check_components("Point literal", &typed, SemType::Point);
                (ExprKind::PointLit(Box::new(typed)), info)
            }
            ExprKind::MatrixLit(components) => {
                let typed = components.each_ref().map(|component| self.check_expr(component));
                let info = self.check_components("Matrix literal", &typed, SemType::Matrix);
                (ExprKind::MatrixLit(Box::new(typed)), info)
            }
            ExprKind::Assign { target, value } => {
                let target = self.check_expr(target);
                let value = self.check_expr(value);
                let info = self.check_assign(&target, &value, expr.position);
                (
                    ExprKind::Assign {
                        target: Box::new(target),
                        value: Box::new(value),
                    },
                    info,
                )
            }
            ExprKind::Binary { op, lhs, rhs } => {
                let lhs = self.check_expr(lhs);
                let rhs = self.check_expr(rhs);
                let info = self.check_binary(*op, &lhs, &rhs, expr.position);
                (
                    ExprKind::Binary {
                        op: *op,
                        lhs: Box::new(lhs),
                        rhs: Box::new(rhs),
                    },
                    info,
                )
            }
            ExprKind::Unary { op, operand } => {
                let operand = match (op, &operand.kind) {
                    (UnaryOp::Neg, ExprKind::IntLit(text)) => TypedExpr {
                        kind: ExprKind::IntLit(text.clone()),
                        position: operand.position,
                        info: self.check_int_lit(text, true, operand.position),
                    },
                    _ => self.check_expr(operand),
                };
                let info = self.check_unary(*op, &operand, expr.position);
                (
                    ExprKind::Unary {
                        op: *op,
                        operand: Box::new(operand),
                    },
                    info,
                )
            }
            ExprKind::At { target, attribute } => {
                let target = self.check_expr(target);
                let info = self.check_at(&target, attribute, expr.position);
                (
                    ExprKind::At {
                        target: Box::new(target),
                        attribute: attribute.clone(),
                    },
                    info,
                )
            }
        };

        TypedExpr {
            kind,
            position: expr.position,
            info,
        }
    }

    /// Identifiers are always lvalues.
    fn check_id(&mut self, name: &str, position: Position) -> SemInfo {
        match self.symbols.get(self.scope, name) {
            Some(symbol) => SemInfo::lvalue(symbol.ty),
            None => {
                self.report(
                    ErrorImpl::UnknownSymbol {
                        symbol: name.to_string(),
                    },
                    position,
                );
                SemInfo::undefined()
            }
        }
    }

    /// A literal directly under a unary minus is range-checked as negative.
    fn check_int_lit(&mut self, text: &str, negated: bool, position: Position) -> SemInfo {
        let value = if negated {
            parse_negated_int_literal(text)
        } else {
            parse_int_literal(text)
        };
        match value {
            Some(_) => SemInfo::rvalue(SemType::Int),
            None => {
                self.report(
                    ErrorImpl::InvalidLiteral {
                        literal: text.to_string(),
                    },
                    position,
                );
                SemInfo::undefined()
            }
        }
    }

    /// Every component is inspected, so all their errors get reported; any
    /// bad one makes the whole literal `Undefined`.
    fn check_components(
        &mut self,
        literal: &str,
        components: &[TypedExpr],
        ty: SemType,
    ) -> SemInfo {
        let mut poisoned = false;

        for component in components {
            match component.ty() {
                SemType::Int => {}
                SemType::Undefined => poisoned = true,
                other => {
                    self.report(
                        ErrorImpl::InvalidComponent {
                            literal: literal.to_string(),
                            component: other.to_string(),
                        },
                        component.position,
                    );
                    poisoned = true;
                }
            }
        }

        if poisoned {
            SemInfo::undefined()
        } else {
            SemInfo::rvalue(ty)
        }
    }

    fn check_assign(&mut self, target: &TypedExpr, value: &TypedExpr, position: Position) -> SemInfo {
        let mut failed = false;

        if target.ty().is_defined() && !target.is_lvalue() {
            self.report(ErrorImpl::NotAnLvalue, position);
            failed = true;
        }

        if !target.ty().is_defined() || !value.ty().is_defined() {
            return SemInfo::undefined();
        }

        let result = can_assign(target.ty(), value.ty());
        if !result.is_defined() {
            self.report(
                ErrorImpl::CannotAssign {
                    lhs: target.ty().to_string(),
                    rhs: value.ty().to_string(),
                },
                position,
            );
            failed = true;
        }

        if failed {
            SemInfo::undefined()
        } else {
            SemInfo::lvalue(result)
        }
    }

    fn check_binary(
        &mut self,
        op: BinaryOp,
        lhs: &TypedExpr,
        rhs: &TypedExpr,
        position: Position,
    ) -> SemInfo {
        if !lhs.ty().is_defined() || !rhs.ty().is_defined() {
            return SemInfo::undefined();
        }

        let rule: fn(SemType, SemType) -> SemType = match op {
            BinaryOp::Add => can_add,
            BinaryOp::Sub => can_sub,
            BinaryOp::Mult => can_mult,
            BinaryOp::Dot => can_dot,
            BinaryOp::Cross => can_cross,
        };

        let result = rule(lhs.ty(), rhs.ty());
        if !result.is_defined() {
            self.report(
                ErrorImpl::BinaryConflict {
                    operator: op.to_string(),
                    lhs: lhs.ty().to_string(),
                    rhs: rhs.ty().to_string(),
                },
                position,
            );
        }

        SemInfo::rvalue(result)
    }

    fn check_unary(&mut self, op: UnaryOp, operand: &TypedExpr, position: Position) -> SemInfo {
        if !operand.ty().is_defined() {
            return SemInfo::undefined();
        }

        let result = match op {
            UnaryOp::Neg => can_negate(operand.ty()),
            UnaryOp::Transpose => can_transpose(operand.ty()),
        };

        if !result.is_defined() {
            self.report(
                ErrorImpl::UnaryConflict {
                    operator: op.to_string(),
                    operand: operand.ty().to_string(),
                },
                position,
            );
        }

        SemInfo::rvalue(result)
    }

    /// Member access yields an assignable `Int`.
    fn check_at(&mut self, target: &TypedExpr, attribute: &str, position: Position) -> SemInfo {
        if !target.ty().is_defined() {
            return SemInfo::undefined();
        }

        let error = if !target.is_lvalue() {
            ErrorImpl::AttributeTargetNotLvalue
        } else if target.ty() == SemType::Int {
            ErrorImpl::UnsupportedAttributeTarget {
                target: target.ty().to_string(),
            }
        } else if attribute_offset(target.ty(), attribute).is_none() {
            ErrorImpl::InvalidAttribute {
                attribute: attribute.to_string(),
                target: target.ty().to_string(),
            }
        } else {
            return SemInfo::lvalue(SemType::Int);
        };

        self.report(error, position);
        SemInfo::undefined()
    }
}

/// Checks a whole program. The returned checker holds the populated symbol
/// table and every diagnostic reported along the way.
pub fn type_check(program: &Program) -> (TypeChecker, TypedProgram) {
    let mut checker = TypeChecker::new();
    let typed = checker.check_program(program);

    debug!(
        "semantic analysis finished with {} error(s)",
        checker.diagnostics.len()
    );
    (checker, typed)
}
