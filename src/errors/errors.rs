use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// The phase an error belongs to. The driver gates each phase on the absence
/// of errors from the previous ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Lexical,
    Syntax,
    Semantic,
    Translation,
    Build,
    Driver,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ErrorKind::Lexical => "lexical",
            ErrorKind::Syntax => "syntax",
            ErrorKind::Semantic => "semantic",
            ErrorKind::Translation => "translation",
            ErrorKind::Build => "build",
            ErrorKind::Driver => "driver",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn kind(&self) -> ErrorKind {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorKind::Lexical,
            ErrorImpl::UnexpectedToken { .. }
            | ErrorImpl::UnexpectedTokenDetailed { .. }
            | ErrorImpl::ArityMismatch { .. }
            | ErrorImpl::EmptyPayload { .. } => ErrorKind::Syntax,
            ErrorImpl::SymbolAlreadyDefined { .. }
            | ErrorImpl::UnknownSymbol { .. }
            | ErrorImpl::InvalidLiteral { .. }
            | ErrorImpl::BinaryConflict { .. }
            | ErrorImpl::UnaryConflict { .. }
            | ErrorImpl::CannotAssign { .. }
            | ErrorImpl::NotAnLvalue
            | ErrorImpl::AttributeTargetNotLvalue
            | ErrorImpl::InvalidAttribute { .. }
            | ErrorImpl::UnsupportedAttributeTarget { .. }
            | ErrorImpl::InvalidComponent { .. } => ErrorKind::Semantic,
            ErrorImpl::UnexpectedNode { .. }
            | ErrorImpl::UnexpectedOperands { .. }
            | ErrorImpl::UnexpectedOperand { .. }
            | ErrorImpl::OutputFailed { .. } => ErrorKind::Translation,
            ErrorImpl::CompilerUnavailable { .. } | ErrorImpl::BuildFailed { .. } => {
                ErrorKind::Build
            }
            ErrorImpl::FileError { .. }
            | ErrorImpl::UnknownFlag { .. }
            | ErrorImpl::UnexpectedArgument { .. }
            | ErrorImpl::ReservedOutputName { .. } => ErrorKind::Driver,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::ArityMismatch { .. } => "ArityMismatch",
            ErrorImpl::EmptyPayload { .. } => "EmptyPayload",
            ErrorImpl::SymbolAlreadyDefined { .. } => "SymbolAlreadyDefined",
            ErrorImpl::UnknownSymbol { .. } => "UnknownSymbol",
            ErrorImpl::InvalidLiteral { .. } => "InvalidLiteral",
            ErrorImpl::BinaryConflict { .. } => "BinaryConflict",
            ErrorImpl::UnaryConflict { .. } => "UnaryConflict",
            ErrorImpl::CannotAssign { .. } => "CannotAssign",
            ErrorImpl::NotAnLvalue => "NotAnLvalue",
            ErrorImpl::AttributeTargetNotLvalue => "AttributeTargetNotLvalue",
            ErrorImpl::InvalidAttribute { .. } => "InvalidAttribute",
            ErrorImpl::UnsupportedAttributeTarget { .. } => "UnsupportedAttributeTarget",
            ErrorImpl::InvalidComponent { .. } => "InvalidComponent",
            ErrorImpl::UnexpectedNode { .. } => "UnexpectedNode",
            ErrorImpl::UnexpectedOperands { .. } => "UnexpectedOperands",
            ErrorImpl::UnexpectedOperand { .. } => "UnexpectedOperand",
            ErrorImpl::OutputFailed { .. } => "OutputFailed",
            ErrorImpl::CompilerUnavailable { .. } => "CompilerUnavailable",
            ErrorImpl::BuildFailed { .. } => "BuildFailed",
            ErrorImpl::FileError { .. } => "FileError",
            ErrorImpl::UnknownFlag { .. } => "UnknownFlag",
            ErrorImpl::UnexpectedArgument { .. } => "UnexpectedArgument",
            ErrorImpl::ReservedOutputName { .. } => "ReservedOutputName",
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.position.is_null() {
            write!(f, "{}", self.internal_error)
        } else {
            write!(f, "{}: {}", self.position, self.internal_error)
        }
    }
}

impl std::error::Error for Error {}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("Unrecognised token: {token}")]
    UnrecognisedToken { token: String },
    #[error("Unexpected token: {token}")]
    UnexpectedToken { token: String },
    #[error("Unexpected token {token}, {message}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("{node} requires {expected} components, received {received}")]
    ArityMismatch {
        node: String,
        expected: usize,
        received: usize,
    },
    #[error("{node} requires a non-empty name")]
    EmptyPayload { node: String },

    #[error("Symbol {symbol} already defined")]
    SymbolAlreadyDefined { symbol: String },
    #[error("Unknown symbol {symbol}")]
    UnknownSymbol { symbol: String },
    #[error("Invalid literal {literal}")]
    InvalidLiteral { literal: String },
    #[error("Operator {operator} cannot be applied to types {lhs} and {rhs}")]
    BinaryConflict {
        operator: String,
        lhs: String,
        rhs: String,
    },
    #[error("Operator {operator} cannot be applied to type {operand}")]
    UnaryConflict { operator: String, operand: String },
    #[error("Cannot assign {rhs} to {lhs}")]
    CannotAssign { lhs: String, rhs: String },
    #[error("Left-hand expression is not an Lvalue")]
    NotAnLvalue,
    #[error("Member access target is not an Lvalue")]
    AttributeTargetNotLvalue,
    #[error("Invalid attribute {attribute} for type {target}")]
    InvalidAttribute { attribute: String, target: String },
    #[error("Type {target} has no attributes")]
    UnsupportedAttributeTarget { target: String },
    #[error("{literal} component must be INT, found {component}")]
    InvalidComponent { literal: String, component: String },

    #[error("Unexpected AST node: {node}")]
    UnexpectedNode { node: String },
    #[error("Unexpected operand types for {operator}: {lhs} and {rhs}")]
    UnexpectedOperands {
        operator: String,
        lhs: String,
        rhs: String,
    },
    #[error("Unexpected operand type for {operator}: {operand}")]
    UnexpectedOperand { operator: String, operand: String },
    #[error("Failed to write generated code: {message}")]
    OutputFailed { message: String },

    #[error("C compiler {compiler} is not available")]
    CompilerUnavailable { compiler: String },
    #[error("Build failed: {message}")]
    BuildFailed { message: String },

    #[error("{path}: {message}")]
    FileError { path: String, message: String },
    #[error("Unknown flag {flag}")]
    UnknownFlag { flag: String },
    #[error("Unexpected argument {argument}, an input file was already given")]
    UnexpectedArgument { argument: String },
    #[error("Output name {name} is reserved for the runtime library")]
    ReservedOutputName { name: String },
}

/// Accumulates every error reported during a run, in report order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagnostics {
    errors: Vec<Error>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Diagnostics { errors: vec![] }
    }

    pub fn push(&mut self, error: Error) {
        self.errors.push(error);
    }

    pub fn report(&mut self, error_impl: ErrorImpl, position: Position) {
        self.push(Error::new(error_impl, position));
    }

    pub fn extend(&mut self, other: Diagnostics) {
        self.errors.extend(other.errors);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_kind(&self, kind: ErrorKind) -> bool {
        self.errors.iter().any(|error| error.kind() == kind)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Error> {
        self.errors.iter()
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }
}

impl From<Error> for Diagnostics {
    fn from(error: Error) -> Self {
        Diagnostics {
            errors: vec![error],
        }
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Error;
    type IntoIter = std::slice::Iter<'a, Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
