/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Node kinds, the uniform `NodeRef` view and sibling-list helpers
/// - expressions: Expression nodes and their validating constructors
/// - statements: Statement nodes and the program root
/// - printer: The indented debug dump
pub mod ast;
pub mod expressions;
pub mod printer;
pub mod statements;

#[cfg(test)]
mod tests;
