/// AST (Abstract Syntax Tree) module
/// Contains the node vocabulary a parser fills from the token stream
///
/// Submodules:
/// - ast: Node tags, the `Node` trait, the program root and definitions
/// - expressions: Definitions for the expression kinds
/// - statements: Definitions for the statement kinds
pub mod ast;
pub mod expressions;
pub mod statements;

#[cfg(test)]
mod tests;
