/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The tagged `Node` tree and the runtime-mode `Ast` wrapper
/// - expressions: Payloads of expression nodes
/// - statements: Payloads of statement nodes
/// - factory: The node construction strategy used by the parser
/// - sexpr: Nested-list rendering and its factory
pub mod ast;
pub mod expressions;
pub mod factory;
pub mod sexpr;
pub mod statements;
