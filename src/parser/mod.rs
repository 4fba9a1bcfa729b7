//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that pulls tokens from
//! the lexer one at a time and builds a tree with a pluggable node factory.
//! It handles:
//!
//! - Statement parsing (variables, functions, blocks, control flow)
//! - Expression parsing (assignment, logical and binary operators, unary,
//!   member access, literals)
//! - Fail-fast error reporting on the first unexpected token
//!
//! Binary operator precedence is described by the `BindingPower` levels in
//! `lookups`, folded left-associatively by a single shared routine.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;

#[cfg(test)]
mod tests;
