//! Lexical analysis.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into tokens on demand. It handles:
//!
//! - An ordered table of anchored regex rules; the first rule matching at the cursor wins
//! - Recognition of keywords, identifiers, literals, and operators
//! - Skipping of whitespace, `//` line comments and `/* */` block comments
//! - Token spans for error reporting

pub mod lexer;
pub mod tokens;
