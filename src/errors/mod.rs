//! Error types for tokenizing and parsing.
//!
//! Lexical errors come from the lexer when no rule matches at the cursor;
//! syntax errors come from the parser's expected-token checks and assignment
//! target validation. Both abort the parse immediately.

pub mod errors;
