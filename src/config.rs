//! Parser configuration.
//!
//! The rendering mode is picked once, when a parser is built, and never
//! changes for that parser's lifetime.

use std::{fmt::Display, str::FromStr};

use clap::ValueEnum;
use serde::Deserialize;

/// Which node factory a configured parser uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
pub enum AstMode {
    /// Tagged records (`{"type": "Program", "body": [...]}`).
    #[default]
    #[serde(rename = "default")]
    #[value(name = "default")]
    Default,
    /// Nested lists (`["begin", [...]]`).
    #[serde(rename = "s-expression")]
    #[value(name = "s-expression")]
    SExpression,
}

impl AstMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AstMode::Default => "default",
            AstMode::SExpression => "s-expression",
        }
    }
}

impl Display for AstMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AstMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(AstMode::Default),
            "s-expression" => Ok(AstMode::SExpression),
            other => Err(format!("unknown AST mode: {:?}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct ParserOptions {
    pub mode: AstMode,
    /// Source name reported in error positions; `"shell"` when unset.
    pub file_name: Option<String>,
}

impl ParserOptions {
    pub fn with_mode(mode: AstMode) -> Self {
        ParserOptions { mode, ..Default::default() }
    }
}
