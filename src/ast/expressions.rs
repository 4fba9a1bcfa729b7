use std::{fmt::Display, str::FromStr};

use serde::Serialize;

use super::ast::Node;

// COMPLEX

/// Assignment Expression
/// `operator` is `=` or one of the compound forms (`+=`, `-=`, `*=`, `/=`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssignmentExpression {
    pub operator: String,
    pub left: Box<Node>,
    pub right: Box<Node>,
}

/// Logical Expression
/// Kept apart from `BinaryExpression` so evaluators can short-circuit `&&` and `||`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogicalExpression {
    pub operator: String,
    pub left: Box<Node>,
    pub right: Box<Node>,
}

/// Binary Expression
/// Arithmetic, relational and equality operators.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BinaryExpression {
    pub operator: String,
    pub left: Box<Node>,
    pub right: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnaryExpression {
    pub operator: String,
    pub argument: Box<Node>,
}

/// Member Expression
/// `a.b` has `computed: false` and an `Identifier` property; `a[b]` has
/// `computed: true` and an arbitrary expression as property.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberExpression {
    pub computed: bool,
    pub object: Box<Node>,
    pub property: Box<Node>,
}

// LITERALS

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Identifier {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumericLiteral {
    pub value: NumericValue,
}

/// Value of a digit run. Runs too long for `u64` fall back to the nearest `f64`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NumericValue {
    Int(u64),
    Float(f64),
}

impl From<u64> for NumericValue {
    fn from(value: u64) -> Self {
        NumericValue::Int(value)
    }
}

impl FromStr for NumericValue {
    type Err = std::num::ParseFloatError;

    fn from_str(digits: &str) -> Result<Self, Self::Err> {
        match digits.parse::<u64>() {
            Ok(value) => Ok(NumericValue::Int(value)),
            Err(_) => digits.parse::<f64>().map(NumericValue::Float),
        }
    }
}

impl Display for NumericValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NumericValue::Int(value) => write!(f, "{}", value),
            NumericValue::Float(value) => write!(f, "{}", value),
        }
    }
}

/// String Literal
/// `value` has its surrounding quotes stripped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StringLiteral {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BooleanLiteral {
    pub value: bool,
}
