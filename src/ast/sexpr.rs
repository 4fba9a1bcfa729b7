//! Nested-list (S-expression) rendering of the syntax tree.
//!
//! Sequences become `["begin", [...]]`, literals are bare values and
//! expressions are operator applications such as `["+", 1, 2]`.

use std::fmt::Display;

use serde::{ser::SerializeSeq, Serialize, Serializer};

use super::{expressions::NumericValue, factory::AstFactory};

#[derive(Debug, Clone, PartialEq)]
pub enum SExpr {
    Number(NumericValue),
    /// Unquoted contents; rendered double-quoted with `"` and `\` escaped.
    String(String),
    Symbol(String),
    Bool(bool),
    Nil,
    List(Vec<SExpr>),
}

impl SExpr {
    pub fn symbol(name: &str) -> SExpr {
        SExpr::Symbol(name.to_string())
    }

    /// `(begin (stmt ...))`
    pub fn begin(body: Vec<SExpr>) -> SExpr {
        SExpr::List(vec![SExpr::symbol("begin"), SExpr::List(body)])
    }

    /// `(head items...)`
    pub fn form(head: &str, items: Vec<SExpr>) -> SExpr {
        let mut list = Vec::with_capacity(items.len() + 1);
        list.push(SExpr::symbol(head));
        list.extend(items);
        SExpr::List(list)
    }

    /// The statements of a `(begin (...))` form.
    pub fn begin_body(&self) -> Option<&[SExpr]> {
        match self {
            SExpr::List(items) => match items.as_slice() {
                [SExpr::Symbol(head), SExpr::List(body)] if head == "begin" => Some(body),
                _ => None,
            },
            _ => None,
        }
    }

    /// Head symbol of a list form.
    pub fn head(&self) -> Option<&str> {
        match self {
            SExpr::List(items) => match items.first() {
                Some(SExpr::Symbol(head)) => Some(head),
                _ => None,
            },
            _ => None,
        }
    }
}

impl Display for SExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SExpr::Number(value) => write!(f, "{}", value),
            SExpr::String(value) => write!(f, "{}", quote(value)),
            SExpr::Symbol(name) => write!(f, "{}", name),
            SExpr::Bool(value) => write!(f, "{}", value),
            SExpr::Nil => write!(f, "nil"),
            SExpr::List(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, ")")
            }
        }
    }
}

impl Serialize for SExpr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SExpr::Number(value) => value.serialize(serializer),
            SExpr::String(value) => serializer.serialize_str(&quote(value)),
            SExpr::Symbol(name) => serializer.serialize_str(name),
            SExpr::Bool(value) => serializer.serialize_bool(*value),
            SExpr::Nil => serializer.serialize_unit(),
            SExpr::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
        }
    }
}

/// `a"b` becomes `"a\"b"`.
fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        if c == '"' || c == '\\' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

fn or_nil(node: Option<SExpr>) -> SExpr {
    node.unwrap_or(SExpr::Nil)
}

/// Builds [`SExpr`] lists.
#[derive(Debug, Clone, Copy, Default)]
pub struct SExpressionFactory;

impl AstFactory for SExpressionFactory {
    type Node = SExpr;

    fn program(&self, body: Vec<SExpr>) -> SExpr {
        SExpr::begin(body)
    }

    fn empty_statement(&self) -> SExpr {
        SExpr::Nil
    }

    fn block_statement(&self, body: Vec<SExpr>) -> SExpr {
        SExpr::begin(body)
    }

    fn expression_statement(&self, expression: SExpr) -> SExpr {
        expression
    }

    fn variable_statement(&self, mut declarations: Vec<SExpr>) -> SExpr {
        if declarations.len() == 1 {
            declarations.remove(0)
        } else {
            SExpr::begin(declarations)
        }
    }

    fn variable_declaration(&self, id: SExpr, init: Option<SExpr>) -> SExpr {
        SExpr::form("var", vec![id, or_nil(init)])
    }

    fn if_statement(&self, test: SExpr, consequent: SExpr, alternate: Option<SExpr>) -> SExpr {
        SExpr::form("if", vec![test, consequent, or_nil(alternate)])
    }

    fn while_statement(&self, test: SExpr, body: SExpr) -> SExpr {
        SExpr::form("while", vec![test, body])
    }

    fn do_while_statement(&self, body: SExpr, test: SExpr) -> SExpr {
        SExpr::form("do-while", vec![body, test])
    }

    fn for_statement(&self, init: Option<SExpr>, test: Option<SExpr>, update: Option<SExpr>, body: SExpr) -> SExpr {
        SExpr::form("for", vec![or_nil(init), or_nil(test), or_nil(update), body])
    }

    fn function_declaration(&self, name: SExpr, params: Vec<SExpr>, body: SExpr) -> SExpr {
        SExpr::form("def", vec![name, SExpr::List(params), body])
    }

    fn return_statement(&self, argument: Option<SExpr>) -> SExpr {
        SExpr::form("return", vec![or_nil(argument)])
    }

    fn assignment_expression(&self, operator: String, left: SExpr, right: SExpr) -> SExpr {
        SExpr::form(&operator, vec![left, right])
    }

    fn logical_expression(&self, operator: String, left: SExpr, right: SExpr) -> SExpr {
        SExpr::form(&operator, vec![left, right])
    }

    fn binary_expression(&self, operator: String, left: SExpr, right: SExpr) -> SExpr {
        SExpr::form(&operator, vec![left, right])
    }

    fn unary_expression(&self, operator: String, argument: SExpr) -> SExpr {
        SExpr::form(&operator, vec![argument])
    }

    fn member_expression(&self, computed: bool, object: SExpr, property: SExpr) -> SExpr {
        let head = if computed { "index" } else { "prop" };
        SExpr::form(head, vec![object, property])
    }

    fn identifier(&self, name: String) -> SExpr {
        SExpr::Symbol(name)
    }

    fn numeric_literal(&self, value: NumericValue) -> SExpr {
        SExpr::Number(value)
    }

    fn string_literal(&self, value: String) -> SExpr {
        SExpr::String(value)
    }

    fn boolean_literal(&self, value: bool) -> SExpr {
        SExpr::Bool(value)
    }

    fn null_literal(&self) -> SExpr {
        SExpr::Nil
    }

    fn is_assignment_target(&self, node: &SExpr) -> bool {
        match node {
            SExpr::Symbol(_) => true,
            SExpr::List(items) => items.len() == 3 && matches!(node.head(), Some("prop") | Some("index")),
            _ => false,
        }
    }

    fn describe(&self, node: &SExpr) -> String {
        node.to_string()
    }
}
