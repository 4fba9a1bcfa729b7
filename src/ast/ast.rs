use std::fmt::Display;

use serde::Serialize;

use super::{
    expressions::{
        AssignmentExpression, BinaryExpression, BooleanLiteral, Identifier, LogicalExpression, MemberExpression,
        NumericLiteral, StringLiteral, UnaryExpression,
    },
    sexpr::SExpr,
    statements::{
        BlockStatement, DoWhileStatement, ExpressionStatement, ForStatement, FunctionDeclaration, IfStatement,
        Program, ReturnStatement, VariableDeclaration, VariableStatement, WhileStatement,
    },
};

/// Node Types
///
/// The kind of a [`Node`] without its payload.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum NodeType {
    Program,
    BlockStatement,
    EmptyStatement,
    ExpressionStatement,
    VariableStatement,
    VariableDeclaration,
    IfStatement,
    WhileStatement,
    DoWhileStatement,
    ForStatement,
    FunctionDeclaration,
    ReturnStatement,
    AssignmentExpression,
    LogicalExpression,
    BinaryExpression,
    UnaryExpression,
    MemberExpression,
    Identifier,
    NumericLiteral,
    StringLiteral,
    BooleanLiteral,
    NullLiteral,
}

impl Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A tagged syntax tree node.
///
/// Serializes as an object whose `"type"` field names the variant, followed by
/// the variant's fields, e.g. `{"type": "NumericLiteral", "value": 42}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Node {
    Program(Program),
    BlockStatement(BlockStatement),
    EmptyStatement,
    ExpressionStatement(ExpressionStatement),
    VariableStatement(VariableStatement),
    VariableDeclaration(VariableDeclaration),
    IfStatement(IfStatement),
    WhileStatement(WhileStatement),
    DoWhileStatement(DoWhileStatement),
    ForStatement(ForStatement),
    FunctionDeclaration(FunctionDeclaration),
    ReturnStatement(ReturnStatement),
    AssignmentExpression(AssignmentExpression),
    LogicalExpression(LogicalExpression),
    BinaryExpression(BinaryExpression),
    UnaryExpression(UnaryExpression),
    MemberExpression(MemberExpression),
    Identifier(Identifier),
    NumericLiteral(NumericLiteral),
    StringLiteral(StringLiteral),
    BooleanLiteral(BooleanLiteral),
    NullLiteral,
}

impl Node {
    pub fn get_node_type(&self) -> NodeType {
        match self {
            Node::Program(_) => NodeType::Program,
            Node::BlockStatement(_) => NodeType::BlockStatement,
            Node::EmptyStatement => NodeType::EmptyStatement,
            Node::ExpressionStatement(_) => NodeType::ExpressionStatement,
            Node::VariableStatement(_) => NodeType::VariableStatement,
            Node::VariableDeclaration(_) => NodeType::VariableDeclaration,
            Node::IfStatement(_) => NodeType::IfStatement,
            Node::WhileStatement(_) => NodeType::WhileStatement,
            Node::DoWhileStatement(_) => NodeType::DoWhileStatement,
            Node::ForStatement(_) => NodeType::ForStatement,
            Node::FunctionDeclaration(_) => NodeType::FunctionDeclaration,
            Node::ReturnStatement(_) => NodeType::ReturnStatement,
            Node::AssignmentExpression(_) => NodeType::AssignmentExpression,
            Node::LogicalExpression(_) => NodeType::LogicalExpression,
            Node::BinaryExpression(_) => NodeType::BinaryExpression,
            Node::UnaryExpression(_) => NodeType::UnaryExpression,
            Node::MemberExpression(_) => NodeType::MemberExpression,
            Node::Identifier(_) => NodeType::Identifier,
            Node::NumericLiteral(_) => NodeType::NumericLiteral,
            Node::StringLiteral(_) => NodeType::StringLiteral,
            Node::BooleanLiteral(_) => NodeType::BooleanLiteral,
            Node::NullLiteral => NodeType::NullLiteral,
        }
    }

    /// Only identifiers and member expressions may appear left of an assignment operator.
    pub fn is_assignment_target(&self) -> bool {
        matches!(self, Node::Identifier(_) | Node::MemberExpression(_))
    }

    /// Statements of a `Program` or `BlockStatement`, `None` for other nodes.
    pub fn body(&self) -> Option<&[Node]> {
        match self {
            Node::Program(program) => Some(&program.body),
            Node::BlockStatement(block) => Some(&block.body),
            _ => None,
        }
    }
}

/// Output of a parse whose rendering mode was chosen at runtime.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Ast {
    Tree(Node),
    SExpression(SExpr),
}

impl Ast {
    /// Number of top-level statements, when the root has the program shape.
    pub fn statement_count(&self) -> Option<usize> {
        match self {
            Ast::Tree(node) => node.body().map(|body| body.len()),
            Ast::SExpression(sexpr) => sexpr.begin_body().map(|body| body.len()),
        }
    }
}
