//! Node construction strategy shared by every grammar production.
//!
//! The grammar never builds nodes itself: each production hands its parts to
//! the parser's [`AstFactory`], chosen once when the parser is created.
//! [`DefaultFactory`] builds tagged [`Node`]s; the S-expression factory in
//! [`super::sexpr`] builds nested lists.

use super::{
    ast::Node,
    expressions::{
        AssignmentExpression, BinaryExpression, BooleanLiteral, Identifier, LogicalExpression, MemberExpression,
        NumericLiteral, NumericValue, StringLiteral, UnaryExpression,
    },
    statements::{
        BlockStatement, DoWhileStatement, ExpressionStatement, ForStatement, FunctionDeclaration, IfStatement,
        Program, ReturnStatement, VariableDeclaration, VariableStatement, WhileStatement,
    },
};

pub trait AstFactory {
    type Node;

    fn program(&self, body: Vec<Self::Node>) -> Self::Node;
    fn empty_statement(&self) -> Self::Node;
    fn block_statement(&self, body: Vec<Self::Node>) -> Self::Node;
    fn expression_statement(&self, expression: Self::Node) -> Self::Node;
    fn variable_statement(&self, declarations: Vec<Self::Node>) -> Self::Node;
    fn variable_declaration(&self, id: Self::Node, init: Option<Self::Node>) -> Self::Node;
    fn if_statement(&self, test: Self::Node, consequent: Self::Node, alternate: Option<Self::Node>) -> Self::Node;
    fn while_statement(&self, test: Self::Node, body: Self::Node) -> Self::Node;
    fn do_while_statement(&self, body: Self::Node, test: Self::Node) -> Self::Node;
    fn for_statement(
        &self,
        init: Option<Self::Node>,
        test: Option<Self::Node>,
        update: Option<Self::Node>,
        body: Self::Node,
    ) -> Self::Node;
    fn function_declaration(&self, name: Self::Node, params: Vec<Self::Node>, body: Self::Node) -> Self::Node;
    fn return_statement(&self, argument: Option<Self::Node>) -> Self::Node;

    fn assignment_expression(&self, operator: String, left: Self::Node, right: Self::Node) -> Self::Node;
    fn logical_expression(&self, operator: String, left: Self::Node, right: Self::Node) -> Self::Node;
    fn binary_expression(&self, operator: String, left: Self::Node, right: Self::Node) -> Self::Node;
    fn unary_expression(&self, operator: String, argument: Self::Node) -> Self::Node;
    fn member_expression(&self, computed: bool, object: Self::Node, property: Self::Node) -> Self::Node;

    fn identifier(&self, name: String) -> Self::Node;
    fn numeric_literal(&self, value: NumericValue) -> Self::Node;
    /// `value` arrives with its quotes already stripped.
    fn string_literal(&self, value: String) -> Self::Node;
    fn boolean_literal(&self, value: bool) -> Self::Node;
    fn null_literal(&self) -> Self::Node;

    /// Whether a built node may stand left of an assignment operator.
    fn is_assignment_target(&self, node: &Self::Node) -> bool;
    /// Short description of a node for error messages.
    fn describe(&self, node: &Self::Node) -> String;
}

/// Builds tagged [`Node`] records.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFactory;

impl AstFactory for DefaultFactory {
    type Node = Node;

    fn program(&self, body: Vec<Node>) -> Node {
        Node::Program(Program { body })
    }

    fn empty_statement(&self) -> Node {
        Node::EmptyStatement
    }

    fn block_statement(&self, body: Vec<Node>) -> Node {
        Node::BlockStatement(BlockStatement { body })
    }

    fn expression_statement(&self, expression: Node) -> Node {
        Node::ExpressionStatement(ExpressionStatement {
            expression: Box::new(expression),
        })
    }

    fn variable_statement(&self, declarations: Vec<Node>) -> Node {
        Node::VariableStatement(VariableStatement { declarations })
    }

    fn variable_declaration(&self, id: Node, init: Option<Node>) -> Node {
        Node::VariableDeclaration(VariableDeclaration {
            id: Box::new(id),
            init: init.map(Box::new),
        })
    }

    fn if_statement(&self, test: Node, consequent: Node, alternate: Option<Node>) -> Node {
        Node::IfStatement(IfStatement {
            test: Box::new(test),
            consequent: Box::new(consequent),
            alternate: alternate.map(Box::new),
        })
    }

    fn while_statement(&self, test: Node, body: Node) -> Node {
        Node::WhileStatement(WhileStatement {
            test: Box::new(test),
            body: Box::new(body),
        })
    }

    fn do_while_statement(&self, body: Node, test: Node) -> Node {
        Node::DoWhileStatement(DoWhileStatement {
            body: Box::new(body),
            test: Box::new(test),
        })
    }

    fn for_statement(&self, init: Option<Node>, test: Option<Node>, update: Option<Node>, body: Node) -> Node {
        Node::ForStatement(ForStatement {
            init: init.map(Box::new),
            test: test.map(Box::new),
            update: update.map(Box::new),
            body: Box::new(body),
        })
    }

    fn function_declaration(&self, name: Node, params: Vec<Node>, body: Node) -> Node {
        Node::FunctionDeclaration(FunctionDeclaration {
            name: Box::new(name),
            params,
            body: Box::new(body),
        })
    }

    fn return_statement(&self, argument: Option<Node>) -> Node {
        Node::ReturnStatement(ReturnStatement {
            argument: argument.map(Box::new),
        })
    }

    fn assignment_expression(&self, operator: String, left: Node, right: Node) -> Node {
        Node::AssignmentExpression(AssignmentExpression {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    fn logical_expression(&self, operator: String, left: Node, right: Node) -> Node {
        Node::LogicalExpression(LogicalExpression {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    fn binary_expression(&self, operator: String, left: Node, right: Node) -> Node {
        Node::BinaryExpression(BinaryExpression {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    fn unary_expression(&self, operator: String, argument: Node) -> Node {
        Node::UnaryExpression(UnaryExpression {
            operator,
            argument: Box::new(argument),
        })
    }

    fn member_expression(&self, computed: bool, object: Node, property: Node) -> Node {
        Node::MemberExpression(MemberExpression {
            computed,
            object: Box::new(object),
            property: Box::new(property),
        })
    }

    fn identifier(&self, name: String) -> Node {
        Node::Identifier(Identifier { name })
    }

    fn numeric_literal(&self, value: NumericValue) -> Node {
        Node::NumericLiteral(NumericLiteral { value })
    }

    fn string_literal(&self, value: String) -> Node {
        Node::StringLiteral(StringLiteral { value })
    }

    fn boolean_literal(&self, value: bool) -> Node {
        Node::BooleanLiteral(BooleanLiteral { value })
    }

    fn null_literal(&self) -> Node {
        Node::NullLiteral
    }

    fn is_assignment_target(&self, node: &Node) -> bool {
        node.is_assignment_target()
    }

    fn describe(&self, node: &Node) -> String {
        node.get_node_type().to_string()
    }
}
