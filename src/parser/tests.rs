//! Unit tests for the parser module.
//!
//! Trees are compared through their serialized JSON form, which is also the
//! shape consumers see.

use serde_json::{json, Value};

use super::parser::{parse, parse_with_options, ConfiguredParser, Parser};
use crate::{
    ast::{ast::Ast, factory::DefaultFactory, sexpr::SExpressionFactory},
    config::{AstMode, ParserOptions},
    errors::errors::{Error, ErrorImpl, ErrorKind},
    Node, NodeType,
};

fn ast(source: &str) -> Value {
    serde_json::to_value(parse(source, None).unwrap()).unwrap()
}

fn expr(source: &str) -> Value {
    ast(source)["body"][0]["expression"].clone()
}

fn error(source: &str) -> Error {
    parse(source, Some("test.lang".to_string())).unwrap_err()
}

fn sexpr(source: &str) -> Value {
    let mut parser = Parser::new(SExpressionFactory);
    serde_json::to_value(parser.parse(source).unwrap()).unwrap()
}

fn num(value: i64) -> Value {
    json!({"type": "NumericLiteral", "value": value})
}

fn ident(name: &str) -> Value {
    json!({"type": "Identifier", "name": name})
}

#[test]
fn test_parse_literal_statements() {
    assert_eq!(
        ast("42; \"hello\";"),
        json!({
            "type": "Program",
            "body": [
                {"type": "ExpressionStatement", "expression": num(42)},
                {"type": "ExpressionStatement", "expression": {"type": "StringLiteral", "value": "hello"}},
            ]
        })
    );
}

#[test]
fn test_parse_single_quoted_string() {
    assert_eq!(expr("'hi there';"), json!({"type": "StringLiteral", "value": "hi there"}));
}

#[test]
fn test_parse_keyword_literals() {
    assert_eq!(expr("true;"), json!({"type": "BooleanLiteral", "value": true}));
    assert_eq!(expr("false;"), json!({"type": "BooleanLiteral", "value": false}));
    assert_eq!(expr("null;"), json!({"type": "NullLiteral"}));
}

#[test]
fn test_parse_empty_source() {
    assert_eq!(ast(""), json!({"type": "Program", "body": []}));
    assert_eq!(ast("  // nothing\n /* here */ "), json!({"type": "Program", "body": []}));
}

#[test]
fn test_multiplication_binds_tighter() {
    assert_eq!(
        expr("1 + 2 * 3;"),
        json!({
            "type": "BinaryExpression",
            "operator": "+",
            "left": num(1),
            "right": {"type": "BinaryExpression", "operator": "*", "left": num(2), "right": num(3)},
        })
    );
}

#[test]
fn test_additive_is_left_associative() {
    assert_eq!(
        expr("3 + 2 - 2;"),
        json!({
            "type": "BinaryExpression",
            "operator": "-",
            "left": {"type": "BinaryExpression", "operator": "+", "left": num(3), "right": num(2)},
            "right": num(2),
        })
    );
}

#[test]
fn test_parentheses_override_precedence() {
    assert_eq!(
        expr("2 * (2 + 2);"),
        json!({
            "type": "BinaryExpression",
            "operator": "*",
            "left": num(2),
            "right": {"type": "BinaryExpression", "operator": "+", "left": num(2), "right": num(2)},
        })
    );
}

#[test]
fn test_relational_and_equality_levels() {
    let tree = expr("a == b < c;");

    assert_eq!(tree["operator"], "==");
    assert_eq!(tree["left"], ident("a"));
    assert_eq!(tree["right"]["operator"], "<");

    assert_eq!(expr("x >= 10;")["operator"], ">=");
    assert_eq!(expr("x != 10;")["operator"], "!=");
}

#[test]
fn test_logical_expressions() {
    let tree = expr("a || b && c;");

    assert_eq!(tree["type"], "LogicalExpression");
    assert_eq!(tree["operator"], "||");
    assert_eq!(tree["left"], ident("a"));
    assert_eq!(
        tree["right"],
        json!({"type": "LogicalExpression", "operator": "&&", "left": ident("b"), "right": ident("c")})
    );
}

#[test]
fn test_logical_binds_looser_than_relational() {
    let tree = expr("x > 0 && y < 1;");

    assert_eq!(tree["type"], "LogicalExpression");
    assert_eq!(tree["left"]["type"], "BinaryExpression");
    assert_eq!(tree["right"]["type"], "BinaryExpression");
}

#[test]
fn test_unary_expressions() {
    assert_eq!(
        expr("-x;"),
        json!({"type": "UnaryExpression", "operator": "-", "argument": ident("x")})
    );
    assert_eq!(
        expr("!!x;"),
        json!({
            "type": "UnaryExpression",
            "operator": "!",
            "argument": {"type": "UnaryExpression", "operator": "!", "argument": ident("x")},
        })
    );

    let tree = expr("-1 * 2;");
    assert_eq!(tree["operator"], "*");
    assert_eq!(tree["left"]["type"], "UnaryExpression");
}

#[test]
fn test_member_expressions() {
    assert_eq!(
        expr("a.b;"),
        json!({"type": "MemberExpression", "computed": false, "object": ident("a"), "property": ident("b")})
    );

    let tree = expr("a.b[c + 1];");
    assert_eq!(tree["computed"], true);
    assert_eq!(tree["object"]["type"], "MemberExpression");
    assert_eq!(tree["property"]["operator"], "+");
}

#[test]
fn test_assignment_is_right_associative() {
    assert_eq!(
        expr("x = y = 1;"),
        json!({
            "type": "AssignmentExpression",
            "operator": "=",
            "left": ident("x"),
            "right": {"type": "AssignmentExpression", "operator": "=", "left": ident("y"), "right": num(1)},
        })
    );
}

#[test]
fn test_complex_and_member_assignment() {
    assert_eq!(expr("x += 1;")["operator"], "+=");
    assert_eq!(expr("a.b = 1;")["left"]["type"], "MemberExpression");
    assert_eq!(expr("a[0] *= 2;")["left"]["computed"], true);
}

#[test]
fn test_invalid_assignment_target() {
    let err = error("1 = x;");

    assert_eq!(
        err.get_error(),
        &ErrorImpl::InvalidAssignmentTarget {
            target: "NumericLiteral".to_string()
        }
    );
    assert_eq!(err.get_position().0, 2);
    assert_eq!(err.get_error_kind(), ErrorKind::Syntax);

    assert!(matches!(
        error("(a + b) = 1;").get_error(),
        ErrorImpl::InvalidAssignmentTarget { .. }
    ));
}

#[test]
fn test_empty_statement() {
    assert_eq!(
        ast(";"),
        json!({"type": "Program", "body": [{"type": "EmptyStatement"}]})
    );
}

#[test]
fn test_empty_block() {
    assert_eq!(
        ast("{ }"),
        json!({"type": "Program", "body": [{"type": "BlockStatement", "body": []}]})
    );
}

#[test]
fn test_nested_blocks() {
    let tree = ast("{ 42; { \"hello\"; } }");
    let block = &tree["body"][0];

    assert_eq!(block["type"], "BlockStatement");
    assert_eq!(block["body"][0]["expression"], num(42));
    assert_eq!(block["body"][1]["type"], "BlockStatement");
    assert_eq!(block["body"][1]["body"][0]["expression"]["value"], "hello");
}

#[test]
fn test_variable_statements() {
    assert_eq!(
        ast("let x = 42;")["body"][0],
        json!({
            "type": "VariableStatement",
            "declarations": [{"type": "VariableDeclaration", "id": ident("x"), "init": num(42)}]
        })
    );

    assert_eq!(ast("let x;")["body"][0]["declarations"][0]["init"], Value::Null);

    let tree = ast("let a, b = 2;");
    let declarations = &tree["body"][0]["declarations"];
    assert_eq!(declarations[0]["init"], Value::Null);
    assert_eq!(declarations[1]["init"], num(2));
}

#[test]
fn test_variable_initializer_is_assignment() {
    let init = &ast("let x = y = 1;")["body"][0]["declarations"][0]["init"];

    assert_eq!(init["type"], "AssignmentExpression");
    assert_eq!(init["left"], ident("y"));
}

#[test]
fn test_if_statement() {
    let tree = ast("if (x) { x = 1; } else x = 2;");
    let stmt = &tree["body"][0];

    assert_eq!(stmt["type"], "IfStatement");
    assert_eq!(stmt["test"], ident("x"));
    assert_eq!(stmt["consequent"]["type"], "BlockStatement");
    assert_eq!(stmt["alternate"]["type"], "ExpressionStatement");

    assert_eq!(ast("if (x) y;")["body"][0]["alternate"], Value::Null);
}

#[test]
fn test_dangling_else_binds_to_nearest_if() {
    let tree = ast("if (a) if (b) x = 1; else x = 2;");
    let outer = &tree["body"][0];

    assert_eq!(outer["alternate"], Value::Null);
    assert_eq!(outer["consequent"]["type"], "IfStatement");
    assert_eq!(outer["consequent"]["alternate"]["expression"]["right"], num(2));
}

#[test]
fn test_while_statement() {
    let tree = ast("while (x > 10) { x -= 1; }");
    let stmt = &tree["body"][0];

    assert_eq!(stmt["type"], "WhileStatement");
    assert_eq!(stmt["test"]["operator"], ">");
    assert_eq!(stmt["body"]["body"][0]["expression"]["operator"], "-=");
}

#[test]
fn test_do_while_statement() {
    let tree = ast("do { x -= 1; } while (x > 10);");
    let stmt = &tree["body"][0];

    assert_eq!(stmt["type"], "DoWhileStatement");
    assert_eq!(stmt["body"]["type"], "BlockStatement");
    assert_eq!(stmt["test"]["operator"], ">");
}

#[test]
fn test_for_statement() {
    let tree = ast("for (let i = 0; i < 10; i += 1) { x += i; }");
    let stmt = &tree["body"][0];

    assert_eq!(stmt["type"], "ForStatement");
    assert_eq!(stmt["init"]["type"], "VariableStatement");
    assert_eq!(stmt["init"]["declarations"][0]["init"], num(0));
    assert_eq!(stmt["test"]["operator"], "<");
    assert_eq!(stmt["update"]["operator"], "+=");
    assert_eq!(stmt["body"]["type"], "BlockStatement");
}

#[test]
fn test_for_statement_clauses_are_optional() {
    assert_eq!(
        ast("for (;;) ;")["body"][0],
        json!({"type": "ForStatement", "init": null, "test": null, "update": null, "body": {"type": "EmptyStatement"}})
    );

    let stmt = &ast("for (i = 0;;) {}")["body"][0];
    assert_eq!(stmt["init"]["type"], "AssignmentExpression");
    assert_eq!(stmt["test"], Value::Null);
}

#[test]
fn test_function_declaration() {
    let tree = ast("def square(x, y) { return x * y; }");
    let stmt = &tree["body"][0];

    assert_eq!(stmt["type"], "FunctionDeclaration");
    assert_eq!(stmt["name"], ident("square"));
    assert_eq!(stmt["params"], json!([ident("x"), ident("y")]));
    assert_eq!(stmt["body"]["body"][0]["type"], "ReturnStatement");
    assert_eq!(stmt["body"]["body"][0]["argument"]["operator"], "*");

    assert_eq!(ast("def f() {}")["body"][0]["params"], json!([]));
}

#[test]
fn test_return_without_argument() {
    assert_eq!(
        ast("def f() { return; }")["body"][0]["body"]["body"][0],
        json!({"type": "ReturnStatement", "argument": null})
    );
}

#[test]
fn test_node_helpers() {
    let program = parse("{ } 1;", None).unwrap();

    assert_eq!(program.get_node_type(), NodeType::Program);
    let body = program.body().unwrap();
    assert_eq!(body.len(), 2);
    assert_eq!(body[0].get_node_type(), NodeType::BlockStatement);
    assert!(matches!(body[1], Node::ExpressionStatement(_)));
}

#[test]
fn test_missing_semicolon_at_end() {
    let err = error("42");

    assert_eq!(
        err.get_error(),
        &ErrorImpl::UnexpectedEndOfInput {
            expected: ";".to_string()
        }
    );
    assert_eq!(err.get_position().0, 2);
}

#[test]
fn test_unexpected_token() {
    let err = error("let = 1;");

    assert_eq!(
        err.get_error(),
        &ErrorImpl::UnexpectedToken {
            token: "=".to_string(),
            expected: "IDENTIFIER".to_string()
        }
    );
    assert_eq!(err.get_position().0, 4);
    assert_eq!(err.get_position().1.as_str(), "test.lang");
}

#[test]
fn test_unexpected_primary() {
    assert_eq!(
        error("1 +;").get_error(),
        &ErrorImpl::UnexpectedLiteral { token: ";".to_string() }
    );
    assert_eq!(
        error("1 +").get_error(),
        &ErrorImpl::UnexpectedEndOfInput {
            expected: "expression".to_string()
        }
    );
}

#[test]
fn test_unclosed_block() {
    assert_eq!(
        error("{ 1;").get_error(),
        &ErrorImpl::UnexpectedEndOfInput {
            expected: "}".to_string()
        }
    );
}

#[test]
fn test_lexical_error_propagates() {
    let err = error("let a = #;");

    assert_eq!(err.get_error_kind(), ErrorKind::Lexical);
    assert_eq!(err.get_position().0, 8);
}

#[test]
fn test_number_beyond_u64_parses() {
    assert_eq!(expr("18446744073709551615;"), json!({"type": "NumericLiteral", "value": u64::MAX}));
    assert_eq!(expr("99999999999999999999;"), json!({"type": "NumericLiteral", "value": 1e20}));
    assert_eq!(sexpr("99999999999999999999;"), json!(["begin", [1e20]]));
}

#[test]
fn test_return_at_end_of_input_expects_semicolon() {
    assert_eq!(
        error("def f() { return").get_error(),
        &ErrorImpl::UnexpectedEndOfInput {
            expected: ";".to_string()
        }
    );
    assert_eq!(
        error("return").get_error(),
        &ErrorImpl::UnexpectedEndOfInput {
            expected: ";".to_string()
        }
    );
}

#[test]
fn test_parser_is_reusable() {
    let mut parser = Parser::new(DefaultFactory);

    let first = parser.parse("1;").unwrap();
    assert!(parser.parse("let = ;").is_err());
    let again = parser.parse("1;").unwrap();

    assert_eq!(first, again);
}

#[test]
fn test_file_name_in_error_position() {
    let mut parser = Parser::new(DefaultFactory).with_file_name("main.lang");
    let err = parser.parse("x").unwrap_err();

    assert_eq!(err.get_position().1.as_str(), "main.lang");
}

#[test]
fn test_sexpr_math() {
    let mut parser = Parser::new(SExpressionFactory);
    let program = parser.parse("1 + 2;").unwrap();

    assert_eq!(program.to_string(), "(begin ((+ 1 2)))");
    assert_eq!(serde_json::to_value(&program).unwrap(), json!(["begin", [["+", 1, 2]]]));
}

#[test]
fn test_sexpr_literals() {
    assert_eq!(
        sexpr("42; \"hello\"; true; null; ;"),
        json!(["begin", [42, "\"hello\"", true, null, null]])
    );
}

#[test]
fn test_sexpr_blocks() {
    assert_eq!(sexpr("{ }"), json!(["begin", [["begin", []]]]));
    assert_eq!(sexpr("{ 1; { 2; } }"), json!(["begin", [["begin", [1, ["begin", [2]]]]]]));
}

#[test]
fn test_sexpr_variables() {
    assert_eq!(sexpr("let x = 1;"), json!(["begin", [["var", "x", 1]]]));
    assert_eq!(
        sexpr("let a, b = 2;"),
        json!(["begin", [["begin", [["var", "a", null], ["var", "b", 2]]]]])
    );
}

#[test]
fn test_sexpr_statements() {
    assert_eq!(sexpr("if (a) b; else c;"), json!(["begin", [["if", "a", "b", "c"]]]));
    assert_eq!(sexpr("while (a) b;"), json!(["begin", [["while", "a", "b"]]]));
    assert_eq!(sexpr("do b; while (a);"), json!(["begin", [["do-while", "b", "a"]]]));
    assert_eq!(sexpr("for (;;) x;"), json!(["begin", [["for", null, null, null, "x"]]]));
    assert_eq!(
        sexpr("def f(a, b) { return a + b; }"),
        json!(["begin", [["def", "f", ["a", "b"], ["begin", [["return", ["+", "a", "b"]]]]]]])
    );
}

#[test]
fn test_sexpr_expressions() {
    assert_eq!(sexpr("x = y = 1;"), json!(["begin", [["=", "x", ["=", "y", 1]]]]));
    assert_eq!(sexpr("a.b[0] = -1;"), json!(["begin", [["=", ["index", ["prop", "a", "b"], 0], ["-", 1]]]]));
    assert_eq!(sexpr("a && !b;"), json!(["begin", [["&&", "a", ["!", "b"]]]]));
}

#[test]
fn test_sexpr_invalid_assignment_target() {
    let mut parser = Parser::new(SExpressionFactory);

    assert_eq!(
        parser.parse("1 = x;").unwrap_err().get_error(),
        &ErrorImpl::InvalidAssignmentTarget { target: "1".to_string() }
    );
    assert_eq!(
        parser.parse("(a + b) = 1;").unwrap_err().get_error(),
        &ErrorImpl::InvalidAssignmentTarget {
            target: "(+ a b)".to_string()
        }
    );
}

#[test]
fn test_configured_parser_modes() {
    let mut parser = ConfiguredParser::new(ParserOptions::with_mode(AstMode::SExpression));
    assert_eq!(parser.mode(), AstMode::SExpression);
    assert!(matches!(parser.parse("1;").unwrap(), Ast::SExpression(_)));

    let mut parser = ConfiguredParser::new(ParserOptions::default());
    assert_eq!(parser.mode(), AstMode::Default);
    assert!(matches!(parser.parse("1;").unwrap(), Ast::Tree(_)));
}

#[test]
fn test_parse_with_options_file_name() {
    let options = ParserOptions {
        mode: AstMode::SExpression,
        file_name: Some("opts.lang".to_string()),
    };
    let err = parse_with_options("let", &options).unwrap_err();

    assert_eq!(err.get_position().1.as_str(), "opts.lang");
}

#[test]
fn test_statement_count_agrees_across_modes() {
    let source = "let a = 1, b; { } ; if (a) b; def f() {} a.b = 2;";
    let tree = parse_with_options(source, &ParserOptions::with_mode(AstMode::Default)).unwrap();
    let list = parse_with_options(source, &ParserOptions::with_mode(AstMode::SExpression)).unwrap();

    assert_eq!(tree.statement_count(), Some(6));
    assert_eq!(list.statement_count(), Some(6));
}
