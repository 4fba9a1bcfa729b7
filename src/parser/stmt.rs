use crate::{ast::factory::AstFactory, errors::errors::Error, lexer::tokens::TokenKind};

use super::{
    expr::{parse_assignment_expr, parse_expr, parse_identifier},
    parser::Parser,
};

/// `StatementList` up to end of input.
pub fn parse_program<F: AstFactory>(parser: &mut Parser<F>) -> Result<F::Node, Error> {
    let body = parse_stmt_list(parser, None)?;
    Ok(parser.factory().program(body))
}

/// Parses statements until the lookahead is `stop` or input runs out.
pub fn parse_stmt_list<F: AstFactory>(parser: &mut Parser<F>, stop: Option<TokenKind>) -> Result<Vec<F::Node>, Error> {
    let mut body = vec![];

    while let Some(kind) = parser.current_token_kind() {
        if Some(kind) == stop {
            break;
        }
        body.push(parse_stmt(parser)?);
    }

    Ok(body)
}

pub fn parse_stmt<F: AstFactory>(parser: &mut Parser<F>) -> Result<F::Node, Error> {
    match parser.current_token_kind() {
        Some(TokenKind::Semicolon) => parse_empty_stmt(parser),
        Some(TokenKind::OpenCurly) => parse_block_stmt(parser),
        Some(TokenKind::Let) => parse_var_stmt(parser),
        Some(TokenKind::If) => parse_if_stmt(parser),
        Some(TokenKind::While) => parse_while_stmt(parser),
        Some(TokenKind::Do) => parse_do_while_stmt(parser),
        Some(TokenKind::For) => parse_for_stmt(parser),
        Some(TokenKind::Return) => parse_return_stmt(parser),
        Some(TokenKind::Def) => parse_fn_decl_stmt(parser),
        _ => parse_expression_stmt(parser),
    }
}

pub fn parse_empty_stmt<F: AstFactory>(parser: &mut Parser<F>) -> Result<F::Node, Error> {
    parser.expect(TokenKind::Semicolon)?;
    Ok(parser.factory().empty_statement())
}

pub fn parse_block_stmt<F: AstFactory>(parser: &mut Parser<F>) -> Result<F::Node, Error> {
    parser.expect(TokenKind::OpenCurly)?;
    let body = parse_stmt_list(parser, Some(TokenKind::CloseCurly))?;
    parser.expect(TokenKind::CloseCurly)?;

    Ok(parser.factory().block_statement(body))
}

pub fn parse_expression_stmt<F: AstFactory>(parser: &mut Parser<F>) -> Result<F::Node, Error> {
    let expression = parse_expr(parser)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(parser.factory().expression_statement(expression))
}

/// `let a = 1, b;`
pub fn parse_var_stmt<F: AstFactory>(parser: &mut Parser<F>) -> Result<F::Node, Error> {
    let statement = parse_var_decl_list(parser)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(statement)
}

/// `let` followed by declarations, without the closing `;` (shared with `for` init).
fn parse_var_decl_list<F: AstFactory>(parser: &mut Parser<F>) -> Result<F::Node, Error> {
    parser.expect(TokenKind::Let)?;

    let mut declarations = vec![parse_var_decl(parser)?];
    while parser.at(TokenKind::Comma) {
        parser.advance()?;
        declarations.push(parse_var_decl(parser)?);
    }

    Ok(parser.factory().variable_statement(declarations))
}

fn parse_var_decl<F: AstFactory>(parser: &mut Parser<F>) -> Result<F::Node, Error> {
    let id = parse_identifier(parser)?;

    let init = if parser.at(TokenKind::Semicolon) || parser.at(TokenKind::Comma) {
        None
    } else {
        parser.expect(TokenKind::SimpleAssign)?;
        Some(parse_assignment_expr(parser)?)
    };

    Ok(parser.factory().variable_declaration(id, init))
}

/// `if (test) consequent [else alternate]`; an `else` binds to the innermost `if`.
pub fn parse_if_stmt<F: AstFactory>(parser: &mut Parser<F>) -> Result<F::Node, Error> {
    parser.expect(TokenKind::If)?;
    let test = parse_condition(parser)?;
    let consequent = parse_stmt(parser)?;

    let alternate = if parser.at(TokenKind::Else) {
        parser.advance()?;
        Some(parse_stmt(parser)?)
    } else {
        None
    };

    Ok(parser.factory().if_statement(test, consequent, alternate))
}

pub fn parse_while_stmt<F: AstFactory>(parser: &mut Parser<F>) -> Result<F::Node, Error> {
    parser.expect(TokenKind::While)?;
    let test = parse_condition(parser)?;
    let body = parse_stmt(parser)?;

    Ok(parser.factory().while_statement(test, body))
}

pub fn parse_do_while_stmt<F: AstFactory>(parser: &mut Parser<F>) -> Result<F::Node, Error> {
    parser.expect(TokenKind::Do)?;
    let body = parse_stmt(parser)?;
    parser.expect(TokenKind::While)?;
    let test = parse_condition(parser)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(parser.factory().do_while_statement(body, test))
}

/// `for (init; test; update) body`, each clause optional.
pub fn parse_for_stmt<F: AstFactory>(parser: &mut Parser<F>) -> Result<F::Node, Error> {
    parser.expect(TokenKind::For)?;
    parser.expect(TokenKind::OpenParen)?;

    let init = if parser.at(TokenKind::Semicolon) {
        None
    } else if parser.at(TokenKind::Let) {
        Some(parse_var_decl_list(parser)?)
    } else {
        Some(parse_expr(parser)?)
    };
    parser.expect(TokenKind::Semicolon)?;

    let test = if parser.at(TokenKind::Semicolon) {
        None
    } else {
        Some(parse_expr(parser)?)
    };
    parser.expect(TokenKind::Semicolon)?;

    let update = if parser.at(TokenKind::CloseParen) {
        None
    } else {
        Some(parse_expr(parser)?)
    };
    parser.expect(TokenKind::CloseParen)?;

    let body = parse_stmt(parser)?;

    Ok(parser.factory().for_statement(init, test, update, body))
}

/// `def name(a, b) { ... }`
pub fn parse_fn_decl_stmt<F: AstFactory>(parser: &mut Parser<F>) -> Result<F::Node, Error> {
    parser.expect(TokenKind::Def)?;
    let name = parse_identifier(parser)?;

    parser.expect(TokenKind::OpenParen)?;
    let mut params = vec![];
    if !parser.at(TokenKind::CloseParen) {
        params.push(parse_identifier(parser)?);
        while parser.at(TokenKind::Comma) {
            parser.advance()?;
            params.push(parse_identifier(parser)?);
        }
    }
    parser.expect(TokenKind::CloseParen)?;

    let body = parse_block_stmt(parser)?;

    Ok(parser.factory().function_declaration(name, params, body))
}

pub fn parse_return_stmt<F: AstFactory>(parser: &mut Parser<F>) -> Result<F::Node, Error> {
    parser.expect(TokenKind::Return)?;

    let argument = if !parser.has_tokens() || parser.at(TokenKind::Semicolon) {
        None
    } else {
        Some(parse_expr(parser)?)
    };
    parser.expect(TokenKind::Semicolon)?;

    Ok(parser.factory().return_statement(argument))
}

/// `( Expression )`
fn parse_condition<F: AstFactory>(parser: &mut Parser<F>) -> Result<F::Node, Error> {
    parser.expect(TokenKind::OpenParen)?;
    let test = parse_expr(parser)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(test)
}
