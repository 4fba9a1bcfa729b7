use crate::{
    ast::{expressions::NumericValue, factory::AstFactory},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{
    lookups::{binding_power_of, BindingPower, ASSIGNMENT_OPERATORS, UNARY_OPERATORS},
    parser::Parser,
};

pub fn parse_expr<F: AstFactory>(parser: &mut Parser<F>) -> Result<F::Node, Error> {
    parse_assignment_expr(parser)
}

/// `LogicalOr [AssignOp Assignment]`, right-associative.
///
/// The left operand is validated before anything right of the operator is read.
pub fn parse_assignment_expr<F: AstFactory>(parser: &mut Parser<F>) -> Result<F::Node, Error> {
    let left = parse_binary_expr(parser, BindingPower::LogicalOr)?;

    let Some(token) = parser.current_token() else {
        return Ok(left);
    };
    if !token.is_one_of_many(&ASSIGNMENT_OPERATORS) {
        return Ok(left);
    }

    if !parser.factory().is_assignment_target(&left) {
        return Err(Error::new(
            ErrorImpl::InvalidAssignmentTarget {
                target: parser.factory().describe(&left),
            },
            token.span.start.clone(),
        ));
    }

    let operator = parser.advance()?.value;
    let right = parse_assignment_expr(parser)?;

    Ok(parser.factory().assignment_expression(operator, left, right))
}

/// Folds every operator of level `bp` left-associatively.
pub fn parse_binary_expr<F: AstFactory>(parser: &mut Parser<F>, bp: BindingPower) -> Result<F::Node, Error> {
    let mut left = parse_operand(parser, bp)?;

    while parser.current_token_kind().and_then(binding_power_of) == Some(bp) {
        let operator = parser.advance()?.value;
        let right = parse_operand(parser, bp)?;

        left = if bp.is_logical() {
            parser.factory().logical_expression(operator, left, right)
        } else {
            parser.factory().binary_expression(operator, left, right)
        };
    }

    Ok(left)
}

fn parse_operand<F: AstFactory>(parser: &mut Parser<F>, bp: BindingPower) -> Result<F::Node, Error> {
    match bp.next() {
        Some(next) => parse_binary_expr(parser, next),
        None => parse_unary_expr(parser),
    }
}

pub fn parse_unary_expr<F: AstFactory>(parser: &mut Parser<F>) -> Result<F::Node, Error> {
    let is_prefix = parser
        .current_token()
        .is_some_and(|token| token.is_one_of_many(&UNARY_OPERATORS));

    if !is_prefix {
        return parse_member_expr(parser);
    }

    let operator = parser.advance()?.value;
    let argument = parse_unary_expr(parser)?;

    Ok(parser.factory().unary_expression(operator, argument))
}

/// `Primary { "." Identifier | "[" Expression "]" }`
pub fn parse_member_expr<F: AstFactory>(parser: &mut Parser<F>) -> Result<F::Node, Error> {
    let mut object = parse_primary_expr(parser)?;

    loop {
        match parser.current_token_kind() {
            Some(TokenKind::Dot) => {
                parser.advance()?;
                let property = parse_identifier(parser)?;
                object = parser.factory().member_expression(false, object, property);
            }
            Some(TokenKind::OpenBracket) => {
                parser.advance()?;
                let property = parse_expr(parser)?;
                parser.expect(TokenKind::CloseBracket)?;
                object = parser.factory().member_expression(true, object, property);
            }
            _ => return Ok(object),
        }
    }
}

pub fn parse_primary_expr<F: AstFactory>(parser: &mut Parser<F>) -> Result<F::Node, Error> {
    match parser.current_token_kind() {
        Some(kind) if kind.is_literal() => parse_literal(parser),
        Some(TokenKind::OpenParen) => parse_grouping_expr(parser),
        Some(TokenKind::Identifier) => parse_identifier(parser),
        _ => Err(unexpected_production(parser, "expression")),
    }
}

pub fn parse_grouping_expr<F: AstFactory>(parser: &mut Parser<F>) -> Result<F::Node, Error> {
    parser.expect(TokenKind::OpenParen)?;
    let expr = parse_expr(parser)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(expr)
}

pub fn parse_identifier<F: AstFactory>(parser: &mut Parser<F>) -> Result<F::Node, Error> {
    let name = parser.expect(TokenKind::Identifier)?.value;
    Ok(parser.factory().identifier(name))
}

/// `NUMBER | STRING | true | false | null`
pub fn parse_literal<F: AstFactory>(parser: &mut Parser<F>) -> Result<F::Node, Error> {
    match parser.current_token_kind() {
        Some(TokenKind::Number) => {
            let token = parser.advance()?;
            let value = token.value.parse::<NumericValue>().map_err(|_| {
                Error::new(
                    ErrorImpl::NumberParseError {
                        token: token.value.clone(),
                    },
                    token.span.start.clone(),
                )
            })?;

            Ok(parser.factory().numeric_literal(value))
        }
        Some(TokenKind::String) => {
            let token = parser.advance()?;
            Ok(parser.factory().string_literal(strip_quotes(&token.value)))
        }
        Some(TokenKind::True) => {
            parser.advance()?;
            Ok(parser.factory().boolean_literal(true))
        }
        Some(TokenKind::False) => {
            parser.advance()?;
            Ok(parser.factory().boolean_literal(false))
        }
        Some(TokenKind::Null) => {
            parser.advance()?;
            Ok(parser.factory().null_literal())
        }
        _ => Err(unexpected_production(parser, "literal")),
    }
}

/// Error for a lookahead that cannot start the `expected` production.
fn unexpected_production<F: AstFactory>(parser: &Parser<F>, expected: &str) -> Error {
    match parser.current_token() {
        Some(token) => Error::new(
            ErrorImpl::UnexpectedLiteral {
                token: token.value.clone(),
            },
            token.span.start.clone(),
        ),
        None => Error::new(
            ErrorImpl::UnexpectedEndOfInput {
                expected: String::from(expected),
            },
            parser.get_position(),
        ),
    }
}

/// Drops the first and last character of a quoted string token.
fn strip_quotes(value: &str) -> String {
    let mut chars = value.chars();
    chars.next();
    chars.next_back();
    chars.as_str().to_string()
}
