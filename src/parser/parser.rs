//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the public parse entry
//! points. The parser is a recursive-descent parser with exactly one token
//! of lookahead, pulled lazily from the lexer. Node construction is
//! delegated to an [`AstFactory`] chosen when the parser is created.

use tracing::debug;

use crate::{
    ast::{
        ast::{Ast, Node},
        factory::{AstFactory, DefaultFactory},
        sexpr::SExpressionFactory,
    },
    config::{AstMode, ParserOptions},
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::stmt::parse_program;

/// The main parser structure that maintains parsing state.
///
/// Owns the lexer and the single lookahead token. Every production receives
/// the parser by exclusive reference and consumes tokens only through
/// [`Parser::advance`] and [`Parser::expect`].
#[derive(Debug, Clone)]
pub struct Parser<F: AstFactory = DefaultFactory> {
    /// Node construction strategy
    factory: F,
    /// Source of tokens for the current parse
    lexer: Lexer,
    /// The next unconsumed token, `None` at end of input
    lookahead: Option<Token>,
    /// Name reported in error positions
    file_name: Option<String>,
}

impl<F: AstFactory> Parser<F> {
    /// Creates a new Parser that builds nodes with `factory`.
    pub fn new(factory: F) -> Self {
        Parser {
            factory,
            lexer: Lexer::new("", None),
            lookahead: None,
            file_name: None,
        }
    }

    /// Sets the source name used in error positions.
    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = Some(name.into());
        self
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// Parses `source` into a program node.
    ///
    /// Lexer and lookahead are reset first, so one parser may be reused for
    /// any number of sequential parses.
    #[tracing::instrument(skip_all, fields(source_len = source.len()))]
    pub fn parse(&mut self, source: &str) -> Result<F::Node, Error> {
        self.lexer = Lexer::new(source, self.file_name.clone());
        self.lookahead = self.lexer.next_token()?;

        let program = parse_program(self)?;
        debug!("parse complete");

        Ok(program)
    }

    /// Returns the lookahead token without consuming it.
    pub fn current_token(&self) -> Option<&Token> {
        self.lookahead.as_ref()
    }

    /// Returns the kind of the lookahead token.
    pub fn current_token_kind(&self) -> Option<TokenKind> {
        self.lookahead.as_ref().map(|token| token.kind)
    }

    /// Whether the lookahead is a token of `kind`.
    pub fn at(&self, kind: TokenKind) -> bool {
        self.current_token_kind() == Some(kind)
    }

    pub fn has_tokens(&self) -> bool {
        self.lookahead.is_some()
    }

    /// Consumes the lookahead, whatever its kind, and pulls the next token.
    pub fn advance(&mut self) -> Result<Token, Error> {
        let Some(token) = self.lookahead.take() else {
            return Err(Error::new(
                ErrorImpl::UnexpectedEndOfInput {
                    expected: String::from("token"),
                },
                self.get_position(),
            ));
        };

        self.lookahead = self.lexer.next_token()?;
        Ok(token)
    }

    /// Consumes the lookahead if it is of `expected_kind`.
    ///
    /// # Returns
    ///
    /// The consumed token, `UnexpectedEndOfInput` when no token is left,
    /// or `UnexpectedToken` naming the actual text and the expected kind.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        match &self.lookahead {
            None => Err(Error::new(
                ErrorImpl::UnexpectedEndOfInput {
                    expected: expected_kind.to_string(),
                },
                self.get_position(),
            )),
            Some(token) if token.kind != expected_kind => Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    token: token.value.clone(),
                    expected: expected_kind.to_string(),
                },
                token.span.start.clone(),
            )),
            Some(_) => self.advance(),
        }
    }

    /// Start of the lookahead, or the end of the source once it is exhausted.
    pub fn get_position(&self) -> Position {
        match &self.lookahead {
            Some(token) => token.span.start.clone(),
            None => self.lexer.get_position(),
        }
    }
}

impl<F: AstFactory + Default> Default for Parser<F> {
    fn default() -> Self {
        Parser::new(F::default())
    }
}

/// A parser whose node factory was picked at runtime from an [`AstMode`].
#[derive(Debug, Clone)]
pub enum ConfiguredParser {
    Default(Parser<DefaultFactory>),
    SExpression(Parser<SExpressionFactory>),
}

impl ConfiguredParser {
    pub fn new(options: ParserOptions) -> Self {
        match options.mode {
            AstMode::Default => ConfiguredParser::Default(named(Parser::new(DefaultFactory), options.file_name)),
            AstMode::SExpression => {
                ConfiguredParser::SExpression(named(Parser::new(SExpressionFactory), options.file_name))
            }
        }
    }

    pub fn mode(&self) -> AstMode {
        match self {
            ConfiguredParser::Default(_) => AstMode::Default,
            ConfiguredParser::SExpression(_) => AstMode::SExpression,
        }
    }

    pub fn parse(&mut self, source: &str) -> Result<Ast, Error> {
        match self {
            ConfiguredParser::Default(parser) => parser.parse(source).map(Ast::Tree),
            ConfiguredParser::SExpression(parser) => parser.parse(source).map(Ast::SExpression),
        }
    }
}

fn named<F: AstFactory>(parser: Parser<F>, file_name: Option<String>) -> Parser<F> {
    match file_name {
        Some(name) => parser.with_file_name(name),
        None => parser,
    }
}

/// Parses `source` into a tagged [`Node`] tree.
///
/// # Arguments
///
/// * `source` - The program text
/// * `file` - Name reported in error positions, `"shell"` if `None`
pub fn parse(source: &str, file: Option<String>) -> Result<Node, Error> {
    named(Parser::new(DefaultFactory), file).parse(source)
}

/// Parses `source` with the factory selected by `options.mode`.
pub fn parse_with_options(source: &str, options: &ParserOptions) -> Result<Ast, Error> {
    ConfiguredParser::new(options.clone()).parse(source)
}
