use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::{errors::errors::{Error, ErrorImpl}, Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// Consumes the matched text and optionally produces a token.
/// Handlers returning `None` skip insignificant input.
pub type RegexHandler = fn(&mut Lexer, &str) -> Option<Token>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

fn pattern(regex: &str, handler: RegexHandler) -> RegexPattern {
    RegexPattern {
        regex: Regex::new(regex).expect("lexer patterns are valid regular expressions"),
        handler,
    }
}

lazy_static! {
    // Order matters: the first pattern matching at the cursor wins.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        // Whitespace and comments
        pattern(r"^\s+", skip_handler),
        pattern(r"^//.*", skip_handler),
        pattern(r"^/\*[\s\S]*?\*/", skip_handler),

        // Punctuation
        pattern(r"^;", MK_DEFAULT_HANDLER!(TokenKind::Semicolon)),
        pattern(r"^\{", MK_DEFAULT_HANDLER!(TokenKind::OpenCurly)),
        pattern(r"^\}", MK_DEFAULT_HANDLER!(TokenKind::CloseCurly)),
        pattern(r"^\(", MK_DEFAULT_HANDLER!(TokenKind::OpenParen)),
        pattern(r"^\)", MK_DEFAULT_HANDLER!(TokenKind::CloseParen)),
        pattern(r"^,", MK_DEFAULT_HANDLER!(TokenKind::Comma)),
        pattern(r"^\.", MK_DEFAULT_HANDLER!(TokenKind::Dot)),
        pattern(r"^\[", MK_DEFAULT_HANDLER!(TokenKind::OpenBracket)),
        pattern(r"^\]", MK_DEFAULT_HANDLER!(TokenKind::CloseBracket)),

        // Keywords, before identifiers so `if` is not read as a name
        pattern(r"^\b(?:let|if|else|true|false|null|while|do|for|return|def)\b", keyword_handler),

        pattern(r"^[0-9]+", MK_DEFAULT_HANDLER!(TokenKind::Number)),
        pattern(r"^[A-Za-z0-9_]+", MK_DEFAULT_HANDLER!(TokenKind::Identifier)),

        // Operators; compound forms are tried before their single-character prefixes
        pattern(r"^[=!]=", MK_DEFAULT_HANDLER!(TokenKind::EqualityOperator)),
        pattern(r"^=", MK_DEFAULT_HANDLER!(TokenKind::SimpleAssign)),
        pattern(r"^[*/+\-]=", MK_DEFAULT_HANDLER!(TokenKind::ComplexAssign)),
        pattern(r"^[+\-]", MK_DEFAULT_HANDLER!(TokenKind::AdditiveOperator)),
        pattern(r"^[*/]", MK_DEFAULT_HANDLER!(TokenKind::MultiplicativeOperator)),
        pattern(r"^[><]=?", MK_DEFAULT_HANDLER!(TokenKind::RelationalOperator)),
        pattern(r"^&&", MK_DEFAULT_HANDLER!(TokenKind::LogicalAnd)),
        pattern(r"^\|\|", MK_DEFAULT_HANDLER!(TokenKind::LogicalOr)),
        pattern(r"^!", MK_DEFAULT_HANDLER!(TokenKind::LogicalNot)),

        // Strings
        pattern(r#"^"[^"]*""#, MK_DEFAULT_HANDLER!(TokenKind::String)),
        pattern(r"^'[^']*'", MK_DEFAULT_HANDLER!(TokenKind::String)),
    ];
}

/// Lazily pulls tokens from a source string, one per `next_token` call.
#[derive(Clone, Debug)]
pub struct Lexer {
    source: String,
    pos: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: &str, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            source: source.to_string(),
            pos: 0,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn has_more_tokens(&self) -> bool {
        !self.is_eof()
    }

    pub fn get_position(&self) -> Position {
        Position(self.pos as u32, Rc::clone(&self.file))
    }

    /// Span of the next `len` bytes starting at the cursor.
    pub fn span_of(&self, len: usize) -> Span {
        Span {
            start: self.get_position(),
            end: Position((self.pos + len) as u32, Rc::clone(&self.file)),
        }
    }

    /// Produces the next significant token, or `None` at end of input.
    pub fn next_token(&mut self) -> Result<Option<Token>, Error> {
        while self.has_more_tokens() {
            let found = PATTERNS.iter().find_map(|pattern| {
                pattern
                    .regex
                    .find(self.remainder())
                    .map(|m| (pattern.handler, m.as_str().to_string()))
            });

            let Some((handler, matched)) = found else {
                let token = self.at().map(String::from).unwrap_or_default();
                return Err(Error::new(ErrorImpl::UnrecognisedToken { token }, self.get_position()));
            };

            if let Some(token) = handler(self, &matched) {
                trace!(kind = %token.kind, value = %token.value, "token");
                return Ok(Some(token));
            }
        }

        Ok(None)
    }
}

fn skip_handler(lexer: &mut Lexer, matched: &str) -> Option<Token> {
    lexer.advance_n(matched.len());
    None
}

fn keyword_handler(lexer: &mut Lexer, matched: &str) -> Option<Token> {
    let kind = RESERVED_LOOKUP.get(matched).copied().unwrap_or(TokenKind::Identifier);
    let span = lexer.span_of(matched.len());
    lexer.advance_n(matched.len());

    Some(MK_TOKEN!(kind, String::from(matched), span))
}

/// Drains a fresh lexer over `source` into a token vector.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn tokenize(source: &str, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);
    let mut tokens = vec![];

    while let Some(token) = lex.next_token()? {
        tokens.push(token);
    }

    Ok(tokens)
}
