use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// An unrecoverable tokenize/parse failure and where it happened.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

/// Which stage rejected the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lexical,
    Syntax,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_kind(&self) -> ErrorKind {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorKind::Lexical,
            _ => ErrorKind::Syntax,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedEndOfInput { .. } => "UnexpectedEndOfInput",
            ErrorImpl::UnexpectedLiteral { .. } => "UnexpectedLiteral",
            ErrorImpl::InvalidAssignmentTarget { .. } => "InvalidAssignmentTarget",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { token, expected } => {
                if expected == ";" {
                    ErrorTip::Suggestion(format!("Unexpected token: `{}`, did you miss a semicolon?", token))
                } else {
                    ErrorTip::Suggestion(format!("Unexpected token: `{}`, expected `{}`", token, expected))
                }
            }
            ErrorImpl::UnexpectedEndOfInput { expected } => {
                ErrorTip::Suggestion(format!("Input ended while `{}` was still expected", expected))
            }
            ErrorImpl::UnexpectedLiteral { token } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`, expected an expression", token))
            }
            ErrorImpl::InvalidAssignmentTarget { target } => ErrorTip::Suggestion(format!(
                "Cannot assign to {}, only identifiers and member expressions can be assigned",
                target
            )),
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, only decimal digits are allowed",
                token
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unexpected token: {token:?}, expected: {expected:?}")]
    UnexpectedToken { token: String, expected: String },
    #[error("unexpected end of input, expected: {expected:?}")]
    UnexpectedEndOfInput { expected: String },
    #[error("unexpected literal production: {token:?}")]
    UnexpectedLiteral { token: String },
    #[error("invalid left-hand side in assignment expression: {target}")]
    InvalidAssignmentTarget { target: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
}
