use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error} on line {}", .position.0)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
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

    pub fn get_line(&self) -> u32 {
        self.position.0
    }

    pub fn get_file(&self) -> Option<&str> {
        self.position.1.as_deref().map(String::as_str)
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// The inner error's message, without position information.
    pub fn message(&self) -> String {
        self.internal_error.to_string()
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognizedCharacter { .. } => "UnrecognizedCharacter",
            ErrorImpl::UnterminatedStringLiteral { .. } => "UnterminatedStringLiteral",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognizedCharacter { .. } => ErrorTip::None,
            ErrorImpl::UnterminatedStringLiteral { quote } => ErrorTip::Suggestion(format!(
                "String opened here is never closed, add a matching `{}`",
                quote
            )),
            ErrorImpl::UnexpectedToken { expected, found } => ErrorTip::Suggestion(format!(
                "Expected `{}`, found `{}`",
                expected, found
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
    #[error("unrecognized character {character:?}")]
    UnrecognizedCharacter { character: char },
    #[error("unterminated string literal, expected closing {quote:?}")]
    UnterminatedStringLiteral { quote: char },
    #[error("unexpected token: expected {expected}, found {found}")]
    UnexpectedToken { expected: TokenKind, found: TokenKind },
}
