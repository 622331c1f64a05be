#![allow(clippy::module_inception)]

use std::sync::Arc;

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;

pub use errors::errors::{Error, ErrorImpl};
pub use lexer::{lexer::tokenize, stream::TokenStream, tokens::{Token, TokenKind}};

/// A 1-based source line plus the name of the source it belongs to, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Option<Arc<String>>);

impl Position {
    pub fn new(line: u32, file: Option<Arc<String>>) -> Self {
        Position(line, file)
    }
}
