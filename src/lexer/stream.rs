use std::sync::Arc;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_TOKEN,
};

use super::tokens::{Token, TokenKind};

/// Read-forward cursor over an already lexed sequence of tokens.
///
/// Reads beyond the last token never fail: they produce an end-of-stream
/// token on the line of the last real token (line 1 for an empty stream).
/// The cursor only ever moves forward.
#[derive(Debug, Clone, Default)]
pub struct TokenStream {
    tokens: Vec<Token>,
    index: usize,
    file: Option<Arc<String>>,
}

impl TokenStream {
    pub fn new() -> Self {
        TokenStream {
            tokens: vec![],
            index: 0,
            file: None,
        }
    }

    /// Creates an empty stream whose errors name `file` as their source.
    pub fn with_file(file: Option<Arc<String>>) -> Self {
        TokenStream {
            file,
            ..TokenStream::new()
        }
    }

    pub fn push_token(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn push(&mut self, kind: TokenKind, text: String, line: u32) {
        self.push_token(MK_TOKEN!(kind, line, text));
    }

    fn eos(&self) -> Token {
        Token::eos(self.tokens.last().map_or(1, |token| token.line))
    }

    /// Returns the token under the cursor and moves past it.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Token {
        let token = self.peek(0);
        self.advance();
        token
    }

    pub fn peek(&self, look_ahead: usize) -> Token {
        self.index
            .checked_add(look_ahead)
            .and_then(|index| self.tokens.get(index))
            .cloned()
            .unwrap_or_else(|| self.eos())
    }

    pub fn peek_kind(&self, look_ahead: usize) -> TokenKind {
        self.index
            .checked_add(look_ahead)
            .and_then(|index| self.tokens.get(index))
            .map_or(TokenKind::EOS, |token| token.kind)
    }

    pub fn has_more(&self) -> bool {
        self.index < self.tokens.len()
    }

    pub fn advance(&mut self) {
        self.index = self.index.saturating_add(1);
    }

    /// Consumes the next token if it has the expected kind.
    ///
    /// On a mismatch the cursor stays put and an `UnexpectedToken` error is
    /// returned at the offending token's line.
    pub fn expect(&mut self, expected: TokenKind) -> Result<Token, Error> {
        let token = self.peek(0);
        if token.kind != expected {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected,
                    found: token.kind,
                },
                Position(token.line, self.file.clone()),
            ));
        }

        self.advance();
        Ok(token)
    }

    pub fn position(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn file(&self) -> Option<&str> {
        self.file.as_deref().map(String::as_str)
    }
}

impl IntoIterator for TokenStream {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}
