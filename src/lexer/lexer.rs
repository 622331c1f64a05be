use std::sync::Arc;

use tracing::{debug, trace, warn};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_TOKEN,
};

use super::{
    comments::strip_comments,
    cursor::CharacterCursor,
    stream::TokenStream,
    tokens::{Token, TokenKind, RESERVED_LOOKUP},
};

pub struct Lexer {
    cursor: CharacterCursor,
    tokens: TokenStream,
    line: u32,
    file: Option<Arc<String>>,
}

impl Lexer {
    /// Creates a lexer over `source` with its line comments already blanked.
    pub fn new(source: &str, file: Option<String>) -> Lexer {
        let file = file.map(Arc::new);

        Lexer {
            cursor: CharacterCursor::new(&strip_comments(source)),
            tokens: TokenStream::with_file(file.clone()),
            line: 1,
            file,
        }
    }

    fn position(&self, line: u32) -> Position {
        Position(line, self.file.clone())
    }

    fn push(&mut self, token: Token) {
        trace!(line = token.line, "{}", token);
        self.tokens.push_token(token);
    }

    /// Emits a text-less token on the current line, optionally stepping past
    /// the character under the cursor.
    fn push_symbol(&mut self, kind: TokenKind, advance: bool) {
        self.push(MK_TOKEN!(kind, self.line));

        if advance {
            self.cursor.advance();
        }
    }

    /// Runs the scanner to the end of the input.
    pub fn run(mut self) -> Result<TokenStream, Error> {
        while let Some(c) = self.cursor.at() {
            match c {
                ' ' | '\t' | '\n' => self.read_whitespace(),
                c if is_identifier_start(c) => self.read_identifier(),
                c if c.is_ascii_digit() => self.read_number(),
                '\'' | '"' => self.read_string(c)?,
                '=' => self.read_comparison(TokenKind::Assignment, TokenKind::Equals),
                '!' => self.read_comparison(TokenKind::Not, TokenKind::NotEquals),
                '<' => self.read_comparison(TokenKind::Less, TokenKind::LessEquals),
                '>' => self.read_comparison(TokenKind::Greater, TokenKind::GreaterEquals),
                '+' => self.push_symbol(TokenKind::Plus, true),
                '-' => self.push_symbol(TokenKind::Dash, true),
                '*' => self.push_symbol(TokenKind::Star, true),
                '/' => self.push_symbol(TokenKind::Slash, true),
                '(' => self.push_symbol(TokenKind::OpenParen, true),
                ')' => self.push_symbol(TokenKind::CloseParen, true),
                '{' => self.push_symbol(TokenKind::OpenCurly, true),
                '}' => self.push_symbol(TokenKind::CloseCurly, true),
                '[' => self.push_symbol(TokenKind::OpenBracket, true),
                ']' => self.push_symbol(TokenKind::CloseBracket, true),
                ',' => self.push_symbol(TokenKind::Comma, true),
                '.' => self.push_symbol(TokenKind::Dot, true),
                ':' => self.push_symbol(TokenKind::Colon, true),
                ';' => self.push_symbol(TokenKind::Semicolon, true),
                other => {
                    return Err(Error::new(
                        ErrorImpl::UnrecognizedCharacter { character: other },
                        self.position(self.line),
                    ));
                }
            }
        }

        debug!(tokens = self.tokens.len(), lines = self.line, "tokenized");
        Ok(self.tokens)
    }

    fn read_whitespace(&mut self) {
        while let Some(c) = self.cursor.at() {
            match c {
                '\n' => self.line += 1,
                ' ' | '\t' => {}
                _ => return,
            }
            self.cursor.advance();
        }
    }

    fn read_identifier(&mut self) {
        let line = self.line;
        let mut text = String::new();

        while let Some(c) = self.cursor.at() {
            if is_identifier_start(c) || (!text.is_empty() && c.is_ascii_digit()) {
                text.push(c);
                self.cursor.advance();
            } else {
                break;
            }
        }

        let kind = RESERVED_LOOKUP
            .get(text.as_str())
            .copied()
            .unwrap_or(TokenKind::Identifier);

        self.push(MK_TOKEN!(kind, line, text));
    }

    /// Digits with at most one `.`; a second `.` is left for the next token.
    fn read_number(&mut self) {
        let mut seen_dot = false;
        let mut text = String::new();

        while let Some(c) = self.cursor.at() {
            if c == '.' && !seen_dot {
                seen_dot = true;
            } else if !c.is_ascii_digit() {
                break;
            }
            text.push(c);
            self.cursor.advance();
        }

        let kind = if seen_dot {
            TokenKind::Float
        } else {
            TokenKind::Integer
        };

        self.push(MK_TOKEN!(kind, self.line, text));
    }

    /// Reads up to the matching `quote`. Content is kept verbatim, there are
    /// no escape sequences.
    fn read_string(&mut self, quote: char) -> Result<(), Error> {
        let line = self.line;
        let mut text = String::new();

        self.cursor.advance();

        loop {
            match self.cursor.next() {
                Some(c) if c == quote => break,
                Some(c) => {
                    if c == '\n' {
                        self.line += 1;
                    }
                    text.push(c);
                }
                None => {
                    return Err(Error::new(
                        ErrorImpl::UnterminatedStringLiteral { quote },
                        self.position(line),
                    ));
                }
            }
        }

        self.push(MK_TOKEN!(TokenKind::String, line, text));
        Ok(())
    }

    /// `single` alone, or `double` when the next character is `=`.
    fn read_comparison(&mut self, single: TokenKind, double: TokenKind) {
        self.cursor.advance();

        if self.cursor.at() == Some('=') {
            self.push_symbol(double, true);
        } else {
            self.push_symbol(single, false);
        }
    }
}

fn is_identifier_start(c: char) -> bool {
    c == '_' || c.is_ascii_alphabetic()
}

/// Lexes `source` in one pass.
///
/// `file` names the source in any error produced, by this call or by
/// consumers of the returned stream.
pub fn tokenize(source: String, file: Option<String>) -> Result<TokenStream, Error> {
    debug!(file = ?file, bytes = source.len(), "tokenizing");

    Lexer::new(&source, file).run().inspect_err(|error| {
        warn!(line = error.get_line(), "{}", error.message());
    })
}
