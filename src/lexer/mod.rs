//! Lexical analysis module for the front end.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Blanking of `//` line comments before scanning, keeping line layout
//! - Character-by-character scanning of identifiers, keywords, numbers,
//!   strings, operators and punctuation
//! - Line tracking for every token
//! - The forward-only token stream handed to the parser

pub mod comments;
pub mod cursor;
pub mod lexer;
pub mod stream;
pub mod tokens;
