//! Error types and error reporting for the front end.
//!
//! - `errors` holds the structured error record returned by the lexer and
//!   by token stream consumers, tagged with a line and optional file
//! - `report` renders an error against its source text for the terminal

pub mod errors;
pub mod report;
