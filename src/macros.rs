//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$line` - The line the lexeme starts on
/// * `$text` - The raw lexeme, omitted for punctuation
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Integer, 1, "42".to_string());
/// let plus = MK_TOKEN!(TokenKind::Plus, 1);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $line:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            text: String::new(),
            line: $line,
        }
    };
    ($kind:expr, $line:expr, $text:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            text: $text,
            line: $line,
        }
    };
}
