use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("import", TokenKind::Import);
        map.insert("module", TokenKind::Module);
        map.insert("new", TokenKind::New);
        map.insert("class", TokenKind::Class);
        map.insert("function", TokenKind::Function);
        map.insert("def", TokenKind::Def);
        map.insert("extends", TokenKind::Extends);
        map.insert("static", TokenKind::Static);
        map.insert("return", TokenKind::Return);
        map.insert("var", TokenKind::Var);
        map.insert("enum", TokenKind::Enum);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("elif", TokenKind::Elif);
        map.insert("for", TokenKind::For);
        map.insert("while", TokenKind::While);
        map.insert("break", TokenKind::Break);
        map.insert("or", TokenKind::Or);
        map.insert("and", TokenKind::And);
        // literals
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map.insert("null", TokenKind::Null);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOS,
    Identifier,

    Integer,
    Float,
    String,
    True,
    False,
    Null,

    // Reserved
    Import,
    Module,
    New,
    Class,
    Function,
    Def,
    Extends,
    Static,
    Return,
    Var,
    Enum,
    If,
    Else,
    Elif,
    For,
    While,
    Break,
    Or,
    And,

    Plus,
    Dash,
    Star,
    Slash,

    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,
    OpenBracket,
    CloseBracket,

    Comma,
    Dot,
    Colon,
    Semicolon,

    Assignment,    // =
    Equals,        // ==
    Not,           // !
    NotEquals,     // !=
    Less,          // <
    LessEquals,    // <=
    Greater,       // >
    GreaterEquals, // >=
}

impl TokenKind {
    /// Returns whether the kind is one of the reserved words, excluding the
    /// literal words `true`, `false` and `null`.
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Import
                | TokenKind::Module
                | TokenKind::New
                | TokenKind::Class
                | TokenKind::Function
                | TokenKind::Def
                | TokenKind::Extends
                | TokenKind::Static
                | TokenKind::Return
                | TokenKind::Var
                | TokenKind::Enum
                | TokenKind::If
                | TokenKind::Else
                | TokenKind::Elif
                | TokenKind::For
                | TokenKind::While
                | TokenKind::Break
                | TokenKind::Or
                | TokenKind::And
        )
    }

    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::Integer
                | TokenKind::Float
                | TokenKind::String
                | TokenKind::True
                | TokenKind::False
                | TokenKind::Null
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A classified lexeme tagged with the line it starts on.
///
/// `text` holds the raw lexeme for identifiers, keywords and literals; it is
/// empty for punctuation and operators.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: u32,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.kind, self.text)
    }
}

impl Token {
    /// The end-of-stream sentinel handed out past the last real token.
    pub fn eos(line: u32) -> Self {
        Token {
            kind: TokenKind::EOS,
            text: String::new(),
            line,
        }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }
}
