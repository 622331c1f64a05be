use crate::lexer::tokens::{Token, TokenKind};

use super::ast::{impl_node, Node, NodeKind};

/// Expression
///
/// Every expression kind the parser can produce. Children are boxed and
/// owned by their parent.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Identifier(IdentifierExpr),
    Binary(BinaryExpr),
    Number(NumberExpr),
    String(StringExpr),
    Bool(BoolExpr),
    Null(NullExpr),
    Negation(NegationExpr),
    PropertyAccess(PropertyAccessExpr),
    Call(CallExpr),
    New(NewExpr),
    Var(VarExpr),
    Arguments(Arguments),
}

impl Node for Expr {
    fn get_node_kind(&self) -> NodeKind {
        match self {
            Expr::Identifier(expr) => expr.get_node_kind(),
            Expr::Binary(expr) => expr.get_node_kind(),
            Expr::Number(expr) => expr.get_node_kind(),
            Expr::String(expr) => expr.get_node_kind(),
            Expr::Bool(expr) => expr.get_node_kind(),
            Expr::Null(expr) => expr.get_node_kind(),
            Expr::Negation(expr) => expr.get_node_kind(),
            Expr::PropertyAccess(expr) => expr.get_node_kind(),
            Expr::Call(expr) => expr.get_node_kind(),
            Expr::New(expr) => expr.get_node_kind(),
            Expr::Var(expr) => expr.get_node_kind(),
            Expr::Arguments(expr) => expr.get_node_kind(),
        }
    }
    fn line(&self) -> u32 {
        match self {
            Expr::Identifier(expr) => expr.line,
            Expr::Binary(expr) => expr.line,
            Expr::Number(expr) => expr.line,
            Expr::String(expr) => expr.line,
            Expr::Bool(expr) => expr.line,
            Expr::Null(expr) => expr.line,
            Expr::Negation(expr) => expr.line,
            Expr::PropertyAccess(expr) => expr.line,
            Expr::Call(expr) => expr.line,
            Expr::New(expr) => expr.line,
            Expr::Var(expr) => expr.line,
            Expr::Arguments(expr) => expr.line,
        }
    }
}

// LITERALS

#[derive(Debug, Clone, PartialEq)]
pub struct NumberExpr {
    pub value: f64,
    pub line: u32,
}

impl NumberExpr {
    /// Builds a literal from an `Integer` or `Float` token. Returns `None`
    /// for any other token.
    pub fn from_token(token: &Token) -> Option<Self> {
        if !token.is_one_of_many(&[TokenKind::Integer, TokenKind::Float]) {
            return None;
        }

        let value = token.text.parse::<f64>().ok()?;
        Some(NumberExpr {
            value,
            line: token.line,
        })
    }
}

impl_node!(NumberExpr, NodeKind::NumberLiteral);

#[derive(Debug, Clone, PartialEq)]
pub struct StringExpr {
    pub value: String,
    pub line: u32,
}

impl_node!(StringExpr, NodeKind::StringLiteral);

#[derive(Debug, Clone, PartialEq)]
pub struct BoolExpr {
    pub value: bool,
    pub line: u32,
}

impl_node!(BoolExpr, NodeKind::BoolLiteral);

#[derive(Debug, Clone, PartialEq)]
pub struct NullExpr {
    pub line: u32,
}

impl_node!(NullExpr, NodeKind::NullLiteral);

// OTHER

#[derive(Debug, Clone, PartialEq)]
pub struct IdentifierExpr {
    pub name: String,
    pub line: u32,
}

impl_node!(IdentifierExpr, NodeKind::Identifier);

/// `left <operator> right`, where the operator is the token kind that was
/// read between the operands.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub operator: TokenKind,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    pub line: u32,
}

impl_node!(BinaryExpr, NodeKind::BinaryExpr);

#[derive(Debug, Clone, PartialEq)]
pub struct NegationExpr {
    pub operand: Box<Expr>,
    pub line: u32,
}

impl_node!(NegationExpr, NodeKind::Negation);

#[derive(Debug, Clone, PartialEq)]
pub struct PropertyAccessExpr {
    pub object: Box<Expr>,
    pub property: String,
    pub line: u32,
}

impl_node!(PropertyAccessExpr, NodeKind::PropertyAccess);

#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: Box<Expr>,
    pub arguments: Arguments,
    pub line: u32,
}

impl_node!(CallExpr, NodeKind::FunctionCall);

#[derive(Debug, Clone, PartialEq)]
pub struct NewExpr {
    pub type_name: String,
    pub arguments: Arguments,
    pub line: u32,
}

impl_node!(NewExpr, NodeKind::New);

/// A variable declaration used in expression position, `var name: Type`.
#[derive(Debug, Clone, PartialEq)]
pub struct VarExpr {
    pub name: String,
    pub type_name: String,
    pub line: u32,
}

impl_node!(VarExpr, NodeKind::Var);

#[derive(Debug, Clone, PartialEq)]
pub struct Arguments {
    pub arguments: Vec<Expr>,
    pub line: u32,
}

impl Arguments {
    pub fn new(line: u32) -> Self {
        Arguments {
            arguments: vec![],
            line,
        }
    }

    pub fn add_argument(&mut self, argument: Expr) {
        self.arguments.push(argument);
    }

    pub fn len(&self) -> usize {
        self.arguments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }
}

impl_node!(Arguments, NodeKind::Arguments);
