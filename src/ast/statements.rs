use std::slice::Iter;

use super::{
    ast::{impl_node, Node, NodeKind},
    expressions::Expr,
};

/// Statement
///
/// Every statement kind the parser can produce.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Block(BlockStmt),
    Expression(ExpressionStmt),
    If(IfStmt),
    While(WhileStmt),
    Return(ReturnStmt),
    Enum(EnumStmt),
    Import(ImportStmt),
    Empty(EmptyStmt),
}

impl Node for Stmt {
    fn get_node_kind(&self) -> NodeKind {
        match self {
            Stmt::Block(stmt) => stmt.get_node_kind(),
            Stmt::Expression(stmt) => stmt.get_node_kind(),
            Stmt::If(stmt) => stmt.get_node_kind(),
            Stmt::While(stmt) => stmt.get_node_kind(),
            Stmt::Return(stmt) => stmt.get_node_kind(),
            Stmt::Enum(stmt) => stmt.get_node_kind(),
            Stmt::Import(stmt) => stmt.get_node_kind(),
            Stmt::Empty(stmt) => stmt.get_node_kind(),
        }
    }
    fn line(&self) -> u32 {
        match self {
            Stmt::Block(stmt) => stmt.line,
            Stmt::Expression(stmt) => stmt.line,
            Stmt::If(stmt) => stmt.line,
            Stmt::While(stmt) => stmt.line,
            Stmt::Return(stmt) => stmt.line,
            Stmt::Enum(stmt) => stmt.line,
            Stmt::Import(stmt) => stmt.line,
            Stmt::Empty(stmt) => stmt.line,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlockStmt {
    pub body: Vec<Stmt>,
    pub line: u32,
}

impl BlockStmt {
    pub fn new(line: u32) -> Self {
        BlockStmt { body: vec![], line }
    }

    pub fn push(&mut self, stmt: Stmt) {
        self.body.push(stmt);
    }

    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.body.iter()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

impl_node!(BlockStmt, NodeKind::BlockStmt);

#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStmt {
    pub expression: Expr,
    pub line: u32,
}

impl_node!(ExpressionStmt, NodeKind::ExpressionStmt);

/// `if`, with `elif` chains stored as a nested `IfStmt` in `else_body`.
#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Expr,
    pub then_body: BlockStmt,
    pub else_body: Option<Box<Stmt>>,
    pub line: u32,
}

impl IfStmt {
    /// Walks the `elif` chain and returns every condition in order.
    pub fn conditions(&self) -> Vec<&Expr> {
        let mut conditions = vec![&self.condition];
        let mut current = self.else_body.as_deref();

        while let Some(Stmt::If(elif)) = current {
            conditions.push(&elif.condition);
            current = elif.else_body.as_deref();
        }

        conditions
    }
}

impl_node!(IfStmt, NodeKind::IfStmt);

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    pub condition: Expr,
    pub body: BlockStmt,
    pub line: u32,
}

impl_node!(WhileStmt, NodeKind::WhileStmt);

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub value: Option<Expr>,
    pub line: u32,
}

impl_node!(ReturnStmt, NodeKind::ReturnStmt);

#[derive(Debug, Clone, PartialEq)]
pub struct EnumStmt {
    pub name: String,
    pub values: Vec<String>,
    pub line: u32,
}

impl EnumStmt {
    pub fn new(name: String, line: u32) -> Self {
        EnumStmt {
            name,
            values: vec![],
            line,
        }
    }

    pub fn add_value(&mut self, value: String) {
        self.values.push(value);
    }
}

impl_node!(EnumStmt, NodeKind::EnumStmt);

#[derive(Debug, Clone, PartialEq)]
pub struct ImportStmt {
    pub path: Vec<String>,
    pub line: u32,
}

impl ImportStmt {
    pub fn add_to_path(&mut self, part: String) {
        self.path.push(part);
    }

    /// The path joined with `.`, as written in source.
    pub fn dotted_path(&self) -> String {
        self.path.join(".")
    }
}

impl_node!(ImportStmt, NodeKind::ImportStmt);

#[derive(Debug, Clone, PartialEq)]
pub struct EmptyStmt {
    pub line: u32,
}

impl_node!(EmptyStmt, NodeKind::EmptyStmt);
