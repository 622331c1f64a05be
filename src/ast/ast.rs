use super::statements::Stmt;

/// Node Kinds
///
/// Closed set of tags for every node in the tree.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum NodeKind {
    // definitions
    Program,
    ClassDef,
    ClassAttributeDef,
    FunctionDef,
    FunctionParameter,
    // statements
    BlockStmt,
    ExpressionStmt,
    IfStmt,
    WhileStmt,
    ReturnStmt,
    EnumStmt,
    ImportStmt,
    EmptyStmt,
    // expressions
    Identifier,
    BinaryExpr,
    NumberLiteral,
    StringLiteral,
    BoolLiteral,
    NullLiteral,
    Negation,
    PropertyAccess,
    FunctionCall,
    New,
    Var,
    Arguments,
}

/// Node Trait
///
/// Implemented by every node, and by the `Stmt`/`Expr` sums which forward to
/// the node they hold.
pub trait Node {
    /// Returns the tag of the node.
    fn get_node_kind(&self) -> NodeKind;
    /// Returns the line the node starts on.
    fn line(&self) -> u32;
}

/// Implements `Node` for a struct with a `line` field.
macro_rules! impl_node {
    ($node:ty, $kind:expr) => {
        impl $crate::ast::ast::Node for $node {
            fn get_node_kind(&self) -> $crate::ast::ast::NodeKind {
                $kind
            }
            fn line(&self) -> u32 {
                self.line
            }
        }
    };
}

pub(crate) use impl_node;

/// Root of a parsed source file. Only top-level classes and functions live
/// here.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub classes: Vec<ClassDefinition>,
    pub functions: Vec<FunctionDefinition>,
    pub line: u32,
}

impl Program {
    pub fn new(line: u32) -> Self {
        Program {
            classes: vec![],
            functions: vec![],
            line,
        }
    }

    pub fn add_class(&mut self, class: ClassDefinition) {
        self.classes.push(class);
    }

    pub fn add_function(&mut self, function: FunctionDefinition) {
        self.functions.push(function);
    }
}

impl_node!(Program, NodeKind::Program);

#[derive(Debug, Clone, PartialEq)]
pub struct ClassDefinition {
    pub name: String,
    pub super_class: Option<String>,
    pub attributes: Vec<ClassAttributeDefinition>,
    pub methods: Vec<FunctionDefinition>,
    pub line: u32,
}

impl ClassDefinition {
    pub fn new(name: String, super_class: Option<String>, line: u32) -> Self {
        ClassDefinition {
            name,
            super_class,
            attributes: vec![],
            methods: vec![],
            line,
        }
    }

    pub fn add_attribute(&mut self, attribute: ClassAttributeDefinition) {
        self.attributes.push(attribute);
    }

    pub fn add_method(&mut self, method: FunctionDefinition) {
        self.methods.push(method);
    }

    pub fn get_method(&self, name: &str) -> Option<&FunctionDefinition> {
        self.methods.iter().find(|method| method.name == name)
    }

    pub fn get_constructor(&self) -> Option<&FunctionDefinition> {
        self.methods.iter().find(|method| method.is_constructor)
    }
}

impl_node!(ClassDefinition, NodeKind::ClassDef);

/// A class attribute. The initial value, when there is one, is kept as a
/// zero-argument function whose body produces it.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassAttributeDefinition {
    pub name: String,
    pub type_name: String,
    pub is_static: bool,
    pub initializer: Option<FunctionDefinition>,
    pub line: u32,
}

impl_node!(ClassAttributeDefinition, NodeKind::ClassAttributeDef);

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDefinition {
    pub name: String,
    pub return_type: String,
    pub is_static: bool,
    pub is_constructor: bool,
    pub parameters: Vec<FunctionParameter>,
    pub body: Vec<Stmt>,
    pub line: u32,
}

impl FunctionDefinition {
    pub fn new(name: String, return_type: String, line: u32) -> Self {
        FunctionDefinition {
            name,
            return_type,
            is_static: false,
            is_constructor: false,
            parameters: vec![],
            body: vec![],
            line,
        }
    }

    pub fn add_parameter(&mut self, parameter: FunctionParameter) {
        self.parameters.push(parameter);
    }

    pub fn add_statement(&mut self, stmt: Stmt) {
        self.body.push(stmt);
    }
}

impl_node!(FunctionDefinition, NodeKind::FunctionDef);

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionParameter {
    pub name: String,
    pub type_name: String,
    pub line: u32,
}

impl_node!(FunctionParameter, NodeKind::FunctionParameter);
