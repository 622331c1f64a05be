use crate::lexer::tokens::{Token, TokenKind};

use super::{
    ast::{
        ClassAttributeDefinition, ClassDefinition, FunctionDefinition, FunctionParameter, Node,
        NodeKind, Program,
    },
    expressions::{
        Arguments, BinaryExpr, BoolExpr, CallExpr, Expr, IdentifierExpr, NegationExpr, NewExpr,
        NullExpr, NumberExpr, PropertyAccessExpr, StringExpr, VarExpr,
    },
    statements::{
        BlockStmt, EmptyStmt, EnumStmt, ExpressionStmt, IfStmt, ImportStmt, ReturnStmt, Stmt,
        WhileStmt,
    },
};

fn ident(name: &str, line: u32) -> Expr {
    Expr::Identifier(IdentifierExpr {
        name: name.to_string(),
        line,
    })
}

fn number(value: f64, line: u32) -> Expr {
    Expr::Number(NumberExpr { value, line })
}

#[test]
fn test_number_from_token() {
    let integer = Token {
        kind: TokenKind::Integer,
        text: "42".to_string(),
        line: 3,
    };
    let float = Token {
        kind: TokenKind::Float,
        text: "3.".to_string(),
        line: 4,
    };
    let name = Token {
        kind: TokenKind::Identifier,
        text: "x".to_string(),
        line: 1,
    };

    assert_eq!(NumberExpr::from_token(&integer), Some(NumberExpr { value: 42.0, line: 3 }));
    assert_eq!(NumberExpr::from_token(&float).map(|n| n.value), Some(3.0));
    assert_eq!(NumberExpr::from_token(&name), None);
}

#[test]
fn test_expression_kinds_and_lines() {
    let call = Expr::Call(CallExpr {
        callee: Box::new(Expr::PropertyAccess(PropertyAccessExpr {
            object: Box::new(ident("console", 2)),
            property: "print".to_string(),
            line: 2,
        })),
        arguments: Arguments {
            arguments: vec![
                Expr::String(StringExpr {
                    value: "hi".to_string(),
                    line: 2,
                }),
                Expr::Bool(BoolExpr { value: true, line: 2 }),
                Expr::Null(NullExpr { line: 2 }),
            ],
            line: 2,
        },
        line: 2,
    });

    assert_eq!(call.get_node_kind(), NodeKind::FunctionCall);
    assert_eq!(call.line(), 2);

    let Expr::Call(CallExpr { callee, arguments, .. }) = &call else {
        panic!("Expected call");
    };
    assert_eq!(callee.get_node_kind(), NodeKind::PropertyAccess);
    assert_eq!(arguments.len(), 3);
    assert_eq!(
        arguments
            .arguments
            .iter()
            .map(Node::get_node_kind)
            .collect::<Vec<_>>(),
        vec![NodeKind::StringLiteral, NodeKind::BoolLiteral, NodeKind::NullLiteral]
    );

    let mut new_arguments = Arguments::new(5);
    assert!(new_arguments.is_empty());
    new_arguments.add_argument(number(1.0, 5));
    let new = Expr::New(NewExpr {
        type_name: "Point".to_string(),
        arguments: new_arguments,
        line: 5,
    });
    assert_eq!(new.get_node_kind(), NodeKind::New);

    let negation = Expr::Negation(NegationExpr {
        operand: Box::new(ident("x", 7)),
        line: 7,
    });
    assert_eq!(negation.get_node_kind(), NodeKind::Negation);

    let var = Expr::Var(VarExpr {
        name: "count".to_string(),
        type_name: "int".to_string(),
        line: 8,
    });
    assert_eq!(var.get_node_kind(), NodeKind::Var);
    assert_eq!(var.line(), 8);
}

#[test]
fn test_binary_expression_owns_operands() {
    let sum = BinaryExpr {
        operator: TokenKind::Plus,
        left: Box::new(number(1.0, 1)),
        right: Box::new(Expr::Binary(BinaryExpr {
            operator: TokenKind::Star,
            left: Box::new(number(2.0, 1)),
            right: Box::new(number(3.0, 1)),
            line: 1,
        })),
        line: 1,
    };

    let copy = sum.clone();
    assert_eq!(copy, sum);
    assert_eq!(sum.get_node_kind(), NodeKind::BinaryExpr);
    assert!(matches!(*sum.right, Expr::Binary(BinaryExpr { operator: TokenKind::Star, .. })));
}

#[test]
fn test_elif_chain() {
    let innermost = IfStmt {
        condition: ident("c", 5),
        then_body: BlockStmt::new(5),
        else_body: Some(Box::new(Stmt::Block(BlockStmt::new(7)))),
        line: 5,
    };
    let middle = IfStmt {
        condition: ident("b", 3),
        then_body: BlockStmt::new(3),
        else_body: Some(Box::new(Stmt::If(innermost))),
        line: 3,
    };
    let outer = IfStmt {
        condition: ident("a", 1),
        then_body: BlockStmt::new(1),
        else_body: Some(Box::new(Stmt::If(middle))),
        line: 1,
    };

    let names = outer
        .conditions()
        .into_iter()
        .map(|condition| match condition {
            Expr::Identifier(identifier) => identifier.name.as_str(),
            _ => panic!("Expected identifier"),
        })
        .collect::<Vec<_>>();

    assert_eq!(names, vec!["a", "b", "c"]);
    assert_eq!(Stmt::If(outer).get_node_kind(), NodeKind::IfStmt);
}

#[test]
fn test_statement_kinds() {
    let mut block = BlockStmt::new(1);
    block.push(Stmt::Expression(ExpressionStmt {
        expression: ident("x", 1),
        line: 1,
    }));
    block.push(Stmt::While(WhileStmt {
        condition: Expr::Bool(BoolExpr { value: true, line: 2 }),
        body: BlockStmt::new(2),
        line: 2,
    }));
    block.push(Stmt::Return(ReturnStmt { value: None, line: 3 }));
    block.push(Stmt::Empty(EmptyStmt { line: 4 }));

    let mut colors = EnumStmt::new("Color".to_string(), 5);
    colors.add_value("Red".to_string());
    colors.add_value("Green".to_string());
    block.push(Stmt::Enum(colors));

    let mut import = ImportStmt {
        path: vec![],
        line: 6,
    };
    import.add_to_path("std".to_string());
    import.add_to_path("io".to_string());
    assert_eq!(import.dotted_path(), "std.io");
    block.push(Stmt::Import(import));

    assert_eq!(block.len(), 6);
    assert_eq!(
        block.iter().map(Node::get_node_kind).collect::<Vec<_>>(),
        vec![
            NodeKind::ExpressionStmt,
            NodeKind::WhileStmt,
            NodeKind::ReturnStmt,
            NodeKind::EmptyStmt,
            NodeKind::EnumStmt,
            NodeKind::ImportStmt,
        ]
    );
    assert_eq!(block.iter().map(Node::line).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_program_tree() {
    let mut constructor = FunctionDefinition::new("Point".to_string(), "Point".to_string(), 4);
    constructor.is_constructor = true;
    constructor.add_parameter(FunctionParameter {
        name: "x".to_string(),
        type_name: "float".to_string(),
        line: 4,
    });

    let mut initializer = FunctionDefinition::new(String::new(), "int".to_string(), 2);
    initializer.add_statement(Stmt::Return(ReturnStmt {
        value: Some(number(0.0, 2)),
        line: 2,
    }));

    let mut class = ClassDefinition::new("Point".to_string(), Some("Shape".to_string()), 1);
    class.add_attribute(ClassAttributeDefinition {
        name: "count".to_string(),
        type_name: "int".to_string(),
        is_static: true,
        initializer: Some(initializer),
        line: 2,
    });
    class.add_method(constructor);

    let mut main = FunctionDefinition::new("main".to_string(), "void".to_string(), 8);
    main.is_static = true;

    let mut program = Program::new(1);
    program.add_class(class);
    program.add_function(main);

    assert_eq!(program.get_node_kind(), NodeKind::Program);
    assert_eq!(program.classes.len(), 1);
    assert_eq!(program.functions[0].name, "main");

    let class = &program.classes[0];
    assert_eq!(class.get_node_kind(), NodeKind::ClassDef);
    assert_eq!(class.super_class.as_deref(), Some("Shape"));
    assert_eq!(class.get_constructor().map(|f| f.parameters.len()), Some(1));
    assert!(class.get_method("missing").is_none());

    let attribute = &class.attributes[0];
    assert_eq!(attribute.get_node_kind(), NodeKind::ClassAttributeDef);
    assert_eq!(
        attribute.initializer.as_ref().map(|init| init.body.len()),
        Some(1)
    );
    assert_eq!(
        class.methods[0].parameters[0].get_node_kind(),
        NodeKind::FunctionParameter
    );
}

#[test]
fn test_constructed_nodes_keep_their_line() {
    let program = Program::new(1);
    let block = BlockStmt::new(4);
    let arguments = Arguments::new(7);
    let import = ImportStmt {
        path: vec!["std".to_string()],
        line: 2,
    };
    let empty = EmptyStmt { line: 3 };

    assert_eq!(program.line(), 1);
    assert_eq!(block.line(), 4);
    assert_eq!(arguments.line(), 7);
    assert_eq!(import.line(), 2);
    assert_eq!(empty.line(), 3);
}
