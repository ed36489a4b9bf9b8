use nulla::{
    ast::{
        AdditiveOperator, ComparisonOperator, Expr, FunctionDecl, LiteralValue,
        MultiplicativeOperator, Parameter, Program, Statement, Type, UnaryOperator,
    },
    error::{Diagnostics, ParseErrorKind},
    interpreter::lexer::core::LexerConfig,
    parse_source,
    source::Position,
};

fn parse(source: &str) -> (Program, Diagnostics) {
    let mut diagnostics = Diagnostics::default();
    let program = parse_source(source, LexerConfig::default(), &mut diagnostics);
    (program, diagnostics)
}

fn parse_ok(source: &str) -> Program {
    let (program, diagnostics) = parse(source);
    assert!(diagnostics.is_empty(), "unexpected errors for {source:?}: {diagnostics:?}");
    program
}

fn parse_errors(source: &str) -> Vec<ParseErrorKind> {
    let (_, diagnostics) = parse(source);
    assert!(diagnostics.lexer.is_empty(), "unexpected lexer errors: {diagnostics:?}");
    diagnostics.parser.into_iter().map(|e| e.kind).collect()
}

/// Parses a single expression statement and returns its expression.
fn expression(source: &str) -> Expr {
    let program = parse_ok(source);
    match program.statements.as_slice() {
        [Statement::Expression { expression,
                                 assigned: None, }] => expression.clone(),
        other => panic!("expected one expression statement, got {other:?}"),
    }
}

fn int(value: i64) -> Expr {
    Expr::literal(value)
}

fn id(name: &str) -> Expr {
    Expr::identifier(name)
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(expression("1 + 2 * 3"),
               Expr::Additive { left:  Box::new(int(1)),
                                right: vec![(AdditiveOperator::Plus,
                                             Expr::Multiplicative { left:  Box::new(int(2)),
                                                                    right:
                                                                        vec![(MultiplicativeOperator::Multiply,
                                                                              int(3))], })], });
}

#[test]
fn additive_chain_keeps_source_order() {
    assert_eq!(expression("a - b + c"),
               Expr::Additive { left:  Box::new(id("a")),
                                right: vec![(AdditiveOperator::Minus, id("b")),
                                            (AdditiveOperator::Plus, id("c")),], });
}

#[test]
fn conjunction_binds_tighter_than_disjunction() {
    assert_eq!(expression("a || b && c"),
               Expr::Disjunction { left:  Box::new(id("a")),
                                   right: vec![Expr::Conjunction { left:  Box::new(id("b")),
                                                                   right: vec![id("c")], }], });
}

#[test]
fn null_safety_right_side_is_a_full_expression() {
    assert_eq!(expression("a ?: b || c"),
               Expr::NullSafety { left:  Box::new(id("a")),
                                  right: Box::new(Expr::Disjunction { left:  Box::new(id("b")),
                                                                      right: vec![id("c")], }), });
}

#[test]
fn comparison_of_additive_operands() {
    assert_eq!(expression("x + 1 >= y"),
               Expr::Comparison { left:     Box::new(Expr::Additive { left:  Box::new(id("x")),
                                                                      right: vec![(AdditiveOperator::Plus,
                                                                                   int(1))], }),
                                  operator: ComparisonOperator::GreaterOrEqual,
                                  right:    Box::new(id("y")), });
}

#[test]
fn cast_binds_tighter_than_multiplication() {
    assert_eq!(expression("x as int? * 2"),
               Expr::Multiplicative { left:  Box::new(Expr::As { left:   Box::new(id("x")),
                                                                 target: Type::INT.to_nullable(), }),
                                      right: vec![(MultiplicativeOperator::Multiply, int(2))], });
}

#[test]
fn unary_applies_before_cast() {
    assert_eq!(expression("-x as double"),
               Expr::As { left:   Box::new(Expr::Unary { operator: UnaryOperator::Minus,
                                                         operand:  Box::new(id("x")), }),
                          target: Type::DOUBLE, });
}

#[test]
fn parentheses_override_precedence() {
    assert_eq!(expression("(1 + 2) % 3"),
               Expr::Multiplicative { left:  Box::new(Expr::Additive { left:  Box::new(int(1)),
                                                                       right: vec![(AdditiveOperator::Plus,
                                                                                    int(2))], }),
                                      right: vec![(MultiplicativeOperator::Modulo, int(3))], });
}

#[test]
fn function_calls_with_arguments() {
    assert_eq!(expression("print(f(), \"a\", null)"),
               Expr::call("print",
                          vec![Expr::call("f", vec![]),
                               Expr::literal("a"),
                               Expr::Literal(LiteralValue::Null),]));
}

#[test]
fn declarations_and_assignment() {
    let program = parse_ok("var int? x\nconst string s = \"hi\"\nx = 3");

    assert_eq!(program.statements,
               vec![Statement::VariableDeclaration { immutable:     false,
                                                     name:          "x".into(),
                                                     ty:            Type::INT.to_nullable(),
                                                     initial_value: None, },
                    Statement::VariableDeclaration { immutable:     true,
                                                     name:          "s".into(),
                                                     ty:            Type::STRING,
                                                     initial_value: Some(Expr::literal("hi")), },
                    Statement::Expression { expression: id("x"),
                                            assigned:   Some(int(3)), },]);
}

#[test]
fn control_flow_statements() {
    let program = parse_ok("if (a) { return } else { b() }\nwhile (true) { return 1 }");

    assert_eq!(program.statements,
               vec![Statement::If { condition: id("a"),
                                    body:      vec![Statement::Return(None)],
                                    else_body: Some(vec![Statement::Expression {
                                        expression: Expr::call("b", vec![]),
                                        assigned:   None,
                                    }]), },
                    Statement::While { condition: Expr::literal(true),
                                       body:      vec![Statement::Return(Some(int(1)))], },]);
}

#[test]
fn function_declarations_are_collected() {
    let program = parse_ok("print(add(1, 2.0))\nfun add(int a, double? b) -> int { return a }\nfun \
                            noop() {}");

    assert_eq!(program.statements.len(), 1);
    assert_eq!(program.functions["add"],
               FunctionDecl { name:        "add".into(),
                              parameters:  vec![Parameter { name: "a".into(),
                                                            ty:   Type::INT, },
                                                Parameter { name: "b".into(),
                                                            ty:   Type::DOUBLE.to_nullable(), },],
                              return_type: Type::INT,
                              body:        vec![Statement::Return(Some(id("a")))], });
    assert_eq!(program.functions["noop"].return_type, Type::VOID);
    assert!(program.functions["noop"].body.is_empty());
}

#[test]
fn comments_are_ignored() {
    let program = parse_ok("// leading\nvar int x = 1 // trailing\n// done");
    assert_eq!(program.statements.len(), 1);
}

#[test]
fn duplicate_function_keeps_first() {
    let (program, diagnostics) = parse("fun f() {}\nfun f() { return 1 }");

    assert_eq!(diagnostics.parser.len(), 1);
    assert_eq!(diagnostics.parser[0].kind,
               ParseErrorKind::DuplicateFunctionDeclaration { name: "f".into() });
    assert!(program.functions["f"].body.is_empty());
}

#[test]
fn missing_closing_parenthesis_in_call() {
    assert_eq!(parse_errors("print((1)"), vec![ParseErrorKind::UnmatchedParenthesis]);
}

#[test]
fn block_without_braces() {
    let (program, diagnostics) = parse("if (x) print(x)");

    let kinds = diagnostics.parser.iter().map(|e| e.kind.clone()).collect::<Vec<_>>();
    assert_eq!(kinds, vec![ParseErrorKind::InvalidBlock, ParseErrorKind::InvalidBlock]);
    assert!(matches!(program.statements.as_slice(), [Statement::If { .. }]));
}

#[test]
fn condition_without_parentheses() {
    assert_eq!(parse_errors("while x {}"),
               vec![ParseErrorKind::InvalidCondition, ParseErrorKind::InvalidCondition]);
}

#[test]
fn declaration_without_initializer_expression() {
    assert_eq!(parse_errors("var int x ="), vec![ParseErrorKind::MissingExpression]);
}

#[test]
fn declaration_without_type() {
    let (program, diagnostics) = parse("var x = 1");

    let kinds = diagnostics.parser.iter().map(|e| e.kind.clone()).collect::<Vec<_>>();
    assert_eq!(kinds, vec![ParseErrorKind::InvalidType]);
    assert_eq!(program.statements,
               vec![Statement::Expression { expression: id("x"),
                                            assigned:   Some(int(1)), }]);
}

#[test]
fn declaration_without_name() {
    // Parsing stops at the `=` the declaration left behind.
    assert_eq!(parse_errors("const bool = true"),
               vec![ParseErrorKind::InvalidVariableDeclaration,
                    ParseErrorKind::InvalidExpression]);
}

#[test]
fn assignment_to_non_identifier() {
    let (program, diagnostics) = parse("f() = 3");

    assert_eq!(diagnostics.parser.len(), 1);
    assert_eq!(diagnostics.parser[0].kind, ParseErrorKind::InvalidExpression);
    assert!(program.statements.is_empty());
}

#[test]
fn malformed_function_declarations() {
    assert_eq!(parse_errors("fun () {}"), vec![ParseErrorKind::InvalidFunctionDeclaration]);
    assert_eq!(parse_errors("fun f(int) {}"),
               vec![ParseErrorKind::InvalidFunctionParamDeclaration]);
    assert_eq!(parse_errors("fun f(a) {}"), vec![ParseErrorKind::InvalidType]);

    let (program, diagnostics) = parse("fun f() -> {}");
    assert_eq!(diagnostics.parser[0].kind, ParseErrorKind::InvalidType);
    assert!(program.functions.is_empty());
}

#[test]
fn empty_parentheses_are_a_missing_expression() {
    assert_eq!(parse_errors("print(())"), vec![ParseErrorKind::MissingExpression]);
}

#[test]
fn chained_comparison_leaves_a_stray_token() {
    let (program, diagnostics) = parse("a < b < c");

    assert_eq!(diagnostics.parser.len(), 1);
    assert_eq!(diagnostics.parser[0].kind, ParseErrorKind::InvalidExpression);
    assert_eq!(diagnostics.parser[0].position, Position::new(1, 7, 6));
    assert!(matches!(program.statements.as_slice(),
                     [Statement::Expression { expression: Expr::Comparison { .. },
                                              .. }]));
}

#[test]
fn stray_closing_brace_is_reported_with_position() {
    let (_, diagnostics) = parse("var int x = 1\n}");

    assert_eq!(diagnostics.parser.len(), 1);
    assert_eq!(diagnostics.parser[0].kind, ParseErrorKind::InvalidExpression);
    assert_eq!(diagnostics.parser[0].position, Position::new(2, 1, 14));
}
