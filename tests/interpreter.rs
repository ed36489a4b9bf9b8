use nulla::{
    Config, Outcome,
    ast::{
        AdditiveOperator, ComparisonOperator, Expr, FunctionDecl, Parameter, Program, Statement,
        Type,
    },
    error::{Diagnostics, RuntimeError},
    interpreter::{
        evaluator::{
            core::{Interpreter, InterpreterConfig, Signal},
            function::builtin::{BUILTIN_FUNCTIONS, StandardLibrary},
        },
        value::core::RuntimeValue,
    },
    run_source,
};

struct Run {
    outcome:     Outcome,
    output:      String,
    diagnostics: Diagnostics,
}

fn run_configured(source: &str, input: &str, config: &Config) -> Run {
    let mut output = Vec::new();
    let mut diagnostics = Diagnostics::default();
    let outcome = run_source(source,
                             config,
                             StandardLibrary::with_io(input.as_bytes(), &mut output),
                             &mut diagnostics);

    Run { outcome,
          output: String::from_utf8(output).expect("output is valid UTF-8"),
          diagnostics }
}

fn run_with_input(source: &str, input: &str) -> Run {
    run_configured(source, input, &Config::default())
}

fn run(source: &str) -> Run {
    run_with_input(source, "")
}

fn output_of(source: &str) -> String {
    let run = run(source);
    assert_eq!(run.outcome, Outcome::Completed, "errors: {:?}", run.diagnostics);
    run.output
}

fn runtime_error(source: &str) -> RuntimeError {
    let run = run(source);
    assert_eq!(run.outcome, Outcome::Failed, "output: {}", run.output);
    assert_eq!(run.diagnostics.runtime.len(), 1, "{:?}", run.diagnostics.runtime);
    run.diagnostics.runtime[0].clone()
}

#[test]
fn shadowing_in_nested_block() {
    let source = r"
        var bool flag = false
        if (true) {
            var bool flag = true
            print(flag as string)
        }
        print(flag as string)
    ";
    assert_eq!(output_of(source), "true\nfalse\n");
}

#[test]
fn shadowing_with_a_different_type() {
    let source = r"
        var int x = 1
        if (true) {
            var bool x = true
            print(x as string)
        }
        print(x as string)
        x = x + 1
        print(x as string)
    ";
    assert_eq!(output_of(source), "true\n1\n2\n");
}

#[test]
fn non_ascii_variable_names() {
    assert_eq!(output_of("var int zażółć = 1\nprint(zażółć as string)"), "1\n");
}

#[test]
fn assignment_reaches_enclosing_scope() {
    let source = r"
        var int i = 0
        while (i < 3) {
            i = i + 1
        }
        print(i as string)
    ";
    assert_eq!(output_of(source), "3\n");
}

#[test]
fn comparing_int_with_double_is_a_type_error() {
    assert_eq!(runtime_error("if (1 == 1.0) {}"),
               RuntimeError::InvalidRuntimeType { expected: "int".into(),
                                                  actual:   "double".into(), });
}

#[test]
fn every_builtin_rejects_an_override() {
    for name in BUILTIN_FUNCTIONS {
        let run = run(&format!("fun {name}() {{}}\nprint(\"still running\")"));

        assert_eq!(run.diagnostics.runtime,
                   vec![RuntimeError::StandardLibraryFunctionOverridden { function:
                                                                              (*name).to_string(), }]);
        assert_eq!(run.outcome, Outcome::Failed);
        assert_eq!(run.output, "still running\n");
    }
}

#[test]
fn argument_count_is_checked() {
    assert_eq!(runtime_error("fun f(int a) {}\nf()"),
               RuntimeError::InvalidFunctionArgumentsNumber { expected: 1,
                                                              actual:   0, });
    assert_eq!(runtime_error("print(\"a\", \"b\")"),
               RuntimeError::InvalidFunctionArgumentsNumber { expected: 1,
                                                              actual:   2, });
}

#[test]
fn extra_arguments_stop_the_call_before_the_body() {
    let run = run("fun f(int a) { print(\"ran\") }\nf(1, 2)");

    assert_eq!(run.outcome, Outcome::Failed);
    assert_eq!(run.output, "");
    assert_eq!(run.diagnostics.runtime,
               vec![RuntimeError::InvalidFunctionArgumentsNumber { expected: 1,
                                                                   actual:   2, }]);
}

#[test]
fn argument_types_are_checked() {
    assert_eq!(runtime_error("fun f(int a) {}\nf(\"x\")"),
               RuntimeError::InvalidRuntimeType { expected: "int".into(),
                                                  actual:   "string".into(), });
    assert_eq!(runtime_error("print(1)"),
               RuntimeError::InvalidRuntimeType { expected: "string?".into(),
                                                  actual:   "int".into(), });
}

#[test]
fn division_by_zero() {
    assert_eq!(runtime_error("print((1 / 0) as string)"), RuntimeError::ZeroDivision);
    assert_eq!(runtime_error("print((1 % 0) as string)"), RuntimeError::ZeroDivision);
    assert_eq!(runtime_error("print((1.0 / 0.0) as string)"), RuntimeError::ZeroDivision);
}

#[test]
fn arithmetic() {
    assert_eq!(output_of("print((7 % 3) as string)"), "1\n");
    assert_eq!(output_of("print((7.5 / 2.5) as string)"), "3.0\n");
    assert_eq!(output_of("print((2 + 3 * 4 - 1) as string)"), "13\n");
    assert_eq!(output_of("print((-(2 - 5)) as string)"), "3\n");
    assert_eq!(output_of("print(\"a\" + \"b\" + \"c\")"), "abc\n");
}

#[test]
fn int_arithmetic_wraps() {
    assert_eq!(output_of("print((9223372036854775807 + 1) as string)"),
               "-9223372036854775808\n");
}

#[test]
fn mixed_operands_are_rejected() {
    assert!(matches!(runtime_error("print((1 + 1.5) as string)"),
                     RuntimeError::InvalidRuntimeType { .. }));
    assert_eq!(runtime_error("print(\"a\" - \"b\")"),
               RuntimeError::InvalidOperation { operation: "-".into(),
                                                left_type: "string".into(), });
}

#[test]
fn nullable_left_operand_is_rejected() {
    let run = run_with_input("print(readInput() + \"!\")", "text\n");

    assert_eq!(run.outcome, Outcome::Failed);
    assert_eq!(run.diagnostics.runtime,
               vec![RuntimeError::InvalidRuntimeType { expected: "int, double or string".into(),
                                                       actual:   "string?".into(), }]);
}

#[test]
fn assigning_to_a_constant() {
    assert_eq!(runtime_error("const int x = 1\nx = 2"),
               RuntimeError::ImmutableVariable { name: "x".into() });
}

#[test]
fn rejected_assignment_keeps_the_constant() {
    let mut diagnostics = Diagnostics::default();
    let mut output = Vec::new();
    let stdlib = StandardLibrary::with_io(&b""[..], &mut output);
    let mut interpreter = Interpreter::new(&mut diagnostics, stdlib, InterpreterConfig::default());

    let declaration = Statement::VariableDeclaration { immutable:     true,
                                                       name:          "x".into(),
                                                       ty:            Type::INT,
                                                       initial_value: Some(Expr::literal(1_i64)), };
    let assignment = Statement::Expression { expression: Expr::identifier("x"),
                                             assigned:   Some(Expr::literal(2_i64)), };

    assert_eq!(interpreter.execute(&declaration), Ok(()));
    assert_eq!(interpreter.execute(&assignment),
               Err(Signal::Failure(RuntimeError::ImmutableVariable { name: "x".into() })));
    assert_eq!(interpreter.evaluate(&Expr::identifier("x")), Ok(RuntimeValue::int(1)));
}

#[test]
fn assignment_checks_declared_type() {
    assert_eq!(runtime_error("var int x = 1\nx = null"),
               RuntimeError::InvalidRuntimeType { expected: "int".into(),
                                                  actual:   "void".into(), });
}

#[test]
fn unknown_names() {
    assert_eq!(runtime_error("y = 1"),
               RuntimeError::VariableNotFound { name: "y".into() });
    assert_eq!(runtime_error("missing()"),
               RuntimeError::FunctionNotFound { name: "missing".into() });
}

#[test]
fn duplicate_variable_in_one_scope() {
    assert_eq!(runtime_error("var int a = 1\nvar int a = 2"),
               RuntimeError::DuplicateVariable { name: "a".into() });
}

#[test]
fn non_nullable_declaration_needs_a_value() {
    assert_eq!(runtime_error("var int x"),
               RuntimeError::InvalidRuntimeType { expected: "int".into(),
                                                  actual:   "void".into(), });
}

#[test]
fn nullable_variables() {
    let source = r"
        var int? x
        print((x == null) as string)
        x = 5
        print((x != null) as string)
        print((x ?: 0) as string)
    ";
    assert_eq!(output_of(source), "true\ntrue\n5\n");
}

#[test]
fn missing_return_value() {
    assert_eq!(runtime_error("fun f() -> int {}\nf()"),
               RuntimeError::NoReturnFromFunction { function: "f".into() });
}

#[test]
fn returned_value_must_fit_return_type() {
    assert_eq!(runtime_error("fun f() -> int { return \"x\" }\nf()"),
               RuntimeError::InvalidRuntimeType { expected: "int".into(),
                                                  actual:   "string".into(), });
}

#[test]
fn recursion() {
    let source = r"
        fun fact(int n) -> int {
            if (n <= 1) {
                return 1
            }
            return n * fact(n - 1)
        }
        print(fact(10) as string)
    ";
    assert_eq!(output_of(source), "3628800\n");
}

#[test]
fn return_leaves_nested_loops() {
    let source = r"
        fun first(int limit) -> int {
            var int i = 0
            while (true) {
                if (i == limit) {
                    return i
                }
                i = i + 1
            }
        }
        print(first(4) as string)
    ";
    assert_eq!(output_of(source), "4\n");
}

#[test]
fn unbounded_recursion_hits_the_depth_limit() {
    let config = Config { interpreter: InterpreterConfig { max_call_depth: 5 },
                          ..Config::default() };
    let run = run_configured("fun f() { f() }\nf()", "", &config);

    assert_eq!(run.outcome, Outcome::Failed);
    assert_eq!(run.diagnostics.runtime,
               vec![RuntimeError::StackOverflow { function: "f".into(),
                                                  limit:    5, }]);
}

#[test]
fn functions_do_not_see_caller_locals() {
    let source = r"
        fun peek() -> int { return hidden }
        fun caller() -> int {
            var int hidden = 1
            return peek()
        }
        caller()
    ";
    assert_eq!(runtime_error(source),
               RuntimeError::VariableNotFound { name: "hidden".into() });
}

#[test]
fn functions_see_globals() {
    let source = r"
        var int g = 7
        fun get() -> int { return g }
        print(get() as string)
    ";
    assert_eq!(output_of(source), "7\n");
}

#[test]
fn parameters_are_mutable() {
    let source = r"
        fun countdown(int n) -> int {
            while (n > 0) {
                n = n - 1
            }
            return n
        }
        print(countdown(3) as string)
    ";
    assert_eq!(output_of(source), "0\n");
}

#[test]
fn casts() {
    assert_eq!(output_of("print((\"41\" as int + 1) as string)"), "42\n");
    assert_eq!(output_of("print((3.9 as int) as string)"), "3\n");
    assert_eq!(output_of("print((2 as double) as string)"), "2.0\n");
    assert_eq!(output_of("print((\"TRUE\" as bool) as string)"), "true\n");
    assert_eq!(output_of("print((null as string?) ?: \"fallback\")"), "fallback\n");
}

#[test]
fn any_text_converts_to_bool() {
    assert_eq!(output_of("print((\"yes\" as bool) as string)"), "false\n");
    assert_eq!(output_of("print((\"\" as bool) as string)"), "false\n");
    assert_eq!(output_of("print((\"True\" as bool) as string)"), "true\n");
}

#[test]
fn null_safety_keeps_a_present_value() {
    assert_eq!(output_of("print((\"x\" as string?) ?: \"fallback\")"), "x\n");
}

#[test]
fn invalid_casts() {
    assert_eq!(runtime_error("print((\"abc\" as int) as string)"),
               RuntimeError::InvalidCast { expected: "int".into(),
                                           actual:   "abc".into(), });
    assert!(matches!(runtime_error("print((null as int) as string)"),
                     RuntimeError::InvalidCast { .. }));
    assert!(matches!(runtime_error("print((true as int) as string)"),
                     RuntimeError::InvalidCast { .. }));
    assert!(matches!(runtime_error("print((1 as bool) as string)"),
                     RuntimeError::InvalidCast { .. }));
}

#[test]
fn logical_operators_short_circuit() {
    let source = r#"
        fun boom() -> bool {
            print("boom")
            return true
        }
        if (true || boom()) { print("or") }
        if (false && boom()) {} else { print("and") }
        print((!true) as string)
    "#;
    assert_eq!(output_of(source), "or\nand\nfalse\n");
}

#[test]
fn condition_must_be_bool() {
    assert_eq!(runtime_error("while (1) {}"),
               RuntimeError::InvalidRuntimeType { expected: "bool".into(),
                                                  actual:   "int".into(), });
}

#[test]
fn builtins() {
    assert_eq!(output_of("print(type(1))\nprint(type(2.5))\nprint(type(null))"),
               "INT\nDOUBLE\nVOID\n");
    assert_eq!(output_of("print(isNumber(\"12\") as string)\nprint(isNumber(\"1.5\") as string)"),
               "true\nfalse\n");
    assert_eq!(output_of("print(null)"), "null\n");
}

#[test]
fn read_input_lines_then_null() {
    let source = r#"
        print(readInput() ?: "none")
        print(readInput() ?: "none")
        print(readInput() ?: "none")
    "#;
    let run = run_with_input(source, "first\r\nsecond\n");

    assert_eq!(run.outcome, Outcome::Completed);
    assert_eq!(run.output, "first\nsecond\nnone\n");
}

#[test]
fn top_level_return_ends_the_program() {
    let run = run("print(\"a\")\nreturn null\nprint(\"b\")");

    assert_eq!(run.outcome, Outcome::Completed);
    assert_eq!(run.output, "a\n");
}

#[test]
fn first_runtime_error_stops_the_run() {
    let run = run("print(\"before\")\nprint(x)\nprint(\"after\")");

    assert_eq!(run.outcome, Outcome::Failed);
    assert_eq!(run.output, "before\n");
    assert_eq!(run.diagnostics.runtime.len(), 1);
}

#[test]
fn syntax_errors_prevent_execution() {
    let run = run("print(\"a\")\n#");

    assert_eq!(run.outcome, Outcome::Rejected { errors: 1 });
    assert!(run.output.is_empty());
    assert!(run.diagnostics.runtime.is_empty());
}

#[test]
fn interprets_a_hand_built_program() {
    let counter = Expr::identifier("n");
    let double = FunctionDecl { name:        "twice".into(),
                                parameters:  vec![Parameter { name: "x".into(),
                                                              ty:   Type::INT, }],
                                return_type: Type::INT,
                                body:        vec![Statement::Return(Some(Expr::Additive {
                                    left:  Box::new(Expr::identifier("x")),
                                    right: vec![(AdditiveOperator::Plus, Expr::identifier("x"))],
                                }))], };

    let mut program = Program { statements: vec![
        Statement::VariableDeclaration { immutable:     false,
                                         name:          "n".into(),
                                         ty:            Type::INT,
                                         initial_value: Some(Expr::literal(1_i64)), },
        Statement::While { condition: Expr::Comparison { left:     Box::new(counter.clone()),
                                                         operator: ComparisonOperator::Less,
                                                         right:    Box::new(Expr::literal(20_i64)), },
                           body:      vec![Statement::Expression {
                               expression: counter.clone(),
                               assigned:   Some(Expr::call("twice", vec![counter.clone()])),
                           }], },
        Statement::Expression { expression: Expr::call("print",
                                                       vec![Expr::As { left:   Box::new(counter),
                                                                       target: Type::STRING, }]),
                                assigned:   None, },
    ],
                                ..Program::default() };
    program.functions.insert(double.name.clone(), double);

    let mut output = Vec::new();
    let mut diagnostics = Diagnostics::default();
    let stdlib = StandardLibrary::with_io(&b""[..], &mut output);
    Interpreter::new(&mut diagnostics, stdlib, InterpreterConfig::default()).interpret(&program);

    assert!(diagnostics.is_empty(), "{diagnostics:?}");
    assert_eq!(String::from_utf8(output).unwrap(), "32\n");
}
