/// The evaluator module executes AST nodes.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// checks runtime types, manages scopes and function calls, and performs I/O
/// through the standard library. It is the core execution engine of the
/// interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles variables, functions, and control flow.
/// - Reports runtime errors such as division by zero or invalid casts.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as
/// literals, identifiers, operators, delimiters, and keywords. This is the
/// first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with type and source
///   position.
/// - Enforces the configured limits on literals, identifiers and comments.
/// - Reports lexical errors and keeps going.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser pulls tokens from the lexer and constructs the function table
/// and the list of top-level statements that make up a program.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates grammar, reporting errors with position info.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the payloads produced during interpretation, pairs
/// them with their runtime types, and implements `as` conversions.
///
/// # Responsibilities
/// - Defines `Value` and `RuntimeValue`.
/// - Renders values for `print` and `as string`.
/// - Converts between primitives.
pub mod value;
