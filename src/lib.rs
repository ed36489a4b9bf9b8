//! # nulla
//!
//! nulla is a small statically-typed scripting language with nullable types,
//! written in Rust. Source text is lexed, parsed into an abstract syntax tree,
//! and executed by a tree-walking interpreter with lexical scopes, runtime
//! type checks, `as` conversions and a tiny standard library.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::{
    ast::Program,
    error::ErrorHandler,
    interpreter::{
        evaluator::{
            core::{Interpreter, InterpreterConfig},
            function::builtin::StandardLibrary,
        },
        lexer::core::{Lexer, LexerConfig},
        parser::core::Parser,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums, function
/// declarations, and the `Type` model shared by the parser and the
/// interpreter. The AST is built by the parser and traversed by the
/// evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Models primitive types, nullability, and the assignability rule.
pub mod ast;
/// Provides error types for every stage and the handler they report to.
///
/// Lexer and parser errors carry the source position where they were
/// detected; runtime errors carry the names and types involved. All of them
/// flow through the `ErrorHandler` trait, which decides how to present them.
///
/// # Responsibilities
/// - Defines error types for all failure modes (lexer, parser, interpreter).
/// - Defines the `ErrorHandler` seam and a collecting implementation.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and value
/// representations to provide a complete runtime for source code.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// Source positions.
///
/// Line, column and character offset of a place in the source, and a cursor
/// that tracks them while walking the text.
pub mod source;
/// General numeric helpers used by the lexer and the evaluator.
pub mod util;

/// Settings for a whole run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    pub lexer:       LexerConfig,
    pub interpreter: InterpreterConfig,
}

/// How a call to [`run_source`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every top-level statement ran.
    Completed,
    /// Lexing or parsing reported errors, so nothing was executed.
    Rejected {
        /// Number of errors reported before execution would have started.
        errors: usize,
    },
    /// A runtime error was reported. Errors other than a rejected standard
    /// library override end execution.
    Failed,
}

/// Lexes and parses `source` into a [`Program`].
///
/// Errors are reported to `handler`; a program is returned regardless and
/// holds whatever could be parsed.
pub fn parse_source(source: &str, config: LexerConfig, handler: &mut dyn ErrorHandler) -> Program {
    let lexer = Lexer::new(source, config, handler);
    Parser::new(lexer).parse()
}

/// Parses and runs `source`.
///
/// Execution only starts when lexing and parsing reported no errors. Output
/// of `print` and input of `readInput` go through `stdlib`.
///
/// # Examples
/// ```
/// use nulla::{
///     Config, Outcome, error::Diagnostics,
///     interpreter::evaluator::function::builtin::StandardLibrary, run_source,
/// };
///
/// let mut out = Vec::new();
/// let mut diagnostics = Diagnostics::default();
/// let source = r#"const int? a = null
/// print(((a ?: 2) * 21) as string)"#;
///
/// let outcome = run_source(source,
///                          &Config::default(),
///                          StandardLibrary::with_io(&b""[..], &mut out),
///                          &mut diagnostics);
///
/// assert_eq!(outcome, Outcome::Completed);
/// assert_eq!(String::from_utf8(out).unwrap(), "42\n");
///
/// // An undeclared variable is a runtime error.
/// let outcome = run_source("print(x)",
///                          &Config::default(),
///                          StandardLibrary::with_io(&b""[..], std::io::sink()),
///                          &mut diagnostics);
/// assert_eq!(outcome, Outcome::Failed);
/// ```
pub fn run_source(source: &str,
                  config: &Config,
                  stdlib: StandardLibrary<'_>,
                  handler: &mut dyn ErrorHandler)
                  -> Outcome {
    let before = handler.error_count();
    let program = parse_source(source, config.lexer, handler);

    let errors = handler.error_count() - before;
    if errors > 0 {
        debug!(errors, "skipping execution");
        return Outcome::Rejected { errors };
    }

    Interpreter::new(handler, stdlib, config.interpreter).interpret(&program);

    if handler.error_count() > before {
        Outcome::Failed
    } else {
        Outcome::Completed
    }
}
