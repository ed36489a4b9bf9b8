use std::{fs, path::PathBuf, process};

use clap::{ArgGroup, Parser};
use nulla::{
    Config, Outcome,
    error::{ErrorHandler, LexerError, ParseError, RuntimeError},
    interpreter::{
        evaluator::{
            core::{DEFAULT_MAX_CALL_DEPTH, InterpreterConfig},
            function::builtin::StandardLibrary,
        },
        lexer::core::LexerConfig,
    },
    run_source,
};
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

/// nulla runs scripts written in a small statically-typed language with
/// nullable types.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(group(ArgGroup::new("input").required(true).args(["file", "std_in"])))]
struct Args {
    /// Path of the script to run.
    file: Option<PathBuf>,

    /// Runs the given source code instead of a file.
    #[arg(long = "std-in", value_name = "CODE")]
    std_in: Option<String>,

    /// Stops after this many lexer and parser errors.
    #[arg(long, default_value_t = 10)]
    max_errors: usize,

    /// Maximum depth of nested function calls.
    #[arg(long, default_value_t = DEFAULT_MAX_CALL_DEPTH)]
    max_call_depth: usize,
}

/// Prints every error as it is reported and gives up once too many syntax
/// errors piled up.
struct ConsoleReporter {
    max_errors: usize,
    count:      usize,
}

impl ConsoleReporter {
    fn syntax_error(&mut self, message: &dyn std::fmt::Display) {
        println!("{message}");
        self.count += 1;
        if self.count > self.max_errors {
            println!("Encountered too many errors, exiting...");
            process::exit(1);
        }
    }
}

impl ErrorHandler for ConsoleReporter {
    fn on_lexer_error(&mut self, error: LexerError) {
        self.syntax_error(&error);
    }

    fn on_parser_error(&mut self, error: ParseError) {
        self.syntax_error(&error);
    }

    fn on_interpreter_error(&mut self, error: RuntimeError) {
        println!("Interpreter error: {error}");
        self.count += 1;
    }

    fn error_count(&self) -> usize {
        self.count
    }
}

fn main() {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::builder().with_default_directive(LevelFilter::WARN.into())
                                                                  .from_env_lossy())
                             .with_writer(std::io::stderr)
                             .init();

    let args = Args::parse();

    let source = if let Some(code) = args.std_in {
        code
    } else if let Some(path) = &args.file {
        fs::read_to_string(path).unwrap_or_else(|e| {
                                    eprintln!("Failed to read the input file '{}': {e}",
                                              path.display());
                                    process::exit(1);
                                })
    } else {
        eprintln!("Usage: nulla <FILE> or nulla --std-in \"<CODE>\"");
        process::exit(2);
    };

    let config = Config { lexer:       LexerConfig::default(),
                          interpreter: InterpreterConfig { max_call_depth: args.max_call_depth }, };
    let mut reporter = ConsoleReporter { max_errors: args.max_errors,
                                         count:      0, };

    match run_source(&source, &config, StandardLibrary::stdio(), &mut reporter) {
        Outcome::Completed => {},
        Outcome::Rejected { .. } | Outcome::Failed => process::exit(1),
    }
}
