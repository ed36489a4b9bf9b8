/// Error handler seam.
///
/// Defines the [`ErrorHandler`](handler::ErrorHandler) trait every stage
/// reports through, plus the collecting [`Diagnostics`](handler::Diagnostics)
/// implementation.
pub mod handler;
/// Lexical errors.
///
/// Problems found while turning characters into tokens, such as overflowing
/// literals or stray characters. Each one carries the position of
/// the offending token.
pub mod lexer_error;
/// Parsing errors.
///
/// Grammar violations found while building the syntax tree, each tied to the
/// position of the token the parser was looking at.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during interpretation: type
/// mismatches, unknown names, failed casts, division by zero and call depth
/// exhaustion.
pub mod runtime_error;

pub use handler::{Diagnostics, ErrorHandler};
pub use lexer_error::{LexerError, LexerErrorKind};
pub use parse_error::{ParseError, ParseErrorKind};
pub use runtime_error::RuntimeError;
