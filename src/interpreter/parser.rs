/// Parser state and the top-level program loop.
///
/// Owns the lexer, keeps the current token, and assembles the
/// [`Program`](crate::ast::Program) out of function declarations and
/// statements.
pub mod core;

/// Statement parsing.
///
/// `if`, `while`, `return`, variable declarations, expression statements and
/// assignments, blocks, and `fun` declarations with their parameter lists.
pub mod statement;

/// Binary operator parsing.
///
/// One routine per precedence level, from `||` down to `*`, `/` and `%`.
pub mod binary;

/// Unary, cast and primary expression parsing.
pub mod unary;

/// Small token-matching helpers and type parsing.
pub mod utils;
