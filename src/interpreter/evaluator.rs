/// Binary operator evaluation logic.
///
/// Handles arithmetic, comparisons, and the short-circuiting logical and
/// null-safety operators.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements logical `!`, arithmetic negation, and `as` conversions.
pub mod unary;

/// Core evaluation logic and interpreter state.
///
/// Contains the `Interpreter`, statement execution, expression dispatch, and
/// the `Signal` type that carries `return` values and failures up the call
/// stack.
pub mod core;

/// Lexical scopes.
///
/// An index-based arena of scopes with parent links. Blocks nest inside the
/// current scope while function bodies hang directly off the global scope.
pub mod scope;

/// Utility functions for evaluation.
///
/// Operand type checks shared by the operator implementations.
pub mod utils;

/// Function evaluation.
///
/// Handles user-defined and built-in function calls, argument checking, and
/// return value computation.
pub mod function;
