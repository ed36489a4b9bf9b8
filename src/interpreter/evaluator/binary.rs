/// `+`, `-`, `*`, `/` and `%`.
pub mod arithmetic;

/// `==`, `!=`, `<`, `<=`, `>` and `>=`.
pub mod comparison;

/// `&&`, `||` and `?:`, the operators that may skip their right operand.
pub mod logic;
