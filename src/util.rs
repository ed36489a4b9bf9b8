/// Numeric helpers.
///
/// Digit accumulation with overflow detection for the lexer, the lossy
/// conversions behind `as double`/`as int` and numeric widening, and the
/// textual rendering of `double` values.
pub mod num;
