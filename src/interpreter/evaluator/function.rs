/// The standard library.
///
/// `print`, `readInput`, `isNumber` and `type`, declared in a static table
/// and run against the I/O streams the `StandardLibrary` was built with.
pub mod builtin;
/// Function call dispatch.
///
/// Resolves names (built-ins first), evaluates and checks arguments, and runs
/// user-defined functions in their own scope.
pub mod core;
