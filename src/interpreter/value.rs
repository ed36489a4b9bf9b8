/// Type conversions performed by `as`.
///
/// Implements every supported `value as Type` conversion and reports the
/// combinations that have no meaning.
pub mod cast;

/// Runtime values.
///
/// Defines the `Value` payload enum and `RuntimeValue`, a payload paired with
/// its runtime type, together with the rendering used by `print` and
/// `as string`.
pub mod core;
