use std::io::{self, BufRead, Write};

use crate::{
    ast::Type,
    error::RuntimeError,
    interpreter::{
        evaluator::function::core::ParamKind,
        value::core::{RuntimeValue, Value},
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives the standard library (for its I/O streams) and the
/// already checked argument values.
type BuiltinFn = fn(&mut StandardLibrary<'_>, &[RuntimeValue]) -> Result<RuntimeValue, RuntimeError>;

/// A function provided by the standard library.
#[derive(Debug)]
pub struct BuiltinFunction {
    pub name:        &'static str,
    pub parameters:  &'static [ParamKind],
    pub return_type: Type,
    func:            BuiltinFn,
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - the parameter list,
/// - the return type,
/// - a function pointer implementing the builtin.
///
/// The macro produces `BUILTIN_TABLE` (static table for lookup) and
/// `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                parameters: [$($param:expr),* $(,)?],
                returns: $returns:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: &[BuiltinFunction] = &[
            $(
                BuiltinFunction { name:        $name,
                                  parameters:  &[$($param),*],
                                  return_type: $returns,
                                  func:        $func, },
            )*
        ];
        /// Names of every standard library function. User functions cannot
        /// take these names.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "print"     => { parameters: [ParamKind::Typed(Type::STRING.to_nullable())], returns: Type::VOID, func: print },
    "readInput" => { parameters: [], returns: Type::STRING.to_nullable(), func: read_input },
    "isNumber"  => { parameters: [ParamKind::Typed(Type::STRING)], returns: Type::BOOL, func: is_number },
    "type"      => { parameters: [ParamKind::Any], returns: Type::STRING, func: type_of },
}

/// The built-in functions together with the streams they read from and
/// write to.
///
/// # Example
/// ```
/// use nulla::interpreter::{
///     evaluator::function::builtin::StandardLibrary,
///     value::core::RuntimeValue,
/// };
///
/// let mut out = Vec::new();
/// let mut stdlib = StandardLibrary::with_io(&b"first\nsecond"[..], &mut out);
/// let read_input = StandardLibrary::try_get_function("readInput").unwrap();
///
/// assert_eq!(stdlib.call(read_input, &[]).unwrap().to_string(), "first");
/// assert_eq!(stdlib.call(read_input, &[]).unwrap().to_string(), "second");
/// assert!(stdlib.call(read_input, &[]).unwrap().is_null());
/// ```
pub struct StandardLibrary<'io> {
    input:  Box<dyn BufRead + 'io>,
    output: Box<dyn Write + 'io>,
}

impl StandardLibrary<'static> {
    /// A standard library bound to the process's stdin and stdout.
    #[must_use]
    pub fn stdio() -> Self {
        Self::with_io(io::stdin().lock(), io::stdout())
    }
}

impl<'io> StandardLibrary<'io> {
    pub fn with_io(input: impl BufRead + 'io, output: impl Write + 'io) -> Self {
        Self { input:  Box::new(input),
               output: Box::new(output), }
    }

    /// Looks a built-in up by name.
    #[must_use]
    pub fn try_get_function(name: &str) -> Option<&'static BuiltinFunction> {
        BUILTIN_TABLE.iter().find(|builtin| builtin.name == name)
    }

    /// Runs a built-in. Arguments are expected to have been checked against
    /// [`BuiltinFunction::parameters`] already.
    pub fn call(&mut self,
                function: &BuiltinFunction,
                arguments: &[RuntimeValue])
                -> Result<RuntimeValue, RuntimeError> {
        (function.func)(self, arguments)
    }
}

#[allow(clippy::needless_pass_by_value)]
fn io_failure(error: io::Error) -> RuntimeError {
    RuntimeError::Io { details: error.to_string() }
}

fn argument_mismatch(expected: Type, arguments: &[RuntimeValue]) -> RuntimeError {
    RuntimeError::InvalidRuntimeType { expected: expected.to_string(),
                                       actual:   arguments.first()
                                                          .map_or_else(|| "nothing".to_string(),
                                                                       |a| a.ty.to_string()), }
}

/// Writes the text followed by a newline, or `null` for a null argument.
fn print(stdlib: &mut StandardLibrary<'_>,
         arguments: &[RuntimeValue])
         -> Result<RuntimeValue, RuntimeError> {
    let text = match arguments {
        [value] => value.to_string(),
        _ => return Err(argument_mismatch(Type::STRING.to_nullable(), arguments)),
    };

    writeln!(stdlib.output, "{text}").map_err(io_failure)?;
    stdlib.output.flush().map_err(io_failure)?;
    Ok(RuntimeValue::void())
}

/// Reads one line without its terminator. Returns `null` at end of input.
fn read_input(stdlib: &mut StandardLibrary<'_>,
              _arguments: &[RuntimeValue])
              -> Result<RuntimeValue, RuntimeError> {
    let mut line = String::new();
    if stdlib.input.read_line(&mut line).map_err(io_failure)? == 0 {
        return Ok(RuntimeValue::null_of(Type::STRING));
    }

    let line = line.strip_suffix('\n')
                   .map_or(line.as_str(), |l| l.strip_suffix('\r').unwrap_or(l));
    Ok(RuntimeValue::new(Value::String(line.to_string()), Type::STRING.to_nullable()))
}

/// `true` when the text parses as an `int`.
fn is_number(_stdlib: &mut StandardLibrary<'_>,
             arguments: &[RuntimeValue])
             -> Result<RuntimeValue, RuntimeError> {
    match arguments {
        [RuntimeValue { value: Value::String(text),
                        .. }] => Ok(RuntimeValue::bool(text.parse::<i64>().is_ok())),
        _ => Err(argument_mismatch(Type::STRING, arguments)),
    }
}

/// The upper-case name of the argument's runtime primitive.
fn type_of(_stdlib: &mut StandardLibrary<'_>,
           arguments: &[RuntimeValue])
           -> Result<RuntimeValue, RuntimeError> {
    arguments.first()
             .map(|value| RuntimeValue::string(value.type_name()))
             .ok_or_else(|| RuntimeError::InvalidFunctionArgumentsNumber { expected: 1,
                                                                           actual:   0, })
}
