use crate::{
    ast::{Primitive, Type},
    error::RuntimeError,
    interpreter::value::core::{RuntimeValue, Value},
    util::num::{double_to_int, int_to_double},
};

/// Converts `value` to `target`, the semantics of `value as target`.
///
/// - Anything converts to `string`, using the printed form.
/// - `int` widens to `double`; `double` truncates to `int`.
/// - A `string` parses to `int` or `double`. It converts to `bool` without
///   failing: `true` in any case gives `true`, every other text `false`.
/// - `null` converts to any nullable target and stays `null`.
///
/// The result carries exactly the target type, nullability included.
///
/// # Errors
/// [`RuntimeError::InvalidCast`] for a text that does not parse as a number, a `bool`
/// converted to a number, a number converted to `bool`, or `null` converted
/// to a non-nullable type.
///
/// # Example
/// ```
/// use nulla::{
///     ast::Type,
///     interpreter::value::{cast::cast, core::RuntimeValue},
/// };
///
/// let value = cast(&RuntimeValue::string("12"), Type::DOUBLE).unwrap();
/// assert_eq!(value, RuntimeValue::double(12.0));
///
/// let value = cast(&RuntimeValue::double(2.0), Type::STRING.to_nullable()).unwrap();
/// assert_eq!(value.to_string(), "2.0");
/// assert!(value.ty.nullable);
///
/// assert!(cast(&RuntimeValue::string("abc"), Type::INT).is_err());
/// assert_eq!(cast(&RuntimeValue::string("yes"), Type::BOOL).unwrap(), RuntimeValue::bool(false));
/// ```
pub fn cast(value: &RuntimeValue, target: Type) -> Result<RuntimeValue, RuntimeError> {
    let invalid = || RuntimeError::InvalidCast { expected: target.to_string(),
                                                 actual:   value.to_string(), };

    let converted = match (&value.value, target.primitive) {
        (Value::Null, _) if target.nullable => Value::Null,
        (Value::Null, _) => return Err(invalid()),
        (_, Primitive::Void) => return Err(invalid()),
        (other, Primitive::String) => Value::String(other.to_string()),
        (Value::Int(i), Primitive::Int) => Value::Int(*i),
        (Value::Double(d), Primitive::Int) => Value::Int(double_to_int(*d)),
        (Value::String(s), Primitive::Int) => Value::Int(s.parse().map_err(|_| invalid())?),
        (Value::Int(i), Primitive::Double) => Value::Double(int_to_double(*i)),
        (Value::Double(d), Primitive::Double) => Value::Double(*d),
        (Value::String(s), Primitive::Double) => {
            Value::Double(s.parse().map_err(|_| invalid())?)
        },
        (Value::Bool(b), Primitive::Bool) => Value::Bool(*b),
        (Value::String(s), Primitive::Bool) => Value::Bool(s.eq_ignore_ascii_case("true")),
        _ => return Err(invalid()),
    };

    Ok(RuntimeValue::new(converted, target))
}
