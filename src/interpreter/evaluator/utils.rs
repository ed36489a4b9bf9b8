use crate::{
    ast::Type,
    error::RuntimeError,
    interpreter::value::core::{RuntimeValue, Value},
};

/// The error for an operand whose type the operation does not accept.
pub fn mismatch(expected: &str, value: &RuntimeValue) -> RuntimeError {
    RuntimeError::InvalidRuntimeType { expected: expected.to_string(),
                                       actual:   value.ty.to_string(), }
}

/// Extracts a non-null `int`.
pub fn expect_int(value: &RuntimeValue) -> Result<i64, RuntimeError> {
    match value.value {
        Value::Int(i) if value.can_be_assigned_to(Type::INT) => Ok(i),
        _ => Err(mismatch("int", value)),
    }
}

/// Extracts a non-null `double`.
pub fn expect_double(value: &RuntimeValue) -> Result<f64, RuntimeError> {
    match value.value {
        Value::Double(d) if value.can_be_assigned_to(Type::DOUBLE) => Ok(d),
        _ => Err(mismatch("double", value)),
    }
}

/// Extracts a non-null `string`.
pub fn expect_string(value: &RuntimeValue) -> Result<&str, RuntimeError> {
    match &value.value {
        Value::String(s) if value.can_be_assigned_to(Type::STRING) => Ok(s),
        _ => Err(mismatch("string", value)),
    }
}

/// Extracts a non-null `bool`. Conditions and logical operands go through
/// here.
pub fn expect_bool(value: &RuntimeValue) -> Result<bool, RuntimeError> {
    match value.value {
        Value::Bool(b) if value.can_be_assigned_to(Type::BOOL) => Ok(b),
        _ => Err(mismatch("bool", value)),
    }
}
