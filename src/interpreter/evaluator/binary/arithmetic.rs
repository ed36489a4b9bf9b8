use crate::{
    ast::{AdditiveOperator, Expr, MultiplicativeOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Interpreter},
            utils::{expect_double, expect_int, expect_string, mismatch},
        },
        value::core::{RuntimeValue, Value},
    },
};

impl Interpreter<'_, '_> {
    /// Evaluates an additive chain from left to right.
    pub(crate) fn eval_additive(&mut self,
                                left: &Expr,
                                right: &[(AdditiveOperator, Expr)])
                                -> EvalResult<RuntimeValue> {
        let mut accumulator = self.evaluate(left)?;
        for (operator, operand) in right {
            let operand = self.evaluate(operand)?;
            accumulator = additive(accumulator, *operator, &operand)?;
        }
        Ok(accumulator)
    }

    /// Evaluates a multiplicative chain from left to right.
    pub(crate) fn eval_multiplicative(&mut self,
                                      left: &Expr,
                                      right: &[(MultiplicativeOperator, Expr)])
                                      -> EvalResult<RuntimeValue> {
        let mut accumulator = self.evaluate(left)?;
        for (operator, operand) in right {
            let operand = self.evaluate(operand)?;
            accumulator = multiplicative(&accumulator, *operator, &operand)?;
        }
        Ok(accumulator)
    }
}

/// Applies `+` or `-`.
///
/// The left operand decides the operation and must not be nullable. The right
/// operand must have exactly the left operand's non-nullable type: `int`
/// arithmetic wraps on overflow, `double` follows IEEE 754, and `string` only
/// supports `+` (concatenation).
///
/// # Example
/// ```
/// use nulla::{
///     ast::AdditiveOperator,
///     interpreter::{evaluator::binary::arithmetic::additive, value::core::RuntimeValue},
/// };
///
/// let sum = additive(RuntimeValue::int(2), AdditiveOperator::Plus, &RuntimeValue::int(3));
/// assert_eq!(sum, Ok(RuntimeValue::int(5)));
///
/// let text = additive(RuntimeValue::string("a"), AdditiveOperator::Plus, &RuntimeValue::string("b"));
/// assert_eq!(text, Ok(RuntimeValue::string("ab")));
///
/// assert!(additive(RuntimeValue::int(1), AdditiveOperator::Plus, &RuntimeValue::double(1.0)).is_err());
/// ```
pub fn additive(left: RuntimeValue,
                operator: AdditiveOperator,
                right: &RuntimeValue)
                -> Result<RuntimeValue, RuntimeError> {
    const EXPECTED: &str = "int, double or string";
    if left.ty.nullable {
        return Err(mismatch(EXPECTED, &left));
    }

    match (left.value, operator) {
        (Value::Int(a), AdditiveOperator::Plus) => {
            Ok(RuntimeValue::int(a.wrapping_add(expect_int(right)?)))
        },
        (Value::Int(a), AdditiveOperator::Minus) => {
            Ok(RuntimeValue::int(a.wrapping_sub(expect_int(right)?)))
        },
        (Value::Double(a), AdditiveOperator::Plus) => {
            Ok(RuntimeValue::double(a + expect_double(right)?))
        },
        (Value::Double(a), AdditiveOperator::Minus) => {
            Ok(RuntimeValue::double(a - expect_double(right)?))
        },
        (Value::String(mut a), AdditiveOperator::Plus) => {
            a.push_str(expect_string(right)?);
            Ok(RuntimeValue::string(a))
        },
        (Value::String(_), operator) => {
            Err(RuntimeError::InvalidOperation { operation: operator.symbol().to_string(),
                                                 left_type: left.ty.to_string(), })
        },
        (value, _) => Err(mismatch(EXPECTED, &RuntimeValue::new(value, left.ty))),
    }
}

/// Applies `*`, `/` or `%` to two `int`s or two `double`s.
///
/// # Errors
/// [`RuntimeError::ZeroDivision`] for `/` or `%` by zero (`0` or `0.0`),
/// [`RuntimeError::InvalidRuntimeType`] for nullable, non-numeric or mixed
/// operands.
#[allow(clippy::float_cmp)]
pub fn multiplicative(left: &RuntimeValue,
                      operator: MultiplicativeOperator,
                      right: &RuntimeValue)
                      -> Result<RuntimeValue, RuntimeError> {
    const EXPECTED: &str = "int or double";
    if left.ty.nullable {
        return Err(mismatch(EXPECTED, left));
    }

    match left.value {
        Value::Int(a) => {
            let b = expect_int(right)?;
            let result = match operator {
                MultiplicativeOperator::Multiply => a.wrapping_mul(b),
                _ if b == 0 => return Err(RuntimeError::ZeroDivision),
                MultiplicativeOperator::Divide => a.wrapping_div(b),
                MultiplicativeOperator::Modulo => a.wrapping_rem(b),
            };
            Ok(RuntimeValue::int(result))
        },
        Value::Double(a) => {
            let b = expect_double(right)?;
            let result = match operator {
                MultiplicativeOperator::Multiply => a * b,
                _ if b == 0.0 => return Err(RuntimeError::ZeroDivision),
                MultiplicativeOperator::Divide => a / b,
                MultiplicativeOperator::Modulo => a % b,
            };
            Ok(RuntimeValue::double(result))
        },
        _ => Err(mismatch(EXPECTED, left)),
    }
}
