use ordered_float::OrderedFloat;

use crate::{
    ast::{ComparisonOperator, Expr},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Interpreter},
            utils::mismatch,
        },
        value::core::{RuntimeValue, Value},
    },
    util::num::int_to_double,
};

impl Interpreter<'_, '_> {
    pub(crate) fn eval_comparison(&mut self,
                                  left: &Expr,
                                  operator: ComparisonOperator,
                                  right: &Expr)
                                  -> EvalResult<RuntimeValue> {
        let left = self.evaluate(left)?;
        let right = self.evaluate(right)?;
        Ok(RuntimeValue::bool(compare(&left, operator, &right)?))
    }
}

/// Compares two values.
///
/// `==` and `!=` compare payloads. A `null` on either side compares by
/// presence, so `x == null` is `true` exactly when `x` holds nothing. The
/// ordering operators only accept non-nullable numbers.
///
/// # Errors
/// [`RuntimeError::InvalidRuntimeType`] when neither operand's type is
/// assignable to the other's (so `1 == 1.0` is an error), or when an ordering
/// operand is not a non-nullable `int` or `double`.
///
/// # Example
/// ```
/// use nulla::{
///     ast::ComparisonOperator,
///     interpreter::{evaluator::binary::comparison::compare, value::core::RuntimeValue},
/// };
///
/// let one = RuntimeValue::int(1);
/// assert_eq!(compare(&one, ComparisonOperator::Less, &RuntimeValue::int(2)), Ok(true));
/// assert_eq!(compare(&one, ComparisonOperator::Equal, &RuntimeValue::void()), Ok(false));
/// assert!(compare(&one, ComparisonOperator::Equal, &RuntimeValue::double(1.0)).is_err());
/// ```
pub fn compare(left: &RuntimeValue,
               operator: ComparisonOperator,
               right: &RuntimeValue)
               -> Result<bool, RuntimeError> {
    let equality = matches!(operator, ComparisonOperator::Equal | ComparisonOperator::NotEqual);

    if equality && (left.is_null() || right.is_null()) {
        let same = left.is_null() == right.is_null();
        return Ok(same == (operator == ComparisonOperator::Equal));
    }
    if !left.can_be_assigned_to(right.ty) && !right.can_be_assigned_to(left.ty) {
        return Err(RuntimeError::InvalidRuntimeType { expected: left.ty.to_string(),
                                                      actual:   right.ty.to_string(), });
    }

    Ok(match operator {
        ComparisonOperator::Equal => left.value == right.value,
        ComparisonOperator::NotEqual => left.value != right.value,
        ComparisonOperator::Less => ordered(left)? < ordered(right)?,
        ComparisonOperator::LessOrEqual => ordered(left)? <= ordered(right)?,
        ComparisonOperator::Greater => ordered(left)? > ordered(right)?,
        ComparisonOperator::GreaterOrEqual => ordered(left)? >= ordered(right)?,
    })
}

fn ordered(value: &RuntimeValue) -> Result<OrderedFloat<f64>, RuntimeError> {
    match value.value {
        Value::Int(i) if !value.ty.nullable => Ok(OrderedFloat(int_to_double(i))),
        Value::Double(d) if !value.ty.nullable => Ok(OrderedFloat(d)),
        _ => Err(mismatch("int or double", value)),
    }
}
