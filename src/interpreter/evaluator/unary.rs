use crate::{
    ast::{Expr, Type, UnaryOperator},
    interpreter::{
        evaluator::{
            core::{EvalResult, Interpreter},
            utils::{expect_bool, mismatch},
        },
        value::{
            cast::cast,
            core::{RuntimeValue, Value},
        },
    },
};

impl Interpreter<'_, '_> {
    /// Applies `!` to a non-null `bool` or `-` to a non-null number.
    /// Negating `i64::MIN` wraps.
    pub(crate) fn eval_unary(&mut self,
                             operator: UnaryOperator,
                             operand: &Expr)
                             -> EvalResult<RuntimeValue> {
        let value = self.evaluate(operand)?;

        match operator {
            UnaryOperator::Not => Ok(RuntimeValue::bool(!expect_bool(&value)?)),
            UnaryOperator::Minus => match value.value {
                Value::Int(i) if !value.ty.nullable => Ok(RuntimeValue::int(i.wrapping_neg())),
                Value::Double(d) if !value.ty.nullable => Ok(RuntimeValue::double(-d)),
                _ => Err(mismatch("int or double", &value).into()),
            },
        }
    }

    /// Evaluates `left as target`. See [`cast`].
    pub(crate) fn eval_as(&mut self, left: &Expr, target: Type) -> EvalResult<RuntimeValue> {
        let value = self.evaluate(left)?;
        Ok(cast(&value, target)?)
    }
}
