use crate::{
    ast::Expr,
    interpreter::{
        evaluator::{
            core::{EvalResult, Interpreter},
            utils::expect_bool,
        },
        value::core::RuntimeValue,
    },
};

impl Interpreter<'_, '_> {
    /// `a || b || ...`: stops at the first `true`. Every operand that is
    /// evaluated must be a non-null `bool`.
    pub(crate) fn eval_disjunction(&mut self,
                                   left: &Expr,
                                   right: &[Expr])
                                   -> EvalResult<RuntimeValue> {
        for operand in std::iter::once(left).chain(right) {
            let value = self.evaluate(operand)?;
            if expect_bool(&value)? {
                return Ok(RuntimeValue::bool(true));
            }
        }
        Ok(RuntimeValue::bool(false))
    }

    /// `a && b && ...`: stops at the first `false`.
    pub(crate) fn eval_conjunction(&mut self,
                                   left: &Expr,
                                   right: &[Expr])
                                   -> EvalResult<RuntimeValue> {
        for operand in std::iter::once(left).chain(right) {
            let value = self.evaluate(operand)?;
            if !expect_bool(&value)? {
                return Ok(RuntimeValue::bool(false));
            }
        }
        Ok(RuntimeValue::bool(true))
    }

    /// `left ?: right`. A present left value is returned with its type made
    /// non-nullable and `right` is never evaluated.
    pub(crate) fn eval_null_safety(&mut self,
                                   left: &Expr,
                                   right: &Expr)
                                   -> EvalResult<RuntimeValue> {
        let value = self.evaluate(left)?;
        if value.is_null() {
            self.evaluate(right)
        } else {
            Ok(value.into_non_nullable())
        }
    }
}
