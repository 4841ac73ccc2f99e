use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context<'_> {
    /// Applies a binary operator to two evaluated operands.
    ///
    /// Arithmetic follows IEEE-754 `f64` semantics: NaN and infinities
    /// propagate, and only a right operand of exactly zero (`0.0` or `-0.0`)
    /// makes `/` and `%` fail. Comparisons yield `1.0` or `0.0`.
    ///
    /// # Errors
    /// Returns `DivisionByZero` for `/` or `%` with a zero right operand.
    ///
    /// # Example
    /// ```
    /// use formulae::{ast::BinaryOperator, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::eval_binary_op(BinaryOperator::Pow, 2.0, 10.0).unwrap(), 1024.0);
    /// assert_eq!(Context::eval_binary_op(BinaryOperator::Less, 1.0, 2.0).unwrap(), 1.0);
    /// assert!(Context::eval_binary_op(BinaryOperator::Mod, 1.0, 0.0).is_err());
    /// ```
    pub fn eval_binary_op(op: BinaryOperator, left: f64, right: f64) -> EvalResult<f64> {
        use BinaryOperator::{
            Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Pow, Sub,
        };

        let value = match op {
            Add => left + right,
            Sub => left - right,
            Mul => left * right,
            Div | Mod if right == 0.0 => return Err(RuntimeError::DivisionByZero { op }),
            Div => left / right,
            Mod => left % right,
            Pow => left.powf(right),
            Equal => truth(left == right),
            NotEqual => truth(left != right),
            Less => truth(left < right),
            LessEqual => truth(left <= right),
            Greater => truth(left > right),
            GreaterEqual => truth(left >= right),
        };

        Ok(value)
    }
}

/// Encodes a comparison outcome as `1.0` or `0.0`.
const fn truth(holds: bool) -> f64 {
    if holds { 1.0 } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use crate::{
        ast::BinaryOperator::{self, *},
        error::RuntimeError,
        interpreter::evaluator::core::Context,
    };

    fn apply(op: BinaryOperator, left: f64, right: f64) -> f64 {
        Context::eval_binary_op(op, left, right).unwrap()
    }

    #[test]
    fn remainder_keeps_the_sign_of_the_dividend() {
        assert_eq!(apply(Mod, -7.0, 3.0), -1.0);
        assert_eq!(apply(Mod, 7.5, 2.0), 1.5);
    }

    #[test]
    fn division_by_negative_zero_fails() {
        assert_eq!(Context::eval_binary_op(Div, 1.0, -0.0),
                   Err(RuntimeError::DivisionByZero { op: Div }));
    }

    #[test]
    fn tiny_divisors_follow_ieee() {
        assert_eq!(apply(Div, 1.0, f64::MIN_POSITIVE), 1.0 / f64::MIN_POSITIVE);
        assert!(apply(Div, 1.0, 5e-324).is_infinite());
    }

    #[test]
    fn power_propagates_nan() {
        assert!(apply(Pow, -8.0, 1.0 / 3.0).is_nan());
    }

    #[test]
    fn comparisons_produce_one_or_zero() {
        assert_eq!(apply(Equal, 2.0, 2.0), 1.0);
        assert_eq!(apply(NotEqual, 2.0, 2.0), 0.0);
        assert_eq!(apply(GreaterEqual, 2.0, 3.0), 0.0);
        assert_eq!(apply(Greater, 3.0, 2.0), 1.0);
        assert_eq!(apply(LessEqual, 3.0, 3.0), 1.0);
    }

    #[test]
    fn nan_is_unequal_to_itself() {
        assert_eq!(apply(Equal, f64::NAN, f64::NAN), 0.0);
        assert_eq!(apply(NotEqual, f64::NAN, f64::NAN), 1.0);
    }
}
