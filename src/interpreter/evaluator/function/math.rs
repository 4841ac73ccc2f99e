//! Eager math built-ins.
//!
//! Every handler receives its arguments already evaluated and already checked
//! against the arity declared in the built-in table, so indexing the first
//! one or two arguments cannot fail.

use crate::{
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    util::num::rounding_digits,
};

/// Generates a one-argument built-in from an `f64` method.
macro_rules! unary_builtin {
    ($($fname:ident => $method:ident),* $(,)?) => {
        $(
            #[allow(clippy::unnecessary_wraps)]
            pub fn $fname(args: &[f64]) -> EvalResult<f64> {
                Ok(args[0].$method())
            }
        )*
    };
}

unary_builtin! {
    abs => abs,
    sqrt => sqrt,
    sin => sin,
    cos => cos,
    tan => tan,
    exp => exp,
    ceil => ceil,
    floor => floor,
}

/// `max(a, b)`; a NaN operand yields the other operand.
#[allow(clippy::unnecessary_wraps)]
pub fn max(args: &[f64]) -> EvalResult<f64> {
    Ok(args[0].max(args[1]))
}

/// `min(a, b)`; a NaN operand yields the other operand.
#[allow(clippy::unnecessary_wraps)]
pub fn min(args: &[f64]) -> EvalResult<f64> {
    Ok(args[0].min(args[1]))
}

/// `pow(base, exponent)`, the same operation as `base ^ exponent`.
#[allow(clippy::unnecessary_wraps)]
pub fn pow(args: &[f64]) -> EvalResult<f64> {
    Ok(args[0].powf(args[1]))
}

/// Computes the logarithm of a value.
///
/// `log(x)` is the natural logarithm; `log(x, base)` uses the given base.
/// Base `1` is NaN, and so are base `0` and base `+inf` unless `x` is `1`.
///
/// # Example
/// ```
/// use formulae::interpreter::evaluator::function::math::log;
///
/// assert_eq!(log(&[std::f64::consts::E]).unwrap(), 1.0);
/// assert_eq!(log(&[8.0, 2.0]).unwrap(), 3.0);
/// assert!(log(&[8.0, 1.0]).unwrap().is_nan());
/// ```
#[allow(clippy::unnecessary_wraps)]
pub fn log(args: &[f64]) -> EvalResult<f64> {
    let value = args[0];
    let Some(&base) = args.get(1) else {
        return Ok(value.ln());
    };

    if base == 1.0 || (value != 1.0 && (base == 0.0 || base == f64::INFINITY)) {
        return Ok(f64::NAN);
    }
    Ok(value.log(base))
}

/// Rounds a value to a number of decimal digits.
///
/// `round(x)` rounds to an integer; `round(x, digits)` keeps `digits`
/// fractional digits. Midpoints round to the even neighbour, so
/// `round(2.5) == 2` and `round(3.5) == 4`.
///
/// # Errors
/// Returns `InvalidArgument` if `digits` (after truncation) is outside
/// `0..=15`.
///
/// Values of magnitude `1e16` and above have no fractional digits left and
/// are returned as they are.
///
/// # Example
/// ```
/// use formulae::interpreter::evaluator::function::math::round;
///
/// assert_eq!(round(&[2.5]).unwrap(), 2.0);
/// assert_eq!(round(&[1.23456, 2.0]).unwrap(), 1.23);
/// assert!(round(&[1.0, 16.0]).is_err());
/// ```
pub fn round(args: &[f64]) -> EvalResult<f64> {
    let value = args[0];
    let digits = match args.get(1) {
        None => 0,
        Some(&digits) => rounding_digits(digits).ok_or_else(|| invalid_digits(digits))?,
    };

    if digits == 0 {
        return Ok(value.round_ties_even());
    }
    if value.abs() >= UNROUNDABLE {
        return Ok(value);
    }

    let scale = 10_f64.powi(digits);
    Ok((value * scale).round_ties_even() / scale)
}

/// Smallest magnitude at which an `f64` carries no fractional part.
const UNROUNDABLE: f64 = 1e16;

fn invalid_digits(digits: f64) -> RuntimeError {
    RuntimeError::InvalidArgument { name:    "round".to_string(),
                                    details: format!("digit count {digits} is not between 0 and 15"), }
}

/// Returns `-1`, `0` or `1` according to the sign of the value.
///
/// Both zeros give `0`; NaN gives NaN.
///
/// # Example
/// ```
/// use formulae::interpreter::evaluator::function::math::sign;
///
/// assert_eq!(sign(&[-42.0]).unwrap(), -1.0);
/// assert_eq!(sign(&[-0.0]).unwrap(), 0.0);
/// assert_eq!(sign(&[11.0]).unwrap(), 1.0);
/// ```
#[allow(clippy::unnecessary_wraps)]
pub fn sign(args: &[f64]) -> EvalResult<f64> {
    let value = args[0];
    if value == 0.0 {
        return Ok(0.0);
    }
    Ok(value.signum())
}
