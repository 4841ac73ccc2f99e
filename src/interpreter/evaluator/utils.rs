use crate::{
    error::{Arity, RuntimeError},
    interpreter::evaluator::core::EvalResult,
};

/// Verifies that a call supplies an accepted number of arguments.
///
/// # Errors
/// Returns `ArityMismatch` naming the function, the accepted arity and the
/// count found.
///
/// # Example
/// ```
/// use formulae::{error::Arity, interpreter::evaluator::utils::check_arity};
///
/// assert!(check_arity("if", Arity::Exactly(3), 3).is_ok());
/// assert!(check_arity("log", Arity::Between(1, 2), 3).is_err());
/// ```
pub fn check_arity(name: &str, expected: Arity, found: usize) -> EvalResult<()> {
    if expected.accepts(found) {
        return Ok(());
    }
    Err(RuntimeError::ArityMismatch { name: name.to_owned(),
                                      expected,
                                      found })
}

/// Returns `true` for every value other than zero.
///
/// NaN is not zero and therefore counts as true.
#[must_use]
pub fn is_truthy(value: f64) -> bool {
    value != 0.0
}
