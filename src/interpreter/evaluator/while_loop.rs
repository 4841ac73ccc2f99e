use tracing::trace;

use crate::interpreter::{
    evaluator::{
        core::{Context, EvalResult},
        utils::is_truthy,
    },
    value::lazy::LazyValue,
};

impl Context<'_> {
    /// Evaluates `while(cond, body)`.
    ///
    /// Both arguments arrive deferred. The condition is forced before every
    /// iteration; while it is non-zero the body is forced once. The loop ends
    /// the first time the condition is zero, so a condition that starts at
    /// zero never runs the body.
    ///
    /// There is no iteration cap: a condition that never becomes zero loops
    /// forever.
    ///
    /// # Parameters
    /// - `args`: Exactly two arguments, arity already checked.
    ///
    /// # Returns
    /// Always `1.0`.
    ///
    /// # Example
    /// ```
    /// use formulae::{Environment, evaluate};
    ///
    /// let mut env = Environment::new();
    /// env.set_variable("n", 1.0);
    ///
    /// assert_eq!(evaluate("while(n < 100, n = n * 3)", &mut env).unwrap(), 1.0);
    /// assert_eq!(env.variable("n"), Some(243.0));
    /// ```
    pub fn eval_while(&mut self, args: &[LazyValue<'_>]) -> EvalResult<f64> {
        let (condition, body) = (&args[0], &args[1]);

        let mut iterations: u64 = 0;
        while is_truthy(condition.force(self)?) {
            iterations += 1;
            trace!(iterations, "while iteration");
            body.force(self)?;
        }

        Ok(1.0)
    }
}
