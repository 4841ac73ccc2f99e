use crate::interpreter::{
    evaluator::{
        core::{Context, EvalResult},
        utils::is_truthy,
    },
    value::lazy::LazyValue,
};

impl Context<'_> {
    /// Evaluates `if(cond, then, else)`.
    ///
    /// The condition arrives already evaluated. Only the selected branch is
    /// forced; the other one never runs, so assignments inside it do not take
    /// effect.
    ///
    /// # Parameters
    /// - `args`: Exactly three arguments, arity already checked.
    ///
    /// # Returns
    /// The value of the selected branch.
    ///
    /// # Example
    /// ```
    /// use formulae::{Environment, evaluate};
    ///
    /// let mut env = Environment::new();
    /// env.set_variable("hits", 0.0);
    ///
    /// assert_eq!(evaluate("if(0, hits = hits + 1, 10)", &mut env).unwrap(), 10.0);
    /// assert_eq!(env.variable("hits"), Some(0.0));
    /// ```
    pub fn eval_if(&mut self, args: &[LazyValue<'_>]) -> EvalResult<f64> {
        let condition = args[0].force(self)?;
        let branch = if is_truthy(condition) { &args[1] } else { &args[2] };
        branch.force(self)
    }
}
