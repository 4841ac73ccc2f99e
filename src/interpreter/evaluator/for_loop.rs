use tracing::trace;

use crate::{
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::lazy::LazyValue,
    },
    util::num::{index_to_f64, iteration_count},
};

impl Context<'_> {
    /// Evaluates `for(count, body)`.
    ///
    /// The count arrives already evaluated and is truncated toward zero; NaN
    /// and values below one run the body zero times. Before each run of the
    /// deferred body the zero-based iteration index is written into the loop
    /// counter for the current nesting depth (see [`counter_name`]).
    ///
    /// The depth is raised for the duration of the call and lowered again when
    /// it returns, whether the loop finished or the body failed.
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
    /// env.set_variable("sum", 0.0);
    ///
    /// assert_eq!(evaluate("for(4, sum = sum + iter)", &mut env).unwrap(), 1.0);
    /// assert_eq!(env.variable("sum"), Some(6.0));
    /// assert_eq!(env.variable("iter"), Some(3.0));
    /// ```
    pub fn eval_for(&mut self, args: &[LazyValue<'_>]) -> EvalResult<f64> {
        let count = iteration_count(args[0].force(self)?);

        self.for_depth += 1;
        let outcome = self.run_for(count, &args[1]);
        self.for_depth -= 1;

        outcome.map(|()| 1.0)
    }

    fn run_for(&mut self, count: u64, body: &LazyValue<'_>) -> EvalResult<()> {
        let counter = counter_name(self.for_depth);

        for index in 0..count {
            trace!(%counter, index, "for iteration");
            self.variables.insert(counter.clone(), index_to_f64(index));
            body.force(self)?;
        }

        Ok(())
    }
}

/// Returns the loop counter variable for a `for` nesting depth.
///
/// The outermost loop counts in `iter`; a loop nested `n` deep counts in
/// `iter<n>`.
///
/// # Example
/// ```
/// use formulae::interpreter::evaluator::for_loop::counter_name;
///
/// assert_eq!(counter_name(1), "iter");
/// assert_eq!(counter_name(2), "iter2");
/// assert_eq!(counter_name(3), "iter3");
/// ```
#[must_use]
pub fn counter_name(depth: usize) -> String {
    if depth <= 1 {
        "iter".to_string()
    } else {
        format!("iter{depth}")
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        ast::Expr,
        error::RuntimeError,
        interpreter::{
            environment::{FunctionRegistry, Variables},
            evaluator::core::Context,
            parser::core::Parser,
        },
    };

    fn parse(source: &str) -> Expr {
        Parser::new(source).parse_statement().expect("valid formula")
    }

    #[test]
    fn depth_is_restored_after_a_failing_body() {
        let mut variables = Variables::new();
        let functions = FunctionRegistry::new();
        let mut context = Context::new(&mut variables, &functions);

        let failing = parse("for(2,for(2,missing))");
        assert_eq!(context.eval(&failing),
                   Err(RuntimeError::UndefinedVariable { name: "missing".into() }));
        assert_eq!(context.for_depth(), 0);

        let fresh = parse("for(1,iter)");
        assert_eq!(context.eval(&fresh), Ok(1.0));
        assert_eq!(context.for_depth(), 0);
    }

    #[test]
    fn count_is_truncated() {
        let mut variables = Variables::from([("n".to_string(), 0.0)]);
        let functions = FunctionRegistry::new();

        Context::new(&mut variables, &functions).eval(&parse("for(2.9,n=n+1)"))
                                                .unwrap();

        assert_eq!(variables["n"], 2.0);
    }

    #[test]
    fn non_positive_and_nan_counts_skip_the_body() {
        let mut variables = Variables::from([("n".to_string(), 0.0)]);
        let functions = FunctionRegistry::new();
        let mut context = Context::new(&mut variables, &functions);

        assert_eq!(context.eval(&parse("for(0,n=n+1)")), Ok(1.0));
        assert_eq!(context.eval(&parse("for(0-3,n=n+1)")), Ok(1.0));
        assert_eq!(context.eval(&parse("for(0.9,n=n+1)")), Ok(1.0));
        assert_eq!(context.eval(&parse("for(sqrt(0-1),n=n+1)")), Ok(1.0));

        assert_eq!(variables["n"], 0.0);
        assert!(!variables.contains_key("iter"));
    }

    #[test]
    fn sibling_loops_share_a_depth() {
        let mut variables = Variables::from([("a".to_string(), 0.0), ("b".to_string(), 0.0)]);
        let functions = FunctionRegistry::new();

        Context::new(&mut variables, &functions).eval(&parse("\"for(2,a=a+iter);for(3,b=b+iter)\""))
                                                .unwrap();

        assert_eq!(variables["a"], 1.0);
        assert_eq!(variables["b"], 3.0);
        assert!(!variables.contains_key("iter2"));
    }
}
