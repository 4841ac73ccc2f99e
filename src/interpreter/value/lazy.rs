use crate::{
    ast::Expr,
    interpreter::evaluator::core::{Context, EvalResult},
};

/// How a built-in wants one of its arguments delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentMode {
    /// Evaluate before the call and pass the number.
    Eager,
    /// Pass the argument expression unevaluated.
    Deferred,
}

/// A call argument as seen by a built-in function.
///
/// `Immediate` holds a value computed before dispatch. `Deferred` borrows the
/// argument's expression; every [`LazyValue::force`] re-evaluates it against
/// the current state of the environment, so a loop body forced three times
/// runs three times and observes its own side effects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LazyValue<'a> {
    /// A number computed before the call.
    Immediate(f64),
    /// An argument expression that has not been evaluated.
    Deferred(&'a Expr),
}

impl LazyValue<'_> {
    /// Produces the number this argument stands for.
    ///
    /// Immediate values are returned as is. Deferred expressions are evaluated
    /// in `context`, with any assignments they contain taking effect.
    ///
    /// # Example
    /// ```
    /// use formulae::{
    ///     ast::Expr,
    ///     interpreter::{
    ///         environment::{FunctionRegistry, Variables},
    ///         evaluator::core::Context,
    ///         value::lazy::LazyValue,
    ///     },
    /// };
    ///
    /// let mut variables = Variables::new();
    /// let functions = FunctionRegistry::new();
    /// let body = Expr::assign("x", Expr::Number(4.0));
    ///
    /// let mut context = Context::new(&mut variables, &functions);
    /// assert_eq!(LazyValue::Deferred(&body).force(&mut context).unwrap(), 4.0);
    ///
    /// assert_eq!(variables["x"], 4.0);
    /// ```
    pub fn force(&self, context: &mut Context<'_>) -> EvalResult<f64> {
        match self {
            Self::Immediate(value) => Ok(*value),
            Self::Deferred(expr) => context.eval(expr),
        }
    }
}
