use crate::{
    ast::{Expr, Program},
    error::RuntimeError,
    interpreter::environment::{FunctionRegistry, Variables},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// A `Context` borrows the host's variable map mutably and its function
/// registry immutably for the duration of one evaluation. It never copies or
/// snapshots either map: every assignment is visible to the rest of the
/// tree-walk at once and remains in the host's map afterwards.
///
/// ## Usage
///
/// Create a `Context` around the host maps and call
/// [`Context::eval_program`] or [`Context::eval`]. Deferred call arguments
/// are forced through the same context, so nested loops and branches see
/// one consistent environment.
pub struct Context<'env> {
    /// Variable bindings, written by assignments and loop counters.
    pub(in crate::interpreter) variables: &'env mut Variables,
    /// Host functions, consulted for names that are not built in.
    pub(in crate::interpreter) functions: &'env FunctionRegistry,
    /// Number of `for` calls currently executing.
    pub(in crate::interpreter) for_depth: usize,
}

impl<'env> Context<'env> {
    /// Creates a context over the host's maps.
    pub fn new(variables: &'env mut Variables, functions: &'env FunctionRegistry) -> Self {
        Self { variables,
               functions,
               for_depth: 0 }
    }

    /// Runs every statement of `program` in order and returns the value of
    /// the last one.
    ///
    /// # Errors
    /// Returns `EmptyProgram` if there are no statements, otherwise the first
    /// error raised by a statement. Statements before the failing one keep
    /// their effects.
    ///
    /// # Example
    /// ```
    /// use formulae::{
    ///     interpreter::{
    ///         environment::{FunctionRegistry, Variables},
    ///         evaluator::core::Context,
    ///     },
    ///     parse,
    /// };
    ///
    /// let program = parse("x = 10; y = x * 2; y").unwrap();
    /// let mut variables = Variables::new();
    /// let functions = FunctionRegistry::new();
    ///
    /// let result = Context::new(&mut variables, &functions).eval_program(&program)
    ///                                                       .unwrap();
    ///
    /// assert_eq!(result, 20.0);
    /// assert_eq!(variables["x"], 10.0);
    /// ```
    pub fn eval_program(&mut self, program: &Program) -> EvalResult<f64> {
        let mut result = None;
        for statement in &program.statements {
            result = Some(self.eval(statement)?);
        }
        result.ok_or(RuntimeError::EmptyProgram)
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches on the expression variant: literals, variables, assignments,
    /// binary operations, calls and quoted sub-formulas.
    ///
    /// Operands are evaluated left to right. An assignment writes its variable
    /// only after its right-hand side has evaluated successfully.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<f64> {
        match expr {
            Expr::Number(value) => Ok(*value),
            Expr::Variable(name) => self.eval_variable(name),
            Expr::Assign { name, value } => {
                let value = self.eval(value)?;
                self.variables.insert(name.clone(), value);
                Ok(value)
            },
            Expr::BinaryOp { op, left, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary_op(*op, left, right)
            },
            Expr::Call { name, arguments } => self.eval_call(name, arguments),
            Expr::Embedded(program) => self.eval_program(program),
        }
    }

    /// Looks up a variable by name.
    ///
    /// # Errors
    /// Returns `UndefinedVariable` if `name` is not bound.
    pub fn eval_variable(&self, name: &str) -> EvalResult<f64> {
        self.variables
            .get(name)
            .copied()
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_owned() })
    }

    /// Number of `for` calls currently executing.
    #[must_use]
    pub const fn for_depth(&self) -> usize {
        self.for_depth
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ast::BinaryOperator, interpreter::parser::core::Parser};

    fn run(source: &str, variables: &mut Variables) -> EvalResult<f64> {
        let program = Parser::new(source).parse_program().expect("valid formula");
        let functions = FunctionRegistry::new();
        Context::new(variables, &functions).eval_program(&program)
    }

    #[test]
    fn empty_program_is_an_error() {
        assert_eq!(run("", &mut Variables::new()), Err(RuntimeError::EmptyProgram));
    }

    #[test]
    fn undefined_variable_names_the_variable() {
        assert_eq!(run("a+1", &mut Variables::new()),
                   Err(RuntimeError::UndefinedVariable { name: "a".into() }));
    }

    #[test]
    fn failed_assignment_leaves_variable_untouched() {
        let mut variables = Variables::from([("x".to_string(), 7.0)]);

        assert_eq!(run("x=1/0", &mut variables),
                   Err(RuntimeError::DivisionByZero { op: BinaryOperator::Div }));
        assert_eq!(variables["x"], 7.0);
    }

    #[test]
    fn assignment_yields_its_value() {
        let mut variables = Variables::new();
        assert_eq!(run("x=2+3", &mut variables), Ok(5.0));
        assert_eq!(variables["x"], 5.0);
    }

    #[test]
    fn assignment_overwrites_and_can_read_itself() {
        let mut variables = Variables::from([("x".to_string(), 1.0)]);
        assert_eq!(run("x=x+1;x=x*10", &mut variables), Ok(20.0));
    }

    #[test]
    fn earlier_statements_keep_effects_when_a_later_one_fails() {
        let mut variables = Variables::new();
        assert!(run("a=1;b=missing;c=3", &mut variables).is_err());
        assert_eq!(variables.get("a"), Some(&1.0));
        assert_eq!(variables.get("c"), None);
    }

    #[test]
    fn embedded_program_yields_its_last_statement() {
        let mut variables = Variables::new();
        assert_eq!(run("\"a=2;a*a\"+1", &mut variables), Ok(5.0));
    }
}
