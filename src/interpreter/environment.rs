use std::{collections::HashMap, fmt};

/// Variable bindings: name to value.
///
/// Owned by the host. Assignments and `for` loop counters write into it, and
/// writes persist across evaluations that share the map.
pub type Variables = HashMap<String, f64>;

/// Host-registered functions: case-sensitive name to implementation.
///
/// Consulted only for names that are not built in.
pub type FunctionRegistry = HashMap<String, NativeFunction>;

type Method = dyn Fn(&[f64]) -> f64;

/// A host function callable from formulas.
///
/// The function declares a fixed argument count. Calls with any other count
/// fail before an argument is evaluated; arguments are always evaluated
/// eagerly, in order, and passed as a slice.
pub struct NativeFunction {
    arity:  usize,
    method: Box<Method>,
}

impl NativeFunction {
    /// Wraps `method` as a function of `arity` arguments.
    ///
    /// # Example
    /// ```
    /// use formulae::interpreter::environment::NativeFunction;
    ///
    /// let hypot = NativeFunction::new(2, |args| args[0].hypot(args[1]));
    /// assert_eq!(hypot.arity(), 2);
    /// assert_eq!(hypot.call(&[3.0, 4.0]), 5.0);
    /// ```
    pub fn new(arity: usize, method: impl Fn(&[f64]) -> f64 + 'static) -> Self {
        Self { arity,
               method: Box::new(method) }
    }

    /// The number of arguments the function takes.
    #[must_use]
    pub const fn arity(&self) -> usize {
        self.arity
    }

    /// Invokes the function on already evaluated arguments.
    #[must_use]
    pub fn call(&self, arguments: &[f64]) -> f64 {
        (self.method)(arguments)
    }
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeFunction")
         .field("arity", &self.arity)
         .finish_non_exhaustive()
    }
}

/// Owned variables and functions for hosts that want a single value to carry.
///
/// The evaluator itself only ever borrows the two maps; see
/// [`crate::Formula::evaluate`].
#[derive(Debug, Default)]
pub struct Environment {
    /// Variable bindings.
    pub variables: Variables,
    /// Registered functions.
    pub functions: FunctionRegistry,
}

impl Environment {
    /// Creates an environment with no variables and no functions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `value`, replacing any previous value.
    pub fn set_variable(&mut self, name: impl Into<String>, value: f64) -> &mut Self {
        self.variables.insert(name.into(), value);
        self
    }

    /// Returns the current value of `name`, if bound.
    #[must_use]
    pub fn variable(&self, name: &str) -> Option<f64> {
        self.variables.get(name).copied()
    }

    /// Registers `method` under `name` as a function of `arity` arguments.
    ///
    /// # Example
    /// ```
    /// use formulae::{Environment, evaluate};
    ///
    /// let mut env = Environment::new();
    /// env.register("double", 1, |args| args[0] * 2.0);
    ///
    /// assert_eq!(evaluate("double(21)", &mut env).unwrap(), 42.0);
    /// ```
    pub fn register(&mut self,
                    name: impl Into<String>,
                    arity: usize,
                    method: impl Fn(&[f64]) -> f64 + 'static)
                    -> &mut Self {
        self.functions.insert(name.into(), NativeFunction::new(arity, method));
        self
    }
}
