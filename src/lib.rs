//! # formulae
//!
//! formulae is an embeddable formula interpreter written in Rust.
//! It parses formulas made of arithmetic, comparisons, assignments and
//! function calls, and evaluates them against variables and functions owned
//! by the host application.
//!
//! The control-flow built-ins `if`, `for` and `while` receive some of their
//! arguments unevaluated, so untaken branches never run and loop bodies run
//! once per iteration:
//!
//! ```
//! use formulae::{Environment, evaluate};
//!
//! let mut env = Environment::new();
//! env.set_variable("x", 0.0);
//!
//! assert_eq!(evaluate("for(3, x = x + 1); x * 2", &mut env).unwrap(), 6.0);
//! assert_eq!(evaluate("if(x > 2, 1, x = 100)", &mut env).unwrap(), 1.0);
//! assert_eq!(env.variable("x"), Some(3.0));
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc, clippy::float_cmp)]

use std::{fmt, str::FromStr};

use tracing::debug;

use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::{
        environment::{FunctionRegistry, Variables},
        evaluator::core::{Context, EvalResult},
        lexer::strip_whitespace,
        parser::core::Parser,
    },
};

/// Defines the structure of parsed formulas.
///
/// This module declares the `Expr` enum, the `Program` statement list and the
/// `BinaryOperator` set. The AST is built by the parser and traversed by the
/// evaluator, and renders back to formula text through `Display`.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while parsing or
/// evaluating a formula, with the position or name needed to locate the
/// failure.
///
/// # Responsibilities
/// - Defines error enums for every failure mode (parser, evaluator).
/// - Carries positions and names for user feedback.
/// - Combines both phases into one `Error` for one-shot calls.
pub mod error;
/// Orchestrates scanning, parsing and evaluation.
///
/// This module ties together the lexer, parser, evaluator, lazy argument
/// values and the host environment types.
pub mod interpreter;
/// General utilities for numeric conversion.
///
/// Conversions between `f64` and integers used by the built-ins, with their
/// NaN and range behavior spelled out.
pub mod util;

pub use crate::{
    error::Error,
    interpreter::environment::{Environment, NativeFunction},
};

/// Parses formula source into a program.
///
/// Whitespace anywhere in the source is ignored. Quoted sub-formulas are
/// parsed as well, so every syntax error is reported here, before anything is
/// evaluated.
///
/// # Example
/// ```
/// use formulae::parse;
///
/// let program = parse("x = 10; y = x * 2; y").unwrap();
/// assert_eq!(program.statements.len(), 3);
///
/// assert!(parse("max(1 2").is_err());
/// ```
pub fn parse(source: &str) -> Result<Program, ParseError> {
    let compact = strip_whitespace(source);
    let program = Parser::new(&compact).parse_program()?;
    debug!(statements = program.statements.len(), "parsed formula");
    Ok(program)
}

/// Parses and evaluates `source` against `env` in one call.
///
/// Returns the value of the last statement. Assignments and loop counters
/// are written into `env.variables` and remain there afterwards.
///
/// # Errors
/// Returns a parse error if the source is malformed, otherwise the first
/// runtime error raised while evaluating.
///
/// # Example
/// ```
/// use formulae::{Environment, error::RuntimeError, evaluate, Error};
///
/// let mut env = Environment::new();
///
/// assert_eq!(evaluate("2 + 3 * 4", &mut env).unwrap(), 14.0);
/// assert!(matches!(evaluate("1 / 0", &mut env),
///                  Err(Error::Runtime(RuntimeError::DivisionByZero { .. }))));
/// ```
pub fn evaluate(source: &str, env: &mut Environment) -> Result<f64, Error> {
    let formula = Formula::parse(source)?;
    Ok(formula.evaluate(&mut env.variables, &env.functions)?)
}

/// A compiled formula.
///
/// Parse once with [`Formula::parse`] (or `str::parse`) and evaluate as many
/// times as needed, against the same or different variables.
///
/// # Example
/// ```
/// use formulae::{
///     Formula,
///     interpreter::environment::{FunctionRegistry, Variables},
/// };
///
/// let formula: Formula = "count = count + 1".parse().unwrap();
/// let mut variables = Variables::from([("count".to_string(), 0.0)]);
/// let functions = FunctionRegistry::new();
///
/// for _ in 0..3 {
///     formula.evaluate(&mut variables, &functions).unwrap();
/// }
///
/// assert_eq!(variables["count"], 3.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Formula {
    program: Program,
}

impl Formula {
    /// Parses `source` into a formula.
    pub fn parse(source: &str) -> Result<Self, ParseError> {
        Ok(Self { program: parse(source)? })
    }

    /// Evaluates the formula against the host's variables and functions.
    ///
    /// # Errors
    /// Returns `EmptyProgram` for a formula without statements, otherwise the
    /// first runtime error raised.
    pub fn evaluate(&self,
                    variables: &mut Variables,
                    functions: &FunctionRegistry)
                    -> EvalResult<f64> {
        Context::new(variables, functions).eval_program(&self.program)
    }

    /// The parsed statements, in order.
    ///
    /// # Example
    /// ```
    /// use formulae::{Formula, ast::Expr};
    ///
    /// let formula = Formula::parse("x = 2; x").unwrap();
    /// assert_eq!(formula.statements(),
    ///            [Expr::assign("x", Expr::Number(2.0)), Expr::Variable("x".into())]);
    /// ```
    #[must_use]
    pub fn statements(&self) -> &[Expr] {
        &self.program.statements
    }
}

impl FromStr for Formula {
    type Err = ParseError;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        Self::parse(source)
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)
    }
}
