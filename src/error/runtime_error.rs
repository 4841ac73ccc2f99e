use std::fmt;

use thiserror::Error;

use crate::ast::BinaryOperator;

/// The number of arguments a function accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly this many arguments.
    Exactly(usize),
    /// Any count in the inclusive range.
    Between(usize, usize),
}

impl Arity {
    /// Returns `true` if `count` arguments satisfy this arity.
    #[must_use]
    pub const fn accepts(self, count: usize) -> bool {
        match self {
            Self::Exactly(n) => count == n,
            Self::Between(min, max) => count >= min && count <= max,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exactly(1) => f.write_str("1 argument"),
            Self::Exactly(n) => write!(f, "{n} arguments"),
            Self::Between(min, max) => write!(f, "{min} to {max} arguments"),
        }
    }
}

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    /// Read of a variable that is not in the environment.
    #[error("Undefined variable '{name}'.")]
    UndefinedVariable {
        /// The name of the variable.
        name: String,
    },
    /// Call of a name that is neither built in nor registered.
    #[error("Unknown function '{name}'.")]
    UnknownFunction {
        /// The name of the function.
        name: String,
    },
    /// The wrong number of arguments was supplied to a function.
    #[error("Function '{name}' expects {expected}, but got {found}.")]
    ArityMismatch {
        /// The name of the function.
        name:     String,
        /// The accepted argument count.
        expected: Arity,
        /// The number of arguments supplied.
        found:    usize,
    },
    /// `/` or `%` with a right operand of exactly zero.
    #[error("Division by zero in '{op}'.")]
    DivisionByZero {
        /// The operator that was applied.
        op: BinaryOperator,
    },
    /// An argument was outside the range a built-in accepts.
    #[error("Invalid argument to '{name}': {details}.")]
    InvalidArgument {
        /// The name of the function.
        name:    String,
        /// Why the argument was rejected.
        details: String,
    },
    /// Evaluation of a program with no statements.
    #[error("Cannot evaluate an empty formula.")]
    EmptyProgram,
}
