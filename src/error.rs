/// Parsing errors.
///
/// Defines all error types that can occur while scanning and parsing formula
/// source. Parse errors include unexpected characters, unbalanced parentheses,
/// malformed argument lists and numeric literals that do not convert to `f64`.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// undefined variables, unknown functions, arity mismatches and division by
/// zero.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::{Arity, RuntimeError};

/// Any failure of a one-shot parse-and-evaluate call.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The formula could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The formula parsed but failed during evaluation.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
