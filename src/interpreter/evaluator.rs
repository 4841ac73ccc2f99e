/// Core evaluation logic and context management.
///
/// Contains the evaluation context that borrows the host's variables and
/// functions, and the recursive tree-walk over expressions and programs.
pub mod core;

/// Binary operator evaluation.
///
/// Implements arithmetic and comparison on `f64` operands, including the
/// division-by-zero checks.
pub mod binary;

/// Function evaluation.
///
/// Handles dispatch between built-ins and host-registered functions, argument
/// delivery (eager or deferred), and the eager math built-ins.
pub mod function;

/// Evaluation of the `for` built-in.
///
/// Repeats a deferred body a fixed number of times and maintains the
/// depth-keyed loop counters `iter`, `iter2`, ...
pub mod for_loop;

/// Evaluation of the `while` built-in.
///
/// Repeats a deferred body while a deferred condition is non-zero.
pub mod while_loop;

/// Utility functions for evaluation.
///
/// Provides arity checks and the truthiness rule shared by the evaluator.
pub mod utils;
