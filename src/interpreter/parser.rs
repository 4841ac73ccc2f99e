/// Parser state and the program-level entry point.
///
/// Holds the on-demand scanner, one token of lookahead, and the checkpoint
/// mechanism used to backtrack out of a speculative assignment.
pub mod core;

/// Statement parsing.
///
/// Decides between an assignment and a plain expression at the start of a
/// statement.
pub mod statement;

/// Binary operator parsing.
///
/// One function per precedence level, from comparison down to exponentiation,
/// all left-associative.
pub mod binary;

/// Primary expression parsing.
///
/// Numbers, quoted sub-formulas, variables, calls and parenthesized
/// expressions.
pub mod primary;
