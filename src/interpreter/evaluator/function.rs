/// Call dispatch.
///
/// Looks a name up among the built-ins (case-insensitively) and then in the
/// host registry, checks arity, and delivers each argument eagerly or
/// deferred as the callee declares.
pub mod core;

/// Eager math built-ins.
///
/// `max`, `min`, `abs`, `sqrt`, `pow`, `sin`, `cos`, `tan`, `log`, `exp`,
/// `round`, `ceil`/`ceiling`, `floor` and `sign`.
pub mod math;

/// The `if` built-in.
///
/// Forces only the branch selected by the condition.
pub mod conditional;
