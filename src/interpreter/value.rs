/// Lazily evaluated call arguments.
///
/// Defines `LazyValue`, the tagged value a built-in receives for each of its
/// arguments: either a number that was computed before the call, or the
/// unevaluated argument expression that the built-in forces when (and as
/// often as) it chooses.
pub mod lazy;
