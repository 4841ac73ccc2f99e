/// Numeric conversion helpers.
///
/// This module provides the conversions between `f64` and integer types that
/// the built-ins need: loop counts, loop indices and rounding digit counts.
/// Each one spells out how NaN, infinities and out-of-range values are
/// treated instead of relying on a bare `as` cast at the call site.
pub mod num;
