/// Largest number of fractional digits `round` accepts.
pub const MAX_ROUNDING_DIGITS: i32 = 15;

/// Converts a `for` count to a number of iterations.
///
/// The value is truncated toward zero. NaN, zero and negative values give
/// zero iterations; values beyond `u64::MAX` saturate.
///
/// ## Example
/// ```
/// use formulae::util::num::iteration_count;
///
/// assert_eq!(iteration_count(3.9), 3);
/// assert_eq!(iteration_count(-2.0), 0);
/// assert_eq!(iteration_count(f64::NAN), 0);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn iteration_count(value: f64) -> u64 {
    if value.is_nan() || value <= 0.0 {
        return 0;
    }
    // Float-to-int `as` truncates toward zero and saturates at the bounds.
    value as u64
}

/// Converts a loop index to the `f64` stored in the loop counter.
///
/// Indices above `2^53` lose precision; a loop would have to run for a very
/// long time to reach them.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub const fn index_to_f64(index: u64) -> f64 {
    index as f64
}

/// Converts the digit argument of `round` to a digit count.
///
/// The value is truncated toward zero and must then lie in
/// `0..=MAX_ROUNDING_DIGITS`; anything else, NaN included, gives `None`.
///
/// ## Example
/// ```
/// use formulae::util::num::rounding_digits;
///
/// assert_eq!(rounding_digits(2.7), Some(2));
/// assert_eq!(rounding_digits(-0.5), Some(0));
/// assert_eq!(rounding_digits(16.0), None);
/// assert_eq!(rounding_digits(f64::NAN), None);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn rounding_digits(value: f64) -> Option<i32> {
    let digits = value.trunc();
    if !(0.0..=f64::from(MAX_ROUNDING_DIGITS)).contains(&digits) {
        return None;
    }
    Some(digits as i32)
}
