/// Accumulates a run of ASCII decimal digits into an `i64`.
///
/// Returns the accumulated value and whether it exceeded `max` at any point.
/// Accumulation wraps instead of stopping, so the value is only meaningful
/// when no overflow was flagged.
///
/// ## Example
/// ```
/// use nulla::util::num::accumulate_digits;
///
/// assert_eq!(accumulate_digits("1234", i64::MAX), (1234, false));
/// assert!(accumulate_digits("101", 100).1);
/// ```
#[must_use]
pub fn accumulate_digits(digits: &str, max: i64) -> (i64, bool) {
    let mut value = 0_i64;
    let mut overflowed = false;

    for digit in digits.bytes().filter(u8::is_ascii_digit).map(|b| i64::from(b - b'0')) {
        if !overflowed && max.saturating_sub(digit) / 10 < value {
            overflowed = true;
        }
        value = value.wrapping_mul(10).wrapping_add(digit);
    }

    (value, overflowed)
}

/// Widens an `int` to a `double`. Magnitudes above 2^53 lose precision.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn int_to_double(value: i64) -> f64 {
    value as f64
}

/// Truncates a `double` towards zero. Out-of-range values saturate and `NaN`
/// becomes `0`.
///
/// ## Example
/// ```
/// use nulla::util::num::double_to_int;
///
/// assert_eq!(double_to_int(-2.9), -2);
/// assert_eq!(double_to_int(f64::INFINITY), i64::MAX);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn double_to_int(value: f64) -> i64 {
    value.trunc() as i64
}

/// Renders a `double` the way the language prints it: always with a
/// fractional part or an exponent, so `7.0` never reads as the `int` `7`.
///
/// ## Example
/// ```
/// use nulla::util::num::format_double;
///
/// assert_eq!(format_double(7.0), "7.0");
/// assert_eq!(format_double(-49.0), "-49.0");
/// assert_eq!(format_double(1.5), "1.5");
/// ```
#[must_use]
pub fn format_double(value: f64) -> String {
    format!("{value:?}")
}
