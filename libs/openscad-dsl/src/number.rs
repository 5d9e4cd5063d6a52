//! # Number Formatting
//!
//! Prints `f64` values in the general notation OpenSCAD reads back exactly:
//! the shortest digit string that round-trips, fixed notation inside a small
//! exponent window, scientific notation (`1e+06`, `2.5e-05`) outside it.

use config::constants::{EXPONENT_DIGITS, FIXED_NOTATION_MAX_EXPONENT, FIXED_NOTATION_MIN_EXPONENT};

/// Formats a number in general notation.
///
/// Non-finite values have no OpenSCAD literal, so they are emitted as the
/// expressions OpenSCAD evaluates to them.
///
/// # Examples
/// ```
/// use openscad_dsl::number::format_number;
/// assert_eq!(format_number(10.0), "10");
/// assert_eq!(format_number(2.5), "2.5");
/// assert_eq!(format_number(1.0e6), "1e+06");
/// assert_eq!(format_number(0.00001), "1e-05");
/// ```
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "(0/0)".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "(1/0)" } else { "(-1/0)" }.to_string();
    }

    // `{:e}` yields the shortest round-trip mantissa, e.g. "1.234567e6".
    let scientific = format!("{:e}", value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return value.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return value.to_string();
    };

    if (FIXED_NOTATION_MIN_EXPONENT..FIXED_NOTATION_MAX_EXPONENT).contains(&exponent) {
        // Display never uses an exponent and keeps the shortest digits.
        value.to_string()
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{mantissa}e{sign}{:0width$}",
            exponent.unsigned_abs(),
            width = EXPONENT_DIGITS
        )
    }
}
