//! Numeric display helpers.
//!
//! Two renderings are used for prices: a fixed-point one with a set number of
//! fractional digits (menu descriptions, averages) and a natural one that
//! drops the fractional part of integral values (receipts).

/// Maximum number of fractional digits accepted by [`format_fixed`].
pub const MAX_FIXED_DIGITS: usize = 100;

/// Formats a number with exactly `digits` fractional digits.
///
/// Values exactly halfway between two representable results round away from
/// zero. Negative values keep their sign even when the rounded magnitude is
/// zero; negative zero renders without a sign. Non-finite values use the
/// same text as [`format_numeric`].
///
/// # Examples
///
/// ```
/// use thali_common::format_fixed;
///
/// assert_eq!(format_fixed(250.0, 2), "250.00");
/// assert_eq!(format_fixed(1.125, 2), "1.13");
/// assert_eq!(format_fixed(2.5, 0), "3");
/// ```
pub fn format_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return format_numeric(value);
    }
    let digits = digits.min(MAX_FIXED_DIGITS);
    let magnitude = value.abs();
    let text = if is_rounding_tie(magnitude, digits) {
        round_tie_up(magnitude, digits)
    } else {
        format!("{magnitude:.digits$}")
    };
    if value < 0.0 { format!("-{text}") } else { text }
}

/// Rounds a tie up in decimal. A tie has exactly `digits + 1` fractional
/// digits, the last one a `5`, so printing that many digits is exact.
fn round_tie_up(magnitude: f64, digits: usize) -> String {
    let exact = format!("{magnitude:.prec$}", prec = digits + 1);
    let mut chars: Vec<char> = exact.chars().collect();
    chars.pop();
    if digits == 0 {
        chars.pop();
    }

    let mut carry = true;
    for ch in chars.iter_mut().rev() {
        match *ch {
            '.' => continue,
            '9' => *ch = '0',
            digit => {
                *ch = char::from(digit as u8 + 1);
                carry = false;
                break;
            }
        }
    }
    if carry {
        chars.insert(0, '1');
    }
    chars.into_iter().collect()
}

/// Formats a number with the shortest text that round-trips it.
///
/// Integral values have no fractional part, so `250.0` renders as `"250"`.
///
/// # Examples
///
/// ```
/// use thali_common::format_numeric;
///
/// assert_eq!(format_numeric(250.0), "250");
/// assert_eq!(format_numeric(99.5), "99.5");
/// assert_eq!(format_numeric(-0.0), "0");
/// ```
pub fn format_numeric(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else if value == 0.0 {
        "0".to_string()
    } else {
        format!("{value}")
    }
}

/// A value is halfway between two `digits`-place results exactly when it is
/// an odd multiple of `2^-(digits + 1)`.
fn is_rounding_tie(magnitude: f64, digits: usize) -> bool {
    let scaled = magnitude * 2f64.powi(digits as i32 + 1);
    scaled.fract() == 0.0 && scaled % 2.0 == 1.0
}
