//! Number parsing and rendering for the display
//!
//! Results are rounded to [`RESULT_PLACES`] fractional digits, half away
//! from zero, decided on the exact binary value of the `f64`. Trailing zeros
//! are then dropped so the shortest equivalent decimal is shown.

/// Fractional digits kept when rendering a non-integer result
pub const RESULT_PLACES: usize = 8;

/// Precision that prints every `f64` at or above 2^-28 exactly.
/// Smaller magnitudes round to zero at eight places regardless.
const EXACT_DIGITS: usize = 96;

/// Parses display text as a number.
///
/// Accepts everything Rust's float parser accepts, including a trailing
/// decimal point (`"0."`) and the non-finite renderings (`"inf"`, `"NaN"`).
/// Text that does not parse is treated as NaN.
#[must_use]
pub fn parse_operand(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(f64::NAN)
}

/// Renders an operand with the shortest round-trip decimal.
///
/// Negative zero renders as `"0"`; non-finite values render as `inf`,
/// `-inf` and `NaN`.
#[must_use]
pub fn format_operand(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{value}")
}

/// Renders the result of an evaluation.
///
/// Integer values print without a decimal point. Everything else is rounded
/// to eight fractional digits with trailing zeros removed.
#[must_use]
pub fn format_result(value: f64) -> String {
    if !value.is_finite() || value.fract() == 0.0 {
        return format_operand(value);
    }
    round_half_away_from_zero(value, RESULT_PLACES)
}

fn round_half_away_from_zero(value: f64, places: usize) -> String {
    let exact = format!("{:.*}", EXACT_DIGITS, value.abs());
    let Some((int_part, frac_part)) = exact.split_once('.') else {
        return format_operand(value);
    };

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(places))
        .collect();
    let round_up = frac_part.as_bytes().get(places).is_some_and(|d| *d >= b'5');

    if round_up && !increment_decimal(&mut digits) {
        digits.insert(0, b'1');
    }

    let int_len = digits.len() - places;
    let int_text = String::from_utf8_lossy(&digits[..int_len]);
    let frac_text = String::from_utf8_lossy(&digits[int_len..]);
    let frac_text = frac_text.trim_end_matches('0');

    let magnitude = if frac_text.is_empty() {
        int_text.into_owned()
    } else {
        format!("{int_text}.{frac_text}")
    };

    if value.is_sign_negative() && magnitude.bytes().any(|d| d != b'0') {
        format!("-{magnitude}")
    } else {
        magnitude
    }
}

/// Adds one unit in the last place. Returns `false` when the carry runs off
/// the front, leaving every digit zero.
fn increment_decimal(digits: &mut [u8]) -> bool {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return true;
        }
    }
    false
}
