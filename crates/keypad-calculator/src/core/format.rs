//! Number formatting for the display and history records

/// Decimal places kept by [`format_number`]
pub const DEFAULT_PRECISION: usize = 10;

/// Digits needed to write any `f64` fraction out exactly
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Formats a number for history records and the operation line
///
/// Integers render without a fractional part. Everything else is rounded to
/// [`DEFAULT_PRECISION`] decimal places, ties away from zero, with trailing
/// zeros dropped, so `0.1 + 0.2` renders as `0.3`.
#[must_use]
pub fn format_number(n: f64) -> String {
    format_number_with(n, DEFAULT_PRECISION)
}

/// Same as [`format_number`] with an explicit number of decimal places
#[must_use]
pub fn format_number_with(n: f64, precision: usize) -> String {
    if n.fract() == 0.0 {
        return display_value(n);
    }
    let rounded: f64 = to_fixed(n, precision).parse().unwrap_or(n);
    display_value(rounded)
}

/// Fixed-point text with `precision` decimals, exact ties rounded away from zero
///
/// `format!` rounds exact ties to even (`2.5` to `"2"`), so ties are detected
/// on the exact decimal expansion and bumped by hand.
fn to_fixed(n: f64, precision: usize) -> String {
    let formatted = format!("{n:.precision$}");
    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, n.abs());
    let Some((int_part, frac)) = exact.split_once('.') else {
        return formatted;
    };
    let Some(tail) = frac.get(precision..) else {
        return formatted;
    };
    let is_tie = tail.starts_with('5') && tail[1..].bytes().all(|b| b == b'0');
    if !is_tie {
        return formatted;
    }

    let mut digits: Vec<u8> = int_part.bytes().chain(frac[..precision].bytes()).collect();
    let mut carry = true;
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            carry = false;
            break;
        }
    }
    if carry {
        digits.insert(0, b'1');
    }

    let (int_digits, frac_digits) = digits.split_at(digits.len() - precision);
    let sign = if n.is_sign_negative() { "-" } else { "" };
    let int_digits = String::from_utf8_lossy(int_digits);
    if precision == 0 {
        format!("{sign}{int_digits}")
    } else {
        format!("{sign}{int_digits}.{}", String::from_utf8_lossy(frac_digits))
    }
}

/// Shortest round-trip representation, used for the display after a result
///
/// Negative zero collapses to `0`.
#[must_use]
pub fn display_value(n: f64) -> String {
    if n == 0.0 {
        "0".to_string()
    } else {
        n.to_string()
    }
}
