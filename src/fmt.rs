//! Formatting base-10⁹ coefficients as decimal strings.
//!
//! The inverse of `parse`: the most significant limb prints without
//! padding, every lower limb is zero-padded to nine digits, and the
//! decimal point / exponent dressing is layered on top of the digit
//! string.

use crate::arith::math::Limb;

/// Render a little-endian limb buffer as its decimal digit string, with no
/// sign, point, or separators. The empty buffer renders as `"0"`.
pub(crate) fn coefficient_digits(limbs: &[Limb]) -> String {
    let mut buf = itoa::Buffer::new();
    let (top, rest) = match limbs.split_last() {
        Some(split) => split,
        None => return "0".to_owned(),
    };
    let mut out = String::with_capacity(limbs.len() * 9);
    out.push_str(buf.format(*top));
    for &limb in rest.iter().rev() {
        let digits = buf.format(limb);
        for _ in digits.len()..9 {
            out.push('0');
        }
        out.push_str(digits);
    }
    out
}

/// Dress a digit string as a plain decimal: sign, integer part, optional
/// point and fraction, no exponent. A non-positive scale appends implied
/// trailing zeros.
pub(crate) fn format_plain(digits: &str, negative: bool, scale: i32) -> String {
    let n = digits.len();
    let mut out = String::with_capacity(n + 8);
    if negative {
        out.push('-');
    }
    if scale <= 0 {
        out.push_str(digits);
        if digits != "0" {
            for _ in 0..(-(scale as i64)) {
                out.push('0');
            }
        }
    } else if (n as i64) > scale as i64 {
        let split = n - scale as usize;
        out.push_str(&digits[..split]);
        out.push('.');
        out.push_str(&digits[split..]);
    } else {
        out.push_str("0.");
        for _ in 0..(scale as usize - n) {
            out.push('0');
        }
        out.push_str(digits);
    }
    out
}

/// Dress a digit string as scientific notation: one significant digit, an
/// optional fraction, then `E±n`.
pub(crate) fn format_scientific(digits: &str, negative: bool, scale: i32) -> String {
    let mut out = String::with_capacity(digits.len() + 8);
    if digits == "0" {
        out.push_str("0E+0");
        return out;
    }
    if negative {
        out.push('-');
    }
    let exponent = digits.len() as i64 - 1 - scale as i64;
    out.push_str(&digits[..1]);
    if digits.len() > 1 {
        out.push('.');
        out.push_str(&digits[1..]);
    }
    out.push('E');
    if exponent < 0 {
        out.push('-');
    } else {
        out.push('+');
    }
    let mut buf = itoa::Buffer::new();
    out.push_str(buf.format(exponent.unsigned_abs()));
    out
}

// TESTS
// -----

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coefficient_digits_test() {
        assert_eq!(coefficient_digits(&[]), "0");
        assert_eq!(coefficient_digits(&[0]), "0");
        assert_eq!(coefficient_digits(&[42]), "42");
        assert_eq!(coefficient_digits(&[1, 1]), "1000000001");
        assert_eq!(
            coefficient_digits(&[901_234_567, 456_789_012, 123]),
            "123456789012345678901234567"
        );
    }

    #[test]
    fn format_plain_test() {
        assert_eq!(format_plain("12345", false, 0), "12345");
        assert_eq!(format_plain("12345", true, 2), "-123.45");
        assert_eq!(format_plain("5", false, 1), "0.5");
        assert_eq!(format_plain("5", false, 3), "0.005");
        assert_eq!(format_plain("5", false, -3), "5000");
        assert_eq!(format_plain("0", false, 0), "0");
        assert_eq!(format_plain("0", false, 2), "0.00");
        assert_eq!(format_plain("0", false, -3), "0");
    }

    #[test]
    fn format_scientific_test() {
        assert_eq!(format_scientific("12345", false, 2), "1.2345E+2");
        assert_eq!(format_scientific("5", false, 3), "5E-3");
        assert_eq!(format_scientific("15000", true, 4), "-1.5000E+0");
        assert_eq!(format_scientific("0", false, 5), "0E+0");
    }
}
