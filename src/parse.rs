//! Parsing decimal literals into sign, base-10⁹ coefficient, and scale.
//!
//! This is the shared front end for `BigUInt::from_str`,
//! `BigInt::from_str`, and `BigDecimal::from_str`: one pass over the
//! mantissa collecting decimal digits, then the exponent, then packing the
//! digits into limbs nine at a time.

use crate::arith::math::{Limb, LimbVec, LIMB_DIGITS};
use crate::error::{Error, ErrorCode, Result};

/// The outcome of parsing a decimal literal: the unpacked pieces of
/// `(-1)^negative · limbs · 10^(-scale)`.
#[derive(Debug)]
pub(crate) struct ParsedDecimal {
    pub negative: bool,
    pub limbs: LimbVec,
    pub scale: i32,
}

/// Parse a decimal literal.
///
/// Accepts an optional leading sign, digits with `space`/`comma`/`_`
/// separators between them, at most one decimal point, and at most one
/// `e`/`E` exponent with its own optional sign. Errors carry the 1-based
/// byte position of the offending character.
pub(crate) fn parse_decimal(input: &str) -> Result<ParsedDecimal> {
    if input.is_empty() {
        return Err(Error::new(ErrorCode::EmptyInput));
    }
    let bytes = input.as_bytes();

    // Split off the exponent first; everything before it is the mantissa.
    let marker = memchr::memchr2(b'e', b'E', bytes);
    let (mantissa, exponent) = match marker {
        Some(at) => (&bytes[..at], Some((&bytes[at + 1..], at + 1))),
        None => (bytes, None),
    };

    let (negative, digits, fraction_digits) = parse_mantissa(input, mantissa)?;
    let exponent = match exponent {
        Some((tail, offset)) => parse_exponent(input, tail, offset)?,
        None => 0,
    };

    // Digits after the point push the scale up; the exponent pulls it back.
    let scale = fraction_digits as i64 - exponent;
    let scale = i32::try_from(scale).map_err(|_| Error::new(ErrorCode::ScaleOverflow))?;

    Ok(ParsedDecimal {
        negative,
        limbs: pack_digits(&digits),
        scale,
    })
}

/// Scan the mantissa: sign, digits, separators, at most one point.
///
/// Returns the sign, the collected decimal digits most-significant first,
/// and how many of them followed the point.
fn parse_mantissa(input: &str, mantissa: &[u8]) -> Result<(bool, Vec<u8>, i64)> {
    let mut negative = false;
    let mut seen_sign = false;
    let mut seen_point = false;
    let mut digits: Vec<u8> = Vec::with_capacity(mantissa.len());
    let mut fraction_digits: i64 = 0;

    for (i, &b) in mantissa.iter().enumerate() {
        let position = i + 1;
        match b {
            b'0'..=b'9' => {
                digits.push(b - b'0');
                if seen_point {
                    fraction_digits += 1;
                }
            }
            b'+' | b'-' => {
                if seen_sign || !digits.is_empty() || seen_point {
                    return Err(Error::at(ErrorCode::RepeatedSign, position));
                }
                seen_sign = true;
                negative = b == b'-';
            }
            b'.' => {
                if seen_point {
                    return Err(Error::at(ErrorCode::RepeatedDecimalPoint, position));
                }
                seen_point = true;
            }
            b' ' | b',' | b'_' => {
                let digit_before = i > 0 && mantissa[i - 1].is_ascii_digit();
                let digit_after = mantissa.get(i + 1).map_or(false, |c| c.is_ascii_digit());
                if !digit_before || !digit_after {
                    return Err(Error::at(ErrorCode::MisplacedSeparator, position));
                }
            }
            _ => return Err(unexpected(input, i)),
        }
    }

    if digits.is_empty() {
        return Err(Error::at(ErrorCode::MissingDigits, mantissa.len().max(1)));
    }
    Ok((negative, digits, fraction_digits))
}

/// Scan the exponent digits following the marker. `offset` is the byte
/// index of the first byte after the marker, for error positions.
fn parse_exponent(input: &str, tail: &[u8], offset: usize) -> Result<i64> {
    let mut negative = false;
    let mut seen_sign = false;
    let mut seen_digit = false;
    let mut value: i64 = 0;

    for (i, &b) in tail.iter().enumerate() {
        let position = offset + i + 1;
        match b {
            b'0'..=b'9' => {
                seen_digit = true;
                // Saturate well outside the valid scale range; the caller
                // reports overflow when converting to i32.
                value = value
                    .saturating_mul(10)
                    .saturating_add((b - b'0') as i64);
            }
            b'+' | b'-' => {
                if seen_sign || seen_digit {
                    return Err(Error::at(ErrorCode::RepeatedSign, position));
                }
                seen_sign = true;
                negative = b == b'-';
            }
            b' ' | b',' | b'_' => {
                let digit_before = i > 0 && tail[i - 1].is_ascii_digit();
                let digit_after = tail.get(i + 1).map_or(false, |c| c.is_ascii_digit());
                if !digit_before || !digit_after {
                    return Err(Error::at(ErrorCode::MisplacedSeparator, position));
                }
            }
            b'e' | b'E' => return Err(Error::at(ErrorCode::RepeatedExponent, position)),
            _ => return Err(unexpected(input, offset + i)),
        }
    }

    if !seen_digit {
        return Err(Error::at(ErrorCode::MissingDigits, offset.max(1)));
    }
    Ok(if negative { -value } else { value })
}

#[cold]
fn unexpected(input: &str, index: usize) -> Error {
    let c = input[index..].chars().next().unwrap_or('\u{fffd}');
    Error::at(ErrorCode::UnexpectedCharacter(c), index + 1)
}

/// Pack decimal digits (most-significant first) into base-10⁹ limbs,
/// nine digits per limb from the least-significant end, with the highest
/// limb possibly shorter. Leading zero digits disappear here; the zero
/// value packs to `[0]`.
fn pack_digits(digits: &[u8]) -> LimbVec {
    let mut significant = digits;
    while significant.len() > 1 && significant[0] == 0 {
        significant = &significant[1..];
    }
    let mut limbs = Vec::with_capacity(significant.len() / LIMB_DIGITS + 1);
    let mut end = significant.len();
    while end > 0 {
        let start = end.saturating_sub(LIMB_DIGITS);
        let mut limb: Limb = 0;
        for &d in &significant[start..end] {
            limb = limb * 10 + d as Limb;
        }
        limbs.push(limb);
        end = start;
    }
    while limbs.len() > 1 && limbs.last() == Some(&0) {
        limbs.pop();
    }
    limbs
}

// TESTS
// -----
