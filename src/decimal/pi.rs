//! π by the Chudnovsky series, evaluated with binary splitting.
//!
//! The series gains about 14.18 decimal digits per term. Binary splitting
//! turns the term-by-term sum into three integer sequences combined over
//! halved intervals, so the whole evaluation is a handful of balanced
//! big-integer multiplications instead of a quadratic scan.

use super::BigDecimal;
use crate::bigint::{BigInt, Sign};
use crate::biguint::BigUInt;

/// 640320³ / 24.
const C3_OVER_24: u64 = 10_939_058_860_032_000;

/// The linear term `A + B·k` of the series numerator.
const A: u64 = 13_591_409;
const B: u64 = 545_140_134;

struct Split {
    p: BigInt,
    q: BigInt,
    t: BigInt,
}

/// Evaluate P, Q, T over the half-open term interval `[a, b)`.
fn split(a: u64, b: u64) -> Split {
    if b == a + 1 {
        if a == 0 {
            return Split {
                p: BigInt::one(),
                q: BigInt::one(),
                t: BigInt::from(A),
            };
        }
        // Leaf values straight from the term ratio. The cubes overflow a
        // machine word long before the digit counts get interesting, so
        // they are assembled as big integers.
        let p = BigUInt::from(6 * a - 5) * (2 * a - 1) * (6 * a - 1);
        let q = BigUInt::from(a).pow(3) * C3_OVER_24;
        let t = &p * (A + B * a);
        let sign = if a % 2 == 1 {
            Sign::Negative
        } else {
            Sign::Positive
        };
        return Split {
            p: BigInt::from(p),
            q: BigInt::from(q),
            t: BigInt::new(sign, t),
        };
    }
    let m = a + (b - a) / 2;
    let left = split(a, m);
    let right = split(m, b);
    Split {
        p: &left.p * &right.p,
        q: &left.q * &right.q,
        t: &left.t * &right.q + &left.p * &right.t,
    }
}

/// `⌊π · 10^digits⌋`.
///
/// Carries ten guard digits through the square root and the final
/// division, discarded before returning.
pub(crate) fn pi_scaled(digits: usize) -> BigUInt {
    let guard = 10;
    let scaled = digits + guard;
    let terms = (scaled / 14 + 2) as u64;
    let Split { q, t, .. } = split(0, terms);
    debug_assert!(!t.is_negative() && !t.is_zero());

    // π = 426880·√10005·Q / T.
    let sqrt_c = (BigUInt::from(10_005u32).scale_up_by_power_of_10(2 * scaled)).sqrt();
    let numerator = q.magnitude() * 426_880u32 * sqrt_c;
    let (quotient, _) = numerator
        .div_rem(t.magnitude())
        .expect("series tail is non-zero");
    quotient.scale_down_by_power_of_10(guard)
}

impl BigDecimal {
    /// π to `precision` significant digits, truncated.
    ///
    /// ```
    /// use bigdec::BigDecimal;
    ///
    /// assert_eq!(BigDecimal::pi(10).to_string(), "3.141592653");
    /// ```
    pub fn pi(precision: usize) -> BigDecimal {
        let precision = precision.clamp(1, i32::MAX as usize);
        let fraction = precision - 1;
        BigDecimal::from_parts(
            Sign::Positive,
            pi_scaled(fraction),
            fraction as i32,
        )
    }
}

// TESTS
// -----

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_digits_test() {
        assert_eq!(BigDecimal::pi(1).to_string(), "3");
        assert_eq!(BigDecimal::pi(5).to_string(), "3.1415");
        assert_eq!(
            BigDecimal::pi(30).to_string(),
            "3.14159265358979323846264338327"
        );
    }

    #[test]
    fn fifty_digits_test() {
        assert_eq!(
            BigDecimal::pi(51).to_string(),
            "3.14159265358979323846264338327950288419716939937510"
        );
    }
}
