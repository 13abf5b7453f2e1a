//! Multiplication over base-10⁹ limb buffers.
//!
//! A dispatcher picks between a linear scalar multiply, schoolbook long
//! multiplication, and Karatsuba splitting, based on the shorter operand.

use super::math::{is_zero, large, small, Limb, LimbVec, Wide, RADIX_WIDE};

/// Number of limbs at which Karatsuba starts to out-perform schoolbook
/// long multiplication for this base. Measured crossover; schoolbook wins
/// below it because the recursion's temporaries dominate.
pub(crate) const KARATSUBA_CUTOFF: usize = 64;

/// Multiply two little-endian limb buffers.
pub(crate) fn mul(x: &[Limb], y: &[Limb]) -> LimbVec {
    if is_zero(x) || is_zero(y) {
        return Vec::new();
    }
    if y.len() == 1 {
        return small::mul(x, y[0]);
    }
    if x.len() == 1 {
        return small::mul(y, x[0]);
    }
    if x.len().min(y.len()) < KARATSUBA_CUTOFF {
        long_mul(x, y)
    } else {
        karatsuba_mul_fwd(x, y)
    }
}

/// Grade-school multiplication algorithm.
///
/// Each limb of `y` contributes one row: the row's products accumulate into
/// the result through a wide carry running left-to-right. The accumulator
/// stays below `RADIX²`, so a 64-bit column never overflows. A zero limb of
/// `y` contributes nothing and is skipped; the row offset is positional, so
/// the skip cannot misalign later columns.
fn long_mul(x: &[Limb], y: &[Limb]) -> LimbVec {
    let mut z = vec![0; x.len() + y.len()];
    for (j, &yj) in y.iter().enumerate() {
        if yj == 0 {
            continue;
        }
        let mut carry: Wide = 0;
        for (i, &xi) in x.iter().enumerate() {
            let t = z[i + j] as Wide + xi as Wide * yj as Wide + carry;
            z[i + j] = (t % RADIX_WIDE) as Limb;
            carry = t / RADIX_WIDE;
        }
        let mut idx = j + x.len();
        while carry != 0 {
            let t = z[idx] as Wide + carry;
            z[idx] = (t % RADIX_WIDE) as Limb;
            carry = t / RADIX_WIDE;
            idx += 1;
        }
    }
    small::normalize(&mut z);
    z
}

/// Split a buffer into (lo, hi) halves at `m`.
#[inline]
fn karatsuba_split(z: &[Limb], m: usize) -> (&[Limb], &[Limb]) {
    (&z[..m], &z[m..])
}

/// Karatsuba multiplication algorithm with roughly equal input sizes.
///
/// Assumes `y.len() >= x.len()`.
fn karatsuba_mul(x: &[Limb], y: &[Limb]) -> LimbVec {
    if x.len().min(y.len()) <= KARATSUBA_CUTOFF {
        // Bottom-out to long multiplication for small cases.
        long_mul(x, y)
    } else if x.len() < y.len() / 2 {
        karatsuba_uneven_mul(x, y)
    } else {
        // Do our 3 multiplications.
        let m = y.len() / 2;
        let (xl, xh) = karatsuba_split(x, m);
        let (yl, yh) = karatsuba_split(y, m);
        let sumx = large::add(xl, xh);
        let sumy = large::add(yl, yh);
        let z0 = karatsuba_mul_fwd(xl, yl);
        let mut z1 = karatsuba_mul_fwd(&sumx, &sumy);
        let z2 = karatsuba_mul_fwd(xh, yh);
        // Scale z1 down to `(xl+xh)(yl+yh) - z0 - z2`, which cannot
        // underflow because that product dominates both square terms.
        large::isub(&mut z1, &z2);
        large::isub(&mut z1, &z0);

        // Assemble, in little-endian order: [z0, z1, z2], with z1 shifted
        // m limbs over and z2 shifted 2*m limbs over.
        let mut result = Vec::with_capacity(x.len() + y.len() + 1);
        result.extend_from_slice(&z0);
        large::iadd_impl(&mut result, &z1, m);
        large::iadd_impl(&mut result, &z2, 2 * m);
        small::normalize(&mut result);
        result
    }
}

/// Karatsuba multiplication algorithm where y is substantially larger than x.
///
/// Assumes `y.len() >= x.len()`. This effectively is grade-school
/// multiplication between two numbers, except the splits are on `y` and the
/// intermediate step is a Karatsuba multiplication.
fn karatsuba_uneven_mul(x: &[Limb], mut y: &[Limb]) -> LimbVec {
    let mut result = vec![0; x.len() + y.len()];
    let mut start = 0;
    while !y.is_empty() {
        let m = x.len().min(y.len());
        let (yl, yh) = karatsuba_split(y, m);
        let prod = karatsuba_mul_fwd(x, yl);
        large::iadd_impl(&mut result, &prod, start);
        y = yh;
        start += m;
    }
    small::normalize(&mut result);
    result
}

/// Forwarder to the proper Karatsuba algorithm.
#[inline]
fn karatsuba_mul_fwd(x: &[Limb], y: &[Limb]) -> LimbVec {
    if x.len() < y.len() {
        karatsuba_mul(x, y)
    } else {
        karatsuba_mul(y, x)
    }
}

// TESTS
// -----

#[cfg(test)]
mod tests {
    use super::*;

    fn from_digits(s: &str) -> LimbVec {
        crate::parse::parse_decimal(s).unwrap().limbs
    }

    fn to_digits(x: &[Limb]) -> String {
        if x.is_empty() {
            return "0".to_owned();
        }
        crate::fmt::coefficient_digits(x)
    }

    #[test]
    fn long_mul_test() {
        assert_eq!(mul(&[5], &[7]), vec![35]);
        assert_eq!(mul(&[500_000_000], &[2]), vec![0, 1]);
        assert_eq!(
            mul(&[999_999_999, 999_999_999], &[999_999_999, 999_999_999]),
            vec![1, 0, 999_999_998, 999_999_999]
        );
    }

    #[test]
    fn zero_operand_test() {
        assert_eq!(mul(&[0], &[123]), Vec::<Limb>::new());
        assert_eq!(mul(&[123, 456], &[]), Vec::<Limb>::new());
    }

    #[test]
    fn interior_zero_limb_test() {
        // A zero limb inside either operand must not shift later columns.
        // (456·10¹⁸ + 123) · 2000000789
        let x = vec![123, 0, 456];
        let y = vec![789, 2];
        let expected = from_digits("912000359784000000246000097047");
        assert_eq!(mul(&x, &y), expected);
        assert_eq!(mul(&y, &x), expected);

        // (3·10³⁶ + 7) · 5·10¹⁸
        let x = vec![7, 0, 0, 0, 3];
        let y = vec![0, 0, 5];
        assert_eq!(mul(&x, &y), vec![0, 0, 35, 0, 0, 0, 15]);
    }

    #[test]
    fn karatsuba_matches_long_mul_test() {
        // Pseudo-random limbs from a fixed linear congruence, long enough to
        // recurse twice past the cutoff.
        let mut seed: u64 = 0x2545_F491_4F6C_DD1D;
        let mut next = || {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            (seed >> 33) as Limb % crate::arith::math::RADIX
        };
        let x: LimbVec = (0..300).map(|_| next()).collect();
        let y: LimbVec = (0..271).map(|_| next()).collect();
        let mut x = x;
        let mut y = y;
        small::normalize(&mut x);
        small::normalize(&mut y);
        assert_eq!(karatsuba_mul_fwd(&x, &y), long_mul(&x, &y));
    }

    #[test]
    fn two_pow_128_times_two_test() {
        let x = from_digits("340282366920938463463374607431768211456");
        let z = mul(&x, &[2]);
        assert_eq!(to_digits(&z), "680564733841876926926749214863536422912");
    }
}
