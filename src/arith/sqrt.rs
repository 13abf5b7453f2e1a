//! Integer square root by Newton iteration.

use super::div::div_rem;
use super::math::{digit_length, is_zero, large, pow10, small, Limb, LimbVec};

/// Compute `⌊√n⌋`.
///
/// The seed `10^⌈d/2⌉` (d decimal digits in `n`) is always at least the
/// true root, so the iteration `x ← (x + n/x)/2` descends monotonically;
/// the first non-decrease means the previous iterate is the floor root.
pub(crate) fn isqrt(n: &[Limb]) -> LimbVec {
    if is_zero(n) {
        return Vec::new();
    }
    if n == [1] {
        return vec![1];
    }
    let digits = digit_length(n);
    let mut x = pow10((digits + 1) / 2);
    loop {
        let (q, _) = div_rem(n, &x);
        let mut y = large::add(&x, &q);
        small::idiv_rem(&mut y, 2);
        if large::greater_equal(&y, &x) {
            return x;
        }
        x = y;
    }
}

// TESTS
// -----
