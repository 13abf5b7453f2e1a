//! Division over base-10⁹ limb buffers.
//!
//! The public entry point is truncated division with remainder. Short
//! divisors take a linear scalar path; everything else goes through
//! Burnikel-Ziegler recursive division, which splits the divisor in halves
//! down to a Knuth Algorithm D base case. The recursion needs the divisor
//! normalized (top limb at least `RADIX/2`) and block sizes that halve
//! evenly, so the driver scales both operands by a small factor and pads
//! with zero low limbs, then undoes both on the remainder.

use super::math::{is_zero, large, scalar, small, Limb, LimbVec, Wide, RADIX, RADIX_WIDE};
use super::mul::mul;
use core::cmp::Ordering;

/// Divisor length at which the recursion bottoms out to Algorithm D.
pub(crate) const DIV_BASECASE_CUTOFF: usize = 32;

/// Truncated division with remainder.
///
/// The divisor must be non-zero and both buffers normalized; the public
/// types check for zero before calling in.
pub(crate) fn div_rem(n: &[Limb], d: &[Limb]) -> (LimbVec, LimbVec) {
    debug_assert!(!is_zero(d));
    match large::compare(n, d) {
        Ordering::Less => return (Vec::new(), n.to_vec()),
        Ordering::Equal => return (vec![1], Vec::new()),
        Ordering::Greater => {}
    }
    if d.len() == 1 {
        let mut q = n.to_vec();
        let rem = small::idiv_rem(&mut q, d[0]);
        let r = if rem == 0 { Vec::new() } else { vec![rem] };
        return (q, r);
    }
    div_rem_large(n, d)
}

/// Division by a multi-limb divisor: normalize, recurse, un-normalize.
fn div_rem_large(n: &[Limb], d: &[Limb]) -> (LimbVec, LimbVec) {
    // Scale both operands by doubling until the divisor's top limb reaches
    // RADIX/2. The factor stays below RADIX and divides back out of the
    // remainder exactly.
    let mut dn = d.to_vec();
    let mut factor: Limb = 1;
    while *dn.last().unwrap() < RADIX / 2 {
        small::imul(&mut dn, 2);
        factor *= 2;
    }
    debug_assert!(dn.len() == d.len());
    let mut nn = n.to_vec();
    if factor > 1 {
        small::imul(&mut nn, factor);
    }

    let s = dn.len();
    let (q, mut r) = if s <= DIV_BASECASE_CUTOFF {
        div_rem_knuth(&nn, &dn)
    } else {
        // Pad with zero low limbs so the divisor length halves evenly down
        // to the base case.
        let mut base = s;
        let mut levels = 0;
        while base > DIV_BASECASE_CUTOFF {
            base = (base + 1) / 2;
            levels += 1;
        }
        let padded = base << levels;
        let pad = padded - s;
        if pad > 0 {
            prepend_zeros(&mut dn, pad);
            prepend_zeros(&mut nn, pad);
        }
        let (q, mut r) = div_rem_blocks(&nn, &dn);
        if pad > 0 {
            debug_assert!(r.iter().take(pad.min(r.len())).all(|&l| l == 0));
            if r.len() > pad {
                r.drain(..pad);
            } else {
                r.clear();
            }
        }
        (q, r)
    };

    if factor > 1 {
        let rem = small::idiv_rem(&mut r, factor);
        debug_assert!(rem == 0);
    }
    (q, r)
}

fn prepend_zeros(x: &mut LimbVec, pad: usize) {
    let old = x.len();
    x.resize(old + pad, 0);
    x.copy_within(..old, pad);
    x[..pad].fill(0);
}

/// Long division whose digits are whole blocks of `d.len()` limbs, each
/// block quotient produced by the two-digits-by-one recursion.
fn div_rem_blocks(n: &[Limb], d: &[Limb]) -> (LimbVec, LimbVec) {
    let s = d.len();
    let blocks = (n.len() + s - 1) / s;
    let mut q = vec![0; blocks * s];
    let mut r: LimbVec = Vec::new();
    for b in (0..blocks).rev() {
        let lo = b * s;
        let hi = (lo + s).min(n.len());
        // cur = r·β^s + block, at most 2s limbs and below d·β^s since r < d.
        let mut cur = n[lo..hi].to_vec();
        if !r.is_empty() {
            cur.resize(s, 0);
            cur.extend_from_slice(&r);
        }
        small::normalize(&mut cur);
        let (qb, rb) = div_two_by_one(&cur, d);
        debug_assert!(qb.len() <= s);
        q[lo..lo + qb.len()].copy_from_slice(&qb);
        r = rb;
    }
    small::normalize(&mut q);
    (q, r)
}

/// Divide a (at most 2s limbs) by d (s limbs, normalized), recursively
/// splitting the divisor in half. Requires `a < d·β^s`.
fn div_two_by_one(a: &[Limb], d: &[Limb]) -> (LimbVec, LimbVec) {
    let s = d.len();
    debug_assert!(a.len() <= 2 * s);
    if s <= DIV_BASECASE_CUTOFF || s % 2 == 1 {
        return div_rem_knuth(a, d);
    }
    let h = s / 2;
    let block = |i: usize| -> &[Limb] {
        let lo = (i * h).min(a.len());
        let hi = (lo + h).min(a.len());
        &a[lo..hi]
    };
    let (d0, d1) = (&d[..h], &d[h..]);
    let (q1, r1) = div_three_by_two(block(2), block(3), block(1), d0, d1);
    let r1_lo = &r1[..h.min(r1.len())];
    let r1_hi = if r1.len() > h { &r1[h..] } else { &[] };
    let (q0, r0) = div_three_by_two(r1_lo, r1_hi, block(0), d0, d1);
    // q = q1·β^h + q0
    let mut q = q0;
    q.resize(h, 0);
    q.extend_from_slice(&q1);
    small::normalize(&mut q);
    (q, r0)
}

/// Divide the three half-blocks `(a2, a1, a0)` by the divisor `d1·β^h + d0`,
/// where every block is at most `h` limbs and `a2·β^h + a1 < d1·β^h + ...`
/// is loose enough that the quotient fits in `h` limbs.
///
/// `a1`/`a2` name the middle and top halves; arguments are passed low half
/// first to match the little-endian buffers.
fn div_three_by_two(
    a1: &[Limb],
    a2: &[Limb],
    a0: &[Limb],
    d0: &[Limb],
    d1: &[Limb],
) -> (LimbVec, LimbVec) {
    let h = d1.len();
    let a_hi = compose(a1, a2, h);
    let (mut q, c) = if large::less(a2, d1) {
        // Top half below the divisor's top half: recurse on 2h by h.
        div_two_by_one(&a_hi, d1)
    } else {
        // The quotient digit saturates at β^h - 1, leaving
        // c = a_hi - (β^h - 1)·d1 = a_hi - d1·β^h + d1.
        let qmax = vec![RADIX - 1; h];
        let mut c = large::add(&a_hi, d1);
        let mut shifted = vec![0; h];
        shifted.extend_from_slice(d1);
        large::isub(&mut c, &shifted);
        (qmax, c)
    };

    let dd = mul(&q, d0);
    let mut rhat = compose(a0, &c, h);
    let full_d = compose(d0, d1, h);
    // The estimate can be at most two too large; each correction steps the
    // quotient down one and restores one divisor.
    while large::less(&rhat, &dd) {
        small::isub(&mut q, 1);
        large::iadd(&mut rhat, &full_d);
    }
    large::isub(&mut rhat, &dd);
    debug_assert!(large::less(&rhat, &full_d));
    (q, rhat)
}

/// `lo + hi·β^h`, normalized.
fn compose(lo: &[Limb], hi: &[Limb], h: usize) -> LimbVec {
    debug_assert!(lo.len() <= h);
    let mut v = Vec::with_capacity(h + hi.len());
    v.extend_from_slice(lo);
    v.resize(h, 0);
    v.extend_from_slice(hi);
    small::normalize(&mut v);
    v
}

/// Knuth Algorithm D schoolbook long division over base 10⁹.
///
/// Requires a multi-limb divisor with its top limb at least `RADIX/2`.
/// Each quotient limb comes from the classic two-limb estimate
/// `q̂ = min(β-1, (n₂β + n₁) / d₁)`, stepped down while the three-limb
/// comparison disagrees, followed by multiply-subtract with at most one
/// add-back.
fn div_rem_knuth(a: &[Limb], d: &[Limb]) -> (LimbVec, LimbVec) {
    if large::less(a, d) {
        return (Vec::new(), a.to_vec());
    }
    let s = d.len();
    if s == 1 {
        let mut q = a.to_vec();
        let rem = small::idiv_rem(&mut q, d[0]);
        let r = if rem == 0 { Vec::new() } else { vec![rem] };
        return (q, r);
    }
    debug_assert!(d[s - 1] >= RADIX / 2);

    let m = a.len() - s;
    let mut rem = a.to_vec();
    rem.push(0);
    let mut q = vec![0; m + 1];
    let d1 = d[s - 1] as Wide;
    let d0 = d[s - 2] as Wide;

    for j in (0..=m).rev() {
        let top2 = rem[j + s] as Wide * RADIX_WIDE + rem[j + s - 1] as Wide;
        let mut qhat = top2 / d1;
        if qhat >= RADIX_WIDE {
            qhat = RADIX_WIDE - 1;
        }
        let mut rhat = top2 - qhat * d1;
        while rhat < RADIX_WIDE
            && qhat * d0 > rhat * RADIX_WIDE + rem[j + s - 2] as Wide
        {
            qhat -= 1;
            rhat += d1;
        }

        // rem[j..j+s+1] -= qhat · d
        let mut borrow: Wide = 0;
        for i in 0..s {
            let p = qhat * d[i] as Wide + borrow;
            let sub = (p % RADIX_WIDE) as Limb;
            borrow = p / RADIX_WIDE;
            if rem[j + i] >= sub {
                rem[j + i] -= sub;
            } else {
                rem[j + i] += RADIX - sub;
                borrow += 1;
            }
        }
        let top = rem[j + s] as Wide;
        if top >= borrow {
            rem[j + s] = (top - borrow) as Limb;
        } else {
            // Estimate was one too large: add the divisor back. The borrowed
            // base cancels against the carry out of the top limb.
            rem[j + s] = (top + RADIX_WIDE - borrow) as Limb;
            qhat -= 1;
            let mut carry: Limb = 0;
            for i in 0..s {
                let t = scalar::add(rem[j + i], d[i], carry);
                rem[j + i] = t.0;
                carry = t.1;
            }
            rem[j + s] = ((rem[j + s] as Wide + carry as Wide) % RADIX_WIDE) as Limb;
        }
        q[j] = qhat as Limb;
    }

    rem.truncate(s);
    small::normalize(&mut rem);
    small::normalize(&mut q);
    (q, rem)
}

// TESTS
// -----
