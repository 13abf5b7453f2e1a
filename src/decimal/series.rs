//! Transcendental functions by range reduction and Taylor series.
//!
//! Every function works at an internal precision `w = precision + guard`
//! and discards the guard digits with a final half-even round. Series
//! terms accumulate until a term's magnitude falls below `10^-w`.
//!
//! `ln 2` and `ln 10` are evaluated on demand from `atanh` series over
//! scaled integers; they converge a digit per term or better and keep the
//! whole crate free of baked-in constant tables.

use super::pi::pi_scaled;
use super::round::RoundingMode;
use super::BigDecimal;
use crate::bigint::Sign;
use crate::biguint::BigUInt;
use crate::error::{Error, ErrorCode, Result};

/// Guard digits for exp/ln/power.
const GUARD: usize = 15;

/// Guard digits for the trigonometric family, which also spends accuracy
/// on the `mod 2π` reduction.
const TRIG_GUARD: usize = 20;

// WORKING-PRECISION HELPERS
// -------------------------

fn trim(x: &BigDecimal, w: usize) -> Result<BigDecimal> {
    x.with_precision(w, RoundingMode::HalfEven)
}

fn mul_w(a: &BigDecimal, b: &BigDecimal, w: usize) -> Result<BigDecimal> {
    trim(&a.checked_mul(b)?, w)
}

fn div_w(a: &BigDecimal, b: &BigDecimal, w: usize) -> Result<BigDecimal> {
    a.divide(b, w, RoundingMode::HalfEven)
}

/// A series stops once its running term drops below one unit of working
/// precision.
fn converged(term: &BigDecimal, w: usize) -> bool {
    term.is_zero() || term.magnitude_exponent() < -(w as i64)
}

/// Integer power with per-step rounding, so a large exponent cannot blow
/// the coefficient up past working precision.
fn pow_at(base: &BigDecimal, exp: u64, w: usize) -> Result<BigDecimal> {
    if exp == 0 {
        return Ok(BigDecimal::one());
    }
    let mut base = trim(base, w)?;
    let mut acc = BigDecimal::one();
    let mut e = exp;
    while e > 1 {
        if e & 1 == 1 {
            acc = mul_w(&acc, &base, w)?;
        }
        base = mul_w(&base, &base, w)?;
        e >>= 1;
    }
    mul_w(&acc, &base, w)
}

fn decimal_digits(mut v: u64) -> usize {
    let mut digits = 1;
    while v >= 10 {
        v /= 10;
        digits += 1;
    }
    digits
}

// LOGARITHM CONSTANTS
// -------------------

/// `Σ 1/(n^(2k+1)·(2k+1))` scaled by `10^w`, truncated: `atanh(1/n)`.
///
/// Pure integer arithmetic; the term loses a bounded number of ulps to
/// truncation, which the callers absorb with eight extra digits.
fn atanh_inv_scaled(n: u32, w: usize) -> BigUInt {
    let nn = n * n;
    let mut term = BigUInt::one().scale_up_by_power_of_10(w) / n;
    let mut sum = BigUInt::zero();
    let mut k: u32 = 0;
    while !term.is_zero() {
        sum += &term / (2 * k + 1);
        term = term / nn;
        k += 1;
    }
    sum
}

/// `⌊ln 2 · 10^w⌋`, from `ln 2 = 2·atanh(1/3)`.
fn ln2_scaled(w: usize) -> BigUInt {
    (atanh_inv_scaled(3, w + 8) * 2u32).scale_down_by_power_of_10(8)
}

/// `⌊ln 10 · 10^w⌋`, from `ln 10 = 6·atanh(1/3) + 2·atanh(1/9)`,
/// which is `3·ln 2 + ln(5/4)`.
fn ln10_scaled(w: usize) -> BigUInt {
    let a3 = atanh_inv_scaled(3, w + 8);
    let a9 = atanh_inv_scaled(9, w + 8);
    (a3 * 6u32 + a9 * 2u32).scale_down_by_power_of_10(8)
}

fn ln2_decimal(w: usize) -> Result<BigDecimal> {
    let scale = i32::try_from(w).map_err(|_| Error::new(ErrorCode::ScaleOverflow))?;
    Ok(BigDecimal::from_parts(Sign::Positive, ln2_scaled(w), scale))
}

fn ln10_decimal(w: usize) -> Result<BigDecimal> {
    let scale = i32::try_from(w).map_err(|_| Error::new(ErrorCode::ScaleOverflow))?;
    Ok(BigDecimal::from_parts(Sign::Positive, ln10_scaled(w), scale))
}

fn pi_decimal(w: usize) -> Result<BigDecimal> {
    let scale = i32::try_from(w).map_err(|_| Error::new(ErrorCode::ScaleOverflow))?;
    Ok(BigDecimal::from_parts(Sign::Positive, pi_scaled(w), scale))
}

// EXP / LN / POWER
// ----------------

impl BigDecimal {
    /// The exponential `e^self` to `precision` significant digits.
    ///
    /// Range-reduces to `self = k·ln 2 + r` with `|r| ≤ ln 2 / 2`, sums the
    /// Taylor series for `exp(r)`, and scales by `2^k`.
    ///
    /// ```
    /// use bigdec::BigDecimal;
    ///
    /// let one = BigDecimal::one();
    /// assert_eq!(one.exp(20).unwrap().to_string(), "2.7182818284590452354");
    /// ```
    pub fn exp(&self, precision: usize) -> Result<BigDecimal> {
        let p = precision.max(1);
        if self.is_zero() {
            return Ok(BigDecimal::one());
        }
        let w = p + GUARD;

        let int_digits = (self.magnitude_exponent() + 1).max(1) as usize;
        let ln2 = ln2_decimal(w + int_digits + 5)?;
        let ratio = self.divide(&ln2, int_digits + 5, RoundingMode::HalfEven)?;
        let k = ratio
            .round(0, RoundingMode::HalfEven)
            .to_bigint()?
            .to_i64()
            .map_err(|_| Error::new(ErrorCode::ScaleOverflow))?;

        let r = trim(&(self - &ln2 * BigDecimal::from(k)), w + 5)?;

        let mut sum = &BigDecimal::one() + &r;
        let mut term = r.clone();
        let mut n: u64 = 2;
        while !converged(&term, w) {
            term = mul_w(&term, &r, w)?;
            term = div_w(&term, &BigDecimal::from(n), w)?;
            sum += &term;
            n += 1;
        }

        let result = if k >= 0 {
            let two_k = pow_at(&BigDecimal::from(2u32), k as u64, w + 5)?;
            mul_w(&sum, &two_k, w)?
        } else {
            let two_k = pow_at(&BigDecimal::from(2u32), k.unsigned_abs(), w + 5)?;
            div_w(&sum, &two_k, w)?
        };
        result.with_precision(p, RoundingMode::HalfEven)
    }

    /// The natural logarithm to `precision` significant digits.
    ///
    /// The argument splits as `m · 2^j · 10^e` with `m ∈ [1, 2)`, and
    /// `ln m` comes from the fast `atanh` series in `y = (m-1)/(m+1)`.
    pub fn ln(&self, precision: usize) -> Result<BigDecimal> {
        if self.is_zero() {
            return Err(Error::new(ErrorCode::LogarithmOfZero));
        }
        if self.is_negative() {
            return Err(Error::new(ErrorCode::LogarithmOfNegative));
        }
        let p = precision.max(1);
        let w = p + GUARD;

        // For arguments of at least 1 every reduction term below is
        // non-negative, so nothing cancels; route (0, 1) through the
        // reciprocal to keep it that way.
        if *self < BigDecimal::one() {
            let inverse = BigDecimal::one().divide(self, w + 5, RoundingMode::HalfEven)?;
            let flipped = inverse.ln(w)?;
            return (-flipped).with_precision(p, RoundingMode::HalfEven);
        }

        // Power of ten out, m ∈ [1, 10).
        let e = self.magnitude_exponent();
        let digits = self.coefficient_ref().number_of_digits() as i64;
        let m_scale =
            i32::try_from(digits - 1).map_err(|_| Error::new(ErrorCode::ScaleOverflow))?;
        let mut m = trim(
            &BigDecimal::from_parts(Sign::Positive, self.coefficient_ref().clone(), m_scale),
            w + 5,
        )?;

        // Powers of two out, m ∈ [1, 2).
        let two = BigDecimal::from(2u32);
        let mut j: i64 = 0;
        while m >= two {
            m = div_w(&m, &two, w + 5)?;
            j += 1;
        }

        let one = BigDecimal::one();
        let y = div_w(&(&m - &one), &(&m + &one), w + 5)?;
        let mut ln_m = BigDecimal::zero();
        if !y.is_zero() {
            let y2 = mul_w(&y, &y, w + 5)?;
            let mut power = y.clone();
            let mut sum = y.clone();
            let mut k: u64 = 1;
            loop {
                power = mul_w(&power, &y2, w + 5)?;
                let contrib = div_w(&power, &BigDecimal::from(2 * k + 1), w + 5)?;
                sum += &contrib;
                if converged(&contrib, w) {
                    break;
                }
                k += 1;
            }
            ln_m = &sum * &two;
        }

        let mut result = ln_m;
        if j != 0 {
            result = &result + &ln2_decimal(w + 5)? * BigDecimal::from(j);
        }
        if e != 0 {
            let extra = decimal_digits(e.unsigned_abs()) + 5;
            result = &result + &ln10_decimal(w + extra)? * BigDecimal::from(e);
        }
        result.with_precision(p, RoundingMode::HalfEven)
    }

    /// The logarithm in an arbitrary base, as `ln self / ln base`.
    pub fn log(&self, base: &BigDecimal, precision: usize) -> Result<BigDecimal> {
        let p = precision.max(1);
        let w = p + GUARD;
        let ln_x = self.ln(w)?;
        let ln_base = base.ln(w)?;
        if ln_base.is_zero() {
            return Err(Error::new(ErrorCode::DivisionByZero));
        }
        ln_x.divide(&ln_base, p, RoundingMode::HalfEven)
    }

    /// The base-10 logarithm.
    pub fn log10(&self, precision: usize) -> Result<BigDecimal> {
        let p = precision.max(1);
        let w = p + GUARD;
        let ln_x = self.ln(w)?;
        ln_x.divide(&ln10_decimal(w)?, p, RoundingMode::HalfEven)
    }

    /// `self` raised to an arbitrary decimal power.
    ///
    /// Integer exponents go through square-and-multiply; everything else
    /// is `exp(y·ln x)`, which requires a positive base.
    pub fn power(&self, exponent: &BigDecimal, precision: usize) -> Result<BigDecimal> {
        let p = precision.max(1);
        if exponent.is_zero() {
            return Ok(BigDecimal::one());
        }
        let w = p + GUARD;
        if exponent.is_integer() {
            let n = exponent
                .to_bigint()?
                .to_i64()
                .map_err(|_| Error::new(ErrorCode::ScaleOverflow))?;
            if self.is_zero() {
                return if n > 0 {
                    Ok(BigDecimal::zero())
                } else {
                    Err(Error::new(ErrorCode::DivisionByZero))
                };
            }
            let result = if n >= 0 {
                pow_at(self, n as u64, w)?
            } else {
                div_w(&BigDecimal::one(), &pow_at(self, n.unsigned_abs(), w)?, w)?
            };
            return result.with_precision(p, RoundingMode::HalfEven);
        }
        if self.is_zero() {
            return if exponent.is_negative() {
                Err(Error::new(ErrorCode::DivisionByZero))
            } else {
                Ok(BigDecimal::zero())
            };
        }
        if self.is_negative() {
            return Err(Error::new(ErrorCode::NonIntegerPowerOfNegative));
        }
        let ln_x = self.ln(w)?;
        let y_ln_x = trim(&exponent.checked_mul(&ln_x)?, w)?;
        y_ln_x.exp(p)
    }

    /// The square root to `precision` significant digits.
    ///
    /// Works at the coefficient level: make the scale even, lift by
    /// `10^(2g)` for guard digits, take the integer square root, and halve
    /// the scale.
    ///
    /// ```
    /// use bigdec::BigDecimal;
    ///
    /// let two: BigDecimal = "2".parse().unwrap();
    /// assert_eq!(
    ///     two.sqrt(28).unwrap().to_string(),
    ///     "1.414213562373095048801688724"
    /// );
    /// ```
    pub fn sqrt(&self, precision: usize) -> Result<BigDecimal> {
        if self.is_negative() {
            return Err(Error::new(ErrorCode::SquareRootOfNegative));
        }
        if self.is_zero() {
            return Ok(BigDecimal::zero());
        }
        let p = precision.max(1);
        let mut coefficient = self.coefficient_ref().clone();
        let mut scale = self.scale() as i64;
        if scale.rem_euclid(2) != 0 {
            coefficient = coefficient.scale_up_by_power_of_10(1);
            scale += 1;
        }
        let lift = p + 4;
        let root = coefficient.scale_up_by_power_of_10(2 * lift).sqrt();
        let root_scale = i32::try_from(scale / 2 + lift as i64)
            .map_err(|_| Error::new(ErrorCode::ScaleOverflow))?;
        BigDecimal::from_parts(Sign::Positive, root, root_scale)
            .with_precision(p, RoundingMode::HalfEven)
    }
}

// TRIGONOMETRY
// ------------

/// Reduce `x` modulo `2π`, then to `t ∈ [-π/4, π/4]` against the nearest
/// multiple of `π/2`, and evaluate both series on `t`.
///
/// Returns `(sin x, cos x)` at working precision.
fn sin_cos(x: &BigDecimal, w: usize) -> Result<(BigDecimal, BigDecimal)> {
    if x.is_zero() {
        return Ok((BigDecimal::zero(), BigDecimal::one()));
    }
    let negative = x.is_negative();
    let a = x.abs();
    let int_digits = (a.magnitude_exponent() + 1).max(0) as usize;
    // π needs every digit the reduction quotient consumes.
    let wp = w + int_digits + 10;
    let pi = pi_decimal(wp)?;
    let two_pi = &pi * BigDecimal::from(2u32);

    let mut r = a;
    if r >= two_pi {
        let q = r
            .divide(&two_pi, int_digits + 5, RoundingMode::Down)?
            .round(0, RoundingMode::Down);
        r = trim(&(&r - &(&q * &two_pi)), w + 10)?;
    }

    let half_pi = div_w(&pi, &BigDecimal::from(2u32), wp)?;
    let nearest = r
        .divide(&half_pi, 9, RoundingMode::HalfEven)?
        .round(0, RoundingMode::HalfEven);
    let k = nearest
        .to_bigint()?
        .to_i64()
        .map_err(|_| Error::new(ErrorCode::ScaleOverflow))?;
    let t = trim(&(&r - &(&nearest * &half_pi)), w + 10)?;

    let (sin_t, cos_t) = sin_cos_series(&t, w)?;
    let (sin, cos) = match k.rem_euclid(4) {
        0 => (sin_t, cos_t),
        1 => (cos_t, -sin_t),
        2 => (-sin_t, -cos_t),
        _ => (-cos_t, sin_t),
    };
    Ok(if negative { (-sin, cos) } else { (sin, cos) })
}

/// The odd and even Taylor series on a reduced argument.
fn sin_cos_series(t: &BigDecimal, w: usize) -> Result<(BigDecimal, BigDecimal)> {
    if t.is_zero() {
        return Ok((BigDecimal::zero(), BigDecimal::one()));
    }
    let neg_t2 = -mul_w(t, t, w + 5)?;

    let mut sin = t.clone();
    let mut term = t.clone();
    let mut n: u64 = 1;
    while !converged(&term, w) {
        term = mul_w(&term, &neg_t2, w)?;
        term = div_w(&term, &BigDecimal::from((2 * n) * (2 * n + 1)), w)?;
        sin += &term;
        n += 1;
    }

    let mut cos = BigDecimal::one();
    let mut term = BigDecimal::one();
    let mut n: u64 = 1;
    while !converged(&term, w) {
        term = mul_w(&term, &neg_t2, w)?;
        term = div_w(&term, &BigDecimal::from((2 * n - 1) * (2 * n)), w)?;
        cos += &term;
        n += 1;
    }
    Ok((sin, cos))
}

impl BigDecimal {
    /// The sine, with the argument reduced modulo `2π`.
    pub fn sin(&self, precision: usize) -> Result<BigDecimal> {
        let p = precision.max(1);
        let (sin, _) = sin_cos(self, p + TRIG_GUARD)?;
        sin.with_precision(p, RoundingMode::HalfEven)
    }

    /// The cosine, with the argument reduced modulo `2π`.
    pub fn cos(&self, precision: usize) -> Result<BigDecimal> {
        let p = precision.max(1);
        let (_, cos) = sin_cos(self, p + TRIG_GUARD)?;
        cos.with_precision(p, RoundingMode::HalfEven)
    }

    /// The tangent `sin/cos`; fails when the cosine underflows to zero at
    /// working precision.
    pub fn tan(&self, precision: usize) -> Result<BigDecimal> {
        let p = precision.max(1);
        let (sin, cos) = sin_cos(self, p + TRIG_GUARD)?;
        if cos.is_zero() {
            return Err(Error::new(ErrorCode::ReciprocalOfZero));
        }
        sin.divide(&cos, p, RoundingMode::HalfEven)
    }

    /// The cotangent `cos/sin`; fails when the sine underflows to zero at
    /// working precision.
    pub fn cot(&self, precision: usize) -> Result<BigDecimal> {
        let p = precision.max(1);
        let (sin, cos) = sin_cos(self, p + TRIG_GUARD)?;
        if sin.is_zero() {
            return Err(Error::new(ErrorCode::ReciprocalOfZero));
        }
        cos.divide(&sin, p, RoundingMode::HalfEven)
    }

    /// The secant `1/cos`; fails when the cosine underflows to zero at
    /// working precision.
    pub fn sec(&self, precision: usize) -> Result<BigDecimal> {
        let p = precision.max(1);
        let (_, cos) = sin_cos(self, p + TRIG_GUARD)?;
        if cos.is_zero() {
            return Err(Error::new(ErrorCode::ReciprocalOfZero));
        }
        BigDecimal::one().divide(&cos, p, RoundingMode::HalfEven)
    }

    /// The cosecant `1/sin`; fails when the sine underflows to zero at
    /// working precision.
    pub fn csc(&self, precision: usize) -> Result<BigDecimal> {
        let p = precision.max(1);
        let (sin, _) = sin_cos(self, p + TRIG_GUARD)?;
        if sin.is_zero() {
            return Err(Error::new(ErrorCode::ReciprocalOfZero));
        }
        BigDecimal::one().divide(&sin, p, RoundingMode::HalfEven)
    }
}

// TESTS
// -----
