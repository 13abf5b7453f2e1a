//! An arbitrary-precision floating decimal: sign, coefficient, and scale.

use core::cmp::Ordering;
use core::fmt::{self, Debug, Display};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub,
                SubAssign};
use core::str::FromStr;

use crate::arith::math::{self, small};
use crate::bigint::{BigInt, Sign};
use crate::biguint::BigUInt;
use crate::error::{Error, ErrorCode, Result};
use crate::parse::parse_decimal;

mod pi;
mod round;
mod series;

pub use self::round::RoundingMode;

/// Default number of significant digits carried by division and the
/// transcendental functions when no precision is given.
pub const DEFAULT_PRECISION: usize = 36;

/// Guard digits absorbed by division before the final round.
const DIV_GUARD_DIGITS: usize = 4;

/// An arbitrary-precision floating decimal.
///
/// The value is `(-1)^sign · coefficient · 10^(-scale)`: an unsigned
/// integer coefficient with a signed decimal scale. A positive scale puts
/// digits to the right of the point; a negative scale denotes implied
/// trailing zeros. Arithmetic does not normalize away trailing coefficient
/// zeros, so `1.50` keeps its scale of 2, but comparison and equality are
/// on the value, not the representation.
///
/// ```
/// use bigdec::BigDecimal;
///
/// let a: BigDecimal = "1.50".parse().unwrap();
/// let b: BigDecimal = "1.5".parse().unwrap();
/// assert_eq!(a, b);
/// assert_eq!((&a * &b).to_string(), "2.250");
/// ```
#[derive(Clone)]
pub struct BigDecimal {
    sign: Sign,
    coefficient: BigUInt,
    scale: i32,
}

impl BigDecimal {
    /// The value 0, with scale 0.
    #[inline]
    pub fn zero() -> BigDecimal {
        BigDecimal {
            sign: Sign::Positive,
            coefficient: BigUInt::zero(),
            scale: 0,
        }
    }

    /// The value 1, with scale 0.
    #[inline]
    pub fn one() -> BigDecimal {
        BigDecimal {
            sign: Sign::Positive,
            coefficient: BigUInt::one(),
            scale: 0,
        }
    }

    /// Assemble from a signed coefficient and a scale: the value
    /// `coefficient · 10^(-scale)`.
    pub fn new(coefficient: BigInt, scale: i32) -> BigDecimal {
        let sign = coefficient.sign();
        BigDecimal::from_parts(sign, coefficient.magnitude().clone(), scale)
    }

    pub(crate) fn from_parts(sign: Sign, coefficient: BigUInt, scale: i32) -> BigDecimal {
        let sign = if coefficient.is_zero() {
            Sign::Positive
        } else {
            sign
        };
        BigDecimal {
            sign,
            coefficient,
            scale,
        }
    }

    /// Returns true if the value is 0.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.coefficient.is_zero()
    }

    /// Returns true if the value is below zero.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    /// The sign. Zero reports `Positive`.
    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// The signed coefficient, so that the value is
    /// `coefficient() · 10^(-scale())`.
    pub fn coefficient(&self) -> BigInt {
        BigInt::new(self.sign, self.coefficient.clone())
    }

    /// Number of decimal digits to the right of the point; negative for
    /// implied trailing zeros.
    #[inline]
    pub fn scale(&self) -> i32 {
        self.scale
    }

    /// Number of significant digits of the coefficient, at least 1.
    pub fn number_of_significant_digits(&self) -> usize {
        self.coefficient.number_of_digits()
    }

    /// Returns true if the value has no fractional part.
    pub fn is_integer(&self) -> bool {
        if self.scale <= 0 || self.is_zero() {
            return true;
        }
        let (first, sticky) =
            small::div_pow10_inspect(self.coefficient.limbs(), self.scale as usize);
        first == 0 && !sticky
    }

    /// The absolute value.
    pub fn abs(&self) -> BigDecimal {
        BigDecimal {
            sign: Sign::Positive,
            coefficient: self.coefficient.clone(),
            scale: self.scale,
        }
    }

    /// The same value with trailing coefficient zeros stripped; zero
    /// normalizes to scale 0.
    pub fn normalized(&self) -> BigDecimal {
        if self.is_zero() {
            return BigDecimal::zero();
        }
        let limbs = self.coefficient.limbs();
        let digits = self.coefficient.number_of_digits();
        let mut trailing = 0;
        while trailing < digits - 1 && math::digit_at(limbs, trailing) == 0 {
            trailing += 1;
        }
        // Keep the scale representable; leave any zeros that would push it
        // below the i32 range.
        let headroom = (self.scale as i64 - i32::MIN as i64) as usize;
        let trailing = trailing.min(headroom);
        if trailing == 0 {
            return self.clone();
        }
        BigDecimal {
            sign: self.sign,
            coefficient: self.coefficient.scale_down_by_power_of_10(trailing),
            scale: self.scale - trailing as i32,
        }
    }

    /// Round to a target scale.
    ///
    /// A target above the current scale zero-pads the coefficient instead
    /// of rounding.
    ///
    /// ```
    /// use bigdec::{BigDecimal, RoundingMode};
    ///
    /// let x: BigDecimal = "2.675".parse().unwrap();
    /// assert_eq!(x.round(2, RoundingMode::HalfEven).to_string(), "2.68");
    /// assert_eq!(x.round(2, RoundingMode::Down).to_string(), "2.67");
    /// ```
    pub fn round(&self, scale: i32, mode: RoundingMode) -> BigDecimal {
        if scale >= self.scale {
            let pad = (scale as i64 - self.scale as i64) as usize;
            return BigDecimal {
                sign: self.sign,
                coefficient: self.coefficient.scale_up_by_power_of_10(pad),
                scale,
            };
        }
        let drop = (self.scale as i64 - scale as i64) as usize;
        let mut limbs = self.coefficient.limbs().to_vec();
        round::round_discard(&mut limbs, drop, mode, false);
        BigDecimal::from_parts(self.sign, BigUInt::from_limbs(limbs), scale)
    }

    /// Round or zero-pad to the scale of an exemplar value.
    pub fn quantize(&self, exemplar: &BigDecimal, mode: RoundingMode) -> BigDecimal {
        self.round(exemplar.scale, mode)
    }

    /// Round to at most `precision` significant digits.
    ///
    /// Unlike [`round`](Self::round), this fixes the number of coefficient
    /// digits rather than the scale. Fails only when the adjusted scale
    /// leaves the `i32` range.
    pub fn with_precision(&self, precision: usize, mode: RoundingMode) -> Result<BigDecimal> {
        let precision = precision.max(1);
        let digits = self.coefficient.number_of_digits();
        if self.is_zero() || digits <= precision {
            return Ok(self.clone());
        }
        let mut limbs = self.coefficient.limbs().to_vec();
        let mut drop = (digits - precision) as i64;
        round::round_discard(&mut limbs, drop as usize, mode, false);
        // A carry out of the top digit leaves precision+1 digits ending in
        // zero; shed the zero so the digit count is exact.
        if math::digit_length(&limbs) > precision {
            small::idiv_pow10(&mut limbs, 1);
            drop += 1;
        }
        let scale = i32::try_from(self.scale as i64 - drop)
            .map_err(|_| Error::new(ErrorCode::ScaleOverflow))?;
        Ok(BigDecimal::from_parts(
            self.sign,
            BigUInt::from_limbs(limbs),
            scale,
        ))
    }

    /// Division at a chosen precision and rounding mode.
    ///
    /// The dividend is scaled up until the integer quotient carries
    /// `precision` plus guard digits, the guard digits absorb the rounding
    /// bias, and the final round discards them.
    ///
    /// ```
    /// use bigdec::{BigDecimal, RoundingMode};
    ///
    /// let one: BigDecimal = "1".parse().unwrap();
    /// let seven: BigDecimal = "7".parse().unwrap();
    /// let q = one.divide(&seven, 10, RoundingMode::HalfEven).unwrap();
    /// assert_eq!(q.to_string(), "0.1428571429");
    /// ```
    pub fn divide(
        &self,
        divisor: &BigDecimal,
        precision: usize,
        mode: RoundingMode,
    ) -> Result<BigDecimal> {
        if divisor.is_zero() {
            return Err(Error::new(ErrorCode::DivisionByZero));
        }
        if self.is_zero() {
            return Ok(BigDecimal::zero());
        }
        let precision = precision.max(1);
        let na = self.coefficient.number_of_digits() as i64;
        let nb = divisor.coefficient.number_of_digits() as i64;
        let lift = (nb + (precision + DIV_GUARD_DIGITS) as i64 - na).max(0) as usize;

        let numerator = self.coefficient.scale_up_by_power_of_10(lift);
        let (quotient, remainder) = numerator.div_rem(&divisor.coefficient)?;
        let mut limbs = quotient.into_limbs();
        let digits = math::digit_length(&limbs);
        let mut drop = digits.saturating_sub(precision) as i64;
        round::round_discard(&mut limbs, drop as usize, mode, !remainder.is_zero());
        if math::digit_length(&limbs) > precision {
            small::idiv_pow10(&mut limbs, 1);
            drop += 1;
        }

        let scale = self.scale as i64 - divisor.scale as i64 + lift as i64 - drop;
        let scale = i32::try_from(scale).map_err(|_| Error::new(ErrorCode::ScaleOverflow))?;
        Ok(BigDecimal::from_parts(
            self.sign.xor(divisor.sign),
            BigUInt::from_limbs(limbs),
            scale,
        ))
    }

    /// Division at the default precision and rounding mode.
    pub fn checked_div(&self, divisor: &BigDecimal) -> Result<BigDecimal> {
        self.divide(divisor, DEFAULT_PRECISION, RoundingMode::default())
    }

    /// Multiplication, failing when the combined scale leaves `i32`.
    pub fn checked_mul(&self, rhs: &BigDecimal) -> Result<BigDecimal> {
        let scale = self.scale as i64 + rhs.scale as i64;
        let scale = i32::try_from(scale).map_err(|_| Error::new(ErrorCode::ScaleOverflow))?;
        Ok(BigDecimal::from_parts(
            self.sign.xor(rhs.sign),
            &self.coefficient * &rhs.coefficient,
            scale,
        ))
    }

    /// The remainder of truncated division, carrying the dividend's sign.
    pub fn checked_rem(&self, divisor: &BigDecimal) -> Result<BigDecimal> {
        if divisor.is_zero() {
            return Err(Error::new(ErrorCode::DivisionByZero));
        }
        if self.is_zero() {
            return Ok(BigDecimal::zero());
        }
        let (a, b, scale) = aligned(self, divisor);
        let (_, r) = a.div_rem(&b)?;
        Ok(BigDecimal::from_parts(self.sign, r, scale))
    }

    /// Raise to an integer power by repeated squaring.
    ///
    /// Non-negative exponents are exact; negative exponents take the
    /// reciprocal at the default precision.
    pub fn powi(&self, exp: i64) -> Result<BigDecimal> {
        if exp < 0 {
            if self.is_zero() {
                return Err(Error::new(ErrorCode::DivisionByZero));
            }
            let positive = self.powi_unsigned(exp.unsigned_abs())?;
            return BigDecimal::one().checked_div(&positive);
        }
        self.powi_unsigned(exp as u64)
    }

    fn powi_unsigned(&self, exp: u64) -> Result<BigDecimal> {
        if exp == 0 {
            return Ok(BigDecimal::one());
        }
        let mut base = self.clone();
        let mut acc = BigDecimal::one();
        let mut e = exp;
        while e > 1 {
            if e & 1 == 1 {
                acc = acc.checked_mul(&base)?;
            }
            base = base.checked_mul(&base)?;
            e >>= 1;
        }
        acc.checked_mul(&base)
    }

    /// Convert to `BigInt`, failing when a fractional part is present.
    pub fn to_bigint(&self) -> Result<BigInt> {
        if !self.is_integer() {
            return Err(Error::new(ErrorCode::NonIntegerConversion));
        }
        let magnitude = if self.scale >= 0 {
            self.coefficient.scale_down_by_power_of_10(self.scale as usize)
        } else {
            self.coefficient
                .scale_up_by_power_of_10(self.scale.unsigned_abs() as usize)
        };
        Ok(BigInt::new(self.sign, magnitude))
    }

    /// Convert to `i64`, failing for fractional values or on overflow.
    pub fn to_i64(&self) -> Result<i64> {
        self.to_bigint()?.to_i64()
    }

    /// Convert to `u64`, failing for fractional or negative values or on
    /// overflow.
    pub fn to_u64(&self) -> Result<u64> {
        self.to_bigint()?.to_u64()
    }

    /// The nearest `f64`, rounded half-even; values beyond the double
    /// range become infinite.
    pub fn to_f64(&self) -> f64 {
        let rendered = self.to_string_scientific();
        match rendered.parse() {
            Ok(value) => value,
            Err(_) => f64::NAN,
        }
    }

    /// Convert a finite `f64` through its shortest decimal representation.
    /// Infinite or NaN values have no decimal form.
    ///
    /// ```
    /// use bigdec::BigDecimal;
    ///
    /// assert_eq!(BigDecimal::from_f64(0.3).unwrap().to_string(), "0.3");
    /// assert!(BigDecimal::from_f64(f64::NAN).is_none());
    /// ```
    pub fn from_f64(value: f64) -> Option<BigDecimal> {
        if !value.is_finite() {
            return None;
        }
        let mut buffer = zmij::Buffer::new();
        let repr = buffer.format_finite(value);
        // The shortest round-trip representation is always a valid literal.
        Some(repr.parse().unwrap())
    }

    /// Render in scientific notation: one significant digit, an optional
    /// fraction, then `E±n`.
    pub fn to_string_scientific(&self) -> String {
        crate::fmt::format_scientific(
            &crate::fmt::coefficient_digits(self.coefficient.limbs()),
            self.is_negative(),
            self.scale,
        )
    }

    /// Decimal exponent of the leading significant digit; the value lies
    /// in `[10^e, 10^(e+1))`. Callers guarantee non-zero.
    pub(crate) fn magnitude_exponent(&self) -> i64 {
        debug_assert!(!self.is_zero());
        self.coefficient.number_of_digits() as i64 - 1 - self.scale as i64
    }

    pub(crate) fn coefficient_ref(&self) -> &BigUInt {
        &self.coefficient
    }
}

/// Scale both coefficients to the larger of the two scales.
fn aligned(a: &BigDecimal, b: &BigDecimal) -> (BigUInt, BigUInt, i32) {
    let scale = a.scale.max(b.scale);
    let ca = a
        .coefficient
        .scale_up_by_power_of_10((scale as i64 - a.scale as i64) as usize);
    let cb = b
        .coefficient
        .scale_up_by_power_of_10((scale as i64 - b.scale as i64) as usize);
    (ca, cb, scale)
}

impl Default for BigDecimal {
    #[inline]
    fn default() -> BigDecimal {
        BigDecimal::zero()
    }
}

impl FromStr for BigDecimal {
    type Err = Error;

    /// Parse a decimal literal: optional sign, digits with optional
    /// separators, optional point, optional `e`/`E` exponent.
    fn from_str(s: &str) -> Result<BigDecimal> {
        let parsed = parse_decimal(s)?;
        let sign = if parsed.negative {
            Sign::Negative
        } else {
            Sign::Positive
        };
        Ok(BigDecimal::from_parts(
            sign,
            BigUInt::from_limbs(parsed.limbs),
            parsed.scale,
        ))
    }
}

impl Display for BigDecimal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&crate::fmt::format_plain(
            &crate::fmt::coefficient_digits(self.coefficient.limbs()),
            self.is_negative(),
            self.scale,
        ))
    }
}

impl Debug for BigDecimal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "BigDecimal({})", self)
    }
}

// Equality and ordering are on the value: representations with different
// scales compare after alignment.

impl PartialEq for BigDecimal {
    fn eq(&self, other: &BigDecimal) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for BigDecimal {}

impl Ord for BigDecimal {
    fn cmp(&self, other: &BigDecimal) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::Positive, Sign::Negative) => Ordering::Greater,
            (Sign::Negative, Sign::Positive) => Ordering::Less,
            (sign, _) => {
                let (a, b, _) = aligned(self, other);
                let magnitudes = a.cmp(&b);
                match sign {
                    Sign::Positive => magnitudes,
                    Sign::Negative => magnitudes.reverse(),
                }
            }
        }
    }
}

impl PartialOrd for BigDecimal {
    #[inline]
    fn partial_cmp(&self, other: &BigDecimal) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// CONVERSIONS

impl From<BigUInt> for BigDecimal {
    fn from(coefficient: BigUInt) -> BigDecimal {
        BigDecimal {
            sign: Sign::Positive,
            coefficient,
            scale: 0,
        }
    }
}

impl From<BigInt> for BigDecimal {
    fn from(value: BigInt) -> BigDecimal {
        BigDecimal::new(value, 0)
    }
}

macro_rules! from_primitive {
    ($($ty:ty)*) => {
        $(
            impl From<$ty> for BigDecimal {
                fn from(value: $ty) -> BigDecimal {
                    BigDecimal::from(BigInt::from(value))
                }
            }
        )*
    };
}

from_primitive! { u8 u16 u32 u64 u128 usize i8 i16 i32 i64 i128 isize }

// OPERATORS

fn add_ref(lhs: &BigDecimal, rhs: &BigDecimal) -> BigDecimal {
    let (a, b, scale) = aligned(lhs, rhs);
    if lhs.sign == rhs.sign {
        return BigDecimal::from_parts(lhs.sign, &a + &b, scale);
    }
    match a.cmp(&b) {
        Ordering::Equal => BigDecimal::from_parts(Sign::Positive, BigUInt::zero(), scale),
        Ordering::Greater => BigDecimal::from_parts(lhs.sign, &a - &b, scale),
        Ordering::Less => BigDecimal::from_parts(rhs.sign, &b - &a, scale),
    }
}

fn sub_ref(lhs: &BigDecimal, rhs: &BigDecimal) -> BigDecimal {
    add_ref(
        lhs,
        &BigDecimal::from_parts(rhs.sign.flip(), rhs.coefficient.clone(), rhs.scale),
    )
}

fn mul_ref(lhs: &BigDecimal, rhs: &BigDecimal) -> BigDecimal {
    match lhs.checked_mul(rhs) {
        Ok(product) => product,
        Err(err) => panic!("{}", err),
    }
}

fn div_ref(lhs: &BigDecimal, rhs: &BigDecimal) -> BigDecimal {
    match lhs.checked_div(rhs) {
        Ok(quotient) => quotient,
        Err(err) => panic!("{}", err),
    }
}

fn rem_ref(lhs: &BigDecimal, rhs: &BigDecimal) -> BigDecimal {
    match lhs.checked_rem(rhs) {
        Ok(remainder) => remainder,
        Err(err) => panic!("{}", err),
    }
}

macro_rules! binop {
    ($($imp:ident $method:ident $func:ident)*) => {
        $(
            impl $imp<&BigDecimal> for &BigDecimal {
                type Output = BigDecimal;
                #[inline]
                fn $method(self, rhs: &BigDecimal) -> BigDecimal {
                    $func(self, rhs)
                }
            }

            impl $imp<BigDecimal> for &BigDecimal {
                type Output = BigDecimal;
                #[inline]
                fn $method(self, rhs: BigDecimal) -> BigDecimal {
                    $func(self, &rhs)
                }
            }

            impl $imp<&BigDecimal> for BigDecimal {
                type Output = BigDecimal;
                #[inline]
                fn $method(self, rhs: &BigDecimal) -> BigDecimal {
                    $func(&self, rhs)
                }
            }

            impl $imp<BigDecimal> for BigDecimal {
                type Output = BigDecimal;
                #[inline]
                fn $method(self, rhs: BigDecimal) -> BigDecimal {
                    $func(&self, &rhs)
                }
            }
        )*
    };
}

binop! {
    Add add add_ref
    Sub sub sub_ref
    Mul mul mul_ref
    Div div div_ref
    Rem rem rem_ref
}

macro_rules! assign_via_binop {
    ($($imp:ident $method:ident $op:tt)*) => {
        $(
            impl $imp<&BigDecimal> for BigDecimal {
                fn $method(&mut self, rhs: &BigDecimal) {
                    *self = &*self $op rhs;
                }
            }

            impl $imp<BigDecimal> for BigDecimal {
                fn $method(&mut self, rhs: BigDecimal) {
                    *self = &*self $op &rhs;
                }
            }
        )*
    };
}

assign_via_binop! {
    AddAssign add_assign +
    SubAssign sub_assign -
    MulAssign mul_assign *
    DivAssign div_assign /
    RemAssign rem_assign %
}

impl Neg for BigDecimal {
    type Output = BigDecimal;

    fn neg(self) -> BigDecimal {
        BigDecimal::from_parts(self.sign.flip(), self.coefficient, self.scale)
    }
}

impl Neg for &BigDecimal {
    type Output = BigDecimal;

    fn neg(self) -> BigDecimal {
        BigDecimal::from_parts(self.sign.flip(), self.coefficient.clone(), self.scale)
    }
}

macro_rules! binop_primitive {
    ($($ty:ty)*) => {
        $(
            impl Add<$ty> for &BigDecimal {
                type Output = BigDecimal;
                fn add(self, rhs: $ty) -> BigDecimal {
                    self + BigDecimal::from(rhs)
                }
            }

            impl Sub<$ty> for &BigDecimal {
                type Output = BigDecimal;
                fn sub(self, rhs: $ty) -> BigDecimal {
                    self - BigDecimal::from(rhs)
                }
            }

            impl Mul<$ty> for &BigDecimal {
                type Output = BigDecimal;
                fn mul(self, rhs: $ty) -> BigDecimal {
                    self * BigDecimal::from(rhs)
                }
            }

            impl Div<$ty> for &BigDecimal {
                type Output = BigDecimal;
                fn div(self, rhs: $ty) -> BigDecimal {
                    self / BigDecimal::from(rhs)
                }
            }

            impl Add<$ty> for BigDecimal {
                type Output = BigDecimal;
                fn add(self, rhs: $ty) -> BigDecimal {
                    self + BigDecimal::from(rhs)
                }
            }

            impl Sub<$ty> for BigDecimal {
                type Output = BigDecimal;
                fn sub(self, rhs: $ty) -> BigDecimal {
                    self - BigDecimal::from(rhs)
                }
            }

            impl Mul<$ty> for BigDecimal {
                type Output = BigDecimal;
                fn mul(self, rhs: $ty) -> BigDecimal {
                    self * BigDecimal::from(rhs)
                }
            }

            impl Div<$ty> for BigDecimal {
                type Output = BigDecimal;
                fn div(self, rhs: $ty) -> BigDecimal {
                    self / BigDecimal::from(rhs)
                }
            }
        )*
    };
}

binop_primitive! { u8 u16 u32 u64 u128 usize i8 i16 i32 i64 i128 isize }

macro_rules! partialeq_primitive {
    ($($ty:ty)*) => {
        $(
            impl PartialEq<$ty> for BigDecimal {
                fn eq(&self, other: &$ty) -> bool {
                    *self == BigDecimal::from(*other)
                }
            }

            impl PartialEq<BigDecimal> for $ty {
                fn eq(&self, other: &BigDecimal) -> bool {
                    BigDecimal::from(*self) == *other
                }
            }
        )*
    };
}

partialeq_primitive! { u8 u16 u32 u64 u128 usize i8 i16 i32 i64 i128 isize }

// SERDE

#[cfg(feature = "serde")]
impl serde::Serialize for BigDecimal {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for BigDecimal {
    fn deserialize<D>(deserializer: D) -> core::result::Result<BigDecimal, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct BigDecimalVisitor;

        impl serde::de::Visitor<'_> for BigDecimalVisitor {
            type Value = BigDecimal;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a decimal string")
            }

            fn visit_str<E>(self, value: &str) -> core::result::Result<BigDecimal, E>
            where
                E: serde::de::Error,
            {
                value.parse().map_err(serde::de::Error::custom)
            }

            fn visit_i64<E>(self, value: i64) -> core::result::Result<BigDecimal, E>
            where
                E: serde::de::Error,
            {
                Ok(BigDecimal::from(value))
            }

            fn visit_u64<E>(self, value: u64) -> core::result::Result<BigDecimal, E>
            where
                E: serde::de::Error,
            {
                Ok(BigDecimal::from(value))
            }

            fn visit_f64<E>(self, value: f64) -> core::result::Result<BigDecimal, E>
            where
                E: serde::de::Error,
            {
                BigDecimal::from_f64(value).ok_or_else(|| {
                    serde::de::Error::custom("no decimal form for a non-finite float")
                })
            }
        }

        deserializer.deserialize_any(BigDecimalVisitor)
    }
}
