//! An arbitrary-precision unsigned integer over base-10⁹ limbs.

use core::cmp::Ordering;
use core::fmt::{self, Debug, Display};
use core::iter::{Product, Sum};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Rem, RemAssign, Sub, SubAssign};
use core::str::FromStr;

use crate::arith::math::{self, large, small, LimbVec};
use crate::arith::{div, mul, sqrt};
use crate::error::{Error, ErrorCode, Result};
use crate::parse::{parse_decimal, ParsedDecimal};

/// An arbitrary-precision unsigned integer.
///
/// The value is a little-endian vector of base-10⁹ limbs: index 0 is the
/// least significant. The buffer is never empty, every limb is below 10⁹,
/// and the most significant limb is non-zero unless the value is zero,
/// whose canonical form is a single zero limb.
///
/// ```
/// use bigdec::BigUInt;
///
/// let n: BigUInt = "340282366920938463463374607431768211456".parse().unwrap();
/// let doubled = &n * &BigUInt::from(2u32);
/// assert_eq!(doubled.to_string(), "680564733841876926926749214863536422912");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigUInt {
    limbs: LimbVec,
}

impl BigUInt {
    /// The value 0.
    #[inline]
    pub fn zero() -> BigUInt {
        BigUInt { limbs: vec![0] }
    }

    /// The value 1.
    #[inline]
    pub fn one() -> BigUInt {
        BigUInt { limbs: vec![1] }
    }

    /// Returns true if the value is 0.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.limbs == [0]
    }

    /// Returns true if the value is 1.
    #[inline]
    pub fn is_one(&self) -> bool {
        self.limbs == [1]
    }

    /// Number of decimal digits, at least 1.
    pub fn number_of_digits(&self) -> usize {
        math::digit_length(&self.limbs)
    }

    /// Wrap a raw limb buffer, restoring canonical form.
    pub(crate) fn from_limbs(mut limbs: LimbVec) -> BigUInt {
        small::normalize(&mut limbs);
        if limbs.is_empty() {
            limbs.push(0);
        }
        BigUInt { limbs }
    }

    #[inline]
    pub(crate) fn limbs(&self) -> &[math::Limb] {
        &self.limbs
    }

    pub(crate) fn into_limbs(self) -> LimbVec {
        self.limbs
    }

    /// Subtraction, failing when the subtrahend is larger; `BigUInt` has no
    /// negative representation.
    pub fn try_sub(&self, rhs: &BigUInt) -> Result<BigUInt> {
        if large::less(&self.limbs, &rhs.limbs) {
            return Err(Error::new(ErrorCode::SubtractionUnderflow));
        }
        Ok(BigUInt::from_limbs(large::sub(&self.limbs, &rhs.limbs)))
    }

    /// Truncated division with remainder.
    ///
    /// ```
    /// use bigdec::BigUInt;
    ///
    /// let (q, r) = BigUInt::from(23u32).div_rem(&BigUInt::from(5u32)).unwrap();
    /// assert_eq!((q, r), (BigUInt::from(4u32), BigUInt::from(3u32)));
    /// assert!(BigUInt::one().div_rem(&BigUInt::zero()).is_err());
    /// ```
    pub fn div_rem(&self, divisor: &BigUInt) -> Result<(BigUInt, BigUInt)> {
        if divisor.is_zero() {
            return Err(Error::new(ErrorCode::DivisionByZero));
        }
        let (q, r) = div::div_rem(&self.limbs, &divisor.limbs);
        Ok((BigUInt::from_limbs(q), BigUInt::from_limbs(r)))
    }

    /// Raise to an integer power by repeated squaring.
    pub fn pow(&self, exp: u64) -> BigUInt {
        if exp == 0 {
            return BigUInt::one();
        }
        let mut base = self.clone();
        let mut acc = BigUInt::one();
        let mut e = exp;
        while e > 1 {
            if e & 1 == 1 {
                acc = &acc * &base;
            }
            base = &base * &base;
            e >>= 1;
        }
        &acc * &base
    }

    /// The integer square root `⌊√n⌋`, by Newton iteration.
    ///
    /// ```
    /// use bigdec::BigUInt;
    ///
    /// let n = BigUInt::from(99u32);
    /// assert_eq!(n.sqrt(), BigUInt::from(9u32));
    /// ```
    pub fn sqrt(&self) -> BigUInt {
        BigUInt::from_limbs(sqrt::isqrt(&self.limbs))
    }

    /// Multiply by `10^k`. The multiple-of-nine part of the shift is a limb
    /// prepend; the rest is one scalar multiply.
    pub fn scale_up_by_power_of_10(&self, k: usize) -> BigUInt {
        let mut limbs = self.limbs.clone();
        small::imul_pow10(&mut limbs, k);
        BigUInt { limbs }
    }

    /// Divide by `10^k`, truncating toward zero.
    pub fn scale_down_by_power_of_10(&self, k: usize) -> BigUInt {
        let mut limbs = self.limbs.clone();
        small::idiv_pow10(&mut limbs, k);
        BigUInt::from_limbs(limbs)
    }

    /// Convert to `u64`, failing when the value does not fit.
    pub fn to_u64(&self) -> Result<u64> {
        let mut value: u64 = 0;
        for &limb in self.limbs.iter().rev() {
            value = value
                .checked_mul(math::RADIX as u64)
                .and_then(|v| v.checked_add(limb as u64))
                .ok_or_else(|| Error::new(ErrorCode::NumberOutOfRange("u64")))?;
        }
        Ok(value)
    }

    /// Convert to `u128`, failing when the value does not fit.
    pub fn to_u128(&self) -> Result<u128> {
        let mut value: u128 = 0;
        for &limb in self.limbs.iter().rev() {
            value = value
                .checked_mul(math::RADIX as u128)
                .and_then(|v| v.checked_add(limb as u128))
                .ok_or_else(|| Error::new(ErrorCode::NumberOutOfRange("u128")))?;
        }
        Ok(value)
    }

    /// The nearest `f64`, rounded half-even; values beyond the double range
    /// become infinite.
    pub fn to_f64(&self) -> f64 {
        let digits = crate::fmt::coefficient_digits(&self.limbs);
        digits.parse().unwrap_or(f64::INFINITY)
    }

    pub(crate) fn from_parsed(parsed: ParsedDecimal) -> Result<BigUInt> {
        let ParsedDecimal {
            negative,
            mut limbs,
            scale,
        } = parsed;
        if negative && !math::is_zero(&limbs) {
            return Err(Error::new(ErrorCode::NegativeConversion));
        }
        if scale < 0 {
            small::imul_pow10(&mut limbs, scale.unsigned_abs() as usize);
        } else if scale > 0 {
            let (first, sticky) = small::div_pow10_inspect(&limbs, scale as usize);
            if first != 0 || sticky {
                return Err(Error::new(ErrorCode::NonIntegerConversion));
            }
            small::idiv_pow10(&mut limbs, scale as usize);
        }
        Ok(BigUInt::from_limbs(limbs))
    }
}

impl Default for BigUInt {
    #[inline]
    fn default() -> BigUInt {
        BigUInt::zero()
    }
}

impl FromStr for BigUInt {
    type Err = Error;

    /// Parse a decimal literal denoting a non-negative integer.
    ///
    /// Exponents and a decimal point are accepted as long as the value is a
    /// whole number, so `"1.5e3"` parses to 1500 while `"1.5"` is rejected.
    fn from_str(s: &str) -> Result<BigUInt> {
        BigUInt::from_parsed(parse_decimal(s)?)
    }
}

impl Display for BigUInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&crate::fmt::coefficient_digits(&self.limbs))
    }
}

impl Debug for BigUInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "BigUInt({})", self)
    }
}

impl Ord for BigUInt {
    #[inline]
    fn cmp(&self, other: &BigUInt) -> Ordering {
        large::compare(&self.limbs, &other.limbs)
    }
}

impl PartialOrd for BigUInt {
    #[inline]
    fn partial_cmp(&self, other: &BigUInt) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// CONVERSIONS

macro_rules! from_unsigned {
    ($($ty:ty)*) => {
        $(
            impl From<$ty> for BigUInt {
                fn from(value: $ty) -> BigUInt {
                    let mut value = value as u128;
                    let mut limbs = Vec::with_capacity(5);
                    loop {
                        limbs.push((value % math::RADIX as u128) as math::Limb);
                        value /= math::RADIX as u128;
                        if value == 0 {
                            break;
                        }
                    }
                    BigUInt { limbs }
                }
            }
        )*
    };
}

from_unsigned! { u8 u16 u32 u64 u128 usize }

macro_rules! try_from_signed {
    ($($ty:ty)*) => {
        $(
            impl TryFrom<$ty> for BigUInt {
                type Error = Error;

                fn try_from(value: $ty) -> Result<BigUInt> {
                    if value < 0 {
                        return Err(Error::new(ErrorCode::NegativeConversion));
                    }
                    Ok(BigUInt::from(value as u128))
                }
            }
        )*
    };
}

try_from_signed! { i8 i16 i32 i64 i128 isize }

// OPERATORS

fn add_ref(lhs: &BigUInt, rhs: &BigUInt) -> BigUInt {
    BigUInt::from_limbs(large::add(lhs.limbs(), rhs.limbs()))
}

fn sub_ref(lhs: &BigUInt, rhs: &BigUInt) -> BigUInt {
    match lhs.try_sub(rhs) {
        Ok(diff) => diff,
        Err(err) => panic!("{}", err),
    }
}

fn mul_ref(lhs: &BigUInt, rhs: &BigUInt) -> BigUInt {
    BigUInt::from_limbs(mul::mul(lhs.limbs(), rhs.limbs()))
}

fn div_ref(lhs: &BigUInt, rhs: &BigUInt) -> BigUInt {
    match lhs.div_rem(rhs) {
        Ok((quotient, _)) => quotient,
        Err(err) => panic!("{}", err),
    }
}

fn rem_ref(lhs: &BigUInt, rhs: &BigUInt) -> BigUInt {
    match lhs.div_rem(rhs) {
        Ok((_, remainder)) => remainder,
        Err(err) => panic!("{}", err),
    }
}

macro_rules! binop {
    ($($imp:ident $method:ident $func:ident)*) => {
        $(
            impl $imp<&BigUInt> for &BigUInt {
                type Output = BigUInt;
                #[inline]
                fn $method(self, rhs: &BigUInt) -> BigUInt {
                    $func(self, rhs)
                }
            }

            impl $imp<BigUInt> for &BigUInt {
                type Output = BigUInt;
                #[inline]
                fn $method(self, rhs: BigUInt) -> BigUInt {
                    $func(self, &rhs)
                }
            }

            impl $imp<&BigUInt> for BigUInt {
                type Output = BigUInt;
                #[inline]
                fn $method(self, rhs: &BigUInt) -> BigUInt {
                    $func(&self, rhs)
                }
            }

            impl $imp<BigUInt> for BigUInt {
                type Output = BigUInt;
                #[inline]
                fn $method(self, rhs: BigUInt) -> BigUInt {
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

impl AddAssign<&BigUInt> for BigUInt {
    fn add_assign(&mut self, rhs: &BigUInt) {
        large::iadd(&mut self.limbs, rhs.limbs());
    }
}

impl SubAssign<&BigUInt> for BigUInt {
    /// In-place subtraction; panics when the subtrahend is larger.
    fn sub_assign(&mut self, rhs: &BigUInt) {
        if large::less(&self.limbs, &rhs.limbs) {
            panic!("{}", Error::new(ErrorCode::SubtractionUnderflow));
        }
        large::isub(&mut self.limbs, rhs.limbs());
        if self.limbs.is_empty() {
            self.limbs.push(0);
        }
    }
}

macro_rules! assign_via_binop {
    ($($imp:ident $method:ident $op:tt)*) => {
        $(
            impl $imp<&BigUInt> for BigUInt {
                fn $method(&mut self, rhs: &BigUInt) {
                    *self = &*self $op rhs;
                }
            }
        )*
    };
}

assign_via_binop! {
    MulAssign mul_assign *
    DivAssign div_assign /
    RemAssign rem_assign %
}

macro_rules! assign_forward_val {
    ($($imp:ident $method:ident)*) => {
        $(
            impl $imp<BigUInt> for BigUInt {
                #[inline]
                fn $method(&mut self, rhs: BigUInt) {
                    $imp::$method(self, &rhs);
                }
            }
        )*
    };
}

assign_forward_val! {
    AddAssign add_assign
    SubAssign sub_assign
    MulAssign mul_assign
    DivAssign div_assign
    RemAssign rem_assign
}

macro_rules! binop_unsigned {
    ($($ty:ty)*) => {
        $(
            impl Add<$ty> for &BigUInt {
                type Output = BigUInt;
                fn add(self, rhs: $ty) -> BigUInt {
                    self + BigUInt::from(rhs)
                }
            }

            impl Sub<$ty> for &BigUInt {
                type Output = BigUInt;
                fn sub(self, rhs: $ty) -> BigUInt {
                    self - BigUInt::from(rhs)
                }
            }

            impl Mul<$ty> for &BigUInt {
                type Output = BigUInt;
                fn mul(self, rhs: $ty) -> BigUInt {
                    self * BigUInt::from(rhs)
                }
            }

            impl Div<$ty> for &BigUInt {
                type Output = BigUInt;
                fn div(self, rhs: $ty) -> BigUInt {
                    self / BigUInt::from(rhs)
                }
            }

            impl Rem<$ty> for &BigUInt {
                type Output = BigUInt;
                fn rem(self, rhs: $ty) -> BigUInt {
                    self % BigUInt::from(rhs)
                }
            }

            impl Add<$ty> for BigUInt {
                type Output = BigUInt;
                fn add(self, rhs: $ty) -> BigUInt {
                    self + BigUInt::from(rhs)
                }
            }

            impl Sub<$ty> for BigUInt {
                type Output = BigUInt;
                fn sub(self, rhs: $ty) -> BigUInt {
                    self - BigUInt::from(rhs)
                }
            }

            impl Mul<$ty> for BigUInt {
                type Output = BigUInt;
                fn mul(self, rhs: $ty) -> BigUInt {
                    self * BigUInt::from(rhs)
                }
            }

            impl Div<$ty> for BigUInt {
                type Output = BigUInt;
                fn div(self, rhs: $ty) -> BigUInt {
                    self / BigUInt::from(rhs)
                }
            }

            impl Rem<$ty> for BigUInt {
                type Output = BigUInt;
                fn rem(self, rhs: $ty) -> BigUInt {
                    self % BigUInt::from(rhs)
                }
            }
        )*
    };
}

binop_unsigned! { u8 u16 u32 u64 u128 usize }

macro_rules! partialeq_unsigned {
    ($($ty:ty)*) => {
        $(
            impl PartialEq<$ty> for BigUInt {
                fn eq(&self, other: &$ty) -> bool {
                    *self == BigUInt::from(*other)
                }
            }

            impl PartialEq<BigUInt> for $ty {
                fn eq(&self, other: &BigUInt) -> bool {
                    BigUInt::from(*self) == *other
                }
            }
        )*
    };
}

partialeq_unsigned! { u8 u16 u32 u64 u128 usize }

impl Sum for BigUInt {
    fn sum<I: Iterator<Item = BigUInt>>(iter: I) -> BigUInt {
        iter.fold(BigUInt::zero(), |mut acc, x| {
            acc += x;
            acc
        })
    }
}

impl Product for BigUInt {
    fn product<I: Iterator<Item = BigUInt>>(iter: I) -> BigUInt {
        iter.fold(BigUInt::one(), |acc, x| acc * x)
    }
}

// SERDE

#[cfg(feature = "serde")]
impl serde::Serialize for BigUInt {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for BigUInt {
    fn deserialize<D>(deserializer: D) -> core::result::Result<BigUInt, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct BigUIntVisitor;

        impl serde::de::Visitor<'_> for BigUIntVisitor {
            type Value = BigUInt;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a decimal string denoting an unsigned integer")
            }

            fn visit_str<E>(self, value: &str) -> core::result::Result<BigUInt, E>
            where
                E: serde::de::Error,
            {
                value.parse().map_err(serde::de::Error::custom)
            }

            fn visit_u64<E>(self, value: u64) -> core::result::Result<BigUInt, E>
            where
                E: serde::de::Error,
            {
                Ok(BigUInt::from(value))
            }
        }

        deserializer.deserialize_any(BigUIntVisitor)
    }
}
