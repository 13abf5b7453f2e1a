//! An arbitrary-precision signed integer: a sign and a `BigUInt` magnitude.

use core::cmp::Ordering;
use core::fmt::{self, Debug, Display};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub,
                SubAssign};
use core::str::FromStr;

use crate::biguint::BigUInt;
use crate::error::{Error, ErrorCode, Result};
use crate::parse::parse_decimal;

/// The sign of a `BigInt` or `BigDecimal`.
///
/// Zero always carries `Positive`; there is no negative zero.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum Sign {
    /// Less than zero.
    Negative,
    /// Zero or greater.
    Positive,
}

impl Sign {
    /// The opposite sign.
    #[inline]
    pub fn flip(self) -> Sign {
        match self {
            Sign::Negative => Sign::Positive,
            Sign::Positive => Sign::Negative,
        }
    }

    /// `Positive` when both signs agree, `Negative` otherwise; the sign of
    /// a product or quotient.
    #[inline]
    pub fn xor(self, other: Sign) -> Sign {
        if self == other {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
}

/// An arbitrary-precision signed integer.
///
/// ```
/// use bigdec::BigInt;
///
/// let a: BigInt = "-42".parse().unwrap();
/// let b = BigInt::from(40);
/// assert_eq!((&a + &b).to_string(), "-2");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    sign: Sign,
    magnitude: BigUInt,
}

impl BigInt {
    /// The value 0.
    #[inline]
    pub fn zero() -> BigInt {
        BigInt {
            sign: Sign::Positive,
            magnitude: BigUInt::zero(),
        }
    }

    /// The value 1.
    #[inline]
    pub fn one() -> BigInt {
        BigInt {
            sign: Sign::Positive,
            magnitude: BigUInt::one(),
        }
    }

    /// Assemble from a sign and magnitude, canonicalizing the sign of zero.
    pub fn new(sign: Sign, magnitude: BigUInt) -> BigInt {
        if magnitude.is_zero() {
            return BigInt::zero();
        }
        BigInt { sign, magnitude }
    }

    /// Returns true if the value is 0.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
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

    /// The magnitude `|self|` as a `BigUInt`.
    #[inline]
    pub fn magnitude(&self) -> &BigUInt {
        &self.magnitude
    }

    /// The absolute value.
    pub fn abs(&self) -> BigInt {
        BigInt {
            sign: Sign::Positive,
            magnitude: self.magnitude.clone(),
        }
    }

    /// -1, 0, or 1 as the value is negative, zero, or positive.
    pub fn signum(&self) -> i32 {
        if self.is_zero() {
            0
        } else if self.is_negative() {
            -1
        } else {
            1
        }
    }

    /// Number of decimal digits of the magnitude, at least 1.
    pub fn number_of_digits(&self) -> usize {
        self.magnitude.number_of_digits()
    }

    /// Raise to an integer power.
    pub fn pow(&self, exp: u64) -> BigInt {
        let sign = if self.sign == Sign::Negative && exp % 2 == 1 {
            Sign::Negative
        } else {
            Sign::Positive
        };
        BigInt::new(sign, self.magnitude.pow(exp))
    }

    /// Truncated division with remainder, rounding the quotient toward
    /// zero. The remainder takes the sign of the dividend.
    ///
    /// ```
    /// use bigdec::BigInt;
    ///
    /// let (q, r) = BigInt::from(-7).div_rem(&BigInt::from(2)).unwrap();
    /// assert_eq!((q, r), (BigInt::from(-3), BigInt::from(-1)));
    /// ```
    pub fn div_rem(&self, divisor: &BigInt) -> Result<(BigInt, BigInt)> {
        let (q, r) = self.magnitude.div_rem(&divisor.magnitude)?;
        Ok((
            BigInt::new(self.sign.xor(divisor.sign), q),
            BigInt::new(self.sign, r),
        ))
    }

    /// Floored division with remainder, rounding the quotient toward
    /// negative infinity. The remainder takes the sign of the divisor.
    ///
    /// When the operand signs differ and the truncated remainder is
    /// non-zero, the quotient steps down one and the remainder up by
    /// `|divisor|`.
    pub fn div_rem_floor(&self, divisor: &BigInt) -> Result<(BigInt, BigInt)> {
        let (q, r) = self.div_rem(divisor)?;
        if self.sign != divisor.sign && !r.is_zero() {
            let q = &q - BigInt::one();
            let r = &r + divisor;
            Ok((q, r))
        } else {
            Ok((q, r))
        }
    }

    /// Euclidean division with remainder; the remainder is always in
    /// `[0, |divisor|)`.
    pub fn div_rem_euclid(&self, divisor: &BigInt) -> Result<(BigInt, BigInt)> {
        let (q, r) = self.div_rem(divisor)?;
        if r.is_negative() {
            if divisor.is_negative() {
                Ok((&q + BigInt::one(), &r - divisor))
            } else {
                Ok((&q - BigInt::one(), &r + divisor))
            }
        } else {
            Ok((q, r))
        }
    }

    /// Convert to `i64`, failing when the value does not fit.
    pub fn to_i64(&self) -> Result<i64> {
        let magnitude = self.magnitude.to_u64().map_err(remap_range("i64"))?;
        match self.sign {
            Sign::Positive if magnitude <= i64::MAX as u64 => Ok(magnitude as i64),
            Sign::Negative if magnitude <= i64::MAX as u64 + 1 => Ok((magnitude as i64).wrapping_neg()),
            _ => Err(Error::new(ErrorCode::NumberOutOfRange("i64"))),
        }
    }

    /// Convert to `i128`, failing when the value does not fit.
    pub fn to_i128(&self) -> Result<i128> {
        let magnitude = self.magnitude.to_u128().map_err(remap_range("i128"))?;
        match self.sign {
            Sign::Positive if magnitude <= i128::MAX as u128 => Ok(magnitude as i128),
            Sign::Negative if magnitude <= i128::MAX as u128 + 1 => {
                Ok((magnitude as i128).wrapping_neg())
            }
            _ => Err(Error::new(ErrorCode::NumberOutOfRange("i128"))),
        }
    }

    /// Convert to `u64`, failing for negative values or on overflow.
    pub fn to_u64(&self) -> Result<u64> {
        if self.is_negative() {
            return Err(Error::new(ErrorCode::NegativeConversion));
        }
        self.magnitude.to_u64()
    }

    /// Convert to `u128`, failing for negative values or on overflow.
    pub fn to_u128(&self) -> Result<u128> {
        if self.is_negative() {
            return Err(Error::new(ErrorCode::NegativeConversion));
        }
        self.magnitude.to_u128()
    }

    /// The nearest `f64`, rounded half-even.
    pub fn to_f64(&self) -> f64 {
        let value = self.magnitude.to_f64();
        match self.sign {
            Sign::Positive => value,
            Sign::Negative => -value,
        }
    }
}

fn remap_range(target: &'static str) -> impl Fn(Error) -> Error {
    move |_| Error::new(ErrorCode::NumberOutOfRange(target))
}

impl Default for BigInt {
    #[inline]
    fn default() -> BigInt {
        BigInt::zero()
    }
}

impl From<BigUInt> for BigInt {
    fn from(magnitude: BigUInt) -> BigInt {
        BigInt {
            sign: Sign::Positive,
            magnitude,
        }
    }
}

impl TryFrom<BigInt> for BigUInt {
    type Error = Error;

    fn try_from(value: BigInt) -> Result<BigUInt> {
        if value.is_negative() {
            return Err(Error::new(ErrorCode::NegativeConversion));
        }
        Ok(value.magnitude)
    }
}

impl FromStr for BigInt {
    type Err = Error;

    /// Parse a decimal literal denoting an integer, with an optional sign.
    fn from_str(s: &str) -> Result<BigInt> {
        let parsed = parse_decimal(s)?;
        let negative = parsed.negative;
        let magnitude = BigUInt::from_parsed(crate::parse::ParsedDecimal {
            negative: false,
            ..parsed
        })?;
        let sign = if negative { Sign::Negative } else { Sign::Positive };
        Ok(BigInt::new(sign, magnitude))
    }
}

impl Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_negative() {
            f.write_str("-")?;
        }
        Display::fmt(&self.magnitude, f)
    }
}

impl Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "BigInt({})", self)
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &BigInt) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::Positive, Sign::Negative) => Ordering::Greater,
            (Sign::Negative, Sign::Positive) => Ordering::Less,
            (Sign::Positive, Sign::Positive) => self.magnitude.cmp(&other.magnitude),
            (Sign::Negative, Sign::Negative) => other.magnitude.cmp(&self.magnitude),
        }
    }
}

impl PartialOrd for BigInt {
    #[inline]
    fn partial_cmp(&self, other: &BigInt) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// CONVERSIONS

macro_rules! from_primitive {
    ($($ty:ty)*) => {
        $(
            impl From<$ty> for BigInt {
                fn from(value: $ty) -> BigInt {
                    let negative = value < 0;
                    let magnitude = BigUInt::from(value.unsigned_abs() as u128);
                    let sign = if negative { Sign::Negative } else { Sign::Positive };
                    BigInt::new(sign, magnitude)
                }
            }
        )*
    };
}

from_primitive! { i8 i16 i32 i64 i128 isize }

macro_rules! from_unsigned_primitive {
    ($($ty:ty)*) => {
        $(
            impl From<$ty> for BigInt {
                fn from(value: $ty) -> BigInt {
                    BigInt::from(BigUInt::from(value))
                }
            }
        )*
    };
}

from_unsigned_primitive! { u8 u16 u32 u64 u128 usize }

// OPERATORS

fn add_ref(lhs: &BigInt, rhs: &BigInt) -> BigInt {
    if lhs.sign == rhs.sign {
        return BigInt::new(lhs.sign, &lhs.magnitude + &rhs.magnitude);
    }
    // Differing signs reduce to a magnitude comparison and a subtraction
    // of the smaller from the larger.
    match lhs.magnitude.cmp(&rhs.magnitude) {
        Ordering::Equal => BigInt::zero(),
        Ordering::Greater => BigInt::new(lhs.sign, &lhs.magnitude - &rhs.magnitude),
        Ordering::Less => BigInt::new(rhs.sign, &rhs.magnitude - &lhs.magnitude),
    }
}

fn sub_ref(lhs: &BigInt, rhs: &BigInt) -> BigInt {
    add_ref(
        lhs,
        &BigInt {
            sign: if rhs.is_zero() { Sign::Positive } else { rhs.sign.flip() },
            magnitude: rhs.magnitude.clone(),
        },
    )
}

fn mul_ref(lhs: &BigInt, rhs: &BigInt) -> BigInt {
    BigInt::new(lhs.sign.xor(rhs.sign), &lhs.magnitude * &rhs.magnitude)
}

fn div_ref(lhs: &BigInt, rhs: &BigInt) -> BigInt {
    match lhs.div_rem(rhs) {
        Ok((quotient, _)) => quotient,
        Err(err) => panic!("{}", err),
    }
}

fn rem_ref(lhs: &BigInt, rhs: &BigInt) -> BigInt {
    match lhs.div_rem(rhs) {
        Ok((_, remainder)) => remainder,
        Err(err) => panic!("{}", err),
    }
}

macro_rules! binop {
    ($($imp:ident $method:ident $func:ident)*) => {
        $(
            impl $imp<&BigInt> for &BigInt {
                type Output = BigInt;
                #[inline]
                fn $method(self, rhs: &BigInt) -> BigInt {
                    $func(self, rhs)
                }
            }

            impl $imp<BigInt> for &BigInt {
                type Output = BigInt;
                #[inline]
                fn $method(self, rhs: BigInt) -> BigInt {
                    $func(self, &rhs)
                }
            }

            impl $imp<&BigInt> for BigInt {
                type Output = BigInt;
                #[inline]
                fn $method(self, rhs: &BigInt) -> BigInt {
                    $func(&self, rhs)
                }
            }

            impl $imp<BigInt> for BigInt {
                type Output = BigInt;
                #[inline]
                fn $method(self, rhs: BigInt) -> BigInt {
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
            impl $imp<&BigInt> for BigInt {
                fn $method(&mut self, rhs: &BigInt) {
                    *self = &*self $op rhs;
                }
            }

            impl $imp<BigInt> for BigInt {
                fn $method(&mut self, rhs: BigInt) {
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

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        BigInt::new(self.sign.flip(), self.magnitude)
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        BigInt::new(self.sign.flip(), self.magnitude.clone())
    }
}

macro_rules! binop_primitive {
    ($($ty:ty)*) => {
        $(
            impl Add<$ty> for &BigInt {
                type Output = BigInt;
                fn add(self, rhs: $ty) -> BigInt {
                    self + BigInt::from(rhs)
                }
            }

            impl Sub<$ty> for &BigInt {
                type Output = BigInt;
                fn sub(self, rhs: $ty) -> BigInt {
                    self - BigInt::from(rhs)
                }
            }

            impl Mul<$ty> for &BigInt {
                type Output = BigInt;
                fn mul(self, rhs: $ty) -> BigInt {
                    self * BigInt::from(rhs)
                }
            }

            impl Div<$ty> for &BigInt {
                type Output = BigInt;
                fn div(self, rhs: $ty) -> BigInt {
                    self / BigInt::from(rhs)
                }
            }

            impl Rem<$ty> for &BigInt {
                type Output = BigInt;
                fn rem(self, rhs: $ty) -> BigInt {
                    self % BigInt::from(rhs)
                }
            }

            impl Add<$ty> for BigInt {
                type Output = BigInt;
                fn add(self, rhs: $ty) -> BigInt {
                    self + BigInt::from(rhs)
                }
            }

            impl Sub<$ty> for BigInt {
                type Output = BigInt;
                fn sub(self, rhs: $ty) -> BigInt {
                    self - BigInt::from(rhs)
                }
            }

            impl Mul<$ty> for BigInt {
                type Output = BigInt;
                fn mul(self, rhs: $ty) -> BigInt {
                    self * BigInt::from(rhs)
                }
            }

            impl Div<$ty> for BigInt {
                type Output = BigInt;
                fn div(self, rhs: $ty) -> BigInt {
                    self / BigInt::from(rhs)
                }
            }

            impl Rem<$ty> for BigInt {
                type Output = BigInt;
                fn rem(self, rhs: $ty) -> BigInt {
                    self % BigInt::from(rhs)
                }
            }
        )*
    };
}

binop_primitive! { u8 u16 u32 u64 u128 usize i8 i16 i32 i64 i128 isize }

macro_rules! partialeq_primitive {
    ($($ty:ty)*) => {
        $(
            impl PartialEq<$ty> for BigInt {
                fn eq(&self, other: &$ty) -> bool {
                    *self == BigInt::from(*other)
                }
            }

            impl PartialEq<BigInt> for $ty {
                fn eq(&self, other: &BigInt) -> bool {
                    BigInt::from(*self) == *other
                }
            }
        )*
    };
}

partialeq_primitive! { u8 u16 u32 u64 u128 usize i8 i16 i32 i64 i128 isize }

// SERDE

#[cfg(feature = "serde")]
impl serde::Serialize for BigInt {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for BigInt {
    fn deserialize<D>(deserializer: D) -> core::result::Result<BigInt, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct BigIntVisitor;

        impl serde::de::Visitor<'_> for BigIntVisitor {
            type Value = BigInt;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a decimal string denoting an integer")
            }

            fn visit_str<E>(self, value: &str) -> core::result::Result<BigInt, E>
            where
                E: serde::de::Error,
            {
                value.parse().map_err(serde::de::Error::custom)
            }

            fn visit_i64<E>(self, value: i64) -> core::result::Result<BigInt, E>
            where
                E: serde::de::Error,
            {
                Ok(BigInt::from(value))
            }

            fn visit_u64<E>(self, value: u64) -> core::result::Result<BigInt, E>
            where
                E: serde::de::Error,
            {
                Ok(BigInt::from(value))
            }
        }

        deserializer.deserialize_any(BigIntVisitor)
    }
}
