//! # bigdec
//!
//! Arbitrary-precision decimal arithmetic: an unsigned big integer engine
//! over base-10⁹ limbs, a signed big integer, and a floating decimal built
//! from a coefficient and a scale.
//!
//! There are three numeric types, forming a widening chain.
//!
//!  - **[`BigUInt`]** is the engine. A value is a little-endian vector of
//!    32-bit limbs, each holding nine decimal digits, which makes decimal
//!    string I/O a straight split at 9-digit boundaries and leaves room in
//!    a 64-bit accumulator for schoolbook inner loops. Multiplication
//!    dispatches to Karatsuba above a measured cutoff, division to
//!    Burnikel-Ziegler recursive division with a Knuth Algorithm D base
//!    case, and square root to Newton iteration.
//!  - **[`BigInt`]** is a sign plus a `BigUInt` magnitude, with truncated,
//!    floored, and Euclidean division semantics.
//!  - **[`BigDecimal`]** is a sign, a `BigUInt` coefficient, and a decimal
//!    scale: the value `coefficient · 10^(-scale)`. Division and the
//!    transcendental functions (`exp`, `ln`, `power`, `sqrt`, the
//!    trigonometric family, and `π` via Chudnovsky binary splitting) take
//!    an explicit precision and rounding mode; there is no ambient decimal
//!    context.
//!
//! # Parsing and formatting
//!
//! All three types parse with [`str::parse`] from decimal literals with an
//! optional sign, optional decimal point, optional `e`/`E` exponent, and
//! digit-group separators (space, comma, underscore) between digits:
//!
//! ```
//! use bigdec::{BigDecimal, BigUInt};
//!
//! let n: BigUInt = "123_456_789".parse().unwrap();
//! assert_eq!(n.to_string(), "123456789");
//!
//! let d: BigDecimal = "-1.25e2".parse().unwrap();
//! assert_eq!(d.to_string(), "-125");
//! assert_eq!(d.to_string_scientific(), "-1.25E+2");
//! ```
//!
//! # Arithmetic
//!
//! The binary operators work on owned values and references alike, and
//! machine integers promote at call sites:
//!
//! ```
//! use bigdec::{BigDecimal, RoundingMode};
//!
//! let a: BigDecimal = "0.1".parse().unwrap();
//! let b: BigDecimal = "0.2".parse().unwrap();
//! assert_eq!((&a + &b).to_string(), "0.3");
//! assert_eq!((&a * 3u32).to_string(), "0.3");
//!
//! let third = BigDecimal::one()
//!     .divide(&BigDecimal::from(3u32), 10, RoundingMode::HalfEven)
//!     .unwrap();
//! assert_eq!(third.to_string(), "0.3333333333");
//! ```
//!
//! Operators panic on a zero divisor the way primitive division does; the
//! checked methods ([`BigUInt::div_rem`], [`BigDecimal::divide`], and
//! friends) return a [`Result`] and never panic.
//!
//! # Errors
//!
//! Failures are tagged values: an [`ErrorCode`] describing the exact
//! condition, a [`Category`] grouping it (malformed value, overflow,
//! division by zero, conversion), and for parse errors the 1-based input
//! position. Core arithmetic never produces a wrong value silently.

#![deny(missing_docs)]

mod arith;
mod bigint;
mod biguint;
mod decimal;
mod fmt;
mod parse;

pub mod error;

#[doc(inline)]
pub use crate::bigint::{BigInt, Sign};
#[doc(inline)]
pub use crate::biguint::BigUInt;
#[doc(inline)]
pub use crate::decimal::{BigDecimal, RoundingMode, DEFAULT_PRECISION};
#[doc(inline)]
pub use crate::error::{Category, Error, ErrorCode, Result};
