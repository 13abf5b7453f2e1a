//! Rounding modes and the digit-level rounding primitive.

use core::fmt::{self, Display};
use core::str::FromStr;

use crate::arith::math::{digit_at, small, LimbVec};
use crate::error::{Error, ErrorCode, Result};

/// How to round away discarded digits.
///
/// Every mode follows the same two-phase contract: identify the last
/// retained digit and the first discarded digit, then decide whether the
/// retained part is incremented. A carry out of the most significant digit
/// lengthens the coefficient (`9.999 → 10.000`).
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum RoundingMode {
    /// Toward zero: discard.
    Down,
    /// Away from zero: increment if any discarded digit is non-zero.
    Up,
    /// Increment if the first discarded digit is 5 or more.
    HalfUp,
    /// Banker's rounding: increment only if the first discarded digit is 5
    /// or more, and the tie (exactly 5 with nothing below) breaks toward
    /// the even retained digit.
    #[default]
    HalfEven,
}

impl RoundingMode {
    fn name(self) -> &'static str {
        match self {
            RoundingMode::Down => "down",
            RoundingMode::Up => "up",
            RoundingMode::HalfUp => "half-up",
            RoundingMode::HalfEven => "half-even",
        }
    }
}

impl Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RoundingMode {
    type Err = Error;

    /// Parse a mode name; underscores and hyphens are interchangeable.
    fn from_str(s: &str) -> Result<RoundingMode> {
        match s.replace('_', "-").as_str() {
            "down" => Ok(RoundingMode::Down),
            "up" => Ok(RoundingMode::Up),
            "half-up" => Ok(RoundingMode::HalfUp),
            "half-even" => Ok(RoundingMode::HalfEven),
            _ => Err(Error::new(ErrorCode::InvalidRoundingMode(s.into()))),
        }
    }
}

/// Decide whether the retained digits are incremented.
///
/// `first` is the most significant discarded digit, `sticky` whether any
/// lower discarded digit is non-zero, `odd` whether the last retained
/// digit is odd.
pub(crate) fn should_increment(mode: RoundingMode, first: u8, sticky: bool, odd: bool) -> bool {
    match mode {
        RoundingMode::Down => false,
        RoundingMode::Up => first != 0 || sticky,
        RoundingMode::HalfUp => first >= 5,
        RoundingMode::HalfEven => first >= 5 && (first > 5 || sticky || odd),
    }
}

/// Discard the low `drop` digits of a coefficient, rounding per `mode`.
///
/// `extra_sticky` feeds additional below-the-last-digit residue into the
/// decision; division passes the non-zero-remainder flag through it.
pub(crate) fn round_discard(
    limbs: &mut LimbVec,
    drop: usize,
    mode: RoundingMode,
    extra_sticky: bool,
) {
    if drop == 0 {
        if extra_sticky && mode == RoundingMode::Up {
            small::iadd(limbs, 1);
        }
        return;
    }
    let (first, below) = small::div_pow10_inspect(limbs, drop);
    let sticky = below || extra_sticky;
    small::idiv_pow10(limbs, drop);
    let odd = digit_at(limbs, 0) % 2 == 1;
    if should_increment(mode, first, sticky, odd) {
        small::iadd(limbs, 1);
    }
}

// TESTS
// -----

#[cfg(test)]
mod tests {
    use super::*;

    fn round(value: u32, drop: usize, mode: RoundingMode) -> Vec<u32> {
        let mut limbs = vec![value];
        round_discard(&mut limbs, drop, mode, false);
        if limbs.is_empty() {
            limbs.push(0);
        }
        limbs
    }

    #[test]
    fn mode_table_test() {
        // 12345 with two digits dropped: first discarded 4.
        assert_eq!(round(12_345, 2, RoundingMode::Down), vec![123]);
        assert_eq!(round(12_345, 2, RoundingMode::Up), vec![124]);
        assert_eq!(round(12_345, 2, RoundingMode::HalfUp), vec![123]);
        assert_eq!(round(12_345, 2, RoundingMode::HalfEven), vec![123]);

        // 12355 with one digit dropped: a tie against an odd digit.
        assert_eq!(round(12_355, 1, RoundingMode::Down), vec![1_235]);
        assert_eq!(round(12_355, 1, RoundingMode::HalfUp), vec![1_236]);
        assert_eq!(round(12_355, 1, RoundingMode::HalfEven), vec![1_236]);

        // 12345 with one digit dropped: a tie against an even digit.
        assert_eq!(round(12_345, 1, RoundingMode::HalfEven), vec![1_234]);
        assert_eq!(round(12_345, 1, RoundingMode::HalfUp), vec![1_235]);

        // 12351: above the tie, sticky set.
        assert_eq!(round(12_351, 2, RoundingMode::HalfEven), vec![124]);
    }

    #[test]
    fn carry_lengthens_test() {
        // 9999 → 10.00 keeps four digits through the carry.
        assert_eq!(round(9_999, 2, RoundingMode::HalfUp), vec![100]);
        assert_eq!(round(999_999_999, 1, RoundingMode::Up), vec![100_000_000]);
        let mut limbs = vec![999_999_999, 9];
        round_discard(&mut limbs, 1, RoundingMode::HalfUp, false);
        assert_eq!(limbs, vec![0, 1]);
    }

    #[test]
    fn drop_everything_test() {
        assert_eq!(round(4_999, 4, RoundingMode::HalfUp), vec![0]);
        assert_eq!(round(5_000, 4, RoundingMode::HalfUp), vec![1]);
        assert_eq!(round(1, 4, RoundingMode::Up), vec![1]);
        assert_eq!(round(0, 4, RoundingMode::Up), vec![0]);
    }

    #[test]
    fn mode_names_test() {
        assert_eq!("half_even".parse::<RoundingMode>().unwrap(), RoundingMode::HalfEven);
        assert_eq!("down".parse::<RoundingMode>().unwrap(), RoundingMode::Down);
        assert!("sideways".parse::<RoundingMode>().is_err());
        assert_eq!(RoundingMode::HalfUp.to_string(), "half-up");
    }
}
