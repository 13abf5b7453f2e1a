//! When constructing or operating on arbitrary-precision numbers goes wrong.

use core::fmt::{self, Debug, Display};
use core::result;
use std::error;

/// This type represents all possible errors that can occur when parsing,
/// converting, or doing arithmetic on `BigUInt`, `BigInt`, and `BigDecimal`
/// values.
pub struct Error {
    /// This `Box` allows us to keep the size of `Error` as small as possible.
    /// A larger `Error` type was substantially slower due to all the functions
    /// that pass around `Result<T, Error>`.
    err: Box<ErrorImpl>,
}

/// Alias for a `Result` with the error type `bigdec::Error`.
pub type Result<T> = result::Result<T, Error>;

impl Error {
    /// One-based byte position in the input at which the error was detected.
    ///
    /// Positions are reported for string parsing errors. Errors raised by
    /// arithmetic have no position and return 0.
    pub fn position(&self) -> usize {
        self.err.position
    }

    /// Specifies the cause of this error.
    ///
    /// Useful when precise error handling is required or translation of
    /// error messages is required.
    pub fn code(&self) -> &ErrorCode {
        &self.err.code
    }

    /// Categorizes the cause of this error.
    ///
    /// - `Category::Value` - malformed input or a violated arithmetic
    ///   precondition
    /// - `Category::Overflow` - a value does not fit the requested fixed-width
    ///   representation
    /// - `Category::DivideByZero` - a divisor, logarithm argument, or
    ///   reciprocal denominator collapsed to zero
    /// - `Category::Conversion` - the source value has no representation in
    ///   the target type
    /// - `Category::Index` / `Category::Key` - auxiliary layers only; core
    ///   arithmetic never produces these
    pub fn classify(&self) -> Category {
        match self.err.code {
            ErrorCode::Message(_)
            | ErrorCode::EmptyInput
            | ErrorCode::UnexpectedCharacter(_)
            | ErrorCode::RepeatedSign
            | ErrorCode::RepeatedDecimalPoint
            | ErrorCode::RepeatedExponent
            | ErrorCode::MissingDigits
            | ErrorCode::MisplacedSeparator
            | ErrorCode::SubtractionUnderflow
            | ErrorCode::InvalidRoundingMode(_)
            | ErrorCode::LogarithmOfNegative
            | ErrorCode::SquareRootOfNegative
            | ErrorCode::NonIntegerPowerOfNegative => Category::Value,
            ErrorCode::NumberOutOfRange(_) | ErrorCode::ScaleOverflow => Category::Overflow,
            ErrorCode::DivisionByZero
            | ErrorCode::LogarithmOfZero
            | ErrorCode::ReciprocalOfZero => Category::DivideByZero,
            ErrorCode::NonIntegerConversion | ErrorCode::NegativeConversion => {
                Category::Conversion
            }
            ErrorCode::IndexOutOfBounds(_) => Category::Index,
            ErrorCode::UnknownKey(_) => Category::Key,
        }
    }

    /// Returns true if this error was caused by malformed input or a violated
    /// arithmetic precondition.
    pub fn is_value(&self) -> bool {
        self.classify() == Category::Value
    }

    /// Returns true if this error was caused by a value that does not fit the
    /// requested fixed-width representation.
    pub fn is_overflow(&self) -> bool {
        self.classify() == Category::Overflow
    }

    /// Returns true if this error was caused by a zero divisor or an argument
    /// at which the requested function has a pole.
    pub fn is_divide_by_zero(&self) -> bool {
        self.classify() == Category::DivideByZero
    }

    /// Returns true if this error was caused by a source value with no
    /// representation in the target type.
    ///
    /// For example, a `BigDecimal` with a non-zero fractional part is
    /// convertible to neither `BigInt` nor any machine integer.
    pub fn is_conversion(&self) -> bool {
        self.classify() == Category::Conversion
    }

    /// Returns true if this error was caused by an out-of-bounds index in an
    /// auxiliary layer.
    pub fn is_index(&self) -> bool {
        self.classify() == Category::Index
    }

    /// Returns true if this error was caused by an unknown key in an
    /// auxiliary layer.
    pub fn is_key(&self) -> bool {
        self.classify() == Category::Key
    }
}

/// Categorizes the cause of a `bigdec::Error`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Category {
    /// The error was caused by malformed input or by violating a precondition
    /// of an arithmetic operation, such as subtracting a larger `BigUInt` from
    /// a smaller one.
    Value,

    /// The error was caused by a value that cannot be represented at the
    /// requested width, such as converting a 40-digit integer to `u64` or a
    /// scale that exceeds the `i32` range.
    Overflow,

    /// The error was caused by a zero divisor, or by an argument at which the
    /// requested function has a pole (`ln(0)`, a trigonometric reciprocal
    /// whose denominator underflows to zero at working precision).
    DivideByZero,

    /// The error was caused by a source value with no representation in the
    /// target type, such as a fractional `BigDecimal` into `BigInt` or a
    /// negative `BigInt` into `BigUInt`.
    Conversion,

    /// The error was caused by an out-of-bounds index. Raised only by
    /// auxiliary layers built on top of this crate, never by core arithmetic.
    Index,

    /// The error was caused by an unknown lookup key. Raised only by
    /// auxiliary layers built on top of this crate, never by core arithmetic.
    Key,
}

struct ErrorImpl {
    code: ErrorCode,
    /// One-based byte position for parse errors, 0 when not positional.
    position: usize,
}

/// This type describes all possible error conditions reported through
/// [`Error`].
#[non_exhaustive]
pub enum ErrorCode {
    /// Catchall for error messages from auxiliary layers.
    Message(Box<str>),

    /// The input string was empty.
    EmptyInput,

    /// A character that cannot appear in a decimal literal.
    UnexpectedCharacter(char),

    /// More than one sign in the mantissa or exponent.
    RepeatedSign,

    /// More than one decimal point.
    RepeatedDecimalPoint,

    /// More than one exponent marker.
    RepeatedExponent,

    /// A mantissa or exponent with no digits where digits are required.
    MissingDigits,

    /// A digit-group separator that is not between two digits.
    MisplacedSeparator,

    /// Subtracting the larger operand from the smaller; `BigUInt` has no
    /// negative representation.
    SubtractionUnderflow,

    /// A rounding mode name that is not recognized.
    InvalidRoundingMode(Box<str>),

    /// Divisor is zero.
    DivisionByZero,

    /// Logarithm of zero.
    LogarithmOfZero,

    /// A reciprocal whose denominator underflowed to zero at working
    /// precision, such as `tan` near an odd multiple of `π/2`.
    ReciprocalOfZero,

    /// Logarithm of a negative value.
    LogarithmOfNegative,

    /// Square root of a negative value.
    SquareRootOfNegative,

    /// Raising a negative base to a non-integer power.
    NonIntegerPowerOfNegative,

    /// The value does not fit in the named target type.
    NumberOutOfRange(&'static str),

    /// A decimal scale outside the `i32` range.
    ScaleOverflow,

    /// Converting a value with a non-zero fractional part to an integer type.
    NonIntegerConversion,

    /// Converting a negative value to an unsigned type.
    NegativeConversion,

    /// An out-of-bounds index reported by an auxiliary layer.
    IndexOutOfBounds(usize),

    /// An unknown lookup key reported by an auxiliary layer.
    UnknownKey(Box<str>),
}

impl Error {
    #[cold]
    pub(crate) fn new(code: ErrorCode) -> Self {
        Error {
            err: Box::new(ErrorImpl { code, position: 0 }),
        }
    }

    #[cold]
    pub(crate) fn at(code: ErrorCode, position: usize) -> Self {
        Error {
            err: Box::new(ErrorImpl { code, position }),
        }
    }

    /// An error carrying a free-form message, for layers built on top of this
    /// crate that report through its error type.
    #[cold]
    pub fn message<T: Display>(msg: T) -> Self {
        Error::new(ErrorCode::Message(msg.to_string().into_boxed_str()))
    }

    /// An out-of-bounds index error, for layers built on top of this crate.
    /// Core arithmetic never produces this.
    #[cold]
    pub fn index(index: usize) -> Self {
        Error::new(ErrorCode::IndexOutOfBounds(index))
    }

    /// An unknown-key error, for layers built on top of this crate. Core
    /// arithmetic never produces this.
    #[cold]
    pub fn key(key: &str) -> Self {
        Error::new(ErrorCode::UnknownKey(key.into()))
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorCode::Message(msg) => f.write_str(msg),
            ErrorCode::EmptyInput => f.write_str("empty input"),
            ErrorCode::UnexpectedCharacter(c) => {
                write!(f, "unexpected character `{}`", c)
            }
            ErrorCode::RepeatedSign => f.write_str("repeated sign"),
            ErrorCode::RepeatedDecimalPoint => f.write_str("repeated decimal point"),
            ErrorCode::RepeatedExponent => f.write_str("repeated exponent"),
            ErrorCode::MissingDigits => f.write_str("expected at least one digit"),
            ErrorCode::MisplacedSeparator => {
                f.write_str("separator must appear between two digits")
            }
            ErrorCode::SubtractionUnderflow => {
                f.write_str("subtraction underflow in unsigned arithmetic")
            }
            ErrorCode::InvalidRoundingMode(name) => {
                write!(f, "invalid rounding mode `{}`", name)
            }
            ErrorCode::DivisionByZero => f.write_str("division by zero"),
            ErrorCode::LogarithmOfZero => f.write_str("logarithm of zero"),
            ErrorCode::ReciprocalOfZero => {
                f.write_str("reciprocal denominator is zero at working precision")
            }
            ErrorCode::LogarithmOfNegative => f.write_str("logarithm of a negative value"),
            ErrorCode::SquareRootOfNegative => f.write_str("square root of a negative value"),
            ErrorCode::NonIntegerPowerOfNegative => {
                f.write_str("non-integer power of a negative base")
            }
            ErrorCode::NumberOutOfRange(ty) => {
                write!(f, "number out of range of {}", ty)
            }
            ErrorCode::ScaleOverflow => f.write_str("decimal scale out of range"),
            ErrorCode::NonIntegerConversion => {
                f.write_str("value with a fractional part is not an integer")
            }
            ErrorCode::NegativeConversion => {
                f.write_str("negative value has no unsigned representation")
            }
            ErrorCode::IndexOutOfBounds(index) => {
                write!(f, "index {} out of bounds", index)
            }
            ErrorCode::UnknownKey(key) => write!(f, "unknown key `{}`", key),
        }
    }
}

impl Debug for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&*self.err, f)
    }
}

impl Display for ErrorImpl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.position == 0 {
            Display::fmt(&self.code, f)
        } else {
            write!(f, "{} at position {}", self.code, self.position)
        }
    }
}

// Remove two layers of verbosity from the debug representation. Humans often
// end up seeing this representation because it is what unwrap() shows.
impl Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.err.position == 0 {
            write!(f, "Error({:?})", self.err.code.to_string())
        } else {
            write!(
                f,
                "Error({:?}, position: {})",
                self.err.code.to_string(),
                self.err.position
            )
        }
    }
}

impl error::Error for Error {}
