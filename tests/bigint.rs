use bigdec::{BigInt, BigUInt, Sign};

fn int(s: &str) -> BigInt {
    s.parse().unwrap()
}

#[test]
fn no_negative_zero() {
    assert_eq!(int("-0").sign(), Sign::Positive);
    assert_eq!(int("-0"), BigInt::zero());
    assert_eq!(BigInt::new(Sign::Negative, BigUInt::zero()), BigInt::zero());
    assert_eq!((-BigInt::zero()).sign(), Sign::Positive);
    assert_eq!((int("5") - int("5")).sign(), Sign::Positive);
}

#[test]
fn parse_and_display() {
    assert_eq!(int("-42").to_string(), "-42");
    assert_eq!(int("+42").to_string(), "42");
    assert_eq!(int("-1.5e1").to_string(), "-15");
    assert_eq!(int("-123_456").to_string(), "-123456");
    assert!("-1.5".parse::<BigInt>().unwrap_err().is_conversion());
}

#[test]
fn signed_addition() {
    assert_eq!(int("7") + int("-3"), int("4"));
    assert_eq!(int("3") + int("-7"), int("-4"));
    assert_eq!(int("-3") + int("-7"), int("-10"));
    assert_eq!(int("-7") - int("-3"), int("-4"));
    assert_eq!(int("-3") - int("7"), int("-10"));
    assert_eq!(int("3") - int("-7"), int("10"));
}

#[test]
fn signed_multiplication() {
    assert_eq!(int("-4") * int("5"), int("-20"));
    assert_eq!(int("-4") * int("-5"), int("20"));
    assert_eq!(int("4") * int("-5"), int("-20"));
    assert_eq!(int("-4") * BigInt::zero(), BigInt::zero());
    assert_eq!(int("-3").pow(3), int("-27"));
    assert_eq!(int("-3").pow(4), int("81"));
}

#[test]
fn truncated_division() {
    // Quotient toward zero, remainder takes the dividend's sign.
    let cases = [
        ("7", "2", "3", "1"),
        ("-7", "2", "-3", "-1"),
        ("7", "-2", "-3", "1"),
        ("-7", "-2", "3", "-1"),
    ];
    for (n, d, q, r) in cases {
        let (quotient, remainder) = int(n).div_rem(&int(d)).unwrap();
        assert_eq!(quotient, int(q), "{} tdiv {}", n, d);
        assert_eq!(remainder, int(r), "{} trem {}", n, d);
        assert_eq!(quotient * int(d) + remainder, int(n));
    }
}

#[test]
fn floored_division() {
    // Quotient toward negative infinity, remainder takes the divisor's
    // sign.
    let cases = [
        ("7", "2", "3", "1"),
        ("-7", "2", "-4", "1"),
        ("7", "-2", "-4", "-1"),
        ("-7", "-2", "3", "-1"),
        ("6", "3", "2", "0"),
        ("-6", "3", "-2", "0"),
    ];
    for (n, d, q, r) in cases {
        let (quotient, remainder) = int(n).div_rem_floor(&int(d)).unwrap();
        assert_eq!(quotient, int(q), "{} fdiv {}", n, d);
        assert_eq!(remainder, int(r), "{} fmod {}", n, d);
        assert_eq!(quotient * int(d) + remainder, int(n));
    }
}

#[test]
fn euclidean_division() {
    // Remainder always in [0, |divisor|).
    let cases = [
        ("7", "2", "3", "1"),
        ("-7", "2", "-4", "1"),
        ("7", "-2", "-3", "1"),
        ("-7", "-2", "4", "1"),
    ];
    for (n, d, q, r) in cases {
        let (quotient, remainder) = int(n).div_rem_euclid(&int(d)).unwrap();
        assert_eq!(quotient, int(q), "{} ediv {}", n, d);
        assert_eq!(remainder, int(r), "{} emod {}", n, d);
        assert!(!remainder.is_negative());
        assert!(remainder.magnitude() < int(d).magnitude());
        assert_eq!(quotient * int(d) + remainder, int(n));
    }
}

#[test]
fn division_by_zero() {
    assert!(int("5").div_rem(&BigInt::zero()).unwrap_err().is_divide_by_zero());
    assert!(int("5").div_rem_floor(&BigInt::zero()).is_err());
    assert!(int("5").div_rem_euclid(&BigInt::zero()).is_err());
}

#[test]
fn ordering() {
    assert!(int("-10") < int("-9"));
    assert!(int("-1") < int("0"));
    assert!(int("-1") < int("1"));
    assert!(int("10") > int("9"));
    assert!(int("-100") < int("99"));
    assert_eq!(int("-42"), -42i32);
    assert_eq!(-42i64, int("-42"));
}

#[test]
fn abs_and_signum() {
    assert_eq!(int("-5").abs(), int("5"));
    assert_eq!(int("5").abs(), int("5"));
    assert_eq!(int("-5").signum(), -1);
    assert_eq!(BigInt::zero().signum(), 0);
    assert_eq!(int("5").signum(), 1);
}

#[test]
fn conversions() {
    assert_eq!(int("-9223372036854775808").to_i64().unwrap(), i64::MIN);
    assert_eq!(int("9223372036854775807").to_i64().unwrap(), i64::MAX);
    assert!(int("9223372036854775808").to_i64().unwrap_err().is_overflow());
    assert!(int("-9223372036854775809").to_i64().unwrap_err().is_overflow());
    assert!(int("-1").to_u64().unwrap_err().is_conversion());
    assert_eq!(int("-1").to_i128().unwrap(), -1);
    assert_eq!(BigInt::from(i128::MIN).to_i128().unwrap(), i128::MIN);
    assert_eq!(int("-2.5e1").to_f64(), -25.0);

    let magnitude: BigUInt = BigUInt::try_from(int("7")).unwrap();
    assert_eq!(magnitude, BigUInt::from(7u32));
    assert!(BigUInt::try_from(int("-7")).unwrap_err().is_conversion());
}

#[test]
fn widening_chain() {
    let unsigned = BigUInt::from(123u32);
    let signed: BigInt = unsigned.clone().into();
    assert_eq!(signed, int("123"));
    assert_eq!(signed.magnitude(), &unsigned);
}

#[test]
fn mixed_integer_operands() {
    assert_eq!(int("10") + 5i32, int("15"));
    assert_eq!(int("10") - 15i64, int("-5"));
    assert_eq!(int("10") * -3i32, int("-30"));
    assert_eq!(int("10") / 3u8, int("3"));
    assert_eq!(int("10") % 3u8, int("1"));
}
