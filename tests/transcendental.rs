use bigdec::{BigDecimal, BigInt, BigUInt};

fn dec(s: &str) -> BigDecimal {
    s.parse().unwrap()
}

/// Absolute tolerance `10^-digits`.
fn tol(digits: i32) -> BigDecimal {
    BigDecimal::new(BigInt::one(), digits)
}

fn assert_close(actual: &BigDecimal, expected: &BigDecimal, digits: i32, what: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff < tol(digits),
        "{}: {} differs from {} by {}",
        what,
        actual,
        expected,
        diff
    );
}

#[test]
fn exp_reference_values() {
    assert_eq!(
        BigDecimal::one().exp(36).unwrap().to_string(),
        "2.71828182845904523536028747135266250"
    );
    assert_eq!(BigDecimal::zero().exp(20).unwrap(), BigDecimal::one());
    // exp(-1) = 0.367879441171442321595523770161...
    let inv_e = dec("-1").exp(25).unwrap();
    assert_close(&inv_e, &dec("0.3678794411714423215955238"), 23, "exp(-1)");
    // A value needing several doublings of range reduction.
    let big = dec("10").exp(25).unwrap();
    assert_close(&big, &dec("22026.46579480671651695790065"), 18, "exp(10)");
}

#[test]
fn ln_reference_values() {
    assert_close(
        &dec("2").ln(30).unwrap(),
        &dec("0.693147180559945309417232121458"),
        28,
        "ln 2",
    );
    assert_close(
        &dec("10").ln(30).unwrap(),
        &dec("2.30258509299404568401799145468"),
        27,
        "ln 10",
    );
    assert_close(
        &dec("0.5").ln(25).unwrap(),
        &dec("-0.6931471805599453094172321"),
        23,
        "ln 0.5",
    );
    assert_eq!(BigDecimal::one().ln(20).unwrap(), BigDecimal::zero());
}

#[test]
fn ln_domain_errors() {
    assert!(dec("0").ln(10).unwrap_err().is_divide_by_zero());
    assert!(dec("-1").ln(10).unwrap_err().is_value());
}

#[test]
fn exp_ln_inverses() {
    for s in ["0.25", "1", "7.5", "123.456", "0.0001"] {
        let x = dec(s);
        let roundtrip = x.ln(45).unwrap().exp(45).unwrap();
        assert_close(&roundtrip, &x, 35, "exp∘ln");
        let other_way = x.exp(45).unwrap().ln(45).unwrap();
        assert_close(&other_way, &x, 35, "ln∘exp");
    }
}

#[test]
fn log_bases() {
    assert_close(
        &dec("8").log(&dec("2"), 20).unwrap(),
        &dec("3"),
        18,
        "log2 8",
    );
    assert_close(
        &dec("1000").log10(20).unwrap(),
        &dec("3"),
        18,
        "log10 1000",
    );
    assert!(dec("5").log(&dec("1"), 10).unwrap_err().is_divide_by_zero());
    assert!(dec("5").log(&dec("0"), 10).unwrap_err().is_divide_by_zero());
}

#[test]
fn power_values() {
    assert_eq!(
        dec("2").power(&dec("10"), 20).unwrap().normalized().to_string(),
        "1024"
    );
    // 2^0.5 = √2.
    let root = dec("2").power(&dec("0.5"), 30).unwrap();
    assert_close(
        &root,
        &dec("1.41421356237309504880168872421"),
        27,
        "2^0.5",
    );
    // 10^-2.
    assert_close(
        &dec("10").power(&dec("-2"), 20).unwrap(),
        &dec("0.01"),
        18,
        "10^-2",
    );
    assert!(dec("-2").power(&dec("0.5"), 10).unwrap_err().is_value());
    assert_eq!(dec("0").power(&dec("3"), 10).unwrap(), BigDecimal::zero());
    assert!(dec("0")
        .power(&dec("-3"), 10)
        .unwrap_err()
        .is_divide_by_zero());
}

#[test]
fn sqrt_values() {
    assert_eq!(
        dec("2").sqrt(28).unwrap().to_string(),
        "1.414213562373095048801688724"
    );
    assert_eq!(dec("0").sqrt(10).unwrap(), BigDecimal::zero());
    assert_eq!(dec("0.0625").sqrt(10).unwrap(), dec("0.25"));
    assert_eq!(dec("1e8").sqrt(10).unwrap(), dec("10000"));
    // Odd scale goes through the times-ten adjustment.
    assert_close(
        &dec("0.1").sqrt(25).unwrap(),
        &dec("0.3162277660168379331998894"),
        23,
        "sqrt 0.1",
    );
    assert!(dec("-4").sqrt(10).unwrap_err().is_value());
}

#[test]
fn sqrt_squares_back() {
    for s in ["2", "3", "10", "123.456", "0.5"] {
        let x = dec(s);
        let root = x.sqrt(40).unwrap();
        let squared = &root * &root;
        assert_close(&squared, &x, 35, "sqrt²");
    }
}

#[test]
fn trig_reference_values() {
    // sin(1) = 0.841470984807896506652502321630...
    assert_close(
        &dec("1").sin(30).unwrap(),
        &dec("0.841470984807896506652502321630"),
        27,
        "sin 1",
    );
    // cos(1) = 0.540302305868139717400936607442...
    assert_close(
        &dec("1").cos(30).unwrap(),
        &dec("0.540302305868139717400936607442"),
        27,
        "cos 1",
    );
    // tan(1) = sin/cos.
    assert_close(
        &dec("1").tan(25).unwrap(),
        &dec("1.557407724654902230506975"),
        22,
        "tan 1",
    );
    // cot, sec, csc are the matching reciprocals.
    let cot = dec("1").cot(25).unwrap();
    assert_close(&cot, &dec("0.6420926159343307030064200"), 22, "cot 1");
    let sec = dec("1").sec(25).unwrap();
    assert_close(&sec, &dec("1.8508157176809256179117532"), 22, "sec 1");
    let csc = dec("1").csc(25).unwrap();
    assert_close(&csc, &dec("1.1883951057781212162615994"), 22, "csc 1");
}

#[test]
fn trig_identities() {
    for s in ["0.1", "1", "2.5", "25", "-4", "100.75"] {
        let x = dec(s);
        let sin = x.sin(35).unwrap();
        let cos = x.cos(35).unwrap();
        let unit = &(&sin * &sin) + &(&cos * &cos);
        assert_close(&unit, &BigDecimal::one(), 32, "sin²+cos²");
    }
}

#[test]
fn trig_periodicity() {
    // sin(x + 2π) agrees with sin(x) to nearly working precision.
    let two_pi = BigDecimal::pi(40) * 2u32;
    for s in ["0.5", "3", "-1.25"] {
        let x = dec(s);
        let shifted = (&x + &two_pi).sin(30).unwrap();
        let plain = x.sin(30).unwrap();
        assert_close(&shifted, &plain, 27, "sin mod 2π");
    }
}

#[test]
fn trig_odd_even() {
    let x = dec("1.234");
    let minus = dec("-1.234");
    assert_eq!(x.sin(25).unwrap(), -minus.sin(25).unwrap());
    assert_eq!(x.cos(25).unwrap(), minus.cos(25).unwrap());
}

#[test]
fn pi_leading_digits() {
    assert_eq!(
        BigDecimal::pi(40).to_string(),
        "3.141592653589793238462643383279502884197"
    );
}

/// Machin's formula `π = 16·atan(1/5) − 4·atan(1/239)` over scaled
/// integers: an independent route to the same digits as the Chudnovsky
/// evaluation.
fn machin_pi_scaled(digits: usize) -> BigUInt {
    let guard = 10;
    let w = digits + guard;

    fn atan_inv_scaled(n: u32, w: usize) -> BigInt {
        let nn = BigInt::from(n * n);
        let mut term = BigInt::from(BigUInt::one().scale_up_by_power_of_10(w)) / n as i64;
        let mut sum = BigInt::zero();
        let mut k: i64 = 0;
        let mut negate = false;
        while !term.is_zero() {
            let contribution = &term / (2 * k + 1);
            if negate {
                sum -= contribution;
            } else {
                sum += contribution;
            }
            term = &term / &nn;
            negate = !negate;
            k += 1;
        }
        sum
    }

    let pi = atan_inv_scaled(5, w) * 16i32 - atan_inv_scaled(239, w) * 4i32;
    BigUInt::try_from(pi)
        .unwrap()
        .scale_down_by_power_of_10(guard)
}

#[test]
fn pi_two_thousand_digits_cross_checked() {
    // 2048 significant digits from Chudnovsky binary splitting, compared
    // digit for digit against Machin's formula.
    let chudnovsky = BigDecimal::pi(2048);
    let machin = machin_pi_scaled(2047);
    assert_eq!(chudnovsky.coefficient(), BigInt::from(machin));
    assert_eq!(chudnovsky.scale(), 2047);
    assert_eq!(chudnovsky.number_of_significant_digits(), 2048);
}

#[test]
fn reciprocal_pole_detection() {
    // tan(π/2) with π at the same working precision collapses the cosine
    // to zero only in the exact-pole limit; at finite precision the
    // cosine is tiny but non-zero and the tangent is huge.
    let half_pi = BigDecimal::pi(30) / 2u32;
    let tangent = half_pi.tan(10).unwrap();
    assert!(tangent.abs() > dec("1e20"));
}
