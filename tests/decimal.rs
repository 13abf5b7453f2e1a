use bigdec::{BigDecimal, BigInt, RoundingMode, Sign};

fn dec(s: &str) -> BigDecimal {
    s.parse().unwrap()
}

#[test]
fn parse_and_display() {
    for s in [
        "0",
        "1",
        "-1",
        "0.5",
        "-0.05",
        "123.456",
        "1000000000000.000000000001",
    ] {
        assert_eq!(dec(s).to_string(), s, "round trip of {:?}", s);
    }
    assert_eq!(dec("1.5e3").to_string(), "1500");
    assert_eq!(dec("1.5e-3").to_string(), "0.0015");
    assert_eq!(dec("12_3.4_5").to_string(), "123.45");
    assert_eq!(dec("-0").sign(), Sign::Positive);
}

#[test]
fn scientific_notation() {
    assert_eq!(dec("123.456").to_string_scientific(), "1.23456E+2");
    assert_eq!(dec("-0.00125").to_string_scientific(), "-1.25E-3");
    assert_eq!(dec("7").to_string_scientific(), "7E+0");
    assert_eq!(dec("0").to_string_scientific(), "0E+0");
    // Trailing coefficient zeros survive, as in the plain rendering.
    assert_eq!(dec("1.500").to_string_scientific(), "1.500E+0");
}

#[test]
fn scale_alignment_addition() {
    // The result carries the larger scale; no auto-normalization.
    let sum = dec("1.05") + dec("2.9");
    assert_eq!(sum.to_string(), "3.95");
    assert_eq!(sum.scale(), 2);

    let sum = dec("1.50") + dec("0.50");
    assert_eq!(sum.to_string(), "2.00");
    assert_eq!(sum.scale(), 2);

    assert_eq!((dec("0.1") + dec("0.2")).to_string(), "0.3");
    assert_eq!((dec("10") + dec("-10.00")).to_string(), "0.00");
}

#[test]
fn signed_arithmetic() {
    assert_eq!((dec("1.5") - dec("2.25")).to_string(), "-0.75");
    assert_eq!((dec("-1.5") * dec("-2")).to_string(), "3.0");
    assert_eq!((dec("-1.5") * dec("2")).to_string(), "-3.0");
    assert_eq!((-dec("1.5")).to_string(), "-1.5");
    assert_eq!(dec("-1.5").abs().to_string(), "1.5");
}

#[test]
fn multiplication_scales_add() {
    let product = dec("0.5") * dec("0.25");
    assert_eq!(product.to_string(), "0.125");
    assert_eq!(product.scale(), 3);

    let product = dec("1.5e10") * dec("2e-3");
    assert_eq!(product.normalized().to_string(), "30000000");
}

#[test]
fn value_equality_across_scales() {
    assert_eq!(dec("1.5"), dec("1.50"));
    assert_eq!(dec("1500"), dec("1.5e3"));
    assert_eq!(dec("0.00"), dec("0"));
    assert!(dec("1.5") < dec("1.51"));
    assert!(dec("-1.5") > dec("-1.51"));
    assert!(dec("-0.1") < dec("0.1"));
}

#[test]
fn division_default_precision() {
    // 36 significant digits by default, half-even.
    let third = dec("1") / dec("3");
    assert_eq!(
        third.to_string(),
        "0.333333333333333333333333333333333333"
    );
    let two_thirds = dec("2") / dec("3");
    assert_eq!(
        two_thirds.to_string(),
        "0.666666666666666666666666666666666667"
    );
    assert_eq!(dec("1") / dec("8"), dec("0.125"));
}

#[test]
fn division_chosen_precision() {
    let q = dec("355").divide(&dec("113"), 15, RoundingMode::HalfEven).unwrap();
    assert_eq!(q.to_string(), "3.14159292035398");
    let q = dec("1").divide(&dec("7"), 5, RoundingMode::Up).unwrap();
    assert_eq!(q.to_string(), "0.14286");
    let q = dec("1").divide(&dec("7"), 5, RoundingMode::Down).unwrap();
    assert_eq!(q.to_string(), "0.14285");
}

#[test]
fn division_errors() {
    assert!(dec("1").checked_div(&dec("0")).unwrap_err().is_divide_by_zero());
    assert!(dec("1").checked_div(&dec("0.00")).unwrap_err().is_divide_by_zero());
}

#[test]
fn remainder() {
    assert_eq!((dec("7.5") % dec("2")).to_string(), "1.5");
    assert_eq!((dec("-7.5") % dec("2")).to_string(), "-1.5");
    assert_eq!((dec("7.5") % dec("-2")).to_string(), "1.5");
    assert_eq!((dec("0.03") % dec("0.007")).to_string(), "0.002");
}

#[test]
fn rounding_modes() {
    let x = dec("2.345");
    assert_eq!(x.round(2, RoundingMode::Down).to_string(), "2.34");
    assert_eq!(x.round(2, RoundingMode::Up).to_string(), "2.35");
    assert_eq!(x.round(2, RoundingMode::HalfUp).to_string(), "2.35");
    assert_eq!(x.round(2, RoundingMode::HalfEven).to_string(), "2.34");

    let y = dec("2.355");
    assert_eq!(y.round(2, RoundingMode::HalfEven).to_string(), "2.36");

    let negative = dec("-2.345");
    assert_eq!(negative.round(2, RoundingMode::Down).to_string(), "-2.34");
    assert_eq!(negative.round(2, RoundingMode::Up).to_string(), "-2.35");

    // Carry out of the top digit.
    assert_eq!(dec("9.999").round(2, RoundingMode::HalfUp).to_string(), "10.00");
    // Rounding to a coarser-than-integer scale.
    assert_eq!(dec("1234").round(-2, RoundingMode::HalfUp).to_string(), "1200");
}

#[test]
fn round_pads_smaller_scales() {
    let padded = dec("1.5").round(4, RoundingMode::HalfEven);
    assert_eq!(padded.to_string(), "1.5000");
    assert_eq!(padded.scale(), 4);
}

#[test]
fn quantize() {
    let exemplar = dec("0.01");
    assert_eq!(dec("3.14159").quantize(&exemplar, RoundingMode::HalfEven).to_string(), "3.14");
    assert_eq!(dec("7").quantize(&exemplar, RoundingMode::HalfEven).to_string(), "7.00");
    assert_eq!(
        dec("-1.005").quantize(&exemplar, RoundingMode::HalfUp).to_string(),
        "-1.01"
    );
}

#[test]
fn with_precision() {
    let x = dec("123.456789");
    assert_eq!(
        x.with_precision(5, RoundingMode::HalfEven).unwrap().to_string(),
        "123.46"
    );
    // A carry across every digit sheds the extra zero.
    let nines = dec("99.99");
    assert_eq!(
        nines.with_precision(3, RoundingMode::HalfUp).unwrap().to_string(),
        "100"
    );
}

#[test]
fn normalized_strips_trailing_zeros() {
    let x = dec("1.2300");
    assert_eq!(x.scale(), 4);
    let normal = x.normalized();
    assert_eq!(normal.scale(), 2);
    assert_eq!(normal.to_string(), "1.23");
    assert_eq!(x, normal);

    assert_eq!(dec("1000").normalized().to_string_scientific(), "1E+3");
    assert_eq!(dec("0.000").normalized().scale(), 0);
}

#[test]
fn integer_predicate() {
    assert!(dec("42").is_integer());
    assert!(dec("42.000").is_integer());
    assert!(dec("4.2e5").is_integer());
    assert!(!dec("42.0001").is_integer());
    assert!(dec("0.00").is_integer());
}

#[test]
fn significant_digits() {
    assert_eq!(dec("0.00120").number_of_significant_digits(), 3);
    assert_eq!(dec("123.45").number_of_significant_digits(), 5);
    assert_eq!(dec("0").number_of_significant_digits(), 1);
}

#[test]
fn coefficient_and_scale() {
    let x = dec("-12.34");
    assert_eq!(x.coefficient(), BigInt::from(-1234));
    assert_eq!(x.scale(), 2);
    assert_eq!(BigDecimal::new(BigInt::from(-1234), 2), x);
    assert_eq!(BigDecimal::new(BigInt::from(15), -2).to_string(), "1500");
}

#[test]
fn powi() {
    assert_eq!(dec("1.5").powi(2).unwrap().to_string(), "2.25");
    assert_eq!(dec("-1.5").powi(3).unwrap().to_string(), "-3.375");
    assert_eq!(dec("2").powi(0).unwrap(), BigDecimal::one());
    let inverse = dec("4").powi(-1).unwrap();
    assert_eq!(inverse, dec("0.25"));
    assert!(dec("0").powi(-1).unwrap_err().is_divide_by_zero());
}

#[test]
fn conversions() {
    assert_eq!(dec("42.00").to_bigint().unwrap(), BigInt::from(42));
    assert_eq!(dec("-4.2e3").to_bigint().unwrap(), BigInt::from(-4200));
    assert!(dec("4.5").to_bigint().unwrap_err().is_conversion());
    assert_eq!(dec("-42").to_i64().unwrap(), -42);
    assert_eq!(dec("42").to_u64().unwrap(), 42);

    assert_eq!(dec("0.5").to_f64(), 0.5);
    assert_eq!(dec("-2.5e10").to_f64(), -2.5e10);
    assert_eq!(dec("0").to_f64(), 0.0);

    assert_eq!(BigDecimal::from_f64(0.25).unwrap().to_string(), "0.25");
    assert_eq!(BigDecimal::from_f64(-3.5).unwrap().to_string(), "-3.5");
    assert!(BigDecimal::from_f64(f64::INFINITY).is_none());
    assert!(BigDecimal::from_f64(f64::NAN).is_none());
}

#[test]
fn machine_integer_promotion() {
    let x = dec("1.5");
    assert_eq!(&x + 1u32, dec("2.5"));
    assert_eq!(&x * 4i64, dec("6.0"));
    assert_eq!(&x - 2i32, dec("-0.5"));
    assert_eq!(dec("3") / 2u8, dec("1.5"));
    assert_eq!(x, dec("1.5"));
    assert!(dec("2") == 2i32);
    assert!(2u64 == dec("2"));
}

#[test]
fn parse_errors_carry_position() {
    let err = "1.2.3".parse::<BigDecimal>().unwrap_err();
    assert!(err.is_value());
    assert_eq!(err.position(), 4);
    assert_eq!(err.to_string(), "repeated decimal point at position 4");
}
