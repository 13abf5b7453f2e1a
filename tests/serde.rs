#![cfg(feature = "serde")]

use bigdec::{BigDecimal, BigInt, BigUInt};

#[test]
fn biguint_json_roundtrip() {
    let n: BigUInt = "340282366920938463463374607431768211456".parse().unwrap();
    let json = serde_json::to_string(&n).unwrap();
    assert_eq!(json, "\"340282366920938463463374607431768211456\"");
    let back: BigUInt = serde_json::from_str(&json).unwrap();
    assert_eq!(back, n);
}

#[test]
fn bigint_json_roundtrip() {
    let n: BigInt = "-123456789012345678901234567890".parse().unwrap();
    let json = serde_json::to_string(&n).unwrap();
    assert_eq!(json, "\"-123456789012345678901234567890\"");
    let back: BigInt = serde_json::from_str(&json).unwrap();
    assert_eq!(back, n);
}

#[test]
fn bigdecimal_json_roundtrip() {
    let d: BigDecimal = "-123.4500".parse().unwrap();
    let json = serde_json::to_string(&d).unwrap();
    assert_eq!(json, "\"-123.4500\"");
    let back: BigDecimal = serde_json::from_str(&json).unwrap();
    assert_eq!(back, d);
    // The representation survives, scale included.
    assert_eq!(back.scale(), d.scale());
}

#[test]
fn from_json_numbers() {
    let n: BigUInt = serde_json::from_str("42").unwrap();
    assert_eq!(n, BigUInt::from(42u32));
    let i: BigInt = serde_json::from_str("-42").unwrap();
    assert_eq!(i, BigInt::from(-42));
    let d: BigDecimal = serde_json::from_str("2.5").unwrap();
    assert_eq!(d.to_string(), "2.5");
}

#[test]
fn malformed_input_errors() {
    assert!(serde_json::from_str::<BigUInt>("\"12x\"").is_err());
    assert!(serde_json::from_str::<BigDecimal>("\"\"").is_err());
    assert!(serde_json::from_str::<BigInt>("\"--5\"").is_err());
}
