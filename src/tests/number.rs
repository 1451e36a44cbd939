use std::str::FromStr;

use rust_decimal::Decimal;

use crate::number::{is_decimal, Number};

fn num(s: &str) -> Number {
    Number::parse(s).unwrap()
}

#[test]
fn test_parse() {
    assert_eq!(num("4"), Number::Decimal(Decimal::from(4)));
    assert_eq!(num(" 0.75 "), Number::Decimal(Decimal::from_str("0.75").unwrap()));
    assert_eq!(num("6/8"), Number::Rational(3, 4));
    assert_eq!(num("3/-6"), Number::Rational(-1, 2));
    assert_eq!(num(" -2 / 4"), Number::Rational(-1, 2));
    assert_eq!(num("0/5"), Number::Rational(0, 1));

    assert_eq!(Number::parse("1/0"), None);
    assert_eq!(Number::parse("x"), None);
    assert_eq!(Number::parse("1/2/3"), None);
    assert_eq!(Number::parse(""), None);
}

#[test]
fn test_equivalence() {
    assert!(num("4").equivalent(&num("4.0")));
    assert!(num("1.50").equivalent(&num("1.5")));
    assert!(num("1/2").equivalent(&num("2/4")));
    assert!(num("1/2").equivalent(&num("0.5")));
    assert!(num("0.5").equivalent(&num("1/2")));
    assert!(num("-3/4").equivalent(&num("-0.75")));

    assert!(!num("1/3").equivalent(&num("0.33")));
    assert!(!num("1/2").equivalent(&num("-1/2")));
    assert!(!num("2").equivalent(&num("3")));
}

#[test]
fn test_is_decimal() {
    assert!(is_decimal("3"));
    assert!(is_decimal(" 3.14 "));
    assert!(is_decimal("-1"));
    assert!(!is_decimal("x"));
    assert!(!is_decimal("3/4"));
    assert!(!is_decimal(""));
}

#[test]
fn test_rejects_lenient_forms() {
    assert!(!is_decimal("1_000"));
    assert!(!is_decimal("1_0"));
    assert!(!is_decimal("1."));
    assert!(!is_decimal(".5"));
    assert!(!is_decimal("-"));
    assert_eq!(Number::parse("1_0"), None);
    assert_eq!(Number::parse("1_0/2"), None);
}
