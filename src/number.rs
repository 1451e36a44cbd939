//! Exact numbers read from answer strings, used when grading with numeric equivalence.

use std::str::FromStr;

use num_integer::Integer;
use num_traits::Zero;
use rust_decimal::Decimal;

/// A number written as a decimal (`0.75`, `-3`) or as a fraction of two integers (`3/4`).
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum Number {
    Decimal(Decimal),
    Rational(i64, i64),
}

/// Returns true if `s` is written as `-?digits(.digits)?`. `Decimal::from_str` on its own is
/// more lenient, and takes `1_000` as a thousand.
fn is_plain_decimal(s: &str) -> bool {
    let unsigned = s.strip_prefix('-').unwrap_or(s);
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (unsigned, None),
    };

    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    all_digits(whole) && fraction.map_or(true, all_digits)
}

fn parse_decimal(s: &str) -> Option<Decimal> {
    if is_plain_decimal(s) {
        Decimal::from_str(s).ok()
    } else {
        None
    }
}

/// Returns true if `s` reads as a decimal number, ignoring surrounding whitespace.
pub fn is_decimal(s: &str) -> bool {
    parse_decimal(s.trim()).is_some()
}

impl Number {
    /// Reads a number from a string, ignoring surrounding whitespace. Returns `None` for anything
    /// which isn't a decimal or a fraction with a non-zero denominator.
    pub fn parse(s: &str) -> Option<Number> {
        let s = s.trim();
        match s.split_once('/') {
            Some((numer, denom)) => {
                let numer = numer.trim().parse::<i64>().ok()?;
                let denom = denom.trim().parse::<i64>().ok()?;
                if denom.is_zero() {
                    None
                } else {
                    Some(Number::Rational(numer, denom).simplify())
                }
            }

            None => parse_decimal(s).map(Number::Decimal),
        }
    }

    /// Simplifies this number:
    ///   - For `Decimal`, this removes trailing zeroes, so `1.50` and `1.5` have the same form.
    ///   - For `Rational`, this divides the numerator and denominator by their GCD. Also ensures
    ///     that any negative sign is on the numerator, not the denominator.
    pub fn simplify(&self) -> Number {
        match *self {
            Self::Decimal(d) => Self::Decimal(d.normalize()),
            Self::Rational(numer, denom) => {
                let negative = (numer < 0) != (denom < 0);
                let (numer, denom) = (numer.unsigned_abs(), denom.unsigned_abs());

                let gcd = numer.gcd(&denom);
                if gcd.is_zero() || numer.is_zero() {
                    return Self::Rational(0, 1);
                }

                // A reduced magnitude of 2^63 doesn't fit back into an i64; leave those as they were
                let (numer, denom) = (numer / gcd, denom / gcd);
                match (i64::try_from(numer), i64::try_from(denom)) {
                    (Ok(numer), Ok(denom)) => Self::Rational(if negative { -numer } else { numer }, denom),
                    _ => *self,
                }
            }
        }
    }

    /// Returns true if both numbers have the same value, however they are written. Comparisons
    /// between a decimal and a fraction are exact, so `0.33` is not equivalent to `1/3`.
    pub fn equivalent(&self, other: &Number) -> bool {
        match (self.simplify(), other.simplify()) {
            (Self::Rational(ln, ld), Self::Rational(rn, rd)) => ln == rn && ld == rd,
            (Self::Decimal(l), Self::Decimal(r)) => l == r,

            (Self::Decimal(d), Self::Rational(numer, denom))
            | (Self::Rational(numer, denom), Self::Decimal(d)) => {
                // d == numer / denom  <=>  d * denom == numer, which is exact
                d.checked_mul(Decimal::from(denom)) == Some(Decimal::from(numer))
            }
        }
    }
}
