//! Money type for representing currency amounts
//!
//! Amounts are stored as whole cents (i64) so arithmetic stays exact; unit
//! prices and sale proceeds never touch floating point.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};
use thiserror::Error;

/// A monetary amount in cents (hundredths of the currency unit)
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Parse a money amount from a string
    ///
    /// Accepts an optional leading `-`, an optional `$`, and either a whole
    /// amount ("10") or one with a one- or two-digit fraction ("2.5", "2.50").
    /// More than two fraction digits is rejected rather than silently rounded.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let input = s.trim();
        let invalid = || MoneyParseError(input.to_string());

        let (negative, rest) = match input.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, input),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest);
        if rest.is_empty() {
            return Err(invalid());
        }

        let cents = match rest.split_once('.') {
            Some((whole, frac)) => {
                if !frac.chars().all(|c| c.is_ascii_digit()) {
                    return Err(invalid());
                }
                let whole: i64 = parse_digits(whole).ok_or_else(invalid)?;
                let frac_cents: i64 = match frac.len() {
                    0 => 0,
                    1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
                    2 => frac.parse::<i64>().map_err(|_| invalid())?,
                    _ => return Err(invalid()),
                };
                whole * 100 + frac_cents
            }
            None => parse_digits(rest).ok_or_else(invalid)? * 100,
        };

        Ok(Self(if negative { -cents } else { cents }))
    }
}

fn parse_digits(s: &str) -> Option<i64> {
    if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cents = self.0.abs();
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, cents / 100, cents % 100)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Scale a unit price by a count, e.g. proceeds = price * quantity
impl Mul<u32> for Money {
    type Output = Self;

    fn mul(self, count: u32) -> Self {
        Self(self.0 * i64::from(count))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid money amount: '{0}'")]
pub struct MoneyParseError(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(250);
        assert_eq!(m.cents(), 250);
        assert!(!m.is_zero());
        assert!(!m.is_negative());
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(250).to_string(), "$2.50");
        assert_eq!(Money::from_cents(0).to_string(), "$0.00");
        assert_eq!(Money::from_cents(5).to_string(), "$0.05");
        assert_eq!(Money::from_cents(-1099).to_string(), "-$10.99");
    }

    #[test]
    fn test_parse_whole_and_fractional() {
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("2.5").unwrap().cents(), 250);
        assert_eq!(Money::parse("2.50").unwrap().cents(), 250);
        assert_eq!(Money::parse("0.05").unwrap().cents(), 5);
        assert_eq!(Money::parse("$9.99").unwrap().cents(), 999);
        assert_eq!(Money::parse("-$1.25").unwrap().cents(), -125);
        assert_eq!(Money::parse(" 3.00 ").unwrap().cents(), 300);
    }

    #[test]
    fn test_parse_rejects_junk() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse("$").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("1.234").is_err());
        assert!(Money::parse("1.2.3").is_err());
        assert!(Money::parse("1.+5").is_err());
        assert!(Money::parse("1,50").is_err());
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(500);
        let b = Money::from_cents(750);
        assert_eq!((a + b).cents(), 1250);

        let mut total = Money::zero();
        total += a;
        total += b;
        assert_eq!(total.cents(), 1250);
    }

    #[test]
    fn test_scale_by_quantity() {
        let price = Money::from_cents(250);
        assert_eq!((price * 4).cents(), 1000);
        assert_eq!((price * 0).cents(), 0);
    }

    #[test]
    fn test_sum() {
        let total: Money = [100, 200, 300].map(Money::from_cents).into_iter().sum();
        assert_eq!(total.cents(), 600);
    }

    #[test]
    fn test_ordering() {
        assert!(Money::from_cents(100) < Money::from_cents(200));
        assert_eq!(Money::from_cents(100), Money::from_cents(100));
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
