//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point drift
//! when summing. On disk amounts are plain JSON numbers in major units so the
//! budget document stays human-readable.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
///
/// Arithmetic saturates at the `i64` bounds instead of overflowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Largest magnitude, in whole units, accepted from text or JSON
    pub const MAX_UNITS: i64 = 1_000_000_000_000;

    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use budget_tracker::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// assert_eq!(amount.to_string(), "10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole units (no fractional part)
    pub const fn from_units(units: i64) -> Self {
        Self(units * 100)
    }

    /// Create a Money amount from a decimal value in major units,
    /// rounded to the nearest cent (half away from zero)
    pub fn from_major(value: f64) -> Self {
        Self((value * 100.0).round() as i64)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the amount in major units as a float
    pub fn to_major(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Scale by a fraction, rounding to the nearest cent
    pub fn scale(&self, fraction: f64) -> Self {
        Self((self.0 as f64 * fraction).round() as i64)
    }

    /// Coerce free-form text into an amount
    ///
    /// Accepts anything that reads as a finite decimal number:
    /// "10.50", "-3", "12.346" (rounded to 12.35), "1e3".
    /// Magnitudes above [`Money::MAX_UNITS`] are rejected.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();
        let value: f64 = trimmed
            .parse()
            .map_err(|_| MoneyParseError::InvalidFormat(trimmed.to_string()))?;

        if !value.is_finite() {
            return Err(MoneyParseError::InvalidFormat(trimmed.to_string()));
        }

        Self::checked_from_major(value)
            .ok_or_else(|| MoneyParseError::OutOfRange(trimmed.to_string()))
    }

    /// Like `from_major`, but `None` when the value is outside the accepted range
    pub fn checked_from_major(value: f64) -> Option<Self> {
        if value.abs() > Self::MAX_UNITS as f64 {
            None
        } else {
            Some(Self::from_major(value))
        }
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}.{:02}", symbol, self.units().abs(), self.cents_part())
        } else {
            format!("{}{}.{:02}", symbol, self.units(), self.cents_part())
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.format_with_symbol(""))
    }
}

// Whole amounts are written as integers, everything else as a float.
impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.cents_part() == 0 {
            serializer.serialize_i64(self.units())
        } else {
            serializer.serialize_f64(self.to_major())
        }
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        if !value.is_finite() {
            return Err(serde::de::Error::custom("amount must be a finite number"));
        }
        Self::checked_from_major(value).ok_or_else(|| {
            serde::de::Error::custom(format!("amount {} is out of range", value))
        })
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    OutOfRange(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::OutOfRange(s) => write!(f, "Amount out of range: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.units(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1050).to_string(), "10.50");
        assert_eq!(Money::from_cents(0).to_string(), "0.00");
        assert_eq!(Money::from_cents(-1050).to_string(), "-10.50");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
        assert_eq!(format!("{:>8}", Money::from_units(5)), "    5.00");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::from_cents(1050).format_with_symbol("$"), "$10.50");
        assert_eq!(Money::from_cents(-1050).format_with_symbol("$"), "-$10.50");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((b - a).cents(), -500);
        assert_eq!((-a).cents(), -1000);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse(" 2000 ").unwrap().cents(), 200000);
        assert_eq!(Money::parse("-10.5").unwrap().cents(), -1050);
        assert_eq!(Money::parse("12.346").unwrap().cents(), 1235);
        assert_eq!(Money::parse("1e3").unwrap().cents(), 100000);
    }

    #[test]
    fn test_parse_rejects_non_numbers() {
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("").is_err());
        assert!(Money::parse("10,50").is_err());
        assert!(Money::parse("inf").is_err());
        assert!(Money::parse("NaN").is_err());
    }

    #[test]
    fn test_parse_rejects_huge_amounts() {
        assert_eq!(
            Money::parse("5e16"),
            Err(MoneyParseError::OutOfRange("5e16".to_string()))
        );
        assert!(Money::parse("-1e13").is_err());
        assert_eq!(
            Money::parse("1000000000000").unwrap(),
            Money::from_units(Money::MAX_UNITS)
        );
    }

    #[test]
    fn test_deserialize_rejects_huge_amounts() {
        assert!(serde_json::from_str::<Money>("5e16").is_err());
    }

    #[test]
    fn test_arithmetic_saturates() {
        let max = Money::from_cents(i64::MAX);
        assert_eq!(max + Money::from_cents(1), max);
        let min = Money::from_cents(i64::MIN);
        assert_eq!(min - Money::from_cents(1), min);
        assert_eq!(-min, max);

        let total: Money = [max, max].iter().sum();
        assert_eq!(total, max);
    }

    #[test]
    fn test_scale() {
        assert_eq!(Money::from_units(2000).scale(0.25), Money::from_units(500));
        assert_eq!(Money::from_cents(333).scale(0.5).cents(), 167);
        assert_eq!(Money::zero().scale(0.3), Money::zero());
    }

    #[test]
    fn test_sum() {
        let amounts = [
            Money::from_cents(100),
            Money::from_cents(200),
            Money::from_cents(300),
        ];
        let total: Money = amounts.iter().sum();
        assert_eq!(total.cents(), 600);
    }

    #[test]
    fn test_serialization() {
        assert_eq!(serde_json::to_string(&Money::from_units(2000)).unwrap(), "2000");
        assert_eq!(serde_json::to_string(&Money::from_cents(1250)).unwrap(), "12.5");

        let whole: Money = serde_json::from_str("120").unwrap();
        assert_eq!(whole.cents(), 12000);
        let fractional: Money = serde_json::from_str("99.99").unwrap();
        assert_eq!(fractional.cents(), 9999);
    }
}
