//! Money type for representing expense amounts
//!
//! Internally stores amounts in cents (i64) so that sums over many records
//! stay exact. On the wire an amount is a plain JSON number in currency units
//! (`12.5`), which is what the persisted document has always contained.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign};

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

/// Largest accepted amount magnitude: ten trillion currency units
const MAX_CENTS: i64 = 1_000_000_000_000_000;

impl Money {
    /// Largest amount a single record may carry
    pub const MAX: Money = Money(MAX_CENTS);

    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use expense_tracker::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// assert_eq!(amount.to_string(), "$10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Convert a floating point amount in currency units, rounding to the cent
    ///
    /// Fails for NaN, infinities and magnitudes above [`Money::MAX`].
    pub fn from_f64(amount: f64) -> Result<Self, MoneyParseError> {
        if !amount.is_finite() {
            return Err(MoneyParseError::NotFinite);
        }
        let cents = (amount * 100.0).round();
        if cents.abs() > MAX_CENTS as f64 {
            return Err(MoneyParseError::OutOfRange(amount.to_string()));
        }
        Ok(Self(cents as i64))
    }

    /// Like [`Money::from_f64`], but clamps to `±Money::MAX` instead of failing
    ///
    /// NaN becomes zero.
    pub fn from_f64_saturating(amount: f64) -> Self {
        if amount.is_nan() {
            return Self::zero();
        }
        let cents = (amount * 100.0).round().clamp(-(MAX_CENTS as f64), MAX_CENTS as f64);
        Self(cents as i64)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// The amount in currency units as a float
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
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
    /// Accepts formats: "10.50", "$10.50", "10", "10.5", ".5", "-3"
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();

        let (negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, s)
        };

        let s = s.strip_prefix('$').unwrap_or(s);
        let digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());

        let cents = if s.contains('.') {
            let parts: Vec<&str> = s.split('.').collect();
            if parts.len() != 2
                || (parts[0].is_empty() && parts[1].is_empty())
                || !digits(parts[0])
            {
                return Err(MoneyParseError::InvalidFormat(s.to_string()));
            }

            let dollars: i64 = if parts[0].is_empty() {
                0
            } else {
                parts[0]
                    .parse()
                    .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
            };

            // Pad or round cents to 2 digits
            let cents_str = parts[1];
            if !digits(cents_str) {
                return Err(MoneyParseError::InvalidFormat(s.to_string()));
            }
            let cents: i64 = match cents_str.len() {
                0 => 0,
                1 => cents_str.parse::<i64>().unwrap_or(0) * 10,
                _ => {
                    let head: i64 = cents_str[..2].parse().unwrap_or(0);
                    let round_up = cents_str.as_bytes()[2..]
                        .first()
                        .is_some_and(|d| *d >= b'5');
                    head + i64::from(round_up)
                }
            };

            dollars
                .checked_mul(100)
                .and_then(|d| d.checked_add(cents))
                .ok_or_else(|| MoneyParseError::OutOfRange(s.to_string()))?
        } else {
            if s.is_empty() || !digits(s) {
                return Err(MoneyParseError::InvalidFormat(s.to_string()));
            }
            s.parse::<i64>()
                .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
                .checked_mul(100)
                .ok_or_else(|| MoneyParseError::OutOfRange(s.to_string()))?
        };

        if cents > MAX_CENTS {
            return Err(MoneyParseError::OutOfRange(s.to_string()));
        }

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Format with a currency symbol and exactly two decimals
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!(
                "-{}{}.{:02}",
                symbol,
                self.dollars().abs(),
                self.cents_part()
            )
        } else {
            format!("{}{}.{:02}", symbol, self.dollars(), self.cents_part())
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol("$"))
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

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

/// Stored amounts outside `±Money::MAX` are clamped rather than rejected, so
/// one oversized record cannot fail the whole document.
impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = f64::deserialize(deserializer)?;
        Ok(Money::from_f64_saturating(amount))
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    NotFinite,
    OutOfRange(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::NotFinite => write!(f, "Amount is not a finite number"),
            MoneyParseError::OutOfRange(s) => write!(f, "Amount out of range: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
