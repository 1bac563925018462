//! Calendar month representation
//!
//! A `CalendarMonth` is a (year, month) pair with inclusive date bounds. All
//! arithmetic produces new values; nothing is shifted in place.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

const SHORT_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A single calendar month, e.g. "2025-01"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CalendarMonth {
    year: i32,
    month: u32,
}

impl CalendarMonth {
    /// Create a month; `month` is 1-based
    pub fn new(year: i32, month: u32) -> Result<Self, MonthParseError> {
        if !(1..=12).contains(&month) {
            return Err(MonthParseError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }

    /// The month containing `date`
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// First day of the month
    pub fn start_date(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Last day of the month (inclusive)
    pub fn end_date(&self) -> NaiveDate {
        self.next().start_date() - Duration::days(1)
    }

    /// Number of days in the month (28..=31)
    pub fn days(&self) -> u32 {
        self.end_date().day()
    }

    /// Check if a date falls within this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Get the next month
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Get the previous month
    pub fn prev(&self) -> Self {
        self.minus(1)
    }

    /// The month `offset` months before this one, crossing year boundaries
    pub fn minus(&self, offset: u32) -> Self {
        let index = self.year * 12 + (self.month as i32 - 1) - offset as i32;
        Self {
            year: index.div_euclid(12),
            month: index.rem_euclid(12) as u32 + 1,
        }
    }

    /// Short English month name ("Jan")
    pub fn short_name(&self) -> &'static str {
        SHORT_NAMES[(self.month - 1) as usize]
    }

    /// Display label used by charts ("Jan 2024")
    pub fn label(&self) -> String {
        format!("{} {}", self.short_name(), self.year)
    }

    /// Parse a "YYYY-MM" string
    pub fn parse(s: &str) -> Result<Self, MonthParseError> {
        let s = s.trim();
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| MonthParseError::InvalidFormat(s.to_string()))?;

        let year: i32 = year
            .parse()
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;

        Self::new(year, month)
    }
}

impl fmt::Display for CalendarMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Error type for month parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
}

impl fmt::Display for MonthParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthParseError::InvalidFormat(s) => write!(f, "Invalid month format: {}", s),
            MonthParseError::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
        }
    }
}

impl std::error::Error for MonthParseError {}
