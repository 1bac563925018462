//! Expense record model
//!
//! An expense is a dated amount with a category label. Records are immutable
//! once created; the store only ever appends them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Date format used for stored and displayed expense dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single logged spending event
///
/// The date is kept as the stored text. Documents written by other tools may
/// contain dates that do not parse; such a record still counts toward the
/// unconditional total but never matches a date window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Calendar date as `YYYY-MM-DD`
    pub date: String,

    /// Short category label (e.g. "Food")
    pub category: String,

    /// Amount spent
    pub amount: Money,
}

impl ExpenseRecord {
    /// Create a record for a known calendar date
    pub fn new(date: NaiveDate, category: impl Into<String>, amount: Money) -> Self {
        Self {
            date: date.format(DATE_FORMAT).to_string(),
            category: category.into(),
            amount,
        }
    }

    /// The record's calendar date, if the stored text parses as one
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT).ok()
    }

    /// Check the invariants required of newly appended records
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        parse_strict_date(&self.date)?;

        if self.category.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyCategory);
        }

        if self.amount.is_negative() {
            return Err(ExpenseValidationError::NegativeAmount(self.amount));
        }

        if self.amount > Money::MAX {
            return Err(ExpenseValidationError::AmountTooLarge(self.amount));
        }

        Ok(())
    }
}

impl fmt::Display for ExpenseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.date, self.category, self.amount)
    }
}

/// Raw form input for a new expense, before validation
#[derive(Debug, Clone, Default)]
pub struct NewExpense {
    pub date: String,
    pub category: String,
    pub amount: String,
}

impl NewExpense {
    pub fn new(
        date: impl Into<String>,
        category: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            category: category.into(),
            amount: amount.into(),
        }
    }

    /// Validate the raw input and build a record
    pub fn into_record(self) -> Result<ExpenseRecord, ExpenseValidationError> {
        let date = parse_strict_date(&self.date)?;

        let amount = Money::parse(&self.amount)
            .map_err(|_| ExpenseValidationError::InvalidAmount(self.amount.clone()))?;

        let record = ExpenseRecord::new(date, self.category.trim(), amount);
        record.validate()?;
        Ok(record)
    }
}

/// Parse a date that must be written exactly as `YYYY-MM-DD`
pub fn parse_strict_date(s: &str) -> Result<NaiveDate, ExpenseValidationError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ExpenseValidationError::MissingDate);
    }

    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .ok()
        .filter(|d| d.format(DATE_FORMAT).to_string() == s)
        .ok_or_else(|| ExpenseValidationError::InvalidDate(s.to_string()))
}

/// Validation errors for expense input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    MissingDate,
    InvalidDate(String),
    InvalidAmount(String),
    NegativeAmount(Money),
    AmountTooLarge(Money),
    EmptyCategory,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingDate => write!(f, "Date is required"),
            Self::InvalidDate(s) => write!(f, "Invalid date '{}'. Use YYYY-MM-DD", s),
            Self::InvalidAmount(s) => write!(f, "Invalid amount '{}'", s),
            Self::NegativeAmount(m) => write!(f, "Amount must not be negative: {}", m),
            Self::AmountTooLarge(m) => {
                write!(f, "Amount must not exceed {}: {}", Money::MAX, m)
            }
            Self::EmptyCategory => write!(f, "Category is required"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
