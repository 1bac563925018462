//! Core data models for the expense tracker
//!
//! This module contains the data structures of the expense domain: records,
//! amounts and calendar months.

pub mod expense;
pub mod money;
pub mod month;

pub use expense::{ExpenseRecord, ExpenseValidationError, NewExpense, DATE_FORMAT};
pub use money::Money;
pub use month::CalendarMonth;
