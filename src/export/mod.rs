//! Export module for the expense tracker
//!
//! Exports the expense list for use in spreadsheets.

pub mod csv;

pub use self::csv::export_expenses_csv;
