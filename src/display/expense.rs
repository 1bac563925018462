//! Expense list display
//!
//! Filtering by date is a view over the record list; it never touches the
//! store.

use std::fmt::Write;

use chrono::NaiveDate;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{ExpenseRecord, DATE_FORMAT};

use super::format_currency;

/// Stored date rendered with `date_format`, or the raw text if it does not
/// parse or the format string is invalid
fn display_date(record: &ExpenseRecord, date_format: &str) -> String {
    let Some(date) = record.calendar_date() else {
        return record.date.clone();
    };

    let mut formatted = String::new();
    match write!(formatted, "{}", date.format(date_format)) {
        Ok(()) => formatted,
        Err(_) => record.date.clone(),
    }
}

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Records whose stored date text equals `date` in `YYYY-MM-DD` form
///
/// With no date every record is returned, in insertion order.
pub fn filter_by_date(records: &[ExpenseRecord], date: Option<NaiveDate>) -> Vec<ExpenseRecord> {
    match date {
        Some(date) => {
            let wanted = date.format(DATE_FORMAT).to_string();
            records
                .iter()
                .filter(|r| r.date == wanted)
                .cloned()
                .collect()
        }
        None => records.to_vec(),
    }
}

/// Render records as a table
///
/// Dates that parse are shown in `date_format`; anything else is shown as stored.
pub fn format_expense_list(
    records: &[ExpenseRecord],
    currency_symbol: &str,
    date_format: &str,
) -> String {
    if records.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let rows = records.iter().map(|r| ExpenseRow {
        date: display_date(r, date_format),
        category: r.category.clone(),
        amount: format_currency(r.amount, currency_symbol),
    });

    let mut output = Table::new(rows).with(Style::rounded()).to_string();
    output.push('\n');
    output
}
