//! Display formatting for terminal output
//!
//! Provides the expense list, spending summary and chart description built
//! from store contents and aggregation results.

pub mod chart;
pub mod expense;
pub mod summary;

pub use chart::ChartConfig;
pub use expense::{filter_by_date, format_expense_list};
pub use summary::{format_monthly_overview, SummaryView};

use crate::models::Money;

/// Format an amount with a currency symbol and two decimals (`$12.50`)
pub fn format_currency(amount: Money, currency_symbol: &str) -> String {
    amount.format_with_symbol(currency_symbol)
}
