//! Spending summary display
//!
//! Turns an `AggregationResult` into currency strings and a terminal report,
//! including a text rendering of the six-month breakdown.

use serde::Serialize;

use crate::reports::AggregationResult;

use super::format_currency;

/// Width of the longest bar in the monthly overview
const BAR_WIDTH: usize = 30;

/// Display-ready aggregates
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryView {
    pub total: String,
    pub today: String,
    pub selected_day: String,
    pub monthly: String,
    pub half_yearly: String,
    pub yearly: String,
}

impl SummaryView {
    pub fn from_result(result: &AggregationResult, currency_symbol: &str) -> Self {
        let fmt = |amount| format_currency(amount, currency_symbol);
        Self {
            total: fmt(result.total),
            today: fmt(result.today_total),
            selected_day: fmt(result.selected_total),
            monthly: fmt(result.month_to_date),
            half_yearly: fmt(result.trailing_six_months),
            yearly: fmt(result.year_to_date),
        }
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("{:<24} {:>12}\n", "Total Spending:", self.total));
        output.push_str(&format!("{:<24} {:>12}\n", "Spent Today:", self.today));
        output.push_str(&format!(
            "{:<24} {:>12}\n",
            "Spent on Selected Day:", self.selected_day
        ));
        output.push('\n');
        output.push_str("Periodic Spending\n");
        output.push_str(&"-".repeat(37));
        output.push('\n');
        output.push_str(&format!("{:<24} {:>12}\n", "Monthly:", self.monthly));
        output.push_str(&format!("{:<24} {:>12}\n", "Half-Yearly:", self.half_yearly));
        output.push_str(&format!("{:<24} {:>12}\n", "Yearly:", self.yearly));

        output
    }
}

/// Text overview of the six-month breakdown: one bar per month
pub fn format_monthly_overview(result: &AggregationResult, currency_symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "{:<10} {:>12} {:<w$} {}\n",
        "Month",
        "Total",
        "",
        "Busiest Day",
        w = BAR_WIDTH
    ));
    output.push_str(&"-".repeat(BAR_WIDTH + 40));
    output.push('\n');

    let totals: Vec<_> = result.months.iter().map(|m| m.total()).collect();
    let largest = totals.iter().map(|t| t.cents()).max().unwrap_or(0);

    for (month, total) in result.months.iter().zip(&totals) {
        let bar_len = if largest > 0 {
            (total.cents() as f64 / largest as f64 * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        let busiest = month
            .busiest_day()
            .map(|(day, amount)| {
                format!("{} ({})", day, format_currency(amount, currency_symbol))
            })
            .unwrap_or_else(|| "-".to_string());

        output.push_str(&format!(
            "{:<10} {:>12} {:<w$} {}\n",
            month.label,
            format_currency(*total, currency_symbol),
            "#".repeat(bar_len),
            busiest,
            w = BAR_WIDTH
        ));
    }

    output
}
