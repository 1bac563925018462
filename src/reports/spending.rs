//! Spending summary
//!
//! Derives every windowed total from the flat record list in one pass per
//! window. Nothing here is cached; callers recompute after each change.

use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;
use tracing::debug;

use crate::models::{CalendarMonth, ExpenseRecord, Money};

use super::daily::{trailing_months, MonthlyBreakdown, TRAILING_MONTHS};

/// All spending aggregates for one reference date
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregationResult {
    /// Reference date ("now")
    pub today: NaiveDate,
    /// Date selected in the filter, if any
    pub selected: Option<NaiveDate>,
    /// Every record, dated or not
    pub total: Money,
    pub today_total: Money,
    /// Zero when no date is selected
    pub selected_total: Money,
    pub month_to_date: Money,
    /// Records dated strictly after `today` minus six calendar months
    pub trailing_six_months: Money,
    pub year_to_date: Money,
    /// Per-day breakdown of the last six calendar months, most recent first
    pub months: Vec<MonthlyBreakdown>,
}

impl AggregationResult {
    /// Compute every aggregate for `records` relative to `today`
    pub fn generate(
        records: &[ExpenseRecord],
        today: NaiveDate,
        selected: Option<NaiveDate>,
    ) -> Self {
        let current_month = CalendarMonth::of(today);
        let half_year_start = trailing_window_start(today);

        let result = Self {
            today,
            selected,
            total: records.iter().map(|r| r.amount).sum(),
            today_total: sum_where(records, |date| date == today),
            selected_total: selected
                .map(|day| sum_where(records, |date| date == day))
                .unwrap_or_default(),
            month_to_date: sum_where(records, |date| current_month.contains(date)),
            trailing_six_months: sum_where(records, |date| date > half_year_start),
            year_to_date: sum_where(records, |date| date.year() == today.year()),
            months: trailing_months(records, today),
        };

        debug!(
            records = records.len(),
            %today,
            total = %result.total,
            "recomputed spending aggregates"
        );
        result
    }
}

/// Exclusive lower bound of the trailing six-month window
///
/// Same day-of-month six months back. A day past the end of the target month
/// rolls forward into the next one, so Aug 31 gives Mar 2 (leap year) or Mar 3.
pub fn trailing_window_start(today: NaiveDate) -> NaiveDate {
    CalendarMonth::of(today)
        .minus(TRAILING_MONTHS)
        .start_date()
        .checked_add_days(Days::new(u64::from(today.day0())))
        .unwrap_or(NaiveDate::MIN)
}

/// Sum of amounts for records whose date parses and satisfies `predicate`
pub fn sum_where<F>(records: &[ExpenseRecord], predicate: F) -> Money
where
    F: Fn(NaiveDate) -> bool,
{
    records
        .iter()
        .filter(|r| r.calendar_date().is_some_and(&predicate))
        .map(|r| r.amount)
        .sum()
}
