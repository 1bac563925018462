//! Per-day spending across recent calendar months
//!
//! Each month is derived from the reference date independently, so the rows
//! never depend on each other.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::models::{CalendarMonth, ExpenseRecord, Money};

use super::spending::sum_where;

/// Number of months in the rolling breakdown
pub const TRAILING_MONTHS: u32 = 6;

/// Spending per day of one calendar month
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyBreakdown {
    /// How many months before the reference month (0 = current)
    pub offset: u32,
    pub month: CalendarMonth,
    /// Display label, e.g. "Jan 2024"
    pub label: String,
    /// `days[d - 1]` is the amount spent on day `d`
    pub days: Vec<Money>,
}

impl MonthlyBreakdown {
    /// Build the breakdown for `month`
    pub fn generate(records: &[ExpenseRecord], month: CalendarMonth, offset: u32) -> Self {
        let (start, end) = (month.start_date(), month.end_date());
        let mut days = vec![Money::zero(); month.days() as usize];

        for record in records {
            let Some(date) = record.calendar_date() else {
                continue;
            };
            if date >= start && date <= end {
                days[date.day0() as usize] += record.amount;
            }
        }

        Self {
            offset,
            month,
            label: month.label(),
            days,
        }
    }

    /// Sum of every day in the month
    pub fn total(&self) -> Money {
        self.days.iter().sum()
    }

    /// Amount spent on a 1-based day of the month
    pub fn day(&self, day: u32) -> Option<Money> {
        day.checked_sub(1)
            .and_then(|i| self.days.get(i as usize))
            .copied()
    }

    /// The day with the highest spending, if anything was spent
    pub fn busiest_day(&self) -> Option<(u32, Money)> {
        self.days
            .iter()
            .enumerate()
            .filter(|(_, amount)| !amount.is_zero())
            .max_by(|(ia, a), (ib, b)| a.cmp(b).then(ib.cmp(ia)))
            .map(|(i, amount)| (i as u32 + 1, *amount))
    }
}

/// Per-day breakdowns for the current month and the five before it,
/// most recent first
pub fn trailing_months(records: &[ExpenseRecord], today: NaiveDate) -> Vec<MonthlyBreakdown> {
    let current = CalendarMonth::of(today);
    (0..TRAILING_MONTHS)
        .map(|offset| MonthlyBreakdown::generate(records, current.minus(offset), offset))
        .collect()
}

/// Total for one calendar month, computed without the per-day matrix
pub fn month_total(records: &[ExpenseRecord], month: CalendarMonth) -> Money {
    sum_where(records, |date| month.contains(date))
}
