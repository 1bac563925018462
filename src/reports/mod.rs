//! Reports module for the expense tracker
//!
//! Pure aggregation over the expense list: windowed totals and the rolling
//! per-day breakdown of recent months.

pub mod daily;
pub mod spending;

pub use daily::{month_total, trailing_months, MonthlyBreakdown, TRAILING_MONTHS};
pub use spending::{sum_where, trailing_window_start, AggregationResult};
