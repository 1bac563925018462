//! Bar chart description
//!
//! Builds a declarative chart object (Chart.js layout) from the six-month
//! breakdown. The renderer that consumes it is external; this module only
//! produces data, colours and labels.

use serde::Serialize;

use crate::reports::{AggregationResult, MonthlyBreakdown};

/// Longest month, and so the number of x-axis labels
pub const MAX_DAYS: u32 = 31;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: String,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    /// Days of the month, 1..=31
    pub labels: Vec<u32>,
    pub datasets: Vec<Dataset>,
}

/// One bar series: a single calendar month
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub background_color: String,
    pub border_color: String,
    pub border_width: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartOptions {
    pub responsive: bool,
    pub plugins: Plugins,
    pub scales: Scales,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plugins {
    pub legend: Legend,
    pub tooltip: Tooltip,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub position: String,
}

/// Tooltip settings for the renderer
///
/// `valuePrefix` is not a Chart.js option. Chart.js formats tooltip labels
/// through a JavaScript callback, which JSON cannot carry, so the renderer is
/// expected to install a `label` callback that prints `valuePrefix` followed
/// by the raw value. Plain Chart.js ignores the key and shows bare numbers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tooltip {
    pub value_prefix: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scales {
    pub x: Axis,
    pub y: Axis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    pub begin_at_zero: bool,
    pub title: AxisTitle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTitle {
    pub display: bool,
    pub text: String,
}

impl Axis {
    fn titled(text: impl Into<String>) -> Self {
        Self {
            begin_at_zero: true,
            title: AxisTitle {
                display: true,
                text: text.into(),
            },
        }
    }
}

/// Colour channels for the month at `offset`
///
/// Distinct for offsets 0..6.
pub fn month_color(offset: u32) -> (u32, u32, u32) {
    ((offset * 40) % 255, (offset * 70) % 255, (offset * 100) % 255)
}

fn rgba((r, g, b): (u32, u32, u32), alpha: &str) -> String {
    format!("rgba({}, {}, {}, {})", r, g, b, alpha)
}

impl Dataset {
    pub fn from_month(month: &MonthlyBreakdown) -> Self {
        let color = month_color(month.offset);
        Self {
            label: month.label.clone(),
            data: month.days.iter().map(|amount| amount.as_f64()).collect(),
            background_color: rgba(color, "0.5"),
            border_color: rgba(color, "1"),
            border_width: 1,
        }
    }
}

impl ChartConfig {
    /// Bar chart of daily spending, one dataset per trailing month
    pub fn daily_spending(result: &AggregationResult, currency_symbol: &str) -> Self {
        Self {
            kind: "bar".to_string(),
            data: ChartData {
                labels: (1..=MAX_DAYS).collect(),
                datasets: result.months.iter().map(Dataset::from_month).collect(),
            },
            options: ChartOptions {
                responsive: true,
                plugins: Plugins {
                    legend: Legend {
                        position: "top".to_string(),
                    },
                    tooltip: Tooltip {
                        value_prefix: currency_symbol.to_string(),
                    },
                },
                scales: Scales {
                    x: Axis::titled("Day of the Month"),
                    y: Axis::titled(format!("Expense ({})", currency_symbol)),
                },
            },
        }
    }

    /// Pretty-printed JSON for the renderer
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
