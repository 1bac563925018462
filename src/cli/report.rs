//! CLI commands for reports
//!
//! Spending summary and the six-month chart.

use std::path::PathBuf;

use chrono::NaiveDate;

use crate::display::format_monthly_overview;
use crate::error::ExpenseResult;
use crate::services::{Command, Controller};
use crate::storage::{write_text_atomic, DocumentStore};

use super::parse_date_arg;

/// Handle `summary`
pub fn handle_summary<S: DocumentStore>(
    controller: &mut Controller<S>,
    date: Option<String>,
    today: NaiveDate,
) -> ExpenseResult<()> {
    let selected = parse_date_arg(date.as_deref())?;
    let view = controller.dispatch(Command::SetDateFilter(selected), today)?;

    println!("Spending Summary as of {}", today);
    println!("{}", "=".repeat(37));
    print!("{}", view.summary.format_terminal());

    Ok(())
}

/// Handle `chart`
pub fn handle_chart<S: DocumentStore>(
    controller: &Controller<S>,
    output: Option<PathBuf>,
    text: bool,
    today: NaiveDate,
) -> ExpenseResult<()> {
    let view = controller.render(today);

    if text {
        print!(
            "{}",
            format_monthly_overview(&view.aggregates, &controller.settings().currency_symbol)
        );
        return Ok(());
    }

    let json = view.chart.to_json()?;

    if let Some(path) = output {
        write_text_atomic(&path, &json)?;
        println!("Chart written to: {}", path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}
