//! Expense CLI commands
//!
//! Adding, listing and exporting expenses.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use chrono::NaiveDate;

use crate::display::{format_currency, format_expense_list};
use crate::error::{ExpenseError, ExpenseResult};
use crate::export::export_expenses_csv;
use crate::models::{NewExpense, DATE_FORMAT};
use crate::services::{Command, Controller};
use crate::storage::DocumentStore;

use super::parse_date_arg;

/// Handle `add`
pub fn handle_add<S: DocumentStore>(
    controller: &mut Controller<S>,
    amount: String,
    category: String,
    date: Option<String>,
    today: NaiveDate,
) -> ExpenseResult<()> {
    let date = date.unwrap_or_else(|| today.format(DATE_FORMAT).to_string());
    let view = controller.dispatch(
        Command::AddExpense(NewExpense::new(date, category, amount)),
        today,
    )?;

    if let Some(added) = view.visible.last() {
        println!(
            "Added expense: {} {} {}",
            added.date,
            added.category,
            format_currency(added.amount, &controller.settings().currency_symbol)
        );
    }
    println!("Total spending: {}", view.summary.total);

    Ok(())
}

/// Handle `list`
pub fn handle_list<S: DocumentStore>(
    controller: &mut Controller<S>,
    date: Option<String>,
    today: NaiveDate,
) -> ExpenseResult<()> {
    let filter = parse_date_arg(date.as_deref())?;
    let view = controller.dispatch(Command::SetDateFilter(filter), today)?;

    let settings = controller.settings();
    print!(
        "{}",
        format_expense_list(&view.visible, &settings.currency_symbol, &settings.date_format)
    );
    if let Some(day) = filter {
        println!(
            "{} expense(s) on {}, totalling {}",
            view.visible.len(),
            day.format(DATE_FORMAT),
            view.summary.selected_day
        );
    }

    Ok(())
}

/// Handle `export`
pub fn handle_export<S: DocumentStore>(
    controller: &Controller<S>,
    path: PathBuf,
) -> ExpenseResult<()> {
    let file = File::create(&path).map_err(|e| {
        ExpenseError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;

    let records = controller.store().records();
    export_expenses_csv(records, BufWriter::new(file))?;
    println!(
        "Exported {} expense(s) to: {}",
        records.len(),
        path.display()
    );

    Ok(())
}
