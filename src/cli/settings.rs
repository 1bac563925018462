//! Settings CLI commands

use chrono::NaiveDate;

use crate::config::ExpensePaths;
use crate::error::ExpenseResult;
use crate::services::{Command, Controller};
use crate::storage::{DocumentStore, STORAGE_KEY};

/// Handle `theme`
pub fn handle_theme<S: DocumentStore>(
    controller: &mut Controller<S>,
    today: NaiveDate,
) -> ExpenseResult<()> {
    let view = controller.dispatch(Command::ToggleTheme, today)?;
    println!("Display mode: {}", view.theme);
    Ok(())
}

/// Handle `config`
pub fn handle_config<S: DocumentStore>(
    controller: &Controller<S>,
    paths: &ExpensePaths,
) -> ExpenseResult<()> {
    let settings = controller.settings();

    println!("Expense Tracker Configuration");
    println!("=============================");
    println!("Base directory:  {}", paths.base_dir().display());
    println!(
        "Expense data:    {}",
        paths.data_dir().join(format!("{}.json", STORAGE_KEY)).display()
    );
    println!("Settings file:   {}", paths.settings_file().display());
    println!();
    println!("Settings:");
    println!("  Currency symbol: {}", settings.currency_symbol);
    println!("  Display mode:    {}", settings.theme);
    println!("  Date format:     {}", settings.date_format);
    println!();
    println!("Expenses stored: {}", controller.store().len());

    Ok(())
}
