//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the controller.

pub mod expense;
pub mod report;
pub mod settings;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::ExpensePaths;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::expense::parse_strict_date;
use crate::services::Controller;
use crate::storage::DocumentStore;

pub use expense::{handle_add, handle_export, handle_list};
pub use report::{handle_chart, handle_summary};
pub use settings::{handle_config, handle_theme};

/// Top-level subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log a new expense
    Add {
        /// Amount spent (e.g. "12.50")
        amount: String,
        /// Category label
        #[arg(short, long)]
        category: String,
        /// Expense date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List expenses, optionally only those on one date
    #[command(alias = "ls")]
    List {
        /// Show only expenses on this date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Show spending totals
    Summary {
        /// Also total the spending on this date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Emit the six-month daily spending chart description
    Chart {
        /// Write the chart JSON to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Print a text overview instead of JSON
        #[arg(long)]
        text: bool,
    },

    /// Toggle between light and dark display mode
    Theme,

    /// Export all expenses to CSV
    Export {
        /// Destination CSV file
        path: PathBuf,
    },

    /// Show current configuration and paths
    Config,
}

/// Dispatch a parsed command
pub fn handle_command<S: DocumentStore>(
    controller: &mut Controller<S>,
    paths: &ExpensePaths,
    cmd: Commands,
    today: NaiveDate,
) -> ExpenseResult<()> {
    match cmd {
        Commands::Add {
            amount,
            category,
            date,
        } => handle_add(controller, amount, category, date, today),
        Commands::List { date } => handle_list(controller, date, today),
        Commands::Summary { date } => handle_summary(controller, date, today),
        Commands::Chart { output, text } => handle_chart(controller, output, text, today),
        Commands::Theme => handle_theme(controller, today),
        Commands::Export { path } => handle_export(controller, path),
        Commands::Config => handle_config(controller, paths),
    }
}

/// Parse an optional `YYYY-MM-DD` argument
pub fn parse_date_arg(date: Option<&str>) -> ExpenseResult<Option<NaiveDate>> {
    date.map(|s| parse_strict_date(s).map_err(|e| ExpenseError::Validation(e.to_string())))
        .transpose()
}
