use anyhow::Result;
use clap::Parser;

use expense_tracker::cli::{handle_command, parse_date_arg, Commands};
use expense_tracker::config::{ExpensePaths, Settings};
use expense_tracker::services::Controller;
use expense_tracker::storage::open_file_store;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Terminal-based personal expense tracker",
    long_about = "Log dated expenses by category and see what you spent today, \
                  on any given day, this month, over the last six months and \
                  this year, plus a day-by-day chart of the last six months."
)]
struct Cli {
    /// Reference date for "today" (YYYY-MM-DD); defaults to the local date
    #[arg(long, global = true, env = "EXPENSE_TRACKER_TODAY")]
    today: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() -> Result<()> {
    expense_tracker::init_tracing();
    let cli = Cli::parse();

    let today = parse_date_arg(cli.today.as_deref())?
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    // Initialize paths, settings and storage
    let paths = ExpensePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let store = open_file_store(&paths)?;
    let mut controller = Controller::new(store, settings).with_settings_paths(paths.clone());

    match cli.command {
        Some(cmd) => handle_command(&mut controller, &paths, cmd, today)?,
        None => {
            println!("Expense Tracker - personal spending log");
            println!();
            println!("Run 'expenses --help' for usage information.");
            println!("Run 'expenses add 12.50 --category Food' to log an expense.");
        }
    }

    Ok(())
}
