//! Command dispatch
//!
//! Every user action is a `Command`. The controller applies it to the store
//! or settings, recomputes all aggregates and hands back a fresh `View`.

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::config::{ExpensePaths, Settings, Theme};
use crate::display::{filter_by_date, ChartConfig, SummaryView};
use crate::error::ExpenseResult;
use crate::models::{ExpenseRecord, NewExpense};
use crate::reports::AggregationResult;
use crate::storage::{DocumentStore, ExpenseStore};

/// A user action
#[derive(Debug, Clone)]
pub enum Command {
    /// Submit the expense form
    AddExpense(NewExpense),
    /// Change (or clear) the date filter
    SetDateFilter(Option<NaiveDate>),
    /// Switch between light and dark display
    ToggleTheme,
}

/// Everything needed to draw the screen after a command
#[derive(Debug, Clone)]
pub struct View {
    /// Records passing the date filter, in insertion order
    pub visible: Vec<ExpenseRecord>,
    pub aggregates: AggregationResult,
    pub summary: SummaryView,
    pub chart: ChartConfig,
    pub theme: Theme,
}

/// Owns the store, settings and filter state
pub struct Controller<S> {
    store: ExpenseStore<S>,
    settings: Settings,
    settings_paths: Option<ExpensePaths>,
    filter: Option<NaiveDate>,
}

impl<S: DocumentStore> Controller<S> {
    pub fn new(store: ExpenseStore<S>, settings: Settings) -> Self {
        Self {
            store,
            settings,
            settings_paths: None,
            filter: None,
        }
    }

    /// Persist settings changes (theme) under `paths`
    pub fn with_settings_paths(mut self, paths: ExpensePaths) -> Self {
        self.settings_paths = Some(paths);
        self
    }

    /// Apply a command and render the result
    pub fn dispatch(&mut self, command: Command, today: NaiveDate) -> ExpenseResult<View> {
        debug!(?command, "dispatching command");

        match command {
            Command::AddExpense(input) => {
                self.store.add(input)?;
            }
            Command::SetDateFilter(date) => {
                self.filter = date;
            }
            Command::ToggleTheme => {
                let mut toggled = self.settings.clone();
                toggled.theme = toggled.theme.toggled();
                if let Some(paths) = &self.settings_paths {
                    toggled.save(paths)?;
                }
                self.settings = toggled;
                info!(theme = %self.settings.theme, "display theme changed");
            }
        }

        Ok(self.render(today))
    }

    /// Recompute everything for the current state
    pub fn render(&self, today: NaiveDate) -> View {
        let records = self.store.records();
        let aggregates = AggregationResult::generate(records, today, self.filter);
        let symbol = &self.settings.currency_symbol;

        View {
            visible: filter_by_date(records, self.filter),
            summary: SummaryView::from_result(&aggregates, symbol),
            chart: ChartConfig::daily_spending(&aggregates, symbol),
            aggregates,
            theme: self.settings.theme,
        }
    }

    pub fn filter(&self) -> Option<NaiveDate> {
        self.filter
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn store(&self) -> &ExpenseStore<S> {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::storage::{MemoryDocumentStore, STORAGE_KEY};
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn controller() -> Controller<MemoryDocumentStore> {
        Controller::new(
            ExpenseStore::new(MemoryDocumentStore::new()),
            Settings::default(),
        )
    }

    #[test]
    fn test_add_expense_recomputes() {
        let mut controller = controller();
        let today = date(2024, 2, 1);

        controller
            .dispatch(
                Command::AddExpense(NewExpense::new("2024-01-15", "Food", "10")),
                today,
            )
            .unwrap();
        controller
            .dispatch(
                Command::AddExpense(NewExpense::new("2024-01-15", "Transport", "5")),
                today,
            )
            .unwrap();
        let view = controller
            .dispatch(
                Command::AddExpense(NewExpense::new("2024-02-01", "Food", "20.00")),
                today,
            )
            .unwrap();

        assert_eq!(view.visible.len(), 3);
        assert_eq!(view.summary.total, "$35.00");
        assert_eq!(view.summary.today, "$20.00");
        assert_eq!(view.summary.monthly, "$20.00");
        assert_eq!(view.aggregates.months[1].day(15), Some(Money::from_cents(1500)));
        assert!(controller
            .store()
            .backend()
            .get(STORAGE_KEY)
            .unwrap()
            .is_some());
    }

    #[test]
    fn test_rejected_expense_leaves_state_untouched() {
        let mut controller = controller();
        let err = controller
            .dispatch(
                Command::AddExpense(NewExpense::new("2024-01-15", "Food", "-3")),
                date(2024, 2, 1),
            )
            .unwrap_err();

        assert!(err.is_validation());
        assert!(controller.store().is_empty());
    }

    #[test]
    fn test_date_filter_narrows_list_and_sets_selected_total() {
        let mut controller = controller();
        let today = date(2024, 2, 1);
        for (d, c, a) in [
            ("2024-01-15", "Food", "10"),
            ("2024-01-16", "Food", "7"),
            ("2024-01-15", "Fun", "2.5"),
        ] {
            controller
                .dispatch(Command::AddExpense(NewExpense::new(d, c, a)), today)
                .unwrap();
        }

        let view = controller
            .dispatch(Command::SetDateFilter(Some(date(2024, 1, 15))), today)
            .unwrap();
        assert_eq!(view.visible.len(), 2);
        assert_eq!(view.summary.selected_day, "$12.50");
        assert_eq!(view.summary.total, "$19.50");
        assert_eq!(controller.store().len(), 3);

        let view = controller
            .dispatch(Command::SetDateFilter(None), today)
            .unwrap();
        assert_eq!(view.visible.len(), 3);
        assert_eq!(view.summary.selected_day, "$0.00");
    }

    #[test]
    fn test_filter_survives_add() {
        let mut controller = controller();
        let today = date(2024, 2, 1);
        controller
            .dispatch(Command::SetDateFilter(Some(today)), today)
            .unwrap();
        let view = controller
            .dispatch(
                Command::AddExpense(NewExpense::new("2024-01-01", "Food", "1")),
                today,
            )
            .unwrap();

        assert_eq!(controller.filter(), Some(today));
        assert!(view.visible.is_empty());
    }

    #[test]
    fn test_toggle_theme_is_persisted() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut controller = controller().with_settings_paths(paths.clone());

        let view = controller
            .dispatch(Command::ToggleTheme, date(2024, 2, 1))
            .unwrap();
        assert_eq!(view.theme, Theme::Dark);
        assert!(view.visible.is_empty());

        let saved = Settings::load_or_create(&paths).unwrap();
        assert_eq!(saved.theme, Theme::Dark);
    }

    #[test]
    fn test_failed_theme_save_keeps_theme() {
        let temp_dir = TempDir::new().unwrap();
        // A plain file where the base directory should be makes every save fail
        let blocker = temp_dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();
        let paths = ExpensePaths::with_base_dir(blocker);
        let mut controller = controller().with_settings_paths(paths);

        assert!(controller
            .dispatch(Command::ToggleTheme, date(2024, 2, 1))
            .is_err());
        assert_eq!(controller.settings().theme, Theme::Light);
        assert_eq!(controller.render(date(2024, 2, 1)).theme, Theme::Light);
    }

    #[test]
    fn test_chart_uses_currency_symbol() {
        let settings = Settings {
            currency_symbol: "£".into(),
            ..Settings::default()
        };
        let controller = Controller::new(ExpenseStore::new(MemoryDocumentStore::new()), settings);
        let view = controller.render(date(2024, 2, 1));

        assert_eq!(view.chart.options.scales.y.title.text, "Expense (£)");
        assert_eq!(view.summary.total, "£0.00");
    }
}
