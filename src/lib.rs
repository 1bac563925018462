//! Expense tracker - personal spending log with rolling summaries
//!
//! This library provides the core functionality for the `expenses` command
//! line tool: an append-only expense store persisted as a single JSON
//! document, and pure aggregation over it (today, a selected day, month,
//! trailing six months, year, and a per-day breakdown of the last six
//! calendar months).
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `cli`: Command line subcommands and handlers
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Expense records, money and calendar months
//! - `storage`: Document stores and the expense store
//! - `reports`: Windowed spending aggregation
//! - `display`: Currency formatting, list table, summary and chart description
//! - `services`: Command dispatch tying the layers together
//! - `export`: CSV export
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use expense_tracker::models::NewExpense;
//! use expense_tracker::reports::AggregationResult;
//! use expense_tracker::storage::{ExpenseStore, MemoryDocumentStore};
//!
//! let mut store = ExpenseStore::new(MemoryDocumentStore::new());
//! store.add(NewExpense::new("2024-02-01", "Food", "20.00")).unwrap();
//!
//! let today = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
//! let summary = AggregationResult::generate(store.records(), today, None);
//! assert_eq!(summary.today_total.to_string(), "$20.00");
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
pub use logging::init_tracing;
