//! Service layer for the expense tracker
//!
//! The service layer ties the store, the aggregation reports and the display
//! layer together behind explicit commands.

pub mod controller;

pub use controller::{Command, Controller, View};
