//! Storage layer for the expense tracker
//!
//! Provides the append-only expense store on top of a key-value document
//! store, with atomic JSON file writes for the on-disk backend.

pub mod document;
pub mod expenses;
pub mod file_io;

pub use document::{DocumentStore, FileDocumentStore, MemoryDocumentStore};
pub use expenses::{encode_document, ExpenseStore, STORAGE_KEY};
pub use file_io::{read_text, write_text_atomic};

use crate::config::paths::ExpensePaths;
use crate::error::ExpenseError;

/// Open the on-disk expense store for the given paths
pub fn open_file_store(
    paths: &ExpensePaths,
) -> Result<ExpenseStore<FileDocumentStore>, ExpenseError> {
    paths.ensure_directories()?;
    Ok(ExpenseStore::open(FileDocumentStore::new(paths.data_dir())))
}
