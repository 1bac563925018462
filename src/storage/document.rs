//! Key-value document stores
//!
//! The expense store persists one opaque text document under a fixed key.
//! `FileDocumentStore` keeps each key in `<dir>/<key>.json`;
//! `MemoryDocumentStore` keeps everything in a map.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::ExpenseResult;

use super::file_io::{read_text, write_text_atomic};

/// A local key-value persistence substrate
pub trait DocumentStore {
    /// Read the document stored under `key`, if any
    fn get(&self, key: &str) -> ExpenseResult<Option<String>>;

    /// Replace the document stored under `key`
    fn set(&mut self, key: &str, value: &str) -> ExpenseResult<()>;
}

/// Documents as JSON files in a directory
#[derive(Debug, Clone)]
pub struct FileDocumentStore {
    dir: PathBuf,
}

impl FileDocumentStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Path of the file backing `key`
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl DocumentStore for FileDocumentStore {
    fn get(&self, key: &str) -> ExpenseResult<Option<String>> {
        read_text(self.path_for(key))
    }

    fn set(&mut self, key: &str, value: &str) -> ExpenseResult<()> {
        write_text_atomic(self.path_for(key), value)
    }
}

/// In-memory documents
#[derive(Debug, Clone, Default)]
pub struct MemoryDocumentStore {
    documents: HashMap<String, String>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a document, e.g. with data written by another tool
    pub fn with_document(mut self, key: &str, value: &str) -> Self {
        self.documents.insert(key.to_string(), value.to_string());
        self
    }
}

impl DocumentStore for MemoryDocumentStore {
    fn get(&self, key: &str) -> ExpenseResult<Option<String>> {
        Ok(self.documents.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> ExpenseResult<()> {
        self.documents.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
