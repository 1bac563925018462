//! Expense store
//!
//! Owns the ordered expense sequence and mirrors it to a document store as
//! `{ "expenses": [...] }` after every mutation.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{ExpenseRecord, NewExpense};

use super::document::DocumentStore;

/// Key under which the expense document is stored
pub const STORAGE_KEY: &str = "expenseTrackerData";

#[derive(Debug, Deserialize)]
struct ExpenseDocument {
    expenses: Vec<ExpenseRecord>,
}

#[derive(Debug, Serialize)]
struct ExpenseDocumentRef<'a> {
    expenses: &'a [ExpenseRecord],
}

/// Ordered, append-only expense sequence backed by a document store
///
/// Insertion order is entry order, not date order.
pub struct ExpenseStore<S> {
    backend: S,
    records: Vec<ExpenseRecord>,
}

impl<S: DocumentStore> ExpenseStore<S> {
    /// Create an empty store without reading the backend
    pub fn new(backend: S) -> Self {
        Self {
            backend,
            records: Vec::new(),
        }
    }

    /// Create a store and load whatever the backend holds
    pub fn open(backend: S) -> Self {
        let mut store = Self::new(backend);
        store.load();
        store
    }

    /// Reload the sequence from the backend
    ///
    /// A missing, unreadable or malformed document loads as an empty sequence.
    pub fn load(&mut self) -> &[ExpenseRecord] {
        self.records = match self.backend.get(STORAGE_KEY) {
            Ok(Some(contents)) => match serde_json::from_str::<ExpenseDocument>(&contents) {
                Ok(document) => document.expenses,
                Err(e) => {
                    warn!(error = %e, "stored expense document is malformed, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "could not read expense document, starting empty");
                Vec::new()
            }
        };

        debug!(count = self.records.len(), "loaded expenses");
        &self.records
    }

    /// Validate, append and persist a record
    ///
    /// If persisting fails the record is removed again so memory and storage
    /// stay identical.
    pub fn append(&mut self, record: ExpenseRecord) -> ExpenseResult<&[ExpenseRecord]> {
        record
            .validate()
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;

        self.records.push(record);

        if let Err(e) = self.persist() {
            self.records.pop();
            return Err(e);
        }

        info!(count = self.records.len(), "expense added");
        Ok(&self.records)
    }

    /// Validate raw form input and append it
    pub fn add(&mut self, input: NewExpense) -> ExpenseResult<&[ExpenseRecord]> {
        let record = input
            .into_record()
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;
        self.append(record)
    }

    /// Write the full sequence, replacing any previous document
    pub fn persist(&mut self) -> ExpenseResult<()> {
        let contents = encode_document(&self.records)?;
        self.backend.set(STORAGE_KEY, &contents)
    }

    /// Read-only view of the sequence
    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }
}

/// Serialize records as the persisted document
pub fn encode_document(records: &[ExpenseRecord]) -> ExpenseResult<String> {
    serde_json::to_string(&ExpenseDocumentRef { expenses: records })
        .map_err(|e| ExpenseError::Storage(format!("Failed to serialize expenses: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::storage::document::{FileDocumentStore, MemoryDocumentStore};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    struct ReadOnlyStore;

    impl DocumentStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> ExpenseResult<Option<String>> {
            Ok(None)
        }

        fn set(&mut self, _key: &str, _value: &str) -> ExpenseResult<()> {
            Err(ExpenseError::Storage("quota exceeded".into()))
        }
    }

    fn record(y: i32, m: u32, d: u32, category: &str, cents: i64) -> ExpenseRecord {
        ExpenseRecord::new(
            NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            category,
            Money::from_cents(cents),
        )
    }

    #[test]
    fn test_missing_document_loads_empty() {
        let mut store = ExpenseStore::new(MemoryDocumentStore::new());
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_malformed_documents_load_empty() {
        for contents in [
            "not json",
            "null",
            "{}",
            r#"{"expenses": "nope"}"#,
            r#"{"expenses": [{"date": "2024-01-01"}]}"#,
            r#"[1, 2, 3]"#,
        ] {
            let backend = MemoryDocumentStore::new().with_document(STORAGE_KEY, contents);
            let store = ExpenseStore::open(backend);
            assert!(store.is_empty(), "expected empty for {}", contents);
        }
    }

    #[test]
    fn test_loads_records_with_unparsable_dates() {
        let backend = MemoryDocumentStore::new().with_document(
            STORAGE_KEY,
            r#"{"expenses":[{"date":"someday","category":"Food","amount":3}]}"#,
        );
        let store = ExpenseStore::open(backend);
        assert_eq!(store.len(), 1);
        assert_eq!(store.records()[0].calendar_date(), None);
    }

    #[test]
    fn test_out_of_range_amount_keeps_other_records() {
        let backend = MemoryDocumentStore::new().with_document(
            STORAGE_KEY,
            r#"{"expenses":[
                {"date":"2024-01-15","category":"Food","amount":10.5},
                {"date":"2024-01-16","category":"Yacht","amount":1e300},
                {"date":"2024-01-17","category":"Refund","amount":-1e300}
            ]}"#,
        );
        let mut store = ExpenseStore::open(backend);

        assert_eq!(store.len(), 3);
        assert_eq!(store.records()[0].amount, Money::from_cents(1050));
        assert_eq!(store.records()[1].amount, Money::MAX);
        assert_eq!(store.records()[2].amount.cents(), -Money::MAX.cents());

        store.append(record(2024, 1, 18, "Food", 100)).unwrap();
        let reloaded = ExpenseStore::open(store.backend().clone());
        assert_eq!(reloaded.len(), 4);
        assert_eq!(reloaded.records()[0].category, "Food");
    }

    #[test]
    fn test_append_persists_immediately() {
        let mut store = ExpenseStore::new(MemoryDocumentStore::new());
        store.append(record(2024, 1, 15, "Food", 1000)).unwrap();

        let stored = store.backend().get(STORAGE_KEY).unwrap().unwrap();
        assert_eq!(
            stored,
            r#"{"expenses":[{"date":"2024-01-15","category":"Food","amount":10.0}]}"#
        );
    }

    #[test]
    fn test_append_keeps_insertion_order() {
        let mut store = ExpenseStore::new(MemoryDocumentStore::new());
        store.append(record(2024, 2, 1, "Food", 2000)).unwrap();
        let records = store.append(record(2024, 1, 15, "Transport", 500)).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].date, "2024-02-01");
        assert_eq!(records[1].date, "2024-01-15");
    }

    #[test]
    fn test_append_then_reload_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let backend = FileDocumentStore::new(temp_dir.path().to_path_buf());

        let mut store = ExpenseStore::open(backend.clone());
        store.append(record(2024, 1, 15, "Food", 1000)).unwrap();
        store.append(record(2024, 1, 15, "Transport", 505)).unwrap();
        store.append(record(2024, 2, 1, "Food", 2000)).unwrap();

        let reloaded = ExpenseStore::open(backend);
        assert_eq!(reloaded.records(), store.records());
    }

    #[test]
    fn test_append_rejects_invalid_records() {
        let mut store = ExpenseStore::new(MemoryDocumentStore::new());

        let negative = record(2024, 1, 15, "Food", -1);
        assert!(store.append(negative).unwrap_err().is_validation());

        let bad_date = ExpenseRecord {
            date: "2024-13-01".into(),
            category: "Food".into(),
            amount: Money::from_cents(100),
        };
        assert!(store.append(bad_date).unwrap_err().is_validation());

        let oversized = record(2024, 1, 15, "Car", i64::MAX);
        assert!(store.append(oversized).unwrap_err().is_validation());

        assert!(store.is_empty());
        assert_eq!(store.backend().get(STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn test_add_validates_form_input() {
        let mut store = ExpenseStore::new(MemoryDocumentStore::new());

        assert!(store
            .add(NewExpense::new("2024-01-15", "Food", "abc"))
            .unwrap_err()
            .is_validation());
        assert!(store
            .add(NewExpense::new("", "Food", "10"))
            .unwrap_err()
            .is_validation());

        let records = store
            .add(NewExpense::new("2024-01-15", "Food", "12.34"))
            .unwrap();
        assert_eq!(records[0].amount.cents(), 1234);
    }

    #[test]
    fn test_failed_persist_rolls_back() {
        let mut store = ExpenseStore::new(ReadOnlyStore);

        let err = store.append(record(2024, 1, 15, "Food", 1000)).unwrap_err();
        assert!(matches!(err, ExpenseError::Storage(_)));
        assert!(store.is_empty());
    }

    #[test]
    fn test_persist_overwrites_foreign_document() {
        let backend = MemoryDocumentStore::new().with_document(STORAGE_KEY, "garbage");
        let mut store = ExpenseStore::open(backend);
        assert!(store.is_empty());

        store.append(record(2024, 1, 15, "Food", 1000)).unwrap();
        let reloaded = ExpenseStore::open(store.backend().clone());
        assert_eq!(reloaded.len(), 1);
    }
}
