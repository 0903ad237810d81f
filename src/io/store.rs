use std::cell::{Cell, RefCell};
use std::path::PathBuf;

use indexmap::IndexMap;
use serde_json::{Map, Value};

/// One stored row: a flat JSON object of column name to value
pub type Record = Map<String, Value>;

/// Error type for record store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not write {path}: {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("table file {path} is not valid JSON: {source}")]
    ParseError {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("could not encode record: {0}")]
    EncodeError(#[from] serde_json::Error),
    #[error("record must be a JSON object")]
    NotAnObject,
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Storage capability the settings panels and the table loader depend on.
///
/// Rows are keyed by a string ID within a named table. `upsert` merges: the
/// columns in `record` replace existing ones, other columns are kept.
pub trait RecordStore {
    fn fetch(&self, table: &str, id: &str) -> Result<Option<Record>, StoreError>;

    /// Rows in insertion order, skipping `offset` and returning at most
    /// `limit`.
    fn fetch_page(&self, table: &str, offset: usize, limit: usize)
    -> Result<Vec<Record>, StoreError>;

    fn upsert(&self, table: &str, id: &str, record: Record) -> Result<(), StoreError>;
}

/// Encode a serializable value as a store record
pub fn to_record<T: serde::Serialize>(value: &T) -> Result<Record, StoreError> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        _ => Err(StoreError::NotAnObject),
    }
}

/// Merge `update` into the row `id` of `rows`, inserting it if absent
pub(crate) fn merge_into(rows: &mut IndexMap<String, Record>, id: &str, update: Record) {
    match rows.get_mut(id) {
        Some(existing) => {
            for (k, v) in update {
                existing.insert(k, v);
            }
        }
        None => {
            rows.insert(id.to_string(), update);
        }
    }
}

/// In-process store. Writes can be made to fail, to exercise save-error paths.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RefCell<IndexMap<String, IndexMap<String, Record>>>,
    fail_writes: Cell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following `upsert` fail (or succeed again)
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Number of rows in a table
    pub fn len(&self, table: &str) -> usize {
        self.tables.borrow().get(table).map_or(0, |t| t.len())
    }
}

impl RecordStore for MemoryStore {
    fn fetch(&self, table: &str, id: &str) -> Result<Option<Record>, StoreError> {
        Ok(self
            .tables
            .borrow()
            .get(table)
            .and_then(|rows| rows.get(id))
            .cloned())
    }

    fn fetch_page(
        &self,
        table: &str,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<Record>, StoreError> {
        Ok(self
            .tables
            .borrow()
            .get(table)
            .map(|rows| rows.values().skip(offset).take(limit).cloned().collect())
            .unwrap_or_default())
    }

    fn upsert(&self, table: &str, id: &str, record: Record) -> Result<(), StoreError> {
        if self.fail_writes.get() {
            return Err(StoreError::Unavailable(format!(
                "write to {} rejected",
                table
            )));
        }
        let mut tables = self.tables.borrow_mut();
        merge_into(tables.entry(table.to_string()).or_default(), id, record);
        Ok(())
    }
}
