use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use tempfile::NamedTempFile;
use tracing::{debug, trace};

use crate::io::store::{Record, RecordStore, StoreError, merge_into};

/// A directory of `<table>.json` files, each a JSON object of
/// `id -> record` in insertion order.
#[derive(Debug, Clone)]
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        JsonStore { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn table_path(&self, table: &str) -> PathBuf {
        self.dir.join(format!("{}.json", table))
    }

    /// Read a whole table. A missing file is an empty table.
    fn read_table(&self, table: &str) -> Result<IndexMap<String, Record>, StoreError> {
        let path = self.table_path(table);
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                trace!(table, "table file missing, treating as empty");
                return Ok(IndexMap::new());
            }
            Err(e) => return Err(StoreError::ReadError { path, source: e }),
        };
        serde_json::from_str(&text).map_err(|e| StoreError::ParseError { path, source: e })
    }

    fn write_table(
        &self,
        table: &str,
        rows: &IndexMap<String, Record>,
    ) -> Result<(), StoreError> {
        let path = self.table_path(table);
        let mut content = serde_json::to_vec_pretty(rows)?;
        content.push(b'\n');
        fs::create_dir_all(&self.dir).map_err(|e| StoreError::WriteError {
            path: self.dir.clone(),
            source: e,
        })?;
        atomic_write(&path, &content).map_err(|e| StoreError::WriteError { path, source: e })
    }
}

/// Write `content` to `path` atomically using a temp file + rename.
fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

impl RecordStore for JsonStore {
    fn fetch(&self, table: &str, id: &str) -> Result<Option<Record>, StoreError> {
        let mut rows = self.read_table(table)?;
        Ok(rows.shift_remove(id))
    }

    fn fetch_page(
        &self,
        table: &str,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<Record>, StoreError> {
        let rows = self.read_table(table)?;
        Ok(rows.into_values().skip(offset).take(limit).collect())
    }

    fn upsert(&self, table: &str, id: &str, record: Record) -> Result<(), StoreError> {
        let mut rows = self.read_table(table)?;
        merge_into(&mut rows, id, record);
        self.write_table(table, &rows)?;
        debug!(table, id, "upserted record");
        Ok(())
    }
}
