//! File-backed table backend
//!
//! One JSON file per row:
//!
//! ```text
//! <dir>/
//! ├── .lock          # held during read-modify-write operations
//! ├── {id}.json      # one item per row
//! └── ...
//! ```

use crate::error::{Result, StoreError};
use crate::record::{decode, encode, Item, Record};
use crate::table::{index_rows, SortOrder, Table};
use async_trait::async_trait;
use fs2::FileExt;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::fs;

/// A table stored as a directory of JSON files
pub struct FileTable<R> {
    dir: PathBuf,
    _record: PhantomData<fn() -> R>,
}

impl<R: Record> FileTable<R> {
    /// Create a table rooted at `dir`; the directory is created on first write
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            _record: PhantomData,
        }
    }

    /// The table directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path to a row's file
    ///
    /// Keys that would resolve outside the table directory are refused.
    pub fn row_path(&self, id: &str) -> Result<PathBuf> {
        if !is_file_key(id) {
            return Err(StoreError::invalid_key(R::TABLE, id));
        }
        Ok(self.dir.join(format!("{}.json", id)))
    }

    fn lock_path(&self) -> PathBuf {
        self.dir.join(".lock")
    }

    async fn read_item(&self, id: &str) -> Result<Option<Item>> {
        let path = self.row_path(id)?;
        match fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(serde_json::from_str(&content)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn write_item(&self, id: &str, item: &Item) -> Result<()> {
        let content = serde_json::to_string_pretty(item)?;
        atomic_write(&self.row_path(id)?, content.as_bytes()).await
    }

    async fn remove_row(&self, id: &str) -> Result<bool> {
        match fs::remove_file(self.row_path(id)?).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// List row IDs by reading the table directory
    async fn list_ids(&self) -> Result<Vec<String>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let mut ids = Vec::new();
        let mut entries = fs::read_dir(&self.dir).await?;

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) == Some("json") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    ids.push(stem.to_string());
                }
            }
        }

        ids.sort();
        Ok(ids)
    }

    async fn read_all(&self) -> Result<Vec<R>> {
        let ids = self.list_ids().await?;
        let mut rows = Vec::with_capacity(ids.len());

        for id in ids {
            // A row deleted between listing and reading is skipped
            if let Some(item) = self.read_item(&id).await? {
                rows.push(decode(&id, item)?);
            }
        }

        Ok(rows)
    }

    /// Acquire the table's exclusive lock, waiting for other holders
    async fn lock(&self) -> Result<TableLock> {
        fs::create_dir_all(&self.dir).await?;
        let path = self.lock_path();

        tokio::task::spawn_blocking(move || -> Result<TableLock> {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(&path)?;
            file.lock_exclusive()?;
            Ok(TableLock { file })
        })
        .await
        .map_err(|e| StoreError::unavailable(R::TABLE, format!("lock task failed: {e}")))?
    }
}

/// RAII lock guard - releases on drop
struct TableLock {
    file: std::fs::File,
}

impl Drop for TableLock {
    fn drop(&mut self) {
        let _ = self.file.unlock();
    }
}

#[async_trait]
impl<R: Record> Table<R> for FileTable<R> {
    async fn get(&self, id: &str) -> Result<Option<R>> {
        self.read_item(id)
            .await?
            .map(|item| decode(id, item))
            .transpose()
    }

    async fn put(&self, record: &R) -> Result<()> {
        let item = encode(record)?;
        self.write_item(record.key(), &item).await?;
        tracing::debug!(table = R::TABLE, id = record.key(), "put row");
        Ok(())
    }

    async fn update_fields(&self, id: &str, fields: Item) -> Result<Option<R>> {
        let _lock = self.lock().await?;

        let Some(mut item) = self.read_item(id).await? else {
            return Ok(None);
        };
        item.extend(fields);
        let record: R = decode(id, item.clone())?;
        self.write_item(id, &item).await?;

        tracing::debug!(table = R::TABLE, id, "updated row");
        Ok(Some(record))
    }

    async fn delete(&self, id: &str) -> Result<Option<R>> {
        let _lock = self.lock().await?;

        let existing = self.get(id).await?;
        if existing.is_some() {
            self.remove_row(id).await?;
        }
        Ok(existing)
    }

    async fn query_index(
        &self,
        partition: &str,
        order: SortOrder,
        limit: Option<usize>,
    ) -> Result<Vec<R>> {
        Ok(index_rows(self.read_all().await?, partition, order, limit))
    }

    async fn scan_all(&self) -> Result<Vec<R>> {
        self.read_all().await
    }

    async fn batch_delete(&self, ids: &[String]) -> Result<usize> {
        let _lock = self.lock().await?;

        let mut removed = 0;
        for id in ids {
            if self.remove_row(id).await? {
                removed += 1;
            }
        }

        tracing::debug!(table = R::TABLE, requested = ids.len(), removed, "batch delete");
        Ok(removed)
    }
}

/// A key usable as a single file name inside the table directory
fn is_file_key(id: &str) -> bool {
    !id.is_empty()
        && id != "."
        && id != ".."
        && !id.contains(['/', '\\', '\0'])
}

static TEMP_SEQ: AtomicU64 = AtomicU64::new(0);

/// Atomic write via temp file and rename
async fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }

    // Write to a uniquely named temp file in the same directory
    let seq = TEMP_SEQ.fetch_add(1, Ordering::Relaxed);
    let temp_path = path.with_extension(format!("{}.{}.tmp", std::process::id(), seq));
    fs::write(&temp_path, content).await?;

    // Rename (atomic on same filesystem)
    fs::rename(&temp_path, path).await?;

    Ok(())
}
