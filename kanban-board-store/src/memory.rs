//! In-memory table backend

use crate::error::Result;
use crate::record::{decode, encode, Item, Record};
use crate::table::{index_rows, SortOrder, Table};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::marker::PhantomData;
use tokio::sync::RwLock;

/// A table held in process memory
///
/// Rows are kept as items, exactly as a remote key-value service would hold
/// them, and decoded on the way out.
pub struct MemoryTable<R> {
    rows: RwLock<BTreeMap<String, Item>>,
    _record: PhantomData<fn() -> R>,
}

impl<R: Record> MemoryTable<R> {
    /// Create an empty table
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(BTreeMap::new()),
            _record: PhantomData,
        }
    }

    /// Number of rows
    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    /// True when the table holds no rows
    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }

    async fn decode_all(&self) -> Result<Vec<R>> {
        let rows = self.rows.read().await;
        rows.iter()
            .map(|(id, item)| decode(id, item.clone()))
            .collect()
    }
}

impl<R: Record> Default for MemoryTable<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<R: Record> Table<R> for MemoryTable<R> {
    async fn get(&self, id: &str) -> Result<Option<R>> {
        let rows = self.rows.read().await;
        rows.get(id).cloned().map(|item| decode(id, item)).transpose()
    }

    async fn put(&self, record: &R) -> Result<()> {
        let item = encode(record)?;
        self.rows.write().await.insert(record.key().to_string(), item);
        tracing::debug!(table = R::TABLE, id = record.key(), "put row");
        Ok(())
    }

    async fn update_fields(&self, id: &str, fields: Item) -> Result<Option<R>> {
        let mut rows = self.rows.write().await;
        let Some(current) = rows.get(id) else {
            return Ok(None);
        };

        let mut merged = current.clone();
        merged.extend(fields);
        let record: R = decode(id, merged.clone())?;
        rows.insert(id.to_string(), merged);

        tracing::debug!(table = R::TABLE, id, "updated row");
        Ok(Some(record))
    }

    async fn delete(&self, id: &str) -> Result<Option<R>> {
        let removed = self.rows.write().await.remove(id);
        removed.map(|item| decode(id, item)).transpose()
    }

    async fn query_index(
        &self,
        partition: &str,
        order: SortOrder,
        limit: Option<usize>,
    ) -> Result<Vec<R>> {
        Ok(index_rows(self.decode_all().await?, partition, order, limit))
    }

    async fn scan_all(&self) -> Result<Vec<R>> {
        self.decode_all().await
    }

    async fn batch_delete(&self, ids: &[String]) -> Result<usize> {
        let mut rows = self.rows.write().await;
        let removed = ids.iter().filter(|id| rows.remove(id.as_str()).is_some()).count();
        tracing::debug!(table = R::TABLE, requested = ids.len(), removed, "batch delete");
        Ok(removed)
    }
}
