//! The Table trait

use crate::error::Result;
use crate::record::{Item, Record};
use async_trait::async_trait;
use std::cmp::Ordering;

/// Direction of a secondary index query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    /// Compare two sort values in this direction (total order, NaN sorts last ascending)
    pub fn compare(self, a: f64, b: f64) -> Ordering {
        match self {
            Self::Ascending => a.total_cmp(&b),
            Self::Descending => b.total_cmp(&a),
        }
    }
}

/// A key-value table of one record type with a partition/sort secondary index
#[async_trait]
pub trait Table<R: Record>: Send + Sync {
    /// Point lookup by primary key
    async fn get(&self, id: &str) -> Result<Option<R>>;

    /// Insert or fully overwrite a row
    async fn put(&self, record: &R) -> Result<()>;

    /// Merge `fields` into an existing row
    ///
    /// Returns the updated record, or `None` when no row has this key. Rows
    /// are never created by an update.
    async fn update_fields(&self, id: &str, fields: Item) -> Result<Option<R>>;

    /// Remove a row, returning what was removed
    async fn delete(&self, id: &str) -> Result<Option<R>>;

    /// Rows of one partition ordered by sort value
    async fn query_index(
        &self,
        partition: &str,
        order: SortOrder,
        limit: Option<usize>,
    ) -> Result<Vec<R>>;

    /// Every row, in primary key order
    async fn scan_all(&self) -> Result<Vec<R>>;

    /// Remove many rows, returning how many existed
    async fn batch_delete(&self, ids: &[String]) -> Result<usize>;
}

/// Order rows of one partition and apply a limit
pub(crate) fn index_rows<R: Record>(
    mut rows: Vec<R>,
    partition: &str,
    order: SortOrder,
    limit: Option<usize>,
) -> Vec<R> {
    rows.retain(|r| r.partition() == partition);
    rows.sort_by(|a, b| {
        order
            .compare(a.sort_value(), b.sort_value())
            .then_with(|| a.key().cmp(b.key()))
    });
    if let Some(limit) = limit {
        rows.truncate(limit);
    }
    rows
}
