//! Key-value tables for board records
//!
//! A [`Table`] stores one record type keyed by a primary key, with a single
//! secondary index: records are grouped by a partition key and ordered by a
//! numeric sort value. That is enough to answer "what is the highest position
//! in this column" with a one-row query.
//!
//! Rows cross the table edge as attribute maps ([`Item`]). The [`Record`]
//! serde implementation is the only place a row is turned into a typed value
//! or back, so a partial update that would leave a row undecodable is refused
//! instead of stored.
//!
//! Two backends are provided:
//!
//! - [`MemoryTable`] keeps rows in a `BTreeMap` behind an async lock
//! - [`FileTable`] keeps one `{id}.json` file per row under a table directory

mod error;
mod file;
mod memory;
mod record;
mod table;

pub use error::{Result, StoreError};
pub use file::FileTable;
pub use memory::MemoryTable;
pub use record::{decode, encode, Item, Record};
pub use table::{SortOrder, Table};
