//! The typed record boundary

use crate::error::{Result, StoreError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

/// A row as the table sees it: attribute name to value
pub type Item = Map<String, Value>;

/// A typed row stored in a [`Table`](crate::Table)
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Table name, used for directories and error messages
    const TABLE: &'static str;

    /// Primary key
    fn key(&self) -> &str;

    /// Secondary index partition key
    fn partition(&self) -> &str;

    /// Secondary index sort key
    fn sort_value(&self) -> f64;
}

/// Serialize a record into an item
pub fn encode<R: Record>(record: &R) -> Result<Item> {
    match serde_json::to_value(record)? {
        Value::Object(item) => Ok(item),
        other => Err(StoreError::decode(
            R::TABLE,
            record.key(),
            format!("record serialized to a non-object value: {other}"),
        )),
    }
}

/// Deserialize an item into a record
pub fn decode<R: Record>(id: &str, item: Item) -> Result<R> {
    serde_json::from_value(Value::Object(item)).map_err(|e| StoreError::decode(R::TABLE, id, e))
}
