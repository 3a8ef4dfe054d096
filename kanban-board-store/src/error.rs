//! Error types for table storage

use thiserror::Error;

/// Result type for table operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors raised by a table backend
#[derive(Debug, Error)]
pub enum StoreError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A stored or updated item does not match the record shape
    #[error("item {id} in table {table} does not decode: {message}")]
    Decode {
        table: &'static str,
        id: String,
        message: String,
    },

    /// A primary key that cannot name a row
    #[error("invalid key {id:?} for table {table}")]
    InvalidKey { table: &'static str, id: String },

    /// The backend could not serve the request (timeout, throttling, shutdown)
    #[error("table {table} unavailable: {message}")]
    Unavailable {
        table: &'static str,
        message: String,
    },
}

impl StoreError {
    /// Create a decode error
    pub fn decode(table: &'static str, id: impl Into<String>, message: impl ToString) -> Self {
        Self::Decode {
            table,
            id: id.into(),
            message: message.to_string(),
        }
    }

    /// Create an invalid key error
    pub fn invalid_key(table: &'static str, id: impl Into<String>) -> Self {
        Self::InvalidKey { table, id: id.into() }
    }

    /// Create an unavailable error
    pub fn unavailable(table: &'static str, message: impl Into<String>) -> Self {
        Self::Unavailable {
            table,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::decode("cards", "c1", "missing field `cardTitle`");
        assert_eq!(
            err.to_string(),
            "item c1 in table cards does not decode: missing field `cardTitle`"
        );

        let err = StoreError::unavailable("columns", "throttled");
        assert_eq!(err.to_string(), "table columns unavailable: throttled");

        let err = StoreError::invalid_key("cards", "../c1");
        assert_eq!(err.to_string(), r#"invalid key "../c1" for table cards"#);
    }
}
