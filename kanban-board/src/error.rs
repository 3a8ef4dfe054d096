//! Error types for the kanban engine

use kanban_board_store::StoreError;
use thiserror::Error;

/// Result type for kanban operations
pub type Result<T> = std::result::Result<T, KanbanError>;

/// Errors that can occur in kanban operations
#[derive(Debug, Error)]
pub enum KanbanError {
    /// Card not found
    #[error("card not found: {id}")]
    CardNotFound { id: String },

    /// Column not found
    #[error("column not found: {id}")]
    ColumnNotFound { id: String },

    /// Missing required field
    #[error("missing required field: {field}")]
    MissingField { field: String },

    /// Invalid field value
    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    /// The storage collaborator failed; never retried here
    #[error("failed to {operation}: {source}")]
    Storage {
        operation: &'static str,
        #[source]
        source: StoreError,
    },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl KanbanError {
    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create an invalid value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Wrap a store error raised while performing `operation`
    ///
    /// ```ignore
    /// table.get(id).await.map_err(KanbanError::storage("get card"))?;
    /// ```
    pub fn storage(operation: &'static str) -> impl FnOnce(StoreError) -> Self {
        move |source| Self::Storage { operation, source }
    }

    /// The caller sent something unusable
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingField { .. }
                | Self::InvalidValue { .. }
                | Self::Storage {
                    source: StoreError::InvalidKey { .. },
                    ..
                }
        )
    }

    /// A referenced card or column does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::CardNotFound { .. } | Self::ColumnNotFound { .. })
    }

    /// Check if this is a retryable error
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Storage {
                source: StoreError::Unavailable { .. },
                ..
            }
        )
    }
}

/// Reject a blank required string field
pub(crate) fn require_text(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(KanbanError::missing_field(field));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = KanbanError::CardNotFound {
            id: "abc123".into(),
        };
        assert_eq!(err.to_string(), "card not found: abc123");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_storage_error_display() {
        let err = KanbanError::storage("move card")(StoreError::unavailable("cards", "throttled"));
        assert_eq!(
            err.to_string(),
            "failed to move card: table cards unavailable: throttled"
        );
        assert!(err.is_retryable());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_invalid_key_is_a_caller_error() {
        let err = KanbanError::storage("get card")(StoreError::invalid_key("cards", "../x"));
        assert!(err.is_validation());
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_require_text() {
        assert!(require_text("cardTitle", "Write docs").is_ok());
        let err = require_text("cardTitle", "   ").unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "missing required field: cardTitle");
    }
}
