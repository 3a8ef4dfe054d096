//! Operation processor for board commands

use crate::context::BoardContext;
use crate::error::{KanbanError, Result};
use kanban_board_operations::{ExecutionResult, LogEntry, Operation, OperationProcessor};
use serde::Serialize;
use serde_json::Value;
use std::future::Future;
use std::time::Instant;

/// Runs board commands and records an audit entry for every mutation
#[derive(Debug, Default, Clone)]
pub struct BoardOperationProcessor {
    actor: Option<String>,
}

impl BoardOperationProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attribute entries to `actor` when the command does not name one
    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = Some(actor.into());
        self
    }
}

impl OperationProcessor<BoardContext, KanbanError> for BoardOperationProcessor {
    fn actor(&self) -> Option<&str> {
        self.actor.as_deref()
    }
}

/// Run a mutating command body and wrap its outcome with a log entry
pub(crate) async fn logged<O, F>(operation: &O, work: F) -> ExecutionResult<Value, KanbanError>
where
    O: Operation + Serialize,
    F: Future<Output = Result<Value>>,
{
    let start = Instant::now();
    let input = serde_json::to_value(operation).unwrap_or_default();

    match work.await {
        Ok(value) => ExecutionResult::Logged {
            log_entry: LogEntry::success(operation.op_string(), input, value.clone(), start.elapsed()),
            value,
        },
        Err(error) => ExecutionResult::Failed {
            log_entry: Some(LogEntry::failure(
                operation.op_string(),
                input,
                &error,
                start.elapsed(),
            )),
            error,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::{AddColumn, UpdateColumn};
    use serde_json::json;
    use tracing_test::traced_test;

    #[tokio::test]
    #[traced_test]
    async fn test_processor_records_mutations() {
        let ctx = BoardContext::in_memory();
        let processor = BoardOperationProcessor::new().with_actor("tester");

        let value = processor
            .process(&AddColumn::new("To Do"), &ctx)
            .await
            .unwrap();

        assert_eq!(value["columnTitle"], "To Do");
        assert!(logs_contain("operation applied"));
        assert!(logs_contain("add column"));
        assert!(logs_contain("tester"));
    }

    #[tokio::test]
    #[traced_test]
    async fn test_processor_records_failures() {
        let ctx = BoardContext::in_memory();
        let processor = BoardOperationProcessor::new();

        let result = processor
            .process(&UpdateColumn::new("missing", "Renamed"), &ctx)
            .await;

        assert!(matches!(result, Err(KanbanError::ColumnNotFound { .. })));
        assert!(logs_contain("operation failed"));
    }

    #[tokio::test]
    async fn test_logged_wraps_outcome() {
        let op = AddColumn::new("Doing");

        let ok = logged(&op, async { Ok(json!({"columnTitle": "Doing"})) }).await;
        assert!(ok.should_log());
        let (value, entry) = ok.split();
        assert_eq!(value.unwrap()["columnTitle"], "Doing");
        let entry = entry.unwrap();
        assert_eq!(entry.op, "add column");
        assert_eq!(entry.input["columnTitle"], "Doing");

        let failed = logged(&op, async { Err(KanbanError::missing_field("columnTitle")) }).await;
        let (value, entry) = failed.split();
        assert!(value.is_err());
        assert!(entry.unwrap().is_failure());
    }
}
