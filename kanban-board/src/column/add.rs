//! AddColumn command

use crate::context::BoardContext;
use crate::error::{require_text, KanbanError};
use crate::processor::logged;
use kanban_board_operations::{async_trait, operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Append a new column to the end of the board
#[derive(Debug, Deserialize, Serialize)]
pub struct AddColumn {
    /// The column display name
    #[serde(rename = "columnTitle")]
    pub column_title: String,
}

operation!(
    AddColumn,
    verb = "add",
    noun = "column",
    description = "Append a new column to the board"
);

impl AddColumn {
    /// Create a new AddColumn command
    pub fn new(column_title: impl Into<String>) -> Self {
        Self {
            column_title: column_title.into(),
        }
    }
}

#[async_trait]
impl Execute<BoardContext, KanbanError> for AddColumn {
    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<Value, KanbanError> {
        logged(self, async {
            require_text("columnTitle", &self.column_title)?;

            let column = ctx
                .column_repository()
                .create_column(&self.column_title)
                .await?;
            Ok(serde_json::to_value(&column)?)
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_add_column() {
        let ctx = BoardContext::in_memory();

        let result = AddColumn::new("Blocked").execute(&ctx).await;
        assert!(result.should_log());

        let column = result.into_result().unwrap();
        assert_eq!(column["columnTitle"], "Blocked");
        assert_eq!(column["columnIndex"], 3000.0);
        assert!(!column["columnID"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_add_columns_append() {
        let ctx = BoardContext::in_memory();

        AddColumn::new("To Do").execute(&ctx).await.into_result().unwrap();
        let second = AddColumn::new("Doing").execute(&ctx).await.into_result().unwrap();
        assert_eq!(second["columnIndex"], 6000.0);
    }

    #[tokio::test]
    async fn test_add_column_requires_title() {
        let ctx = BoardContext::in_memory();

        let result = AddColumn::new("").execute(&ctx).await.into_result();
        assert!(matches!(result, Err(KanbanError::MissingField { .. })));
        assert!(ctx.column_repository().columns().await.unwrap().is_empty());
    }
}
