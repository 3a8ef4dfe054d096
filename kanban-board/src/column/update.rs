//! UpdateColumn command

use crate::context::BoardContext;
use crate::error::{require_text, KanbanError};
use crate::processor::logged;
use crate::types::ColumnId;
use kanban_board_operations::{async_trait, operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Rename a column
#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateColumn {
    #[serde(rename = "columnID")]
    pub column_id: ColumnId,

    #[serde(rename = "columnTitle")]
    pub column_title: String,
}

operation!(UpdateColumn, verb = "update", noun = "column", description = "Rename a column");

impl UpdateColumn {
    pub fn new(column_id: impl Into<ColumnId>, column_title: impl Into<String>) -> Self {
        Self {
            column_id: column_id.into(),
            column_title: column_title.into(),
        }
    }
}

#[async_trait]
impl Execute<BoardContext, KanbanError> for UpdateColumn {
    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<Value, KanbanError> {
        logged(self, async {
            require_text("columnID", self.column_id.as_str())?;
            require_text("columnTitle", &self.column_title)?;

            let column = ctx
                .column_repository()
                .update_column(&self.column_id, &self.column_title)
                .await?
                .ok_or_else(|| KanbanError::ColumnNotFound {
                    id: self.column_id.to_string(),
                })?;

            tracing::info!(column = %self.column_id, "renamed column");
            Ok(serde_json::to_value(&column)?)
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::AddColumn;

    #[tokio::test]
    async fn test_update_column() {
        let ctx = BoardContext::in_memory();
        let added = AddColumn::new("To Do").execute(&ctx).await.into_result().unwrap();

        let result = UpdateColumn::new(added["columnID"].as_str().unwrap(), "Backlog")
            .execute(&ctx)
            .await
            .into_result()
            .unwrap();

        assert_eq!(result["columnTitle"], "Backlog");
        assert_eq!(result["columnIndex"], added["columnIndex"]);
    }

    #[tokio::test]
    async fn test_update_missing_column() {
        let ctx = BoardContext::in_memory();

        let result = UpdateColumn::new("missing", "Ghost")
            .execute(&ctx)
            .await
            .into_result();
        assert!(matches!(result, Err(KanbanError::ColumnNotFound { .. })));
        assert!(ctx.column_repository().columns().await.unwrap().is_empty());
    }
}
