//! GetMaxColumnIndex command

use crate::context::BoardContext;
use crate::error::KanbanError;
use kanban_board_operations::{async_trait, operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Highest column position on the board, 0 when there are no columns
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GetMaxColumnIndex {}

operation!(
    GetMaxColumnIndex,
    verb = "max",
    noun = "column",
    description = "Get the highest column position"
);

impl GetMaxColumnIndex {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl Execute<BoardContext, KanbanError> for GetMaxColumnIndex {
    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<Value, KanbanError> {
        ExecutionResult::unlogged(
            async {
                let max = ctx.column_repository().max_column_index().await?;
                Ok(json!({ "columnIndex": max }))
            }
            .await,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::AddColumn;

    #[tokio::test]
    async fn test_max_column_index() {
        let ctx = BoardContext::in_memory();

        let empty = GetMaxColumnIndex::new().execute(&ctx).await.into_result().unwrap();
        assert_eq!(empty["columnIndex"], 0.0);

        AddColumn::new("To Do").execute(&ctx).await.into_result().unwrap();
        AddColumn::new("Done").execute(&ctx).await.into_result().unwrap();

        let max = GetMaxColumnIndex::new().execute(&ctx).await.into_result().unwrap();
        assert_eq!(max["columnIndex"], 6000.0);
    }
}
