//! GetColumn command

use crate::context::BoardContext;
use crate::error::{require_text, KanbanError};
use crate::types::ColumnId;
use kanban_board_operations::{async_trait, operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Get a column by ID; a missing column yields `null`
#[derive(Debug, Deserialize, Serialize)]
pub struct GetColumn {
    #[serde(rename = "columnID")]
    pub column_id: ColumnId,
}

operation!(GetColumn, verb = "get", noun = "column", description = "Get a column by ID");

impl GetColumn {
    pub fn new(column_id: impl Into<ColumnId>) -> Self {
        Self {
            column_id: column_id.into(),
        }
    }
}

#[async_trait]
impl Execute<BoardContext, KanbanError> for GetColumn {
    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<Value, KanbanError> {
        ExecutionResult::unlogged(
            async {
                require_text("columnID", self.column_id.as_str())?;
                let column = ctx.column_repository().get_column(&self.column_id).await?;
                Ok(serde_json::to_value(column)?)
            }
            .await,
        )
    }
}
