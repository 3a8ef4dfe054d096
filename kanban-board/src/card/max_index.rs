//! GetMaxCardIndex command

use crate::context::BoardContext;
use crate::error::{require_text, KanbanError};
use crate::types::ColumnId;
use kanban_board_operations::{async_trait, operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Highest card position in a column, 0 for an empty column
#[derive(Debug, Deserialize, Serialize)]
pub struct GetMaxCardIndex {
    #[serde(rename = "columnID")]
    pub column_id: ColumnId,
}

operation!(
    GetMaxCardIndex,
    verb = "max",
    noun = "card",
    description = "Get the highest card position in a column"
);

impl GetMaxCardIndex {
    pub fn new(column_id: impl Into<ColumnId>) -> Self {
        Self {
            column_id: column_id.into(),
        }
    }
}

#[async_trait]
impl Execute<BoardContext, KanbanError> for GetMaxCardIndex {
    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<Value, KanbanError> {
        ExecutionResult::unlogged(
            async {
                require_text("columnID", self.column_id.as_str())?;
                let max = ctx
                    .card_repository()
                    .max_card_index(&self.column_id)
                    .await?;
                Ok(json!({
                    "columnID": self.column_id,
                    "cardIndex": max,
                }))
            }
            .await,
        )
    }
}
