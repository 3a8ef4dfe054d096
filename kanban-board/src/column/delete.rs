//! DeleteColumn command

use crate::context::BoardContext;
use crate::error::{require_text, KanbanError};
use crate::processor::logged;
use crate::types::ColumnId;
use kanban_board_operations::{async_trait, operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Delete a column together with every card in it
///
/// Cards go first, then the column row. The two steps are not atomic: a
/// failure after the cards are gone leaves an empty column behind.
#[derive(Debug, Deserialize, Serialize)]
pub struct DeleteColumn {
    #[serde(rename = "columnID")]
    pub column_id: ColumnId,
}

operation!(
    DeleteColumn,
    verb = "delete",
    noun = "column",
    description = "Delete a column and its cards"
);

impl DeleteColumn {
    pub fn new(column_id: impl Into<ColumnId>) -> Self {
        Self {
            column_id: column_id.into(),
        }
    }
}

#[async_trait]
impl Execute<BoardContext, KanbanError> for DeleteColumn {
    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<Value, KanbanError> {
        logged(self, async {
            require_text("columnID", self.column_id.as_str())?;

            let cards = ctx.card_repository();
            let orphans = cards.cards_by_column(&self.column_id).await?;
            let deleted_cards = cards.delete_cards_in_batch(&orphans).await?;

            let removed = ctx
                .column_repository()
                .delete_column(&self.column_id)
                .await?;

            tracing::info!(
                column = %self.column_id,
                deleted = removed.is_some(),
                deleted_cards,
                "deleted column"
            );

            Ok(json!({
                "columnID": self.column_id,
                "deleted": removed.is_some(),
                "deletedCards": deleted_cards,
            }))
        })
        .await
    }
}
