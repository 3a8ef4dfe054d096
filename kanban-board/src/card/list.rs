//! Card listing commands

use crate::context::BoardContext;
use crate::error::{require_text, KanbanError};
use crate::types::ColumnId;
use kanban_board_operations::{async_trait, operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// List every card on the board, unordered
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ListCards {}

operation!(ListCards, verb = "list", noun = "card", description = "List every card");

impl ListCards {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl Execute<BoardContext, KanbanError> for ListCards {
    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<Value, KanbanError> {
        ExecutionResult::unlogged(
            async {
                let cards = ctx.card_repository().cards().await?;
                Ok(serde_json::to_value(cards)?)
            }
            .await,
        )
    }
}

/// List the cards of one column in display order
#[derive(Debug, Deserialize, Serialize)]
pub struct ListCardsByColumn {
    #[serde(rename = "columnID")]
    pub column_id: ColumnId,
}

operation!(
    ListCardsByColumn,
    verb = "list",
    noun = "card",
    description = "List the cards of a column in display order"
);

impl ListCardsByColumn {
    pub fn new(column_id: impl Into<ColumnId>) -> Self {
        Self {
            column_id: column_id.into(),
        }
    }
}

#[async_trait]
impl Execute<BoardContext, KanbanError> for ListCardsByColumn {
    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<Value, KanbanError> {
        ExecutionResult::unlogged(
            async {
                require_text("columnID", self.column_id.as_str())?;
                let cards = ctx
                    .card_repository()
                    .cards_by_column(&self.column_id)
                    .await?;
                Ok(serde_json::to_value(cards)?)
            }
            .await,
        )
    }
}

/// List every card grouped by column, each column in display order
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ListSortedCards {}

operation!(
    ListSortedCards,
    verb = "sorted",
    noun = "card",
    description = "List every card ordered by column and position"
);

impl ListSortedCards {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl Execute<BoardContext, KanbanError> for ListSortedCards {
    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<Value, KanbanError> {
        ExecutionResult::unlogged(
            async {
                let cards = ctx.card_repository().sorted_cards().await?;
                Ok(serde_json::to_value(cards)?)
            }
            .await,
        )
    }
}
