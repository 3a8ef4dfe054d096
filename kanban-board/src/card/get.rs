//! GetCard command

use crate::context::BoardContext;
use crate::error::{require_text, KanbanError};
use crate::types::CardId;
use kanban_board_operations::{async_trait, operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Get a card by ID; a missing card yields `null`
#[derive(Debug, Deserialize, Serialize)]
pub struct GetCard {
    #[serde(rename = "cardID")]
    pub card_id: CardId,
}

operation!(GetCard, verb = "get", noun = "card", description = "Get a card by ID");

impl GetCard {
    pub fn new(card_id: impl Into<CardId>) -> Self {
        Self {
            card_id: card_id.into(),
        }
    }
}

#[async_trait]
impl Execute<BoardContext, KanbanError> for GetCard {
    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<Value, KanbanError> {
        ExecutionResult::unlogged(
            async {
                require_text("cardID", self.card_id.as_str())?;
                let card = ctx.card_repository().get_card(&self.card_id).await?;
                Ok(serde_json::to_value(card)?)
            }
            .await,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::AddCard;
    use crate::column::AddColumn;

    #[tokio::test]
    async fn test_get_card() {
        let ctx = BoardContext::in_memory();
        let column = AddColumn::new("To Do").execute(&ctx).await.into_result().unwrap();
        let card = AddCard::new(column["columnID"].as_str().unwrap(), "Task")
            .execute(&ctx)
            .await
            .into_result()
            .unwrap();

        let result = GetCard::new(card["cardID"].as_str().unwrap())
            .execute(&ctx)
            .await;
        assert!(!result.should_log());

        let fetched = result.into_result().unwrap();
        assert_eq!(fetched, card);
    }

    #[tokio::test]
    async fn test_get_missing_card_is_null() {
        let ctx = BoardContext::in_memory();

        let result = GetCard::new("missing").execute(&ctx).await.into_result().unwrap();
        assert!(result.is_null());
    }
}
