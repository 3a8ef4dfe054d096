//! DeleteCard command

use crate::context::BoardContext;
use crate::error::{require_text, KanbanError};
use crate::processor::logged;
use crate::types::CardId;
use kanban_board_operations::{async_trait, operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Delete a card
///
/// Deleting a card that does not exist succeeds with `deleted: false`.
#[derive(Debug, Deserialize, Serialize)]
pub struct DeleteCard {
    #[serde(rename = "cardID")]
    pub card_id: CardId,
}

operation!(DeleteCard, verb = "delete", noun = "card", description = "Delete a card");

impl DeleteCard {
    pub fn new(card_id: impl Into<CardId>) -> Self {
        Self {
            card_id: card_id.into(),
        }
    }
}

#[async_trait]
impl Execute<BoardContext, KanbanError> for DeleteCard {
    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<Value, KanbanError> {
        logged(self, async {
            require_text("cardID", self.card_id.as_str())?;

            let removed = ctx.card_repository().delete_card(&self.card_id).await?;
            if removed.is_some() {
                tracing::info!(card = %self.card_id, "deleted card");
            }

            Ok(json!({
                "cardID": self.card_id,
                "deleted": removed.is_some(),
            }))
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{AddCard, GetCard};
    use crate::column::AddColumn;

    #[tokio::test]
    async fn test_delete_card() {
        let ctx = BoardContext::in_memory();
        let column = AddColumn::new("To Do").execute(&ctx).await.into_result().unwrap();
        let column_id = column["columnID"].as_str().unwrap();
        let first = AddCard::new(column_id, "A").execute(&ctx).await.into_result().unwrap();
        let second = AddCard::new(column_id, "B").execute(&ctx).await.into_result().unwrap();

        let result = DeleteCard::new(first["cardID"].as_str().unwrap())
            .execute(&ctx)
            .await
            .into_result()
            .unwrap();
        assert_eq!(result["deleted"], true);

        let gone = GetCard::new(first["cardID"].as_str().unwrap())
            .execute(&ctx)
            .await
            .into_result()
            .unwrap();
        assert!(gone.is_null());

        // siblings keep their positions
        let kept = GetCard::new(second["cardID"].as_str().unwrap())
            .execute(&ctx)
            .await
            .into_result()
            .unwrap();
        assert_eq!(kept["cardIndex"], 6000.0);
    }

    #[tokio::test]
    async fn test_delete_missing_card() {
        let ctx = BoardContext::in_memory();

        let result = DeleteCard::new("missing")
            .execute(&ctx)
            .await
            .into_result()
            .unwrap();
        assert_eq!(result["deleted"], false);
    }
}
