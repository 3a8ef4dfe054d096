//! UpdateCard command

use crate::context::BoardContext;
use crate::error::{require_text, KanbanError};
use crate::processor::logged;
use crate::types::{CardChanges, CardId};
use kanban_board_operations::{async_trait, operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Change a card's title, description or image flag
///
/// Only the fields that are present are written. Position and column are
/// changed by [`MoveCard`](crate::card::MoveCard), never here.
#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateCard {
    #[serde(rename = "cardID")]
    pub card_id: CardId,

    #[serde(rename = "cardTitle", default, skip_serializing_if = "Option::is_none")]
    pub card_title: Option<String>,

    #[serde(
        rename = "cardDescription",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub card_description: Option<String>,

    #[serde(rename = "hasImage", default, skip_serializing_if = "Option::is_none")]
    pub has_image: Option<bool>,
}

operation!(
    UpdateCard,
    verb = "update",
    noun = "card",
    description = "Update a card's title, description or image flag"
);

impl UpdateCard {
    pub fn new(card_id: impl Into<CardId>) -> Self {
        Self {
            card_id: card_id.into(),
            card_title: None,
            card_description: None,
            has_image: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.card_title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.card_description = Some(description.into());
        self
    }

    pub fn with_image(mut self, has_image: bool) -> Self {
        self.has_image = Some(has_image);
        self
    }

    fn changes(&self) -> CardChanges {
        CardChanges {
            card_title: self.card_title.clone(),
            card_description: self.card_description.clone(),
            has_image: self.has_image,
        }
    }
}

#[async_trait]
impl Execute<BoardContext, KanbanError> for UpdateCard {
    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<Value, KanbanError> {
        logged(self, async {
            require_text("cardID", self.card_id.as_str())?;
            if let Some(title) = &self.card_title {
                require_text("cardTitle", title)?;
            }

            let changes = self.changes();
            if changes.is_empty() {
                return Err(KanbanError::invalid_value(
                    "cardTitle",
                    "nothing to update: provide cardTitle, cardDescription or hasImage",
                ));
            }

            let card = ctx
                .card_repository()
                .update_card(&self.card_id, changes)
                .await?
                .ok_or_else(|| KanbanError::CardNotFound {
                    id: self.card_id.to_string(),
                })?;

            tracing::info!(card = %self.card_id, "updated card");
            Ok(serde_json::to_value(&card)?)
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::AddCard;
    use crate::column::AddColumn;

    async fn setup() -> (BoardContext, Value) {
        let ctx = BoardContext::in_memory();
        let column = AddColumn::new("To Do").execute(&ctx).await.into_result().unwrap();
        let card = AddCard::new(column["columnID"].as_str().unwrap(), "Task")
            .execute(&ctx)
            .await
            .into_result()
            .unwrap();
        (ctx, card)
    }

    #[tokio::test]
    async fn test_update_card_title() {
        let (ctx, card) = setup().await;

        let result = UpdateCard::new(card["cardID"].as_str().unwrap())
            .with_title("Renamed")
            .execute(&ctx)
            .await
            .into_result()
            .unwrap();

        assert_eq!(result["cardTitle"], "Renamed");
        assert_eq!(result["cardIndex"], card["cardIndex"]);
        assert_eq!(result["columnID"], card["columnID"]);
    }

    #[tokio::test]
    async fn test_update_card_image_and_description() {
        let (ctx, card) = setup().await;

        let result = UpdateCard::new(card["cardID"].as_str().unwrap())
            .with_description("Details")
            .with_image(true)
            .execute(&ctx)
            .await
            .into_result()
            .unwrap();

        assert_eq!(result["cardTitle"], "Task");
        assert_eq!(result["cardDescription"], "Details");
        assert_eq!(result["hasImage"], true);
    }

    #[tokio::test]
    async fn test_update_card_requires_a_change() {
        let (ctx, card) = setup().await;

        let result = UpdateCard::new(card["cardID"].as_str().unwrap())
            .execute(&ctx)
            .await
            .into_result();
        assert!(matches!(result, Err(KanbanError::InvalidValue { .. })));
    }

    #[tokio::test]
    async fn test_update_missing_card() {
        let ctx = BoardContext::in_memory();

        let result = UpdateCard::new("missing")
            .with_title("Ghost")
            .execute(&ctx)
            .await
            .into_result();
        assert!(matches!(result, Err(KanbanError::CardNotFound { .. })));
        assert!(ctx.card_repository().cards().await.unwrap().is_empty());
    }
}
