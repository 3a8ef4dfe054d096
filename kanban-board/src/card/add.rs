//! AddCard command

use crate::context::BoardContext;
use crate::error::{require_text, KanbanError};
use crate::processor::logged;
use crate::types::ColumnId;
use kanban_board_operations::{async_trait, operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Append a new card to the end of a column
#[derive(Debug, Deserialize, Serialize)]
pub struct AddCard {
    /// The column receiving the card
    #[serde(rename = "columnID")]
    pub column_id: ColumnId,

    #[serde(rename = "cardTitle")]
    pub card_title: String,

    #[serde(
        rename = "cardDescription",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub card_description: Option<String>,
}

operation!(
    AddCard,
    verb = "add",
    noun = "card",
    description = "Append a new card to the end of a column"
);

impl AddCard {
    /// Create a new AddCard command
    pub fn new(column_id: impl Into<ColumnId>, card_title: impl Into<String>) -> Self {
        Self {
            column_id: column_id.into(),
            card_title: card_title.into(),
            card_description: None,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.card_description = Some(description.into());
        self
    }
}

#[async_trait]
impl Execute<BoardContext, KanbanError> for AddCard {
    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<Value, KanbanError> {
        logged(self, async {
            require_text("columnID", self.column_id.as_str())?;
            require_text("cardTitle", &self.card_title)?;

            if !ctx.column_repository().column_exists(&self.column_id).await? {
                return Err(KanbanError::ColumnNotFound {
                    id: self.column_id.to_string(),
                });
            }

            let card = ctx
                .card_repository()
                .create_card(
                    &self.column_id,
                    &self.card_title,
                    self.card_description.as_deref(),
                )
                .await?;

            Ok(serde_json::to_value(&card)?)
        })
        .await
    }
}
