//! MoveCard command

use crate::context::BoardContext;
use crate::error::{require_text, KanbanError};
use crate::ordering::check_neighbors;
use crate::processor::logged;
use crate::types::{deserialize_neighbor, CardId, ColumnId, Position};
use kanban_board_operations::{async_trait, operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Move a card between two neighbors, optionally into another column
///
/// The neighbors are the positions of the cards the moved card is dropped
/// between in the target column. A missing (or zero) neighbor means the card
/// lands at that end of the column.
#[derive(Debug, Deserialize, Serialize)]
pub struct MoveCard {
    #[serde(rename = "cardID")]
    pub card_id: CardId,

    /// Target column; the card stays in its column when absent
    #[serde(rename = "columnID", default, skip_serializing_if = "Option::is_none")]
    pub column_id: Option<ColumnId>,

    #[serde(
        rename = "prevCardIndex",
        default,
        deserialize_with = "deserialize_neighbor"
    )]
    pub prev_card_index: Option<Position>,

    #[serde(
        rename = "nextCardIndex",
        default,
        deserialize_with = "deserialize_neighbor"
    )]
    pub next_card_index: Option<Position>,
}

operation!(
    MoveCard,
    verb = "move",
    noun = "card",
    description = "Move a card between two neighbors, optionally into another column"
);

impl MoveCard {
    pub fn new(card_id: impl Into<CardId>) -> Self {
        Self {
            card_id: card_id.into(),
            column_id: None,
            prev_card_index: None,
            next_card_index: None,
        }
    }

    /// Move into another column
    pub fn to_column(mut self, column_id: impl Into<ColumnId>) -> Self {
        self.column_id = Some(column_id.into());
        self
    }

    /// Land after the card at `prev`
    pub fn after(mut self, prev: f64) -> Self {
        self.prev_card_index = Position::neighbor(prev);
        self
    }

    /// Land before the card at `next`
    pub fn before(mut self, next: f64) -> Self {
        self.next_card_index = Position::neighbor(next);
        self
    }
}

#[async_trait]
impl Execute<BoardContext, KanbanError> for MoveCard {
    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<Value, KanbanError> {
        logged(self, async {
            require_text("cardID", self.card_id.as_str())?;
            check_neighbors(
                "prevCardIndex",
                "nextCardIndex",
                self.prev_card_index,
                self.next_card_index,
            )?;

            if let Some(column_id) = &self.column_id {
                require_text("columnID", column_id.as_str())?;
                if !ctx.column_repository().column_exists(column_id).await? {
                    return Err(KanbanError::ColumnNotFound {
                        id: column_id.to_string(),
                    });
                }
            }

            let repo = ctx.card_repository();
            let position = repo
                .move_card(
                    &self.card_id,
                    self.column_id.as_ref(),
                    self.prev_card_index,
                    self.next_card_index,
                )
                .await?
                .ok_or_else(|| KanbanError::CardNotFound {
                    id: self.card_id.to_string(),
                })?;

            let card = repo.get_card(&self.card_id).await?;
            Ok(json!({
                "cardID": self.card_id,
                "columnID": card.map(|c| c.column_id),
                "cardIndex": position,
            }))
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{AddCard, GetCard, ListCardsByColumn};
    use crate::column::AddColumn;

    struct Board {
        ctx: BoardContext,
        todo: String,
        done: String,
        cards: Vec<String>,
    }

    /// Two columns, three cards in the first at 3000, 6000, 9000
    async fn setup() -> Board {
        let ctx = BoardContext::in_memory();
        let mut ids = Vec::new();
        for title in ["To Do", "Done"] {
            let column = AddColumn::new(title).execute(&ctx).await.into_result().unwrap();
            ids.push(column["columnID"].as_str().unwrap().to_string());
        }

        let mut cards = Vec::new();
        for title in ["A", "B", "C"] {
            let card = AddCard::new(ids[0].as_str(), title)
                .execute(&ctx)
                .await
                .into_result()
                .unwrap();
            cards.push(card["cardID"].as_str().unwrap().to_string());
        }

        Board {
            ctx,
            todo: ids[0].clone(),
            done: ids[1].clone(),
            cards,
        }
    }

    async fn titles(ctx: &BoardContext, column_id: &str) -> Vec<String> {
        let cards = ListCardsByColumn::new(column_id)
            .execute(ctx)
            .await
            .into_result()
            .unwrap();
        cards
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["cardTitle"].as_str().unwrap().to_string())
            .collect()
    }

    #[tokio::test]
    async fn test_move_card_between_neighbors() {
        let board = setup().await;

        let result = MoveCard::new(board.cards[2].as_str())
            .after(3000.0)
            .before(6000.0)
            .execute(&board.ctx)
            .await
            .into_result()
            .unwrap();

        assert_eq!(result["cardIndex"], 4500.0);
        assert_eq!(titles(&board.ctx, &board.todo).await, vec!["A", "C", "B"]);
    }

    #[tokio::test]
    async fn test_move_card_to_other_column() {
        let board = setup().await;

        let result = MoveCard::new(board.cards[0].as_str())
            .to_column(board.done.as_str())
            .execute(&board.ctx)
            .await
            .into_result()
            .unwrap();

        assert_eq!(result["cardIndex"], 3000.0);
        assert_eq!(result["columnID"], board.done.as_str());

        let moved = GetCard::new(board.cards[0].as_str())
            .execute(&board.ctx)
            .await
            .into_result()
            .unwrap();
        assert_eq!(moved["cardID"], board.cards[0].as_str());
        assert_eq!(moved["columnID"], board.done.as_str());
        assert_eq!(titles(&board.ctx, &board.todo).await, vec!["B", "C"]);
    }

    #[tokio::test]
    async fn test_move_card_to_end() {
        let board = setup().await;

        let result = MoveCard::new(board.cards[0].as_str())
            .after(9000.0)
            .execute(&board.ctx)
            .await
            .into_result()
            .unwrap();

        assert_eq!(result["cardIndex"], 13500.0);
        assert_eq!(titles(&board.ctx, &board.todo).await, vec!["B", "C", "A"]);
    }

    #[tokio::test]
    async fn test_move_card_neighbors_from_strings() {
        let board = setup().await;

        let op: MoveCard = serde_json::from_value(json!({
            "cardID": board.cards[2],
            "prevCardIndex": "3000",
            "nextCardIndex": 6000,
        }))
        .unwrap();
        let result = op.execute(&board.ctx).await.into_result().unwrap();
        assert_eq!(result["cardIndex"], 4500.0);
    }

    #[tokio::test]
    async fn test_move_card_rejects_reversed_neighbors() {
        let board = setup().await;

        let result = MoveCard::new(board.cards[0].as_str())
            .after(6000.0)
            .before(3000.0)
            .execute(&board.ctx)
            .await
            .into_result();
        assert!(matches!(result, Err(KanbanError::InvalidValue { .. })));
        assert_eq!(titles(&board.ctx, &board.todo).await, vec!["A", "B", "C"]);
    }

    #[tokio::test]
    async fn test_move_card_unknown_column() {
        let board = setup().await;

        let result = MoveCard::new(board.cards[0].as_str())
            .to_column("nope")
            .execute(&board.ctx)
            .await
            .into_result();
        assert!(matches!(result, Err(KanbanError::ColumnNotFound { .. })));
    }

    #[tokio::test]
    async fn test_move_missing_card() {
        let board = setup().await;

        let result = MoveCard::new("missing")
            .after(3000.0)
            .execute(&board.ctx)
            .await
            .into_result();
        assert!(matches!(result, Err(KanbanError::CardNotFound { .. })));
        assert!(board
            .ctx
            .card_repository()
            .get_card(&CardId::from_string("missing"))
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_move_card_between_tied_neighbors_renumbers() {
        let board = setup().await;

        // B onto A's position: A and B now tie at 3000
        let ctx = &board.ctx;
        ctx.cards()
            .update_fields(
                &board.cards[1],
                crate::ordering::position_fields::<crate::types::Card>(Position::new(3000.0)),
            )
            .await
            .unwrap();

        let result = MoveCard::new(board.cards[2].as_str())
            .after(3000.0)
            .before(3000.0)
            .execute(ctx)
            .await
            .into_result()
            .unwrap();

        // siblings renumbered to 3000, 6000; C after both
        assert_eq!(result["cardIndex"], 9000.0);
        let order = titles(ctx, &board.todo).await;
        assert_eq!(order.len(), 3);
        assert_eq!(order[2], "C");

        let cards = ListCardsByColumn::new(board.todo.as_str())
            .execute(ctx)
            .await
            .into_result()
            .unwrap();
        let indexes: Vec<f64> = cards
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["cardIndex"].as_f64().unwrap())
            .collect();
        assert_eq!(indexes, vec![3000.0, 6000.0, 9000.0]);
    }

    async fn card_indexes(ctx: &BoardContext, column_id: &str) -> Vec<(String, f64)> {
        let cards = ListCardsByColumn::new(column_id)
            .execute(ctx)
            .await
            .into_result()
            .unwrap();
        cards
            .as_array()
            .unwrap()
            .iter()
            .map(|c| {
                (
                    c["cardTitle"].as_str().unwrap().to_string(),
                    c["cardIndex"].as_f64().unwrap(),
                )
            })
            .collect()
    }

    #[tokio::test]
    async fn test_move_card_after_position_below_every_card() {
        let board = setup().await;

        let result = MoveCard::new(board.cards[2].as_str())
            .after(1e-7)
            .execute(&board.ctx)
            .await
            .into_result()
            .unwrap();

        // A and B renumbered to 3000 and 6000, C lands before both
        assert_eq!(result["cardIndex"], 1500.0);
        assert_eq!(
            card_indexes(&board.ctx, &board.todo).await,
            vec![
                ("C".to_string(), 1500.0),
                ("A".to_string(), 3000.0),
                ("B".to_string(), 6000.0),
            ]
        );
    }

    #[tokio::test]
    async fn test_move_card_rejects_negative_neighbor() {
        let board = setup().await;

        let result = MoveCard::new(board.cards[2].as_str())
            .after(-100.0)
            .execute(&board.ctx)
            .await
            .into_result();
        assert!(matches!(
            result,
            Err(KanbanError::InvalidValue { ref field, .. }) if field == "prevCardIndex"
        ));
        assert_eq!(titles(&board.ctx, &board.todo).await, vec!["A", "B", "C"]);

        let op: MoveCard = serde_json::from_value(json!({
            "cardID": board.cards[0],
            "nextCardIndex": "-3000",
        }))
        .unwrap();
        let result = op.execute(&board.ctx).await.into_result();
        assert!(matches!(
            result,
            Err(KanbanError::InvalidValue { ref field, .. }) if field == "nextCardIndex"
        ));
    }
}
