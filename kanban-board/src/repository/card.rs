//! Card repository: card rows plus their ordering within columns

use crate::error::{KanbanError, Result};
use crate::ordering::{max_position, place, position_fields};
use crate::types::{Card, CardChanges, CardId, ColumnId, Position};
use kanban_board_store::{SortOrder, Table};
use serde_json::json;

/// Request-scoped access to the cards table
pub struct CardRepository<'a> {
    table: &'a dyn Table<Card>,
}

impl<'a> CardRepository<'a> {
    pub fn new(table: &'a dyn Table<Card>) -> Self {
        Self { table }
    }

    /// Append a new card at the end of `column_id`
    pub async fn create_card(
        &self,
        column_id: &ColumnId,
        card_title: &str,
        card_description: Option<&str>,
    ) -> Result<Card> {
        let max = self.max_card_index(column_id).await?;

        let mut card = Card::new(column_id.clone(), Position::append_after(max), card_title);
        if let Some(description) = card_description {
            card = card.with_description(description);
        }

        self.table
            .put(&card)
            .await
            .map_err(KanbanError::storage("add card"))?;

        tracing::info!(
            card = %card.card_id,
            column = %column_id,
            position = %card.card_index,
            "created card"
        );
        Ok(card)
    }

    pub async fn get_card(&self, card_id: &CardId) -> Result<Option<Card>> {
        self.table
            .get(card_id.as_str())
            .await
            .map_err(KanbanError::storage("get card"))
    }

    /// Apply content changes; `None` when the card does not exist
    pub async fn update_card(&self, card_id: &CardId, changes: CardChanges) -> Result<Option<Card>> {
        self.table
            .update_fields(card_id.as_str(), changes.into_fields())
            .await
            .map_err(KanbanError::storage("update card"))
    }

    /// Delete one card; siblings keep their positions
    pub async fn delete_card(&self, card_id: &CardId) -> Result<Option<Card>> {
        self.table
            .delete(card_id.as_str())
            .await
            .map_err(KanbanError::storage("delete card"))
    }

    /// Every card, unordered
    pub async fn cards(&self) -> Result<Vec<Card>> {
        self.table
            .scan_all()
            .await
            .map_err(KanbanError::storage("get cards"))
    }

    /// Cards of one column in display order
    pub async fn cards_by_column(&self, column_id: &ColumnId) -> Result<Vec<Card>> {
        self.table
            .query_index(column_id.as_str(), SortOrder::Ascending, None)
            .await
            .map_err(KanbanError::storage("get cards by column"))
    }

    /// Every card, grouped by column and in display order within each
    pub async fn sorted_cards(&self) -> Result<Vec<Card>> {
        let mut cards = self.cards().await?;
        cards.sort_by(|a, b| {
            a.column_id
                .cmp(&b.column_id)
                .then_with(|| a.card_index.value().total_cmp(&b.card_index.value()))
        });
        Ok(cards)
    }

    /// Move a card between two neighbors, optionally into another column
    ///
    /// `prev` and `next` are the positions of the cards the moved card lands
    /// between in the target column. Returns the new position, or `None`
    /// when the card does not exist.
    pub async fn move_card(
        &self,
        card_id: &CardId,
        column_id: Option<&ColumnId>,
        prev: Option<Position>,
        next: Option<Position>,
    ) -> Result<Option<Position>> {
        let Some(card) = self.get_card(card_id).await? else {
            return Ok(None);
        };
        let target = column_id.unwrap_or(&card.column_id);

        let position = place(self.table, target.as_str(), card_id.as_str(), prev, next)
            .await
            .map_err(KanbanError::storage("move card"))?;

        let mut fields = position_fields::<Card>(position);
        fields.insert("columnID".into(), json!(target));

        let moved = self
            .table
            .update_fields(card_id.as_str(), fields)
            .await
            .map_err(KanbanError::storage("move card"))?;

        if moved.is_some() {
            tracing::info!(
                card = %card_id,
                from = %card.column_id,
                to = %target,
                %position,
                "moved card"
            );
        }
        Ok(moved.map(|card| card.card_index))
    }

    /// Highest card position in a column, zero when it has no cards
    pub async fn max_card_index(&self, column_id: &ColumnId) -> Result<Position> {
        max_position(self.table, column_id.as_str())
            .await
            .map_err(KanbanError::storage("get maximum card index"))
    }

    /// Delete the given cards; no renumbering of what remains
    pub async fn delete_cards_in_batch(&self, cards: &[Card]) -> Result<usize> {
        if cards.is_empty() {
            tracing::debug!("no cards to delete");
            return Ok(0);
        }

        let ids: Vec<String> = cards.iter().map(|c| c.card_id.to_string()).collect();
        let removed = self
            .table
            .batch_delete(&ids)
            .await
            .map_err(KanbanError::storage("delete cards"))?;

        tracing::info!(requested = ids.len(), removed, "deleted cards in batch");
        Ok(removed)
    }
}
