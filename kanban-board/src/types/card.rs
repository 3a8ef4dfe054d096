//! Card: an item on the board, ordered within its column

use super::ids::{CardId, ColumnId};
use super::position::Position;
use super::Positioned;
use kanban_board_store::{Item, Record};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// A card in a column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    #[serde(rename = "cardID")]
    pub card_id: CardId,

    /// Owning column
    #[serde(rename = "columnID")]
    pub column_id: ColumnId,

    /// Order within the column, ascending
    #[serde(rename = "cardIndex")]
    pub card_index: Position,

    #[serde(rename = "cardTitle")]
    pub card_title: String,

    #[serde(
        rename = "cardDescription",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub card_description: Option<String>,

    #[serde(rename = "hasImage", default)]
    pub has_image: bool,
}

impl Card {
    /// Create a new card with a fresh ID
    pub fn new(column_id: ColumnId, card_index: Position, card_title: impl Into<String>) -> Self {
        Self {
            card_id: CardId::new(),
            column_id,
            card_index,
            card_title: card_title.into(),
            card_description: None,
            has_image: false,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.card_description = Some(description.into());
        self
    }
}

impl Record for Card {
    const TABLE: &'static str = "cards";

    fn key(&self) -> &str {
        self.card_id.as_str()
    }

    fn partition(&self) -> &str {
        self.column_id.as_str()
    }

    fn sort_value(&self) -> f64 {
        self.card_index.value()
    }
}

impl Positioned for Card {
    const POSITION_FIELD: &'static str = "cardIndex";

    fn position(&self) -> Position {
        self.card_index
    }
}

/// Partial update of a card's content
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardChanges {
    pub card_title: Option<String>,
    pub card_description: Option<String>,
    pub has_image: Option<bool>,
}

impl CardChanges {
    /// True when nothing would change
    pub fn is_empty(&self) -> bool {
        self.card_title.is_none() && self.card_description.is_none() && self.has_image.is_none()
    }

    /// The attribute map handed to the table
    pub fn into_fields(self) -> Item {
        let mut fields = Item::new();
        if let Some(title) = self.card_title {
            fields.insert("cardTitle".into(), json!(title));
        }
        if let Some(description) = self.card_description {
            fields.insert("cardDescription".into(), json!(description));
        }
        if let Some(has_image) = self.has_image {
            fields.insert("hasImage".into(), json!(has_image));
        }
        fields
    }
}
