//! Column: a workflow stage, ordered on the board

use super::ids::ColumnId;
use super::position::Position;
use super::Positioned;
use kanban_board_store::Record;
use serde::{Deserialize, Serialize};

/// Index partition shared by every column: the board is one scope
pub const BOARD_SCOPE: &str = "board";

/// A column on the board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    #[serde(rename = "columnID")]
    pub column_id: ColumnId,

    /// Order on the board, ascending
    #[serde(rename = "columnIndex")]
    pub column_index: Position,

    #[serde(rename = "columnTitle")]
    pub column_title: String,
}

impl Column {
    /// Create a new column with a fresh ID
    pub fn new(column_index: Position, column_title: impl Into<String>) -> Self {
        Self {
            column_id: ColumnId::new(),
            column_index,
            column_title: column_title.into(),
        }
    }
}

impl Record for Column {
    const TABLE: &'static str = "columns";

    fn key(&self) -> &str {
        self.column_id.as_str()
    }

    fn partition(&self) -> &str {
        BOARD_SCOPE
    }

    fn sort_value(&self) -> f64 {
        self.column_index.value()
    }
}

impl Positioned for Column {
    const POSITION_FIELD: &'static str = "columnIndex";

    fn position(&self) -> Position {
        self.column_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_wire_names() {
        let column = Column::new(Position::new(3000.0), "To Do");
        let value = serde_json::to_value(&column).unwrap();

        assert_eq!(value["columnIndex"], 3000.0);
        assert_eq!(value["columnTitle"], "To Do");
        assert_eq!(value["columnID"], column.column_id.as_str());
        assert_eq!(column.partition(), BOARD_SCOPE);
    }
}
