//! MoveColumn command

use crate::context::BoardContext;
use crate::error::{require_text, KanbanError};
use crate::ordering::check_neighbors;
use crate::processor::logged;
use crate::types::{deserialize_neighbor, ColumnId, Position};
use kanban_board_operations::{async_trait, operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Move a column between two neighboring columns
#[derive(Debug, Deserialize, Serialize)]
pub struct MoveColumn {
    #[serde(rename = "columnID")]
    pub column_id: ColumnId,

    #[serde(
        rename = "prevColumnIndex",
        default,
        deserialize_with = "deserialize_neighbor"
    )]
    pub prev_column_index: Option<Position>,

    #[serde(
        rename = "nextColumnIndex",
        default,
        deserialize_with = "deserialize_neighbor"
    )]
    pub next_column_index: Option<Position>,
}

operation!(
    MoveColumn,
    verb = "move",
    noun = "column",
    description = "Move a column between two neighbors"
);

impl MoveColumn {
    pub fn new(column_id: impl Into<ColumnId>) -> Self {
        Self {
            column_id: column_id.into(),
            prev_column_index: None,
            next_column_index: None,
        }
    }

    /// Land after the column at `prev`
    pub fn after(mut self, prev: f64) -> Self {
        self.prev_column_index = Position::neighbor(prev);
        self
    }

    /// Land before the column at `next`
    pub fn before(mut self, next: f64) -> Self {
        self.next_column_index = Position::neighbor(next);
        self
    }
}

#[async_trait]
impl Execute<BoardContext, KanbanError> for MoveColumn {
    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<Value, KanbanError> {
        logged(self, async {
            require_text("columnID", self.column_id.as_str())?;
            check_neighbors(
                "prevColumnIndex",
                "nextColumnIndex",
                self.prev_column_index,
                self.next_column_index,
            )?;

            let position = ctx
                .column_repository()
                .move_column(
                    &self.column_id,
                    self.prev_column_index,
                    self.next_column_index,
                )
                .await?
                .ok_or_else(|| KanbanError::ColumnNotFound {
                    id: self.column_id.to_string(),
                })?;

            Ok(json!({
                "columnID": self.column_id,
                "columnIndex": position,
            }))
        })
        .await
    }
}
