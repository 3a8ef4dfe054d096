//! Column repository

use crate::error::{KanbanError, Result};
use crate::ordering::{max_position, place, position_fields};
use crate::types::{Column, ColumnId, Position, BOARD_SCOPE};
use kanban_board_store::{Item, SortOrder, Table};
use serde_json::json;

/// Request-scoped access to the columns table
pub struct ColumnRepository<'a> {
    table: &'a dyn Table<Column>,
}

impl<'a> ColumnRepository<'a> {
    pub fn new(table: &'a dyn Table<Column>) -> Self {
        Self { table }
    }

    /// Append a new column at the end of the board
    pub async fn create_column(&self, column_title: &str) -> Result<Column> {
        let max = self.max_column_index().await?;
        let column = Column::new(Position::append_after(max), column_title);

        self.table
            .put(&column)
            .await
            .map_err(KanbanError::storage("add column"))?;

        tracing::info!(
            column = %column.column_id,
            position = %column.column_index,
            "created column"
        );
        Ok(column)
    }

    pub async fn get_column(&self, column_id: &ColumnId) -> Result<Option<Column>> {
        self.table
            .get(column_id.as_str())
            .await
            .map_err(KanbanError::storage("get column"))
    }

    pub async fn column_exists(&self, column_id: &ColumnId) -> Result<bool> {
        Ok(self.get_column(column_id).await?.is_some())
    }

    /// Rename a column; `None` when it does not exist
    pub async fn update_column(
        &self,
        column_id: &ColumnId,
        column_title: &str,
    ) -> Result<Option<Column>> {
        let mut fields = Item::new();
        fields.insert("columnTitle".into(), json!(column_title));

        self.table
            .update_fields(column_id.as_str(), fields)
            .await
            .map_err(KanbanError::storage("update column"))
    }

    /// Delete the column row only; its cards are the caller's concern
    pub async fn delete_column(&self, column_id: &ColumnId) -> Result<Option<Column>> {
        self.table
            .delete(column_id.as_str())
            .await
            .map_err(KanbanError::storage("delete column"))
    }

    pub async fn columns(&self) -> Result<Vec<Column>> {
        self.table
            .scan_all()
            .await
            .map_err(KanbanError::storage("get columns"))
    }

    /// Columns in board order
    pub async fn sorted_columns(&self) -> Result<Vec<Column>> {
        self.table
            .query_index(BOARD_SCOPE, SortOrder::Ascending, None)
            .await
            .map_err(KanbanError::storage("get sorted columns"))
    }

    /// Move a column between two neighbors
    ///
    /// Returns the new position, or `None` when the column does not exist.
    pub async fn move_column(
        &self,
        column_id: &ColumnId,
        prev: Option<Position>,
        next: Option<Position>,
    ) -> Result<Option<Position>> {
        if !self.column_exists(column_id).await? {
            return Ok(None);
        }

        let position = place(self.table, BOARD_SCOPE, column_id.as_str(), prev, next)
            .await
            .map_err(KanbanError::storage("move column"))?;

        let moved = self
            .table
            .update_fields(column_id.as_str(), position_fields::<Column>(position))
            .await
            .map_err(KanbanError::storage("move column"))?;

        if moved.is_some() {
            tracing::info!(column = %column_id, %position, "moved column");
        }
        Ok(moved.map(|column| column.column_index))
    }

    /// Highest column position, zero when the board has no columns
    pub async fn max_column_index(&self) -> Result<Position> {
        max_position(self.table, BOARD_SCOPE)
            .await
            .map_err(KanbanError::storage("get maximum column index"))
    }
}
