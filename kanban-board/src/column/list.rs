//! Column listing commands

use crate::context::BoardContext;
use crate::error::KanbanError;
use kanban_board_operations::{async_trait, operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// List every column, unordered
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ListColumns {}

operation!(ListColumns, verb = "list", noun = "column", description = "List every column");

impl ListColumns {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl Execute<BoardContext, KanbanError> for ListColumns {
    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<Value, KanbanError> {
        ExecutionResult::unlogged(
            async {
                let columns = ctx.column_repository().columns().await?;
                Ok(serde_json::to_value(columns)?)
            }
            .await,
        )
    }
}

/// List the columns in board order
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ListSortedColumns {}

operation!(
    ListSortedColumns,
    verb = "sorted",
    noun = "column",
    description = "List the columns in board order"
);

impl ListSortedColumns {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl Execute<BoardContext, KanbanError> for ListSortedColumns {
    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<Value, KanbanError> {
        ExecutionResult::unlogged(
            async {
                let columns = ctx.column_repository().sorted_columns().await?;
                Ok(serde_json::to_value(columns)?)
            }
            .await,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::{AddColumn, MoveColumn};

    #[tokio::test]
    async fn test_list_columns() {
        let ctx = BoardContext::in_memory();
        for title in ["To Do", "Doing", "Done"] {
            AddColumn::new(title).execute(&ctx).await.into_result().unwrap();
        }

        let result = ListColumns::new().execute(&ctx).await.into_result().unwrap();
        assert_eq!(result.as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_list_sorted_columns() {
        let ctx = BoardContext::in_memory();
        let mut ids = Vec::new();
        for title in ["To Do", "Doing", "Done"] {
            let column = AddColumn::new(title).execute(&ctx).await.into_result().unwrap();
            ids.push(column["columnID"].as_str().unwrap().to_string());
        }

        // Done to the front
        MoveColumn::new(ids[2].as_str())
            .before(3000.0)
            .execute(&ctx)
            .await
            .into_result()
            .unwrap();

        let result = ListSortedColumns::new()
            .execute(&ctx)
            .await
            .into_result()
            .unwrap();
        let titles: Vec<&str> = result
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["columnTitle"].as_str().unwrap())
            .collect();
        assert_eq!(titles, vec!["Done", "To Do", "Doing"]);
    }
}
