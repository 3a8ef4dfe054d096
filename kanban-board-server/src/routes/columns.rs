//! Column handlers

use super::AppState;
use crate::error::ApiError;
use crate::response::Envelope;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::routing::{get, put};
use axum::{Json, Router};
use kanban_board::column::{
    AddColumn, DeleteColumn, GetColumn, GetMaxColumnIndex, ListColumns, ListSortedColumns,
    MoveColumn, UpdateColumn,
};
use kanban_board::types::{deserialize_neighbor, ColumnId, Position};
use serde::Deserialize;

type Body<T> = Result<Json<T>, JsonRejection>;

pub(super) fn routes() -> Router<AppState> {
    Router::new()
        .route("/columns", get(list_columns).post(add_column))
        .route("/columns/sorted", get(sorted_columns))
        .route("/columns/max-index", get(max_column_index))
        .route(
            "/columns/:column_id",
            get(get_column).put(update_column).delete(delete_column),
        )
        .route("/columns/:column_id/move", put(move_column))
}

#[derive(Debug, Deserialize)]
struct TitleBody {
    #[serde(rename = "columnTitle", default)]
    column_title: String,
}

#[derive(Debug, Deserialize)]
struct MoveBody {
    #[serde(
        rename = "prevColumnIndex",
        default,
        deserialize_with = "deserialize_neighbor"
    )]
    prev_column_index: Option<Position>,
    #[serde(
        rename = "nextColumnIndex",
        default,
        deserialize_with = "deserialize_neighbor"
    )]
    next_column_index: Option<Position>,
}

async fn add_column(
    State(state): State<AppState>,
    body: Body<TitleBody>,
) -> Result<Envelope, ApiError> {
    const ACTION: &str = "add a column";
    let Json(body) = body.map_err(ApiError::failed(ACTION))?;

    let column = state
        .run(&AddColumn::new(body.column_title))
        .await
        .map_err(ApiError::failed(ACTION))?;
    Ok(Envelope::new("Successfully added a column.", column))
}

async fn get_column(
    State(state): State<AppState>,
    Path(column_id): Path<String>,
) -> Result<Envelope, ApiError> {
    let column = state
        .run(&GetColumn::new(column_id))
        .await
        .map_err(ApiError::failed("retrieve a column"))?;
    Ok(Envelope::new("Successfully retrieved a column.", column))
}

async fn update_column(
    State(state): State<AppState>,
    Path(column_id): Path<String>,
    body: Body<TitleBody>,
) -> Result<Envelope, ApiError> {
    const ACTION: &str = "update a column";
    let Json(body) = body.map_err(ApiError::failed(ACTION))?;

    let column = state
        .run(&UpdateColumn::new(column_id, body.column_title))
        .await
        .map_err(ApiError::failed(ACTION))?;
    Ok(Envelope::new("Successfully updated a column.", column))
}

async fn delete_column(
    State(state): State<AppState>,
    Path(column_id): Path<String>,
) -> Result<Envelope, ApiError> {
    let result = state
        .run(&DeleteColumn::new(column_id))
        .await
        .map_err(ApiError::failed("delete a column"))?;
    Ok(Envelope::new("Successfully deleted a column.", result))
}

async fn list_columns(State(state): State<AppState>) -> Result<Envelope, ApiError> {
    let columns = state
        .run(&ListColumns::new())
        .await
        .map_err(ApiError::failed("get columns"))?;
    Ok(Envelope::new("Successfully get columns.", columns))
}

async fn sorted_columns(State(state): State<AppState>) -> Result<Envelope, ApiError> {
    let columns = state
        .run(&ListSortedColumns::new())
        .await
        .map_err(ApiError::failed("get sorted columns"))?;
    Ok(Envelope::new("Successfully get sorted columns.", columns))
}

async fn move_column(
    State(state): State<AppState>,
    Path(column_id): Path<String>,
    body: Body<MoveBody>,
) -> Result<Envelope, ApiError> {
    const ACTION: &str = "move a column";
    let Json(body) = body.map_err(ApiError::failed(ACTION))?;

    let command = MoveColumn {
        column_id: ColumnId::from_string(column_id),
        prev_column_index: body.prev_column_index,
        next_column_index: body.next_column_index,
    };
    let moved = state
        .run(&command)
        .await
        .map_err(ApiError::failed(ACTION))?;
    Ok(Envelope::new("Successfully moved a column.", moved))
}

async fn max_column_index(State(state): State<AppState>) -> Result<Envelope, ApiError> {
    let max = state
        .run(&GetMaxColumnIndex::new())
        .await
        .map_err(ApiError::failed("get max column index"))?;
    Ok(Envelope::new("Successfully get max column index.", max))
}
