//! Card handlers

use super::AppState;
use crate::error::ApiError;
use crate::response::Envelope;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::routing::{get, put};
use axum::{Json, Router};
use kanban_board::card::{
    AddCard, DeleteCard, GetCard, GetMaxCardIndex, ListCards, ListCardsByColumn,
    ListSortedCards, MoveCard, UpdateCard,
};
use kanban_board::types::{deserialize_neighbor, CardId, ColumnId, Position};
use serde::Deserialize;

type Body<T> = Result<Json<T>, JsonRejection>;

pub(super) fn routes() -> Router<AppState> {
    Router::new()
        .route("/cards", get(list_cards))
        .route("/cards/sorted", get(sorted_cards))
        .route(
            "/cards/:card_id",
            get(get_card).put(update_card).delete(delete_card),
        )
        .route("/cards/:card_id/move", put(move_card))
        .route(
            "/columns/:column_id/cards",
            get(cards_by_column).post(add_card),
        )
        .route("/columns/:column_id/cards/max-index", get(max_card_index))
}

#[derive(Debug, Deserialize)]
struct AddBody {
    #[serde(rename = "cardTitle", default)]
    card_title: String,
    #[serde(rename = "cardDescription", default)]
    card_description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UpdateBody {
    #[serde(rename = "cardTitle", default)]
    card_title: Option<String>,
    #[serde(rename = "cardDescription", default)]
    card_description: Option<String>,
    #[serde(rename = "hasImage", default)]
    has_image: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct MoveBody {
    #[serde(rename = "columnID", default)]
    column_id: Option<ColumnId>,
    #[serde(
        rename = "prevCardIndex",
        default,
        deserialize_with = "deserialize_neighbor"
    )]
    prev_card_index: Option<Position>,
    #[serde(
        rename = "nextCardIndex",
        default,
        deserialize_with = "deserialize_neighbor"
    )]
    next_card_index: Option<Position>,
}

async fn add_card(
    State(state): State<AppState>,
    Path(column_id): Path<String>,
    body: Body<AddBody>,
) -> Result<Envelope, ApiError> {
    const ACTION: &str = "add a card";
    let Json(body) = body.map_err(ApiError::failed(ACTION))?;

    let command = AddCard {
        column_id: ColumnId::from_string(column_id),
        card_title: body.card_title,
        card_description: body.card_description,
    };
    let card = state
        .run(&command)
        .await
        .map_err(ApiError::failed(ACTION))?;
    Ok(Envelope::new("Successfully added a card.", card))
}

async fn get_card(
    State(state): State<AppState>,
    Path(card_id): Path<String>,
) -> Result<Envelope, ApiError> {
    let card = state
        .run(&GetCard::new(card_id))
        .await
        .map_err(ApiError::failed("retrieve a card"))?;
    Ok(Envelope::new("Successfully retrieved a card.", card))
}

async fn update_card(
    State(state): State<AppState>,
    Path(card_id): Path<String>,
    body: Body<UpdateBody>,
) -> Result<Envelope, ApiError> {
    const ACTION: &str = "update a card";
    let Json(body) = body.map_err(ApiError::failed(ACTION))?;

    let command = UpdateCard {
        card_id: CardId::from_string(card_id),
        card_title: body.card_title,
        card_description: body.card_description,
        has_image: body.has_image,
    };
    let card = state
        .run(&command)
        .await
        .map_err(ApiError::failed(ACTION))?;
    Ok(Envelope::new("Successfully updated a card.", card))
}

async fn delete_card(
    State(state): State<AppState>,
    Path(card_id): Path<String>,
) -> Result<Envelope, ApiError> {
    let result = state
        .run(&DeleteCard::new(card_id))
        .await
        .map_err(ApiError::failed("delete a card"))?;
    Ok(Envelope::new("Successfully deleted a card.", result))
}

async fn list_cards(State(state): State<AppState>) -> Result<Envelope, ApiError> {
    let cards = state
        .run(&ListCards::new())
        .await
        .map_err(ApiError::failed("get cards"))?;
    Ok(Envelope::new("Successfully get cards.", cards))
}

async fn cards_by_column(
    State(state): State<AppState>,
    Path(column_id): Path<String>,
) -> Result<Envelope, ApiError> {
    let cards = state
        .run(&ListCardsByColumn::new(column_id))
        .await
        .map_err(ApiError::failed("get cards by columnID"))?;
    Ok(Envelope::new("Successfully get cards by columnID.", cards))
}

async fn sorted_cards(State(state): State<AppState>) -> Result<Envelope, ApiError> {
    let cards = state
        .run(&ListSortedCards::new())
        .await
        .map_err(ApiError::failed("get sorted cards"))?;
    Ok(Envelope::new("Successfully get sorted cards.", cards))
}

async fn move_card(
    State(state): State<AppState>,
    Path(card_id): Path<String>,
    body: Body<MoveBody>,
) -> Result<Envelope, ApiError> {
    const ACTION: &str = "move a card";
    let Json(body) = body.map_err(ApiError::failed(ACTION))?;

    let command = MoveCard {
        card_id: CardId::from_string(card_id),
        column_id: body.column_id,
        prev_card_index: body.prev_card_index,
        next_card_index: body.next_card_index,
    };
    let moved = state
        .run(&command)
        .await
        .map_err(ApiError::failed(ACTION))?;
    Ok(Envelope::new("Successfully moved a card.", moved))
}

async fn max_card_index(
    State(state): State<AppState>,
    Path(column_id): Path<String>,
) -> Result<Envelope, ApiError> {
    let max = state
        .run(&GetMaxCardIndex::new(column_id))
        .await
        .map_err(ApiError::failed("get max card index"))?;
    Ok(Envelope::new("Successfully get max card index.", max))
}
