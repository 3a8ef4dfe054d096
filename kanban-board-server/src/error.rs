//! HTTP error responses

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use kanban_board::KanbanError;
use serde_json::json;
use thiserror::Error;

/// A failed request: what was attempted plus why it failed
#[derive(Debug, Error)]
#[error("{action}: {kind}")]
pub struct ApiError {
    /// Human readable action, e.g. "add a card"
    pub action: &'static str,
    pub kind: ApiErrorKind,
}

#[derive(Debug, Error)]
pub enum ApiErrorKind {
    #[error(transparent)]
    Board(#[from] KanbanError),

    /// The request body was not valid JSON for the command
    #[error("invalid request body: {0}")]
    Body(String),
}

impl ApiError {
    /// Attach `action` to an error
    ///
    /// ```ignore
    /// command.execute(&ctx).await.into_result().map_err(ApiError::failed("add a card"))?;
    /// ```
    pub fn failed<E: Into<ApiErrorKind>>(action: &'static str) -> impl FnOnce(E) -> Self {
        move |error| Self {
            action,
            kind: error.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match &self.kind {
            ApiErrorKind::Body(_) => StatusCode::BAD_REQUEST,
            ApiErrorKind::Board(error) if error.is_validation() => StatusCode::BAD_REQUEST,
            ApiErrorKind::Board(error) if error.is_not_found() => StatusCode::NOT_FOUND,
            ApiErrorKind::Board(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiErrorKind {
    fn from(rejection: JsonRejection) -> Self {
        Self::Body(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(action = self.action, error = %self.kind, "request failed");
        } else {
            tracing::debug!(action = self.action, error = %self.kind, %status, "request rejected");
        }

        let body = Json(json!({
            "message": format!("Failed to {}.", self.action),
            "error": self.kind.to_string(),
        }));
        (status, body).into_response()
    }
}
