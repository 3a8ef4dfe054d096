//! Router assembly
//!
//! Handlers only extract parameters, run one board command through the
//! processor, and wrap the outcome in the response envelope.

mod cards;
mod columns;

use axum::routing::get;
use axum::{Json, Router};
use kanban_board::{
    BoardContext, BoardOperationProcessor, Execute, KanbanError, OperationProcessor,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    ctx: BoardContext,
    processor: Arc<BoardOperationProcessor>,
}

impl AppState {
    pub fn new(ctx: BoardContext) -> Self {
        Self {
            ctx,
            processor: Arc::new(BoardOperationProcessor::new()),
        }
    }

    /// Use a processor that attributes entries to an actor
    pub fn with_processor(mut self, processor: BoardOperationProcessor) -> Self {
        self.processor = Arc::new(processor);
        self
    }

    pub fn context(&self) -> &BoardContext {
        &self.ctx
    }

    async fn run<O>(&self, operation: &O) -> Result<Value, KanbanError>
    where
        O: Execute<BoardContext, KanbanError> + Sync,
    {
        self.processor.process(operation, &self.ctx).await
    }
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .merge(columns::routes())
        .merge(cards::routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
