//! HTTP API for the kanban board
//!
//! A thin layer over `kanban-board` commands: JSON in, a
//! `{"message", "data"}` envelope out, `{"message", "error"}` on failure.
//!
//! ```rust,no_run
//! use kanban_board::BoardContext;
//! use kanban_board_server::{router, AppState};
//!
//! # async fn example() -> std::io::Result<()> {
//! let app = router(AppState::new(BoardContext::in_memory()));
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
//! axum::serve(listener, app).await
//! # }
//! ```

pub mod config;
mod error;
pub mod logging;
mod response;
mod routes;

pub use config::{ConfigError, ServerConfig, StorageKind};
pub use error::{ApiError, ApiErrorKind};
pub use response::Envelope;
pub use routes::{router, AppState};
