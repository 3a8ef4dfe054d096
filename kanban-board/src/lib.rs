//! Kanban board engine: columns and cards ordered by fractional positions
//!
//! A board is a set of columns, each holding an ordered list of cards. Both
//! live in key-value tables (see `kanban-board-store`). Order is a stored
//! `f64` position per row; moving an entity rewrites only that entity,
//! computing a new position from the two neighbors it is dropped between.
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use kanban_board::{card::{AddCard, MoveCard}, column::AddColumn, BoardContext, Execute};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let ctx = BoardContext::in_memory();
//!
//! let column = AddColumn::new("To Do").execute(&ctx).await.into_result()?;
//! let column_id = column["columnID"].as_str().unwrap_or_default();
//!
//! AddCard::new(column_id, "First").execute(&ctx).await.into_result()?;   // 3000
//! AddCard::new(column_id, "Second").execute(&ctx).await.into_result()?;  // 6000
//! let third = AddCard::new(column_id, "Third").execute(&ctx).await.into_result()?;
//!
//! // Drop "Third" between the other two: 4500
//! MoveCard::new(third["cardID"].as_str().unwrap_or_default())
//!     .after(3000.0)
//!     .before(6000.0)
//!     .execute(&ctx)
//!     .await
//!     .into_result()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Positions
//!
//! - appended: `max + 3000` (3000 in an empty scope)
//! - between two neighbors: the midpoint
//! - after the last: `prev * 1.5`
//! - before the first: `next / 2`
//!
//! When a computed position leaves no usable gap the scope is renumbered to
//! `3000, 6000, ...` and the position computed again.
//!
//! ## Storage Structure (file backend)
//!
//! ```text
//! <data_dir>/
//! ├── cards/
//! │   ├── .lock
//! │   └── {cardID}.json
//! └── columns/
//!     ├── .lock
//!     └── {columnID}.json
//! ```

mod context;
mod error;
mod ordering;
mod processor;
pub mod repository;
pub mod types;

// Command modules
pub mod card;
pub mod column;

pub use context::BoardContext;
pub use error::{KanbanError, Result};
pub use processor::BoardOperationProcessor;

// Re-export operations types for convenience
pub use kanban_board_operations::{
    async_trait, Execute, ExecutionResult, LogEntry, Operation, OperationProcessor,
};
