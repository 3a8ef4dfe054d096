//! # Kanban Board Operations
//!
//! Every board command is a struct whose fields ARE its parameters. The
//! struct implements [`Operation`] (what it is called) and [`Execute`] (what it
//! does against a context). An [`OperationProcessor`] runs commands and takes
//! care of the audit trail.
//!
//! ## Example
//!
//! ```ignore
//! use kanban_board_operations::*;
//!
//! #[derive(Debug, Deserialize, Serialize)]
//! pub struct AddColumn {
//!     pub column_title: String,
//! }
//!
//! operation!(AddColumn, verb = "add", noun = "column", description = "Append a column");
//!
//! #[async_trait]
//! impl Execute<BoardContext, KanbanError> for AddColumn {
//!     async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<Value, KanbanError> {
//!         // returns ExecutionResult::Logged for mutations, Unlogged for reads
//!     }
//! }
//! ```

mod execution_result;
mod log;
mod operation;
mod processor;

pub use execution_result::ExecutionResult;
pub use log::LogEntry;
pub use operation::{Execute, Operation};
pub use processor::OperationProcessor;

// Re-export for use in implementations
pub use async_trait::async_trait;
pub use serde_json::Value;
