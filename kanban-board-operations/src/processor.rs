//! Running operations and recording their audit entries

use crate::{Execute, LogEntry};
use async_trait::async_trait;
use serde_json::Value;

/// Executes operations against a context and records what they did
#[async_trait]
pub trait OperationProcessor<C, E>: Send + Sync
where
    C: Send + Sync,
    E: Send + std::fmt::Display,
{
    /// Actor attributed to entries that do not name one
    fn actor(&self) -> Option<&str> {
        None
    }

    /// Record one audit entry
    ///
    /// The default emits a structured tracing event. Recording never fails
    /// the operation it describes.
    async fn record(&self, entry: &LogEntry, _ctx: &C) {
        if entry.is_failure() {
            tracing::warn!(
                id = %entry.id,
                op = %entry.op,
                actor = entry.actor.as_deref().unwrap_or("-"),
                duration_ms = entry.duration_ms,
                input = %entry.input,
                output = %entry.output,
                "operation failed"
            );
        } else {
            tracing::info!(
                id = %entry.id,
                op = %entry.op,
                actor = entry.actor.as_deref().unwrap_or("-"),
                duration_ms = entry.duration_ms,
                input = %entry.input,
                "operation applied"
            );
        }
    }

    /// Execute an operation, record its entry (if any), and return its value
    async fn process<O>(&self, operation: &O, ctx: &C) -> Result<Value, E>
    where
        O: Execute<C, E> + Sync,
    {
        let (result, entry) = operation.execute(ctx).await.split();

        if let Some(mut entry) = entry {
            if entry.actor.is_none() {
                if let Some(actor) = self.actor() {
                    entry = entry.with_actor(actor);
                }
            }
            self.record(&entry, ctx).await;
        }

        if let Err(error) = &result {
            tracing::debug!(op = %operation.op_string(), %error, "operation returned an error");
        }

        result
    }
}
