//! Audit entries for executed operations

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt::Display;
use std::time::Duration;

/// One executed mutation: what was asked, what came back, who asked
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    /// ULID, sortable by creation time
    pub id: String,

    pub timestamp: DateTime<Utc>,

    /// Canonical op string, e.g. "add card", "move column"
    pub op: String,

    /// The command as received
    pub input: Value,

    /// The returned value, or `{"error": "<message>"}`
    pub output: Value,

    /// "user_id" or "agent_name[session_id]"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor: Option<String>,

    pub duration_ms: u64,
}

impl LogEntry {
    pub fn new(
        op: impl Into<String>,
        input: Value,
        output: Value,
        actor: Option<String>,
        duration_ms: u64,
    ) -> Self {
        Self {
            id: ulid::Ulid::new().to_string(),
            timestamp: Utc::now(),
            op: op.into(),
            input,
            output,
            actor,
            duration_ms,
        }
    }

    /// Entry for an operation that returned `output`
    pub fn success(op: impl Into<String>, input: Value, output: Value, elapsed: Duration) -> Self {
        Self::new(op, input, output, None, millis(elapsed))
    }

    /// Entry for an operation that failed with `error`
    pub fn failure(
        op: impl Into<String>,
        input: Value,
        error: &dyn Display,
        elapsed: Duration,
    ) -> Self {
        let output = json!({ "error": error.to_string() });
        Self::new(op, input, output, None, millis(elapsed))
    }

    /// Set the actor
    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = Some(actor.into());
        self
    }

    /// The recorded error message, if the operation failed
    pub fn error(&self) -> Option<&str> {
        self.output.get("error").and_then(Value::as_str)
    }

    pub fn is_failure(&self) -> bool {
        self.error().is_some()
    }
}

fn millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_entry() {
        let entry = LogEntry::success(
            "add card",
            json!({"cardTitle": "A"}),
            json!({"cardIndex": 3000.0}),
            Duration::from_millis(7),
        );

        assert_eq!(entry.op, "add card");
        assert_eq!(entry.duration_ms, 7);
        assert!(!entry.is_failure());
        assert_eq!(entry.id.len(), 26);
    }

    #[test]
    fn test_failure_entry() {
        let entry = LogEntry::failure(
            "move card",
            json!({"cardID": "c1"}),
            &"card not found: c1",
            Duration::ZERO,
        );

        assert_eq!(entry.error(), Some("card not found: c1"));
        assert!(entry.is_failure());
    }

    #[test]
    fn test_actor_is_omitted_when_unknown() {
        let entry = LogEntry::success("list card", json!({}), json!([]), Duration::ZERO);
        let value = serde_json::to_value(&entry).unwrap();
        assert!(value.get("actor").is_none());

        let value = serde_json::to_value(entry.with_actor("alice")).unwrap();
        assert_eq!(value["actor"], "alice");
    }
}
