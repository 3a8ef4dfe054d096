//! The Operation and Execute traits

use crate::ExecutionResult;
use async_trait::async_trait;
use serde_json::Value;

/// Static metadata describing a command
pub trait Operation {
    /// The action, e.g. "add", "move"
    fn verb(&self) -> &'static str;

    /// The resource acted upon, e.g. "card", "column"
    fn noun(&self) -> &'static str;

    /// One-line human readable summary
    fn description(&self) -> &'static str;

    /// Canonical op string used in log entries ("add card", "move column")
    fn op_string(&self) -> String {
        format!("{} {}", self.verb(), self.noun())
    }
}

/// Run a command against a context
#[async_trait]
pub trait Execute<C, E>: Operation
where
    C: Send + Sync,
    E: Send,
{
    async fn execute(&self, ctx: &C) -> ExecutionResult<Value, E>;
}

/// Implement [`Operation`] for a command struct
///
/// ```ignore
/// operation!(MoveCard, verb = "move", noun = "card", description = "Move a card between two neighbors");
/// ```
#[macro_export]
macro_rules! operation {
    ($ty:ty, verb = $verb:literal, noun = $noun:literal, description = $description:literal $(,)?) => {
        impl $crate::Operation for $ty {
            fn verb(&self) -> &'static str {
                $verb
            }

            fn noun(&self) -> &'static str {
                $noun
            }

            fn description(&self) -> &'static str {
                $description
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Ping;

    operation!(Ping, verb = "send", noun = "ping", description = "Send a ping");

    #[test]
    fn test_op_string() {
        assert_eq!(Ping.op_string(), "send ping");
        assert_eq!(Ping.description(), "Send a ping");
    }
}
