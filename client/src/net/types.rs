//! Wire schema for the remote assistant endpoint.
//!
//! DESIGN
//! ======
//! The endpoint is a third-party webhook, not a service we control, so the
//! reply extractor accepts several possible field names in a fixed priority
//! order rather than assuming one schema version.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Sender of a transcript message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Human-readable sender label for the transcript view.
    pub fn label(self) -> &'static str {
        match self {
            Self::User => "You",
            Self::Assistant => "Assistant",
        }
    }
}

/// One prior transcript turn carried as conversational context.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub role: Role,
    pub content: String,
}

/// Request body for the assistant endpoint: the new user text plus the
/// full prior transcript in order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AskRequest {
    pub message: String,
    pub history: Vec<HistoryEntry>,
}

/// Failure modes of a single assistant call. All variants are recovered
/// locally behind a fallback message; none propagate to the UI as errors.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AskError {
    #[error("assistant endpoint unreachable: {0}")]
    Transport(String),
    #[error("assistant endpoint returned status {0}")]
    Status(u16),
    #[error("assistant request timed out after {0}s")]
    Timeout(u64),
    #[error("assistant reply contained no usable text")]
    EmptyReply,
}

/// Reply field names accepted from the endpoint, highest priority first.
const REPLY_FIELDS: [&str; 3] = ["response", "message", "text"];

/// Extract the reply text from a response body.
///
/// Returns the first populated (non-empty after trim) string among the
/// accepted field names, or `None` when no field yields usable text.
pub fn extract_reply(body: &serde_json::Value) -> Option<String> {
    REPLY_FIELDS.iter().find_map(|field| {
        body.get(field)
            .and_then(serde_json::Value::as_str)
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(ToOwned::to_owned)
    })
}
