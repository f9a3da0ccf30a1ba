#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use uuid::Uuid;

use crate::net::types::{AskError, AskRequest, HistoryEntry, Role};

/// Greeting seeded into every fresh transcript.
pub const GREETING: &str =
    "Hi, I'm KP's assistant. Ask me anything about his work, skills, or background.";

/// Fallback when the endpoint answered but produced no usable reply text.
pub const FALLBACK_EMPTY: &str = "Sorry, I couldn't process that.";

/// Fallback when the endpoint could not be reached at all; offers the
/// direct contact email as an alternate channel.
pub const FALLBACK_UNREACHABLE: &str =
    "Sorry, I can't reach the assistant right now. Please email krishkrishnan2001@gmail.com and KP will get back to you.";

/// Suggestions offered before the visitor's first real exchange.
pub const QUICK_QUESTIONS: &[&str] = &[
    "Tell me about your experience",
    "What are your core skills?",
    "How can I get in touch?",
];

/// One entry in the visible transcript. Immutable once created; the
/// transcript is append-only and lives in memory for the page session.
#[derive(Clone, Debug)]
pub struct ChatMessage {
    /// Unique message identifier (UUID string). Display order is insertion
    /// order; the id only distinguishes entries.
    pub id: String,
    pub role: Role,
    pub body: String,
    /// Creation time in ms since the Unix epoch. Display only.
    pub timestamp: f64,
}

impl ChatMessage {
    fn new(role: Role, body: String, timestamp: f64) -> Self {
        Self { id: Uuid::new_v4().to_string(), role, body, timestamp }
    }
}

/// State for the floating assistant chat widget.
///
/// In the Leptos tree this lives behind an `RwSignal` provided via context;
/// the methods here are pure so the submit lifecycle tests run natively.
#[derive(Clone, Debug)]
pub struct ChatState {
    /// Whether the chat panel is visible.
    pub open: bool,
    /// Append-only transcript, greeting first.
    pub messages: Vec<ChatMessage>,
    /// Current input buffer.
    pub input: String,
    /// True between request dispatch and resolution. Gates new submissions
    /// so at most one request is in flight (single-flight).
    pub pending: bool,
    /// Whether the visitor has sent a first real message. Replaces the
    /// original transcript-length heuristic for quick-question visibility.
    pub user_has_sent: bool,
}

impl ChatState {
    /// Fresh widget state: panel closed, not pending, transcript holding
    /// exactly the greeting.
    pub fn new(now_ms: f64) -> Self {
        Self {
            open: false,
            messages: vec![ChatMessage::new(Role::Assistant, GREETING.to_owned(), now_ms)],
            input: String::new(),
            pending: false,
            user_has_sent: false,
        }
    }

    /// Flip panel visibility. No other effect.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Whether the quick-question suggestions should be offered.
    pub fn offers_quick_questions(&self) -> bool {
        !self.user_has_sent
    }

    /// Fill the input buffer with a suggestion without submitting.
    /// No-op once the visitor has sent a first message.
    pub fn quick_fill(&mut self, text: &str) {
        if self.user_has_sent {
            return;
        }
        self.input = text.to_owned();
    }

    /// Whether a submit would currently be accepted.
    pub fn can_submit(&self) -> bool {
        !self.pending && !self.input.trim().is_empty()
    }

    /// Accept the current input as a new user turn.
    ///
    /// Rejects (returns `None`) when the trimmed input is empty or a request
    /// is already pending. Otherwise appends the user message, clears the
    /// buffer, sets the pending flag, and returns the request payload —
    /// the new text plus the transcript as it stood before this turn.
    pub fn submit(&mut self, now_ms: f64) -> Option<AskRequest> {
        let text = self.input.trim().to_owned();
        if text.is_empty() || self.pending {
            return None;
        }

        let history = self.history();
        self.messages.push(ChatMessage::new(Role::User, text.clone(), now_ms));
        self.input.clear();
        self.pending = true;
        self.user_has_sent = true;

        Some(AskRequest { message: text, history })
    }

    /// Append the assistant reply for the outstanding request and clear the
    /// pending flag. Every accepted submit resolves exactly once, so the
    /// transcript grows by exactly two messages per cycle.
    pub fn resolve(&mut self, reply: String, now_ms: f64) {
        self.messages.push(ChatMessage::new(Role::Assistant, reply, now_ms));
        self.pending = false;
    }

    fn history(&self) -> Vec<HistoryEntry> {
        self.messages
            .iter()
            .map(|m| HistoryEntry { role: m.role, content: m.body.clone() })
            .collect()
    }
}

impl Default for ChatState {
    fn default() -> Self {
        Self::new(0.0)
    }
}

/// Fixed fallback text for a failed assistant call. An empty reply reads
/// as "couldn't process"; every other failure mode reads as unreachable
/// and points at the direct email instead.
pub fn fallback_for(err: &AskError) -> &'static str {
    match err {
        AskError::EmptyReply => FALLBACK_EMPTY,
        AskError::Transport(_) | AskError::Status(_) | AskError::Timeout(_) => FALLBACK_UNREACHABLE,
    }
}
