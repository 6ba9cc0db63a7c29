//! Transcript state: the ordered list of rendered chat messages.
//!
//! DESIGN
//! ======
//! Messages are append-only except for the transient "Thinking..."
//! placeholder, which its own completion handler removes by id. Ids are
//! UUID-derived so overlapping in-flight queries keep independent
//! placeholders even when created within the same millisecond.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::types::Source;

/// Who a transcript entry is attributed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageRole {
    /// A question typed by the user, rendered as literal text.
    User,
    /// A backend answer, rendered as markdown with optional citations.
    Assistant,
    /// Status and error notices (placeholders, upload progress), literal text.
    System,
}

/// A single transcript entry.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    /// Unique per-message identifier, used to remove placeholders.
    pub id: String,
    pub role: MessageRole,
    /// Literal text for user/system entries; raw markdown for assistant ones.
    pub text: String,
    /// Citations attached at response time. Empty for non-assistant entries
    /// and whenever the show-sources toggle was off when the answer arrived.
    pub sources: Vec<Source>,
}

/// The transcript shown in the chat panel.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
}

impl ChatState {
    /// Append a user or system message and return its generated id.
    pub fn push(&mut self, text: impl Into<String>, role: MessageRole) -> String {
        let id = next_message_id();
        self.messages.push(ChatMessage {
            id: id.clone(),
            role,
            text: text.into(),
            sources: Vec::new(),
        });
        id
    }

    /// Append an assistant answer carrying its citations.
    pub fn push_answer(&mut self, markdown: impl Into<String>, sources: Vec<Source>) -> String {
        let id = next_message_id();
        self.messages.push(ChatMessage {
            id: id.clone(),
            role: MessageRole::Assistant,
            text: markdown.into(),
            sources,
        });
        id
    }

    /// Remove the message with the given id. Returns whether it was present.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.messages.len();
        self.messages.retain(|message| message.id != id);
        self.messages.len() != before
    }
}

fn next_message_id() -> String {
    format!("msg-{}", uuid::Uuid::new_v4())
}
