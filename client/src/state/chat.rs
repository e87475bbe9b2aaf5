#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use chrono::{DateTime, Utc};

use crate::net::types::{ApiError, ChatReply};

/// State for the per-document chat panel.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    /// A question is waiting on the backend.
    pub pending: bool,
    pub error: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

/// A single chat message.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub id: String,
    pub role: ChatRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatState {
    /// Record the viewer's question and mark the panel busy.
    ///
    /// Returns the trimmed text to send, or `None` when there is nothing to
    /// send or a reply is still pending.
    pub fn ask(&mut self, text: &str) -> Option<String> {
        let text = text.trim();
        if text.is_empty() || self.pending {
            return None;
        }
        self.messages.push(ChatMessage {
            id: uuid::Uuid::new_v4().to_string(),
            role: ChatRole::User,
            content: text.to_owned(),
            timestamp: Utc::now(),
        });
        self.pending = true;
        self.error = None;
        Some(text.to_owned())
    }

    pub fn apply_reply(&mut self, result: Result<ChatReply, ApiError>) {
        self.pending = false;
        match result {
            Ok(reply) => self.messages.push(ChatMessage {
                id: reply.id,
                role: ChatRole::Assistant,
                content: reply.ai_response,
                timestamp: reply.timestamp,
            }),
            Err(e) => self.error = Some(e.to_string()),
        }
    }
}
