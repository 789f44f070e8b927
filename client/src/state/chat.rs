//! Conversation state for the build chat.
//!
//! DESIGN
//! ======
//! The conversation is append-only: messages are never edited, reordered,
//! or removed. The only way back to a shorter history is `reset`, which
//! restores the single greeting.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use serde::{Deserialize, Serialize};

pub const GREETING_ID: &str = "1";
pub const GREETING: &str =
    "Hey! 👋 What do you want to build today? I can create websites, apps, games, calculators, and more!";

/// Who authored a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Ai,
}

/// A single chat message.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub sender: Sender,
    pub content: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: f64,
}

impl ChatMessage {
    pub fn new(sender: Sender, content: impl Into<String>, timestamp: f64) -> Self {
        Self { id: uuid::Uuid::new_v4().to_string(), sender, content: content.into(), timestamp }
    }

    fn greeting(timestamp: f64) -> Self {
        Self { id: GREETING_ID.to_owned(), sender: Sender::Ai, content: GREETING.to_owned(), timestamp }
    }
}

/// Conversation history plus the in-flight flag for build requests.
#[derive(Clone, Debug)]
pub struct ChatState {
    messages: Vec<ChatMessage>,
    pub generating: bool,
}

impl Default for ChatState {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl ChatState {
    /// Fresh conversation holding only the greeting.
    pub fn new(now: f64) -> Self {
        Self { messages: vec![ChatMessage::greeting(now)], generating: false }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn push(&mut self, sender: Sender, content: impl Into<String>, now: f64) {
        self.messages.push(ChatMessage::new(sender, content, now));
    }

    /// Drop the history back to the greeting. Leaves the in-flight flag alone.
    pub fn reset(&mut self, now: f64) {
        self.messages.clear();
        self.messages.push(ChatMessage::greeting(now));
    }
}
