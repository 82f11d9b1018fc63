use serde::{Deserialize, Serialize};
use scout_core::Message;

/// One research session: the owned, append-only message history from
/// initial user request to final answer.
///
/// The history is threaded explicitly through the loop rather than held as
/// ambient state, so a test can inject a fixed history and assert the delta
/// after one turn. Discarded when the session ends; nothing is persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub messages: Vec<Message>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_messages(messages: Vec<Message>) -> Self {
        Self { messages }
    }

    /// Append a message. This is the only way history grows; prior
    /// messages are never mutated or removed.
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// The final answer, if the session ended with one: the content of the
    /// last assistant message that carries no tool calls.
    pub fn final_answer(&self) -> Option<&str> {
        self.last_message()
            .filter(|m| m.is_ai() && m.tool_calls().is_empty())
            .map(|m| m.content())
    }

    /// Tool-result messages in this session, in append order.
    pub fn tool_messages(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter().filter(|m| m.is_tool())
    }
}
