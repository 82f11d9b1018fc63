use scout_core::{Message, ToolCall};

/// What the model chose to do with the current history.
///
/// All downstream control flow switches on this variant, never on
/// provider-specific response shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum Decision {
    /// The model produced a final answer; the session is over.
    FinalAnswer(String),
    /// The model requested one or more tool invocations this turn.
    ToolInvocations(Vec<ToolCall>),
}

impl Decision {
    /// Decode a model response message into a decision.
    pub fn from_message(message: &Message) -> Self {
        if message.tool_calls().is_empty() {
            Decision::FinalAnswer(message.content().to_string())
        } else {
            Decision::ToolInvocations(message.tool_calls().to_vec())
        }
    }

    pub fn is_final(&self) -> bool {
        matches!(self, Decision::FinalAnswer(_))
    }
}
