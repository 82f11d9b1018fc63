use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ScoutError;
use crate::message::Message;
use crate::tool::{ToolCall, ToolDefinition};

/// How the model is allowed to use the declared tools.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ToolChoice {
    Auto,
    Required,
    None,
    Specific(String),
}

/// A request to a chat model: full message history plus tool schemas.
#[derive(Debug, Clone)]
pub struct ChatRequest {
    pub messages: Vec<Message>,
    pub tools: Vec<ToolDefinition>,
    pub tool_choice: Option<ToolChoice>,
}

impl ChatRequest {
    pub fn new(messages: Vec<Message>) -> Self {
        Self {
            messages,
            tools: Vec::new(),
            tool_choice: None,
        }
    }

    pub fn with_tools(mut self, tools: Vec<ToolDefinition>) -> Self {
        self.tools = tools;
        self
    }

    pub fn with_tool_choice(mut self, choice: ToolChoice) -> Self {
        self.tool_choice = Some(choice);
        self
    }
}

/// Token accounting reported by the provider, when available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// The model's reply: either plain text or text plus tool-call requests.
#[derive(Debug, Clone)]
pub struct ChatResponse {
    pub message: Message,
    pub usage: Option<TokenUsage>,
}

impl ChatResponse {
    /// Tool calls requested by this response, empty for a final answer.
    pub fn tool_calls(&self) -> &[ToolCall] {
        self.message.tool_calls()
    }
}

/// An opaque chat-completion collaborator.
///
/// Given history and tool schemas, returns either a final answer message or
/// one carrying structured tool-call requests. Implementations must not
/// panic on provider errors; they return [`ScoutError::Model`].
#[async_trait]
pub trait ChatModel: Send + Sync {
    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse, ScoutError>;
}
