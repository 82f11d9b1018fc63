//! Core traits and types for Scout.
//!
//! Everything the rest of the workspace builds on lives here: the
//! [`Message`] history model, the [`Tool`] and [`ChatModel`] trait seams,
//! the [`ScoutError`] error enum, and JSON-schema argument validation.

mod chat;
mod error;
mod message;
pub mod schema;
mod tool;

pub use chat::{ChatModel, ChatRequest, ChatResponse, TokenUsage, ToolChoice};
pub use error::ScoutError;
pub use message::{Message, Role};
pub use tool::{Tool, ToolCall, ToolDefinition};
