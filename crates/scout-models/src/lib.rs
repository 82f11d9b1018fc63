//! Model provider plumbing for Scout.
//!
//! The [`ChatModel`](scout_core::ChatModel) implementations here talk to an
//! OpenAI-compatible chat-completions endpoint through the
//! [`ProviderBackend`] seam, so tests can substitute [`FakeBackend`] and
//! never touch the network. [`ScriptedChatModel`] skips HTTP entirely and
//! replays queued responses, which is what the agent tests drive the loop
//! with.

mod backend;
mod openai;
mod scripted;

pub use backend::{FakeBackend, HttpBackend, ProviderBackend, ProviderRequest, ProviderResponse};
pub use openai::{OpenAiChatModel, OpenAiConfig};
pub use scripted::ScriptedChatModel;
