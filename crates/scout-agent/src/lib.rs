//! The Scout ReAct loop.
//!
//! [`ReactAgent`] repeatedly asks a [`ChatModel`](scout_core::ChatModel),
//! given a [`Session`]'s history and the registered tools, to either
//! produce a final answer or request tool invocations; executes the
//! requested tools; appends their call-id-tagged results to the history;
//! and repeats until the model answers or a bound is hit. Tool failures
//! are surfaced back into the conversation so the model can adapt; model
//! failures, the turn cap, and timeouts abort the session.

mod agent;
mod decision;
mod session;

pub use agent::{ReactAgent, ReactAgentOptions};
pub use decision::Decision;
pub use session::Session;
