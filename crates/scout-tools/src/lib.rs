//! Tool registry and execution for Scout.
//!
//! [`ToolRegistry`] maps tool names to [`Tool`](scout_core::Tool)
//! implementations. The executors look up, validate, and run the tool calls
//! a model requested: arguments that fail the tool's declared schema are
//! short-circuited into an error outcome without ever reaching the tool,
//! and transient execution failures are retried per [`RetryPolicy`]. Every
//! outcome is tagged with the originating call id so the model can
//! correlate results regardless of completion order.

mod executor;
mod registry;
mod retry;

pub use executor::{ParallelToolExecutor, SerialToolExecutor, ToolOutcome};
pub use registry::ToolRegistry;
pub use retry::RetryPolicy;
