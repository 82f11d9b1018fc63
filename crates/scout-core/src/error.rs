use thiserror::Error;

/// Error type for all Scout operations.
///
/// Two variants are recoverable inside a running session and are reported
/// back into the conversation as tool-result content instead of aborting:
/// [`ScoutError::InvalidToolArguments`] and [`ScoutError::Tool`]. Everything
/// else is fatal to the session and propagated to the caller.
#[derive(Debug, Error)]
pub enum ScoutError {
    /// Model invocation failed or returned output we could not decode.
    #[error("model error: {0}")]
    Model(String),

    /// The model requested a tool call whose arguments violate the tool's
    /// declared parameter schema. The tool is never invoked.
    #[error("invalid arguments for tool '{tool}': {reason}")]
    InvalidToolArguments { tool: String, reason: String },

    /// A tool invocation failed at execution time (network, service error,
    /// malformed response).
    #[error("tool '{tool}' failed: {reason}")]
    Tool { tool: String, reason: String },

    /// The model requested a tool that is not registered.
    #[error("tool '{0}' not found")]
    ToolNotFound(String),

    /// The session ran out of turns without the model producing a final
    /// answer.
    #[error("max turns ({max_turns}) exceeded without a final answer")]
    MaxTurnsExceeded { max_turns: usize },

    /// A per-call timeout or the overall session deadline expired.
    #[error("timed out: {0}")]
    Timeout(String),

    /// Failed to parse data that should have been well-formed.
    #[error("parse error: {0}")]
    Parsing(String),

    /// Configuration loading or resolution failed.
    #[error("config error: {0}")]
    Config(String),

    /// Tool registry error (e.g. duplicate registration).
    #[error("registry error: {0}")]
    Registry(String),
}

impl ScoutError {
    /// Whether this error should be surfaced to the model as a tool result
    /// rather than aborting the session.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ScoutError::InvalidToolArguments { .. }
                | ScoutError::Tool { .. }
                | ScoutError::ToolNotFound(_)
        )
    }
}
