use std::sync::Arc;
use std::time::{Duration, Instant};

use serde_json::Value;
use scout_core::{ChatModel, ChatRequest, Message, ScoutError, Tool, ToolCall, ToolDefinition};
use scout_tools::{
    ParallelToolExecutor, RetryPolicy, SerialToolExecutor, ToolOutcome, ToolRegistry,
};

use crate::decision::Decision;
use crate::session::Session;

/// Knobs for a [`ReactAgent`].
#[derive(Debug, Clone)]
pub struct ReactAgentOptions {
    /// Prepended to every model request (not stored in the session, so the
    /// history stays exactly what the conversation produced).
    pub system_prompt: Option<String>,
    /// Hard cap on loop turns; hitting it is [`ScoutError::MaxTurnsExceeded`].
    pub max_turns: usize,
    /// Per-tool-call timeout. Expiry aborts the session.
    pub tool_timeout: Option<Duration>,
    /// Overall wall-clock budget for one session. Expiry aborts the session.
    pub deadline: Option<Duration>,
    /// Retry policy for transient tool execution failures.
    pub retry: RetryPolicy,
    /// Execute simultaneously-requested tool calls concurrently. The source
    /// behavior is sequential, so this defaults to off.
    pub parallel_tools: bool,
}

impl Default for ReactAgentOptions {
    fn default() -> Self {
        Self {
            system_prompt: None,
            max_turns: 10,
            tool_timeout: None,
            deadline: None,
            retry: RetryPolicy::none(),
            parallel_tools: false,
        }
    }
}

enum ToolExec {
    Serial(SerialToolExecutor),
    Parallel(ParallelToolExecutor),
}

impl ToolExec {
    async fn execute_all(&self, calls: &[ToolCall]) -> Vec<ToolOutcome> {
        match self {
            ToolExec::Serial(e) => e.execute_all(calls).await,
            ToolExec::Parallel(e) => e.execute_all(calls).await,
        }
    }
}

/// The tool-use reasoning loop.
///
/// Given a session (system prompt + user request) and a fixed set of tools,
/// produces a final textual answer grounded in zero or more tool
/// invocations, or fails after exceeding the configured bounds.
pub struct ReactAgent {
    model: Arc<dyn ChatModel>,
    executor: ToolExec,
    tool_defs: Vec<ToolDefinition>,
    options: ReactAgentOptions,
}

impl ReactAgent {
    pub fn new(model: Arc<dyn ChatModel>, tools: Vec<Arc<dyn Tool>>) -> Result<Self, ScoutError> {
        Self::with_options(model, tools, ReactAgentOptions::default())
    }

    pub fn with_options(
        model: Arc<dyn ChatModel>,
        tools: Vec<Arc<dyn Tool>>,
        options: ReactAgentOptions,
    ) -> Result<Self, ScoutError> {
        let registry = ToolRegistry::new();
        for tool in tools {
            registry.register(tool)?;
        }
        let tool_defs = registry.definitions();

        let executor = if options.parallel_tools {
            let mut exec = ParallelToolExecutor::new(registry).with_retry(options.retry.clone());
            if let Some(timeout) = options.tool_timeout {
                exec = exec.with_timeout(timeout);
            }
            ToolExec::Parallel(exec)
        } else {
            let mut exec = SerialToolExecutor::new(registry).with_retry(options.retry.clone());
            if let Some(timeout) = options.tool_timeout {
                exec = exec.with_timeout(timeout);
            }
            ToolExec::Serial(exec)
        };

        Ok(Self {
            model,
            executor,
            tool_defs,
            options,
        })
    }

    /// Tool definitions advertised to the model on every turn.
    pub fn tool_definitions(&self) -> &[ToolDefinition] {
        &self.tool_defs
    }

    /// Run the loop to completion.
    ///
    /// Returns the session with the full history, ending in the model's
    /// final answer. Fatal failures ([`ScoutError::Model`],
    /// [`ScoutError::MaxTurnsExceeded`], [`ScoutError::Timeout`]) abort the
    /// session; tool-level failures are reported into the conversation
    /// instead so the model can self-correct.
    pub async fn run(&self, mut session: Session) -> Result<Session, ScoutError> {
        let started = Instant::now();

        for turn in 0..self.options.max_turns {
            let request = self.build_request(&session);
            let response = match self.remaining(started)? {
                Some(limit) => tokio::time::timeout(limit, self.model.chat(request))
                    .await
                    .map_err(|_| {
                        ScoutError::Timeout("session deadline expired during model call".into())
                    })??,
                None => self.model.chat(request).await?,
            };

            session.push(response.message.clone());

            match Decision::from_message(&response.message) {
                Decision::FinalAnswer(_) => {
                    tracing::debug!(turn, "model produced final answer");
                    return Ok(session);
                }
                Decision::ToolInvocations(calls) => {
                    tracing::debug!(turn, count = calls.len(), "model requested tool calls");
                    self.remaining(started)?;
                    let outcomes = self.executor.execute_all(&calls).await;
                    for outcome in outcomes {
                        let content = match outcome.result {
                            Ok(value) => render_result(value),
                            // Timeouts abort the session rather than being
                            // fed back to the model.
                            Err(e @ ScoutError::Timeout(_)) => return Err(e),
                            Err(e) => format!("ERROR: {e}"),
                        };
                        session.push(Message::tool(content, outcome.call_id, outcome.tool_name));
                    }
                }
            }
        }

        Err(ScoutError::MaxTurnsExceeded {
            max_turns: self.options.max_turns,
        })
    }

    fn build_request(&self, session: &Session) -> ChatRequest {
        let mut messages = Vec::with_capacity(session.messages.len() + 1);
        if let Some(ref prompt) = self.options.system_prompt {
            messages.push(Message::system(prompt.clone()));
        }
        messages.extend(session.messages.iter().cloned());
        ChatRequest::new(messages).with_tools(self.tool_defs.clone())
    }

    /// Time left in the session budget, or an error if it has expired.
    fn remaining(&self, started: Instant) -> Result<Option<Duration>, ScoutError> {
        match self.options.deadline {
            None => Ok(None),
            Some(budget) => {
                let elapsed = started.elapsed();
                if elapsed >= budget {
                    Err(ScoutError::Timeout(format!(
                        "session deadline of {}ms exceeded",
                        budget.as_millis()
                    )))
                } else {
                    Ok(Some(budget - elapsed))
                }
            }
        }
    }
}

/// Tool results that are already text go into the history as-is; structured
/// payloads are serialized.
fn render_result(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}
