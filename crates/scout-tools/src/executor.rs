use std::time::Duration;

use futures::future::join_all;
use serde_json::Value;
use scout_core::{schema, ScoutError, ToolCall};

use crate::registry::ToolRegistry;
use crate::retry::RetryPolicy;

/// The result of one tool call, tagged with the originating call id so the
/// model can correlate results regardless of completion order.
#[derive(Debug)]
pub struct ToolOutcome {
    pub call_id: String,
    pub tool_name: String,
    pub result: Result<Value, ScoutError>,
}

/// Executes tool calls one at a time, in request order.
pub struct SerialToolExecutor {
    registry: ToolRegistry,
    retry: RetryPolicy,
    timeout: Option<Duration>,
}

impl SerialToolExecutor {
    pub fn new(registry: ToolRegistry) -> Self {
        Self {
            registry,
            retry: RetryPolicy::none(),
            timeout: None,
        }
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Per-call timeout. Expiry is a [`ScoutError::Timeout`], never retried.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    pub async fn execute(&self, call: &ToolCall) -> ToolOutcome {
        run_call(&self.registry, &self.retry, self.timeout, call).await
    }

    pub async fn execute_all(&self, calls: &[ToolCall]) -> Vec<ToolOutcome> {
        let mut outcomes = Vec::with_capacity(calls.len());
        for call in calls {
            outcomes.push(self.execute(call).await);
        }
        outcomes
    }
}

/// Executes simultaneously-requested tool calls concurrently.
///
/// Outcomes are returned in request order, but correlation happens through
/// the call id, not position.
pub struct ParallelToolExecutor {
    registry: ToolRegistry,
    retry: RetryPolicy,
    timeout: Option<Duration>,
}

impl ParallelToolExecutor {
    pub fn new(registry: ToolRegistry) -> Self {
        Self {
            registry,
            retry: RetryPolicy::none(),
            timeout: None,
        }
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    pub async fn execute_all(&self, calls: &[ToolCall]) -> Vec<ToolOutcome> {
        join_all(
            calls
                .iter()
                .map(|call| run_call(&self.registry, &self.retry, self.timeout, call)),
        )
        .await
    }
}

async fn run_call(
    registry: &ToolRegistry,
    retry: &RetryPolicy,
    timeout: Option<Duration>,
    call: &ToolCall,
) -> ToolOutcome {
    ToolOutcome {
        call_id: call.id.clone(),
        tool_name: call.name.clone(),
        result: run_call_inner(registry, retry, timeout, call).await,
    }
}

async fn run_call_inner(
    registry: &ToolRegistry,
    retry: &RetryPolicy,
    timeout: Option<Duration>,
    call: &ToolCall,
) -> Result<Value, ScoutError> {
    let tool = registry
        .get(&call.name)
        .ok_or_else(|| ScoutError::ToolNotFound(call.name.clone()))?;

    // Invalid arguments must never reach the tool, and retrying them is
    // pointless: same arguments, same verdict.
    if let Some(parameters) = tool.parameters() {
        schema::validate_args(&call.name, &parameters, &call.arguments)?;
    }

    let mut last_err = None;
    for attempt in 0..=retry.max_retries {
        let fut = tool.call(call.arguments.clone());
        let outcome = match timeout {
            Some(limit) => tokio::time::timeout(limit, fut).await.unwrap_or_else(|_| {
                Err(ScoutError::Timeout(format!(
                    "tool '{}' exceeded {}ms",
                    call.name,
                    limit.as_millis()
                )))
            }),
            None => fut.await,
        };
        match outcome {
            Ok(value) => {
                tracing::debug!(tool = %call.name, call_id = %call.id, "tool call succeeded");
                return Ok(value);
            }
            // Timeouts are fatal to the session, not retried.
            Err(e @ ScoutError::Timeout(_)) => return Err(e),
            Err(e) => {
                tracing::warn!(tool = %call.name, attempt, error = %e, "tool call failed");
                last_err = Some(e);
                if attempt < retry.max_retries {
                    tokio::time::sleep(retry.delay(attempt)).await;
                }
            }
        }
    }
    Err(last_err.unwrap_or_else(|| ScoutError::Tool {
        tool: call.name.clone(),
        reason: "no attempts made".to_string(),
    }))
}
