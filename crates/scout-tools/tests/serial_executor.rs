mod common;

use std::time::Duration;

use serde_json::json;
use scout_core::{ScoutError, ToolCall};
use scout_tools::{RetryPolicy, SerialToolExecutor, ToolRegistry};

use common::{EchoTool, FlakyTool};

fn call(id: &str, name: &str, arguments: serde_json::Value) -> ToolCall {
    ToolCall {
        id: id.to_string(),
        name: name.to_string(),
        arguments,
    }
}

#[tokio::test]
async fn executes_calls_in_order_with_call_ids() {
    let registry = ToolRegistry::new();
    registry.register(EchoTool::new()).unwrap();
    let executor = SerialToolExecutor::new(registry);

    let calls = vec![
        call("c1", "echo", json!({"text": "first"})),
        call("c2", "echo", json!({"text": "second"})),
    ];
    let outcomes = executor.execute_all(&calls).await;

    assert_eq!(outcomes.len(), 2);
    assert_eq!(outcomes[0].call_id, "c1");
    assert_eq!(outcomes[1].call_id, "c2");
    assert_eq!(outcomes[0].tool_name, "echo");
    assert_eq!(
        outcomes[0].result.as_ref().unwrap(),
        &json!({"echo": {"text": "first"}})
    );
}

#[tokio::test]
async fn unknown_tool_is_not_found() {
    let registry = ToolRegistry::new();
    let executor = SerialToolExecutor::new(registry);

    let outcomes = executor.execute_all(&[call("c1", "missing", json!({}))]).await;
    assert!(matches!(
        outcomes[0].result,
        Err(ScoutError::ToolNotFound(ref name)) if name == "missing"
    ));
}

#[tokio::test]
async fn invalid_arguments_never_reach_the_tool() {
    let registry = ToolRegistry::new();
    let echo = EchoTool::new();
    registry.register(echo.clone()).unwrap();
    let executor = SerialToolExecutor::new(registry).with_retry(RetryPolicy::new(3));

    // Missing required "text".
    let outcomes = executor.execute_all(&[call("c1", "echo", json!({}))]).await;

    assert!(matches!(
        outcomes[0].result,
        Err(ScoutError::InvalidToolArguments { .. })
    ));
    // Short-circuited before execution, and never retried.
    assert_eq!(echo.call_count(), 0);
}

#[tokio::test]
async fn mistyped_arguments_rejected() {
    let registry = ToolRegistry::new();
    let echo = EchoTool::new();
    registry.register(echo.clone()).unwrap();
    let executor = SerialToolExecutor::new(registry);

    let outcomes = executor
        .execute_all(&[call("c1", "echo", json!({"text": 42}))])
        .await;

    assert!(matches!(
        outcomes[0].result,
        Err(ScoutError::InvalidToolArguments { .. })
    ));
    assert_eq!(echo.call_count(), 0);
}

#[tokio::test]
async fn retries_transient_failures_until_success() {
    let registry = ToolRegistry::new();
    let flaky = FlakyTool::new(2);
    registry.register(flaky.clone()).unwrap();
    let executor = SerialToolExecutor::new(registry)
        .with_retry(RetryPolicy::new(3).with_base_delay(Duration::from_millis(1)));

    let outcomes = executor.execute_all(&[call("c1", "flaky", json!({}))]).await;

    assert_eq!(outcomes[0].result.as_ref().unwrap(), &json!({"ok": true}));
    assert_eq!(flaky.call_count(), 3); // 2 failures + 1 success
}

#[tokio::test]
async fn gives_up_after_retry_budget() {
    let registry = ToolRegistry::new();
    let flaky = FlakyTool::new(10);
    registry.register(flaky.clone()).unwrap();
    let executor = SerialToolExecutor::new(registry)
        .with_retry(RetryPolicy::new(2).with_base_delay(Duration::from_millis(1)));

    let outcomes = executor.execute_all(&[call("c1", "flaky", json!({}))]).await;

    assert!(matches!(outcomes[0].result, Err(ScoutError::Tool { .. })));
    assert_eq!(flaky.call_count(), 3); // initial attempt + 2 retries
}

#[tokio::test]
async fn empty_calls_returns_empty() {
    let registry = ToolRegistry::new();
    let executor = SerialToolExecutor::new(registry);
    assert!(executor.execute_all(&[]).await.is_empty());
}
