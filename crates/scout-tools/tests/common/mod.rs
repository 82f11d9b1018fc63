#![allow(dead_code)] // not every test binary uses every helper

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};
use scout_core::{ScoutError, Tool};

/// Echoes its arguments back and counts invocations.
pub struct EchoTool {
    calls: AtomicUsize,
}

impl EchoTool {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Tool for EchoTool {
    fn name(&self) -> &str {
        "echo"
    }

    fn description(&self) -> &str {
        "Echoes input"
    }

    fn parameters(&self) -> Option<Value> {
        Some(json!({
            "type": "object",
            "properties": {"text": {"type": "string"}},
            "required": ["text"]
        }))
    }

    async fn call(&self, args: Value) -> Result<Value, ScoutError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(json!({"echo": args}))
    }
}

/// Fails a configurable number of times before succeeding.
pub struct FlakyTool {
    failures_remaining: AtomicUsize,
    calls: AtomicUsize,
}

impl FlakyTool {
    pub fn new(failures: usize) -> Arc<Self> {
        Arc::new(Self {
            failures_remaining: AtomicUsize::new(failures),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Tool for FlakyTool {
    fn name(&self) -> &str {
        "flaky"
    }

    fn description(&self) -> &str {
        "Fails before eventually succeeding"
    }

    async fn call(&self, _args: Value) -> Result<Value, ScoutError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let remaining = self.failures_remaining.load(Ordering::SeqCst);
        if remaining > 0 {
            self.failures_remaining.store(remaining - 1, Ordering::SeqCst);
            return Err(ScoutError::Tool {
                tool: "flaky".to_string(),
                reason: "transient failure".to_string(),
            });
        }
        Ok(json!({"ok": true}))
    }
}
