use std::collections::VecDeque;

use async_trait::async_trait;
use scout_core::{ChatModel, ChatRequest, ChatResponse, ScoutError};
use tokio::sync::Mutex;

/// Test double that replays a fixed sequence of responses and records the
/// requests it received. Deterministic by construction, which is what the
/// replay-identity tests in `scout-agent` rely on.
pub struct ScriptedChatModel {
    responses: Mutex<VecDeque<ChatResponse>>,
    requests: Mutex<Vec<ChatRequest>>,
}

impl ScriptedChatModel {
    pub fn new(responses: Vec<ChatResponse>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Requests seen so far, in call order.
    pub async fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().await.clone()
    }

    /// Number of chat calls made against this model.
    pub async fn call_count(&self) -> usize {
        self.requests.lock().await.len()
    }
}

#[async_trait]
impl ChatModel for ScriptedChatModel {
    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse, ScoutError> {
        self.requests.lock().await.push(request);
        self.responses
            .lock()
            .await
            .pop_front()
            .ok_or_else(|| ScoutError::Model("ScriptedChatModel exhausted".to_string()))
    }
}
