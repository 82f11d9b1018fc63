use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::ScoutError;

/// A concrete tool invocation requested by the model: which tool to run,
/// with which arguments, identified by a provider-assigned call id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    pub id: String,
    pub name: String,
    pub arguments: Value,
}

/// Declared tool capability sent to the model: name, natural-language
/// description, and a JSON-schema parameter description.
///
/// Built once at startup from the registered tools and shared read-only
/// across all turns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

/// A named external capability the model can invoke.
#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    /// JSON-schema description of the tool's parameters, if declared.
    /// Arguments are validated against this schema before the tool runs.
    fn parameters(&self) -> Option<Value> {
        None
    }

    /// Execute the tool with already-validated arguments.
    async fn call(&self, args: Value) -> Result<Value, ScoutError>;

    /// Build the [`ToolDefinition`] advertised to the model.
    fn as_tool_definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: self.name().to_string(),
            description: self.description().to_string(),
            parameters: self
                .parameters()
                .unwrap_or_else(|| json!({"type": "object", "properties": {}})),
        }
    }
}
