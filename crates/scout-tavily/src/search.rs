use async_trait::async_trait;
use serde_json::{json, Value};
use scout_core::{ScoutError, Tool};

use crate::config::{post, require_str, TavilyConfig};

/// Web search via the Tavily `/search` endpoint.
///
/// Returns a ranked list of results formatted as text the model can read
/// directly: title, URL, and snippet per result, preceded by Tavily's
/// synthesized answer when enabled.
pub struct TavilySearchTool {
    config: TavilyConfig,
    client: reqwest::Client,
}

impl TavilySearchTool {
    pub fn new(config: TavilyConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl Tool for TavilySearchTool {
    fn name(&self) -> &str {
        "tavily_search"
    }

    fn description(&self) -> &str {
        "Search the web for current information. Best for discovering pages \
         you don't have URLs for. Use time_range to bias toward recent \
         results and include_domains to restrict to specific sites."
    }

    fn parameters(&self) -> Option<Value> {
        Some(json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "The search query"
                },
                "max_results": {
                    "type": "integer",
                    "minimum": 1,
                    "maximum": 20,
                    "description": "Number of results to return"
                },
                "topic": {
                    "type": "string",
                    "enum": ["general", "news", "finance"],
                    "description": "Search category"
                },
                "search_depth": {
                    "type": "string",
                    "enum": ["basic", "advanced"],
                    "description": "Advanced costs more but retrieves more relevant content"
                },
                "time_range": {
                    "type": "string",
                    "enum": ["day", "week", "month", "year"],
                    "description": "Restrict results to a recency window"
                },
                "include_domains": {
                    "type": "array",
                    "items": {"type": "string"},
                    "description": "Only include results from these domains"
                },
                "include_raw_content": {
                    "type": "boolean",
                    "description": "Include cleaned page content per result"
                }
            },
            "required": ["query"]
        }))
    }

    async fn call(&self, args: Value) -> Result<Value, ScoutError> {
        let query = require_str(self.name(), &args, "query")?;

        let mut body = json!({
            "query": query,
            "max_results": args.get("max_results").and_then(Value::as_u64)
                .unwrap_or(self.config.max_results as u64),
            "search_depth": args.get("search_depth").and_then(Value::as_str)
                .unwrap_or(&self.config.search_depth),
            "include_answer": self.config.include_answer,
        });
        for field in ["topic", "time_range", "include_domains", "include_raw_content"] {
            if let Some(value) = args.get(field) {
                body[field] = value.clone();
            }
        }

        let payload = post(&self.client, &self.config, self.name(), "/search", body).await?;
        Ok(Value::String(format_results(query, &payload)))
    }
}

fn format_results(query: &str, payload: &Value) -> String {
    let mut out = String::new();

    if let Some(answer) = payload.get("answer").and_then(Value::as_str) {
        if !answer.is_empty() {
            out.push_str("Answer: ");
            out.push_str(answer);
            out.push_str("\n\n");
        }
    }

    let results = payload
        .get("results")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    if results.is_empty() {
        out.push_str(&format!("No results found for '{query}'."));
        return out;
    }

    for (idx, result) in results.iter().enumerate() {
        let title = result.get("title").and_then(Value::as_str).unwrap_or("(untitled)");
        let url = result.get("url").and_then(Value::as_str).unwrap_or("");
        let snippet = result.get("content").and_then(Value::as_str).unwrap_or("");
        out.push_str(&format!("{}. {title}\n   {url}\n   {snippet}\n", idx + 1));
        if let Some(raw) = result.get("raw_content").and_then(Value::as_str) {
            out.push_str(&format!("   ---\n   {raw}\n"));
        }
    }
    out
}
