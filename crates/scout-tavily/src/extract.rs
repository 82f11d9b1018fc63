use async_trait::async_trait;
use serde_json::{json, Value};
use scout_core::{ScoutError, Tool};

use crate::config::{post, TavilyConfig};

/// Full-page content retrieval via the Tavily `/extract` endpoint.
pub struct TavilyExtractTool {
    config: TavilyConfig,
    client: reqwest::Client,
}

impl TavilyExtractTool {
    pub fn new(config: TavilyConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl Tool for TavilyExtractTool {
    fn name(&self) -> &str {
        "tavily_extract"
    }

    fn description(&self) -> &str {
        "Extract the full content of specific web pages. Use this when you \
         already know the URLs and need their complete text, e.g. after a \
         search surfaced promising pages."
    }

    fn parameters(&self) -> Option<Value> {
        Some(json!({
            "type": "object",
            "properties": {
                "urls": {
                    "type": "array",
                    "items": {"type": "string"},
                    "description": "URLs to extract content from"
                },
                "extract_depth": {
                    "type": "string",
                    "enum": ["basic", "advanced"],
                    "description": "Advanced retrieves tables and embedded content"
                },
                "include_images": {
                    "type": "boolean",
                    "description": "Include image URLs found on the pages"
                }
            },
            "required": ["urls"]
        }))
    }

    async fn call(&self, args: Value) -> Result<Value, ScoutError> {
        let urls = args
            .get("urls")
            .and_then(Value::as_array)
            .filter(|urls| !urls.is_empty())
            .ok_or_else(|| ScoutError::InvalidToolArguments {
                tool: self.name().to_string(),
                reason: "field 'urls' must be a non-empty array of strings".to_string(),
            })?;

        let mut body = json!({
            "urls": urls,
            "extract_depth": args.get("extract_depth").and_then(Value::as_str)
                .unwrap_or("basic"),
        });
        if let Some(include_images) = args.get("include_images") {
            body["include_images"] = include_images.clone();
        }

        let payload = post(&self.client, &self.config, self.name(), "/extract", body).await?;
        Ok(Value::String(format_pages(&payload)))
    }
}

fn format_pages(payload: &Value) -> String {
    let mut out = String::new();

    if let Some(results) = payload.get("results").and_then(Value::as_array) {
        for page in results {
            let url = page.get("url").and_then(Value::as_str).unwrap_or("(unknown url)");
            let content = page
                .get("raw_content")
                .and_then(Value::as_str)
                .unwrap_or("(no content)");
            out.push_str(&format!("## {url}\n{content}\n\n"));
            if let Some(images) = page.get("images").and_then(Value::as_array) {
                if !images.is_empty() {
                    out.push_str(&format!("Images: {images:?}\n\n"));
                }
            }
        }
    }

    if let Some(failed) = payload.get("failed_results").and_then(Value::as_array) {
        for failure in failed {
            let url = failure.get("url").and_then(Value::as_str).unwrap_or("(unknown url)");
            let error = failure.get("error").and_then(Value::as_str).unwrap_or("unknown error");
            out.push_str(&format!("FAILED {url}: {error}\n"));
        }
    }

    if out.is_empty() {
        out.push_str("No content extracted.");
    }
    out
}
