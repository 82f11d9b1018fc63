use async_trait::async_trait;
use serde_json::{json, Value};
use scout_core::{ScoutError, Tool};

use crate::config::{post, require_str, TavilyConfig};

/// Site crawling via the Tavily `/crawl` endpoint.
///
/// Aggregates content from the pages reachable from a root URL within the
/// given depth and breadth bounds.
pub struct TavilyCrawlTool {
    config: TavilyConfig,
    client: reqwest::Client,
}

impl TavilyCrawlTool {
    pub fn new(config: TavilyConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl Tool for TavilyCrawlTool {
    fn name(&self) -> &str {
        "tavily_crawl"
    }

    fn description(&self) -> &str {
        "Crawl a website starting from a root URL, following its links up \
         to max_depth levels. Use this for whole-site questions where the \
         answer is spread across many pages. Keep max_depth small (1-2) \
         unless the site is shallow."
    }

    fn parameters(&self) -> Option<Value> {
        Some(json!({
            "type": "object",
            "properties": {
                "url": {
                    "type": "string",
                    "description": "The root URL to begin the crawl from"
                },
                "max_depth": {
                    "type": "integer",
                    "minimum": 1,
                    "maximum": 3,
                    "description": "How many link levels to follow from the root"
                },
                "max_breadth": {
                    "type": "integer",
                    "minimum": 1,
                    "description": "Max links to follow per page"
                },
                "extract_depth": {
                    "type": "string",
                    "enum": ["basic", "advanced"],
                    "description": "Content extraction depth per crawled page"
                },
                "select_paths": {
                    "type": "array",
                    "items": {"type": "string"},
                    "description": "Regex patterns; only crawl matching URL paths"
                },
                "exclude_paths": {
                    "type": "array",
                    "items": {"type": "string"},
                    "description": "Regex patterns; skip matching URL paths"
                }
            },
            "required": ["url"]
        }))
    }

    async fn call(&self, args: Value) -> Result<Value, ScoutError> {
        let url = require_str(self.name(), &args, "url")?;

        // The executor validates against the schema, but this tool is also
        // callable directly; reject out-of-range depth here too.
        if let Some(depth) = args.get("max_depth").and_then(Value::as_i64) {
            if depth < 1 {
                return Err(ScoutError::InvalidToolArguments {
                    tool: self.name().to_string(),
                    reason: format!("field 'max_depth' must be >= 1, got {depth}"),
                });
            }
        }

        let mut body = json!({
            "url": url,
            "max_depth": args.get("max_depth").and_then(Value::as_u64).unwrap_or(1),
            "max_breadth": args.get("max_breadth").and_then(Value::as_u64).unwrap_or(20),
            "extract_depth": args.get("extract_depth").and_then(Value::as_str)
                .unwrap_or("basic"),
        });
        for field in ["select_paths", "exclude_paths"] {
            if let Some(value) = args.get(field) {
                body[field] = value.clone();
            }
        }

        let payload = post(&self.client, &self.config, self.name(), "/crawl", body).await?;
        Ok(Value::String(format_crawl(url, &payload)))
    }
}

fn format_crawl(root: &str, payload: &Value) -> String {
    let results = payload
        .get("results")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    if results.is_empty() {
        return format!("Crawl of {root} returned no pages.");
    }

    let mut out = format!("Crawled {} pages from {root}:\n\n", results.len());
    for page in results {
        let url = page.get("url").and_then(Value::as_str).unwrap_or("(unknown url)");
        let content = page
            .get("raw_content")
            .and_then(Value::as_str)
            .unwrap_or("(no content)");
        out.push_str(&format!("## {url}\n{content}\n\n"));
    }
    out
}
