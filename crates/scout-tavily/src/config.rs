use serde_json::Value;
use scout_core::ScoutError;

/// Shared configuration for the Tavily tools.
#[derive(Debug, Clone)]
pub struct TavilyConfig {
    pub api_key: String,
    pub base_url: String,
    /// Default number of search results when the model does not specify one.
    pub max_results: u32,
    /// Default search depth: "basic" or "advanced".
    pub search_depth: String,
    /// Ask Tavily to include a synthesized answer with search results.
    pub include_answer: bool,
}

impl TavilyConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: "https://api.tavily.com".to_string(),
            max_results: 5,
            search_depth: "basic".to_string(),
            include_answer: true,
        }
    }

    pub fn with_max_results(mut self, max_results: u32) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn with_search_depth(mut self, depth: impl Into<String>) -> Self {
        self.search_depth = depth.into();
        self
    }

    pub fn with_include_answer(mut self, include_answer: bool) -> Self {
        self.include_answer = include_answer;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// POST a JSON body to a Tavily endpoint and parse the JSON reply.
pub(crate) async fn post(
    client: &reqwest::Client,
    config: &TavilyConfig,
    tool: &str,
    path: &str,
    body: Value,
) -> Result<Value, ScoutError> {
    let url = format!("{}{path}", config.base_url.trim_end_matches('/'));
    tracing::debug!(%url, tool, "calling Tavily API");

    let tool_err = |reason: String| ScoutError::Tool {
        tool: tool.to_string(),
        reason,
    };

    let response = client
        .post(&url)
        .bearer_auth(&config.api_key)
        .json(&body)
        .send()
        .await
        .map_err(|e| tool_err(format!("request failed: {e}")))?;

    let status = response.status();
    let payload: Value = response
        .json()
        .await
        .map_err(|e| tool_err(format!("malformed response: {e}")))?;

    if !status.is_success() {
        return Err(tool_err(format!(
            "Tavily API error ({}): {payload}",
            status.as_u16()
        )));
    }
    Ok(payload)
}

/// Extract a required string argument, naming the field on failure.
pub(crate) fn require_str<'a>(
    tool: &str,
    args: &'a Value,
    field: &str,
) -> Result<&'a str, ScoutError> {
    args.get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| ScoutError::InvalidToolArguments {
            tool: tool.to_string(),
            reason: format!("missing or non-string field '{field}'"),
        })
}
