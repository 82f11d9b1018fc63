use serde::Deserialize;

/// Model provider configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    /// Model identifier (e.g., "gpt-4o", "gpt-4o-mini").
    pub model: String,
    /// Environment variable name containing the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    /// Custom base URL for OpenAI-compatible providers.
    pub base_url: Option<String>,
    /// Maximum output tokens.
    pub max_tokens: Option<u32>,
    /// Sampling temperature.
    pub temperature: Option<f64>,
}

fn default_api_key_env() -> String {
    "OPENAI_API_KEY".to_string()
}

/// Tavily tool configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct TavilySettings {
    /// Environment variable name containing the Tavily API key.
    #[serde(default = "default_tavily_key_env")]
    pub api_key_env: String,
    /// Custom base URL (for proxies or test servers).
    pub base_url: Option<String>,
    /// Default number of search results.
    pub max_results: Option<u32>,
    /// Default search depth: "basic" or "advanced".
    pub search_depth: Option<String>,
}

fn default_tavily_key_env() -> String {
    "TAVILY_API_KEY".to_string()
}

impl Default for TavilySettings {
    fn default() -> Self {
        Self {
            api_key_env: default_tavily_key_env(),
            base_url: None,
            max_results: None,
            search_depth: None,
        }
    }
}
