//! Configuration loading for Scout agents.
//!
//! The only secrets are two API keys (model provider + Tavily); following
//! the `api_key_env` pattern, config files name the environment variables
//! and never contain key material themselves.

mod format;
mod model;

pub use format::{parse_config, ConfigFormat};
pub use model::{ModelConfig, TavilySettings};

use std::path::{Path, PathBuf};

use serde::Deserialize;
use scout_core::ScoutError;

/// Top-level agent configuration, loaded from TOML or JSON.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoutConfig {
    pub model: ModelConfig,
    #[serde(default)]
    pub tavily: TavilySettings,
    #[serde(default)]
    pub agent: AgentSettings,
}

/// Agent behavior configuration.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AgentSettings {
    pub system_prompt: Option<String>,
    pub max_turns: Option<usize>,
    /// Per-tool-call timeout, in seconds.
    pub tool_timeout_secs: Option<u64>,
    /// Overall session wall-clock budget, in seconds.
    pub deadline_secs: Option<u64>,
    /// Retries for transient tool failures.
    pub tool_retries: Option<usize>,
    #[serde(default)]
    pub parallel_tools: bool,
}

/// File-discovery search order for config files.
const EXTENSIONS: &[&str] = &["toml", "json"];

impl ScoutConfig {
    /// Load configuration from a file (TOML or JSON).
    ///
    /// Search order:
    /// 1. Explicit path (if provided) — format detected by extension
    /// 2. `./scout.{toml,json}` in the current directory
    pub fn load(path: Option<&Path>) -> Result<Self, ScoutError> {
        if let Some(p) = path {
            if p.exists() {
                return Self::load_file(p);
            }
            return Err(ScoutError::Config(format!(
                "config file not found: {}",
                p.display()
            )));
        }

        for ext in EXTENSIONS {
            let candidate = PathBuf::from(format!("./scout.{ext}"));
            if candidate.exists() {
                return Self::load_file(&candidate);
            }
        }

        Err(ScoutError::Config(
            "no config file found: tried ./scout.{toml,json}".to_string(),
        ))
    }

    /// Parse from a string in the given format.
    pub fn parse(content: &str, format: ConfigFormat) -> Result<Self, ScoutError> {
        parse_config(content, format)
    }

    /// Resolve the model-provider API key from the environment variable
    /// named in `model.api_key_env`.
    pub fn resolve_model_api_key(&self) -> Result<String, ScoutError> {
        resolve_env(&self.model.api_key_env)
    }

    /// Resolve the Tavily API key from the environment variable named in
    /// `tavily.api_key_env`.
    pub fn resolve_tavily_api_key(&self) -> Result<String, ScoutError> {
        resolve_env(&self.tavily.api_key_env)
    }

    fn load_file(path: &Path) -> Result<Self, ScoutError> {
        let format = ConfigFormat::from_path(path).ok_or_else(|| {
            ScoutError::Config(format!(
                "cannot detect config format from extension: {}",
                path.display()
            ))
        })?;
        let content = std::fs::read_to_string(path)
            .map_err(|e| ScoutError::Config(format!("failed to read {}: {e}", path.display())))?;
        parse_config(&content, format)
    }
}

fn resolve_env(var: &str) -> Result<String, ScoutError> {
    std::env::var(var)
        .map_err(|_| ScoutError::Config(format!("environment variable '{var}' not set")))
}
