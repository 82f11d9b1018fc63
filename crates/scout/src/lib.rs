//! Scout, a web-research agent built on the ReAct pattern.
//!
//! This crate re-exports the Scout sub-crates for convenient single-import
//! usage.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use scout::agent::{ReactAgent, ReactAgentOptions, Session};
//! use scout::core::{Message, Tool};
//! use scout::models::{HttpBackend, OpenAiChatModel, OpenAiConfig};
//! use scout::tavily::{TavilyConfig, TavilySearchTool};
//!
//! let model = Arc::new(OpenAiChatModel::new(
//!     OpenAiConfig::new(api_key, "gpt-4o"),
//!     Arc::new(HttpBackend::new()),
//! ));
//! let tools: Vec<Arc<dyn Tool>> =
//!     vec![Arc::new(TavilySearchTool::new(TavilyConfig::new(tavily_key)))];
//! let agent = ReactAgent::new(model, tools)?;
//! ```

/// Core traits and types: ChatModel, Message, Tool, ScoutError.
pub use scout_core as core;

/// The ReAct loop: ReactAgent, Session, Decision.
pub use scout_agent as agent;

/// Configuration loading: ScoutConfig, env-var secret resolution.
pub use scout_config as config;

/// Model provider plumbing: OpenAI chat model, backends, test doubles.
pub use scout_models as models;

/// Tavily search, extract, and crawl tools.
pub use scout_tavily as tavily;

/// Tool registry and execution.
pub use scout_tools as tools;
