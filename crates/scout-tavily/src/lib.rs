//! Tavily tool integrations for the Scout framework.
//!
//! This crate provides three web-research tools implementing the
//! [`Tool`](scout_core::Tool) trait against the
//! [Tavily API](https://tavily.com/): [`TavilySearchTool`] (ranked web
//! search), [`TavilyExtractTool`] (full page content for known URLs), and
//! [`TavilyCrawlTool`] (aggregated content from a site's link graph).
//!
//! # Quick start
//!
//! ```rust,no_run
//! use scout_tavily::{TavilyConfig, TavilySearchTool};
//! use scout_core::Tool;
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = TavilyConfig::new("your-api-key")
//!     .with_max_results(3)
//!     .with_search_depth("advanced");
//! let tool = TavilySearchTool::new(config);
//!
//! let result = tool.call(json!({"query": "Rust programming language"})).await?;
//! println!("{}", result);
//! # Ok(())
//! # }
//! ```

mod config;
mod crawl;
mod extract;
mod search;

pub use config::TavilyConfig;
pub use crawl::TavilyCrawlTool;
pub use extract::TavilyExtractTool;
pub use search::TavilySearchTool;

// Re-export core trait for convenience.
pub use scout_core::Tool;
