use std::sync::Arc;
use std::time::Duration;

use scout::agent::{ReactAgent, ReactAgentOptions, Session};
use scout::config::{AgentSettings, ScoutConfig};
use scout::core::{Message, ScoutError, Tool};
use scout::models::{HttpBackend, OpenAiChatModel, OpenAiConfig};
use scout::tavily::{TavilyConfig, TavilyCrawlTool, TavilyExtractTool, TavilySearchTool};
use scout::tools::RetryPolicy;
use tracing_subscriber::EnvFilter;

const SYSTEM_PROMPT: &str = "\
You are a web research assistant with three tools.

Tool selection:
- tavily_search: discover pages when you don't have URLs. Set time_range \
for questions about recent events, and include_domains when the question \
names a specific site.
- tavily_extract: read the full content of pages you already have URLs \
for, typically ones a search surfaced.
- tavily_crawl: answer whole-site questions (e.g. 'what products does \
this company sell') by following links from a root URL. Keep max_depth \
at 1 or 2.

Ground every claim in tool output and cite the URLs you used. If a tool \
fails, adjust its arguments or try a different tool before giving up.";

#[tokio::main]
async fn main() -> Result<(), ScoutError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Optional ./scout.toml overrides; env vars supply the secrets either way.
    let config = ScoutConfig::load(None).ok();

    let model_key = resolve_key(&config, true)?;
    let tavily_key = resolve_key(&config, false)?;

    let model_name = config
        .as_ref()
        .map(|c| c.model.model.clone())
        .unwrap_or_else(|| "gpt-4o".to_string());
    let mut openai = OpenAiConfig::new(model_key, model_name);
    if let Some(base_url) = config.as_ref().and_then(|c| c.model.base_url.clone()) {
        openai = openai.with_base_url(base_url);
    }
    let model = Arc::new(OpenAiChatModel::new(openai, Arc::new(HttpBackend::new())));

    let mut tavily = TavilyConfig::new(tavily_key);
    if let Some(max_results) = config.as_ref().and_then(|c| c.tavily.max_results) {
        tavily = tavily.with_max_results(max_results);
    }
    let tools: Vec<Arc<dyn Tool>> = vec![
        Arc::new(TavilySearchTool::new(tavily.clone())),
        Arc::new(TavilyExtractTool::new(tavily.clone())),
        Arc::new(TavilyCrawlTool::new(tavily)),
    ];

    let agent_cfg: AgentSettings = config
        .as_ref()
        .map(|c| c.agent.clone())
        .unwrap_or_default();
    let options = ReactAgentOptions {
        system_prompt: Some(
            agent_cfg
                .system_prompt
                .unwrap_or_else(|| SYSTEM_PROMPT.to_string()),
        ),
        max_turns: agent_cfg.max_turns.unwrap_or(12),
        tool_timeout: Some(Duration::from_secs(
            agent_cfg.tool_timeout_secs.unwrap_or(60),
        )),
        deadline: Some(Duration::from_secs(agent_cfg.deadline_secs.unwrap_or(300))),
        retry: RetryPolicy::new(agent_cfg.tool_retries.unwrap_or(2)),
        parallel_tools: agent_cfg.parallel_tools,
    };
    let agent = ReactAgent::with_options(model, tools, options)?;

    let question = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    let question = if question.is_empty() {
        "What iPhone models are currently listed on apple.com, and what do they cost?".to_string()
    } else {
        question
    };
    println!("question: {question}\n");

    let session = Session::with_messages(vec![Message::human(question)]);
    let result = agent.run(session).await?;

    for msg in result.tool_messages() {
        println!(
            "[{} -> {}]",
            msg.tool_name().unwrap_or("?"),
            msg.tool_call_id().unwrap_or("?")
        );
    }
    println!("\n{}", result.final_answer().unwrap_or("(no final answer)"));
    Ok(())
}

fn resolve_key(config: &Option<ScoutConfig>, model: bool) -> Result<String, ScoutError> {
    match (config, model) {
        (Some(c), true) => c.resolve_model_api_key(),
        (Some(c), false) => c.resolve_tavily_api_key(),
        (None, true) => std::env::var("OPENAI_API_KEY")
            .map_err(|_| ScoutError::Config("environment variable 'OPENAI_API_KEY' not set".into())),
        (None, false) => std::env::var("TAVILY_API_KEY")
            .map_err(|_| ScoutError::Config("environment variable 'TAVILY_API_KEY' not set".into())),
    }
}
