use serde_json::json;
use scout_core::Tool;
use scout_tavily::{TavilyConfig, TavilyExtractTool};

#[test]
fn tool_definition() {
    let tool = TavilyExtractTool::new(TavilyConfig::new("test-key"));
    let def = tool.as_tool_definition();
    assert_eq!(def.name, "tavily_extract");

    let props = def.parameters.get("properties").unwrap();
    assert_eq!(props["urls"]["type"], "array");
    assert_eq!(props["extract_depth"]["enum"], json!(["basic", "advanced"]));

    let required = def.parameters.get("required").unwrap().as_array().unwrap();
    assert!(required.contains(&json!("urls")));
}

#[tokio::test]
async fn call_missing_urls() {
    let tool = TavilyExtractTool::new(TavilyConfig::new("key"));
    let result = tool.call(json!({})).await;
    let err = result.unwrap_err().to_string();
    assert!(err.contains("urls"), "error should mention 'urls': {err}");
}

#[tokio::test]
async fn call_empty_urls() {
    let tool = TavilyExtractTool::new(TavilyConfig::new("key"));
    let result = tool.call(json!({"urls": []})).await;
    assert!(result.is_err());
}

#[tokio::test]
#[ignore = "requires TAVILY_API_KEY"]
async fn integration_extract() {
    let api_key = std::env::var("TAVILY_API_KEY").unwrap();
    let tool = TavilyExtractTool::new(TavilyConfig::new(api_key));
    let result = tool
        .call(json!({"urls": ["https://www.rust-lang.org"]}))
        .await;
    assert!(result.is_ok());
}
