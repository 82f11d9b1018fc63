use std::sync::Arc;

use serde_json::json;
use scout_core::{ChatModel, ChatRequest, Message, ScoutError, ToolCall, ToolChoice, ToolDefinition};
use scout_models::{FakeBackend, OpenAiChatModel, OpenAiConfig, ProviderResponse};

fn search_def() -> ToolDefinition {
    ToolDefinition {
        name: "tavily_search".to_string(),
        description: "Web search".to_string(),
        parameters: json!({
            "type": "object",
            "properties": {"query": {"type": "string"}},
            "required": ["query"]
        }),
    }
}

#[test]
fn build_request_shape() {
    let config = OpenAiConfig::new("test-key", "gpt-4o")
        .with_temperature(0.2)
        .with_max_tokens(512);
    let model = OpenAiChatModel::new(config, Arc::new(FakeBackend::new()));

    let request = ChatRequest::new(vec![
        Message::system("You are a research assistant."),
        Message::human("find iphone prices"),
    ])
    .with_tools(vec![search_def()])
    .with_tool_choice(ToolChoice::Auto);

    let provider_req = model.build_request(&request);

    assert_eq!(provider_req.url, "https://api.openai.com/v1/chat/completions");
    assert!(provider_req
        .headers
        .iter()
        .any(|(k, v)| k == "Authorization" && v == "Bearer test-key"));

    let body = &provider_req.body;
    assert_eq!(body["model"], "gpt-4o");
    assert_eq!(body["temperature"], 0.2);
    assert_eq!(body["max_tokens"], 512);
    assert_eq!(body["messages"][0]["role"], "system");
    assert_eq!(body["messages"][1]["content"], "find iphone prices");
    assert_eq!(body["tools"][0]["function"]["name"], "tavily_search");
    assert_eq!(body["tool_choice"], "auto");
}

#[test]
fn build_request_custom_base_url() {
    let config = OpenAiConfig::new("k", "gpt-4o").with_base_url("https://llm.internal/v1/");
    let model = OpenAiChatModel::new(config, Arc::new(FakeBackend::new()));
    let provider_req = model.build_request(&ChatRequest::new(vec![Message::human("hi")]));
    assert_eq!(provider_req.url, "https://llm.internal/v1/chat/completions");
}

#[test]
fn assistant_tool_calls_serialized_as_json_strings() {
    let config = OpenAiConfig::new("k", "gpt-4o");
    let model = OpenAiChatModel::new(config, Arc::new(FakeBackend::new()));

    let request = ChatRequest::new(vec![
        Message::ai_with_tool_calls(
            "",
            vec![ToolCall {
                id: "call-1".to_string(),
                name: "tavily_search".to_string(),
                arguments: json!({"query": "rust"}),
            }],
        ),
        Message::tool("results...", "call-1", "tavily_search"),
    ]);

    let body = model.build_request(&request).body;
    let call = &body["messages"][0]["tool_calls"][0];
    assert_eq!(call["id"], "call-1");
    assert_eq!(call["function"]["name"], "tavily_search");
    // Arguments go over the wire as an encoded string, not an object.
    assert_eq!(call["function"]["arguments"], "{\"query\":\"rust\"}");

    assert_eq!(body["messages"][1]["role"], "tool");
    assert_eq!(body["messages"][1]["tool_call_id"], "call-1");
}

#[tokio::test]
async fn parses_final_answer_response() {
    let backend = FakeBackend::new();
    backend.push_response(ProviderResponse {
        status: 200,
        body: json!({
            "choices": [{"message": {"role": "assistant", "content": "The answer is 42."}}],
            "usage": {"prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15}
        }),
    });
    let model = OpenAiChatModel::new(OpenAiConfig::new("k", "gpt-4o"), Arc::new(backend));

    let response = model
        .chat(ChatRequest::new(vec![Message::human("?")]))
        .await
        .unwrap();

    assert!(response.message.is_ai());
    assert_eq!(response.message.content(), "The answer is 42.");
    assert!(response.tool_calls().is_empty());
    assert_eq!(response.usage.unwrap().total_tokens, 15);
}

#[tokio::test]
async fn parses_tool_call_response() {
    let backend = FakeBackend::new();
    backend.push_response(ProviderResponse {
        status: 200,
        body: json!({
            "choices": [{"message": {
                "role": "assistant",
                "content": null,
                "tool_calls": [{
                    "id": "call-abc",
                    "type": "function",
                    "function": {
                        "name": "tavily_search",
                        "arguments": "{\"query\": \"iphone prices\", \"max_results\": 3}"
                    }
                }]
            }}]
        }),
    });
    let model = OpenAiChatModel::new(OpenAiConfig::new("k", "gpt-4o"), Arc::new(backend));

    let response = model
        .chat(ChatRequest::new(vec![Message::human("?")]))
        .await
        .unwrap();

    let calls = response.tool_calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].id, "call-abc");
    assert_eq!(calls[0].name, "tavily_search");
    assert_eq!(calls[0].arguments["query"], "iphone prices");
    assert_eq!(calls[0].arguments["max_results"], 3);
}

#[tokio::test]
async fn non_200_status_is_model_error() {
    let backend = FakeBackend::new();
    backend.push_response(ProviderResponse {
        status: 401,
        body: json!({"error": {"message": "invalid api key"}}),
    });
    let model = OpenAiChatModel::new(OpenAiConfig::new("bad", "gpt-4o"), Arc::new(backend));

    let result = model.chat(ChatRequest::new(vec![Message::human("?")])).await;
    match result {
        Err(ScoutError::Model(msg)) => assert!(msg.contains("401")),
        other => panic!("expected Model error, got {other:?}"),
    }
}

#[tokio::test]
async fn unparseable_tool_arguments_is_model_error() {
    let backend = FakeBackend::new();
    backend.push_response(ProviderResponse {
        status: 200,
        body: json!({
            "choices": [{"message": {
                "role": "assistant",
                "tool_calls": [{
                    "id": "call-1",
                    "type": "function",
                    "function": {"name": "tavily_search", "arguments": "{not json"}
                }]
            }}]
        }),
    });
    let model = OpenAiChatModel::new(OpenAiConfig::new("k", "gpt-4o"), Arc::new(backend));

    let result = model.chat(ChatRequest::new(vec![Message::human("?")])).await;
    assert!(matches!(result, Err(ScoutError::Model(_))));
}

#[tokio::test]
async fn backend_transport_error_propagates() {
    let backend = FakeBackend::new();
    backend.push_error(ScoutError::Model("connection reset".to_string()));
    let model = OpenAiChatModel::new(OpenAiConfig::new("k", "gpt-4o"), Arc::new(backend));

    let result = model.chat(ChatRequest::new(vec![Message::human("?")])).await;
    match result {
        Err(ScoutError::Model(msg)) => assert!(msg.contains("connection reset")),
        other => panic!("expected Model error, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_choices_is_model_error() {
    let backend = FakeBackend::new();
    backend.push_response(ProviderResponse {
        status: 200,
        body: json!({"choices": []}),
    });
    let model = OpenAiChatModel::new(OpenAiConfig::new("k", "gpt-4o"), Arc::new(backend));

    let result = model.chat(ChatRequest::new(vec![Message::human("?")])).await;
    assert!(matches!(result, Err(ScoutError::Model(_))));
}
