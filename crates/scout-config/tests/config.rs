use std::path::PathBuf;

use scout_config::{ConfigFormat, ScoutConfig};

fn temp_file(content: &str, ext: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "scout_config_test_{}.{ext}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn load_valid_toml() {
    let path = temp_file(
        r#"
[model]
model = "gpt-4o"
api_key_env = "OPENAI_API_KEY"

[tavily]
max_results = 3

[agent]
system_prompt = "You are a research assistant"
max_turns = 12
tool_retries = 2
"#,
        "toml",
    );

    let config = ScoutConfig::load(Some(&path)).unwrap();
    assert_eq!(config.model.model, "gpt-4o");
    assert_eq!(config.model.api_key_env, "OPENAI_API_KEY");
    assert_eq!(config.tavily.max_results, Some(3));
    assert_eq!(config.tavily.api_key_env, "TAVILY_API_KEY");
    assert_eq!(
        config.agent.system_prompt.as_deref(),
        Some("You are a research assistant")
    );
    assert_eq!(config.agent.max_turns, Some(12));
    assert_eq!(config.agent.tool_retries, Some(2));
    assert!(!config.agent.parallel_tools);

    std::fs::remove_file(&path).ok();
}

#[test]
fn load_valid_json() {
    let path = temp_file(
        r#"{"model": {"model": "gpt-4o-mini"}, "agent": {"max_turns": 5}}"#,
        "json",
    );

    let config = ScoutConfig::load(Some(&path)).unwrap();
    assert_eq!(config.model.model, "gpt-4o-mini");
    assert_eq!(config.agent.max_turns, Some(5));

    std::fs::remove_file(&path).ok();
}

#[test]
fn missing_required_field() {
    let path = temp_file("[model]\ntemperature = 0.5\n", "toml");

    // model.model is required
    assert!(ScoutConfig::load(Some(&path)).is_err());

    std::fs::remove_file(&path).ok();
}

#[test]
fn missing_file_errors() {
    let result = ScoutConfig::load(Some(std::path::Path::new("/nonexistent/scout.toml")));
    assert!(result.is_err());
}

#[test]
fn unknown_extension_errors() {
    let path = temp_file("[model]\nmodel = \"gpt-4o\"\n", "ini");
    assert!(ScoutConfig::load(Some(&path)).is_err());
    std::fs::remove_file(&path).ok();
}

#[test]
fn parse_from_string() {
    let config =
        ScoutConfig::parse("[model]\nmodel = \"gpt-4o\"\n", ConfigFormat::Toml).unwrap();
    assert_eq!(config.model.model, "gpt-4o");
}

#[test]
fn format_detection() {
    assert_eq!(ConfigFormat::from_extension("toml"), Some(ConfigFormat::Toml));
    assert_eq!(ConfigFormat::from_extension("JSON"), Some(ConfigFormat::Json));
    assert_eq!(ConfigFormat::from_extension("yaml"), None);
}

#[test]
fn resolve_api_keys_from_env() {
    let config = ScoutConfig::parse(
        r#"
[model]
model = "gpt-4o"
api_key_env = "SCOUT_TEST_MODEL_KEY_93117"

[tavily]
api_key_env = "SCOUT_TEST_TAVILY_KEY_93117"
"#,
        ConfigFormat::Toml,
    )
    .unwrap();

    // Keys not set -> error
    assert!(config.resolve_model_api_key().is_err());
    assert!(config.resolve_tavily_api_key().is_err());

    std::env::set_var("SCOUT_TEST_MODEL_KEY_93117", "model-key");
    std::env::set_var("SCOUT_TEST_TAVILY_KEY_93117", "tavily-key");

    assert_eq!(config.resolve_model_api_key().unwrap(), "model-key");
    assert_eq!(config.resolve_tavily_api_key().unwrap(), "tavily-key");

    std::env::remove_var("SCOUT_TEST_MODEL_KEY_93117");
    std::env::remove_var("SCOUT_TEST_TAVILY_KEY_93117");
}
