use anyhow::Result;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Settings {
    pub server: ServerConfig,
    pub gemini: GeminiConfig,
    pub conversation: ConversationConfig,
    pub keep_alive: KeepAliveConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout_seconds: u64,
    pub temperature: f32,
    pub top_p: f32,
    pub max_output_tokens: u32,
    /// Exchanges kept in the persona chat session, on top of the seed turns
    pub max_chat_turns: usize,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ConversationConfig {
    pub max_history: usize,
    /// Legacy behaviour: answer `/api/query` with an apology (and record it)
    /// instead of failing the request when the model call fails.
    pub apologize_on_failure: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct KeepAliveConfig {
    pub enabled: bool,
    #[serde(default)]
    pub url: Option<String>,
    pub interval_seconds: u64,
    pub timeout_seconds: u64,
}

impl Settings {
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let config = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            .set_default("gemini.api_key", "")?
            .set_default("gemini.base_url", "https://generativelanguage.googleapis.com")?
            .set_default("gemini.model", "gemini-pro")?
            .set_default("gemini.timeout_seconds", 60)?
            .set_default("gemini.temperature", 0.7)?
            .set_default("gemini.top_p", 0.9)?
            .set_default("gemini.max_output_tokens", 2048)?
            .set_default("gemini.max_chat_turns", 50)?
            .set_default("conversation.max_history", 5)?
            .set_default("conversation.apologize_on_failure", false)?
            .set_default("keep_alive.enabled", false)?
            .set_default("keep_alive.interval_seconds", 1200)?
            .set_default("keep_alive.timeout_seconds", 10)?
            .add_source(File::with_name("config/settings").required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true)
            )
            // Keep the variable name the deployment already uses
            .set_override_option("gemini.api_key", std::env::var("GEMINI_API_KEY").ok())?
            .build()?;

        let settings: Settings = config.try_deserialize()?;
        Ok(settings)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 5000,
            },
            gemini: GeminiConfig {
                api_key: String::new(),
                base_url: "https://generativelanguage.googleapis.com".to_string(),
                model: "gemini-pro".to_string(),
                timeout_seconds: 60,
                temperature: 0.7,
                top_p: 0.9,
                max_output_tokens: 2048,
                max_chat_turns: 50,
            },
            conversation: ConversationConfig {
                max_history: 5,
                apologize_on_failure: false,
            },
            keep_alive: KeepAliveConfig {
                enabled: false,
                url: None,
                interval_seconds: 1200,
                timeout_seconds: 10,
            },
        }
    }
}
