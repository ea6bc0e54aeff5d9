use crate::config::GeminiConfig;
use crate::services::chat_session::ChatSession;
use crate::services::provider::{ChatProvider, LlmProvider};
use crate::utils::error::ApiError;
use anyhow::Result;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

/// Every filter category is switched off; the tutor prompt handles tone.
const SAFETY_CATEGORIES: [&str; 4] = [
    "HARM_CATEGORY_HARASSMENT",
    "HARM_CATEGORY_HATE_SPEECH",
    "HARM_CATEGORY_SEXUALLY_EXPLICIT",
    "HARM_CATEGORY_DANGEROUS_CONTENT",
];

pub struct GeminiService {
    client: Client,
    config: GeminiConfig,
    session: ChatSession,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Content {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Part {
    #[serde(default)]
    pub text: String,
}

impl Content {
    pub fn user(text: impl Into<String>) -> Self {
        Self::with_role("user", text)
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self::with_role("model", text)
    }

    fn with_role(role: &str, text: impl Into<String>) -> Self {
        Self {
            role: role.to_string(),
            parts: vec![Part { text: text.into() }],
        }
    }

    /// Concatenated text of all parts
    pub fn text(&self) -> String {
        self.parts.iter().map(|p| p.text.as_str()).collect()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: &'a [Content],
    generation_config: GenerationConfig,
    safety_settings: Vec<SafetySetting>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    top_p: f32,
    max_output_tokens: u32,
}

#[derive(Serialize)]
struct SafetySetting {
    category: &'static str,
    threshold: &'static str,
}

// Response Structures
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<Content>,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

impl GeminiService {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(config.timeout_seconds))
                .build()
                .unwrap_or_else(|_| Client::new()),
            session: ChatSession::new(config.max_chat_turns),
            config,
        }
    }

    pub fn session(&self) -> &ChatSession {
        &self.session
    }

    /// Call `models/{model}:generateContent` and return the first candidate's text
    pub async fn generate_content(&self, contents: &[Content]) -> Result<String, ApiError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        );

        let request = GenerateContentRequest {
            contents,
            generation_config: GenerationConfig {
                temperature: self.config.temperature,
                top_p: self.config.top_p,
                max_output_tokens: self.config.max_output_tokens,
            },
            safety_settings: SAFETY_CATEGORIES
                .iter()
                .map(|&category| SafetySetting { category, threshold: "BLOCK_NONE" })
                .collect(),
        };

        debug!("Gemini generateContent with {} contents", contents.len());

        let response = self.client.post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| ApiError::LlmError(format!("Gemini Network Error: {}", e)))?;

        if !response.status().is_success() {
             let status = response.status();
             let text = response.text().await.unwrap_or_default();
             error!("Gemini API returned {}", status);
             return Err(ApiError::LlmError(format!("Gemini API Error ({}): {}", status, text)));
        }

        let body: GenerateContentResponse = response.json().await
            .map_err(|e| ApiError::LlmError(format!("Failed to parse Gemini response: {}", e)))?;

        let Some(candidate) = body.candidates.into_iter().next() else {
            let reason = body
                .prompt_feedback
                .and_then(|f| f.block_reason)
                .unwrap_or_else(|| "no candidates".to_string());
            return Err(ApiError::LlmError(format!("Gemini returned no answer: {}", reason)));
        };

        match candidate.content {
            Some(content) if !content.parts.is_empty() => Ok(content.text()),
            _ => Err(ApiError::LlmError(format!(
                "Gemini returned an empty candidate (finish reason: {})",
                candidate.finish_reason.as_deref().unwrap_or("unknown")
            ))),
        }
    }
}

#[async_trait::async_trait]
impl LlmProvider for GeminiService {
    async fn complete(&self, prompt: &str) -> Result<String> {
        self.generate_content(&[Content::user(prompt)])
            .await
            .map_err(|e| anyhow::anyhow!(e))
    }
}

#[async_trait::async_trait]
impl ChatProvider for GeminiService {
    async fn send_message(&self, message: &str) -> Result<String> {
        let contents = self.session.contents_for(message);
        let reply = self
            .generate_content(&contents)
            .await
            .map_err(|e| anyhow::anyhow!(e))?;

        self.session.push_exchange(message, &reply);
        Ok(reply)
    }
}
