use anyhow::Result;

/// Single-shot text completion (used by `/api/query`)
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait LlmProvider: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String>;
}

/// Stateful chat that remembers earlier turns (used by `/generate_response`)
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ChatProvider: Send + Sync {
    async fn send_message(&self, message: &str) -> Result<String>;
}
