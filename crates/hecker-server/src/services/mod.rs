pub mod chat_session;
pub mod classifier;
pub mod conversation;
pub mod formatter;
pub mod gemini;
pub mod keep_alive;
pub mod orchestrator;
pub mod prompt;
pub mod provider;

pub use formatter::ResponseFormatter;
pub use gemini::GeminiService;
pub use orchestrator::{FailurePolicy, QueryOrchestrator};
pub use provider::{ChatProvider, LlmProvider};
