pub mod settings;

pub use settings::{ConversationConfig, GeminiConfig, KeepAliveConfig, ServerConfig, Settings};
