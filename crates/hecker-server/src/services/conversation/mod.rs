//! Conversation memory for the learning companion
//!
//! Provides the bounded interaction history plus the sticky topic and
//! difficulty used to shape prompts.

mod context;
pub mod types;

pub use context::{ConversationContext, DEFAULT_MAX_HISTORY};
pub use types::Interaction;
