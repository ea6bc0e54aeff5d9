/// orchestrator.rs - per-query control flow for `/api/query`
use parking_lot::Mutex;
use rand::seq::IndexedRandom;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::services::classifier::{self, Difficulty, Topic};
use crate::services::conversation::{ConversationContext, Interaction};
use crate::services::formatter::ResponseFormatter;
use crate::services::prompt;
use crate::services::provider::LlmProvider;
use crate::utils::error::ApiError;

const IDENTITY_KEYWORDS: [&str; 5] = [
    "who are you",
    "what are you",
    "your creator",
    "your origin",
    "about you",
];

pub const IDENTITY_RESPONSE: &str = "I'm Hecker, an AI learning companion built to help students \
understand complex topics step by step. I adapt my explanations to your level, create study \
materials on request, and keep track of our recent conversation so I can build on what we've \
already covered. What would you like to learn today?";

pub const APOLOGY_PREFIX: &str = "I'm sorry, I encountered an error processing your query.";

const EMOJIS: [&str; 15] = [
    "😊", "🌟", "👍", "🚀", "🤔", "💡", "📚", "🎓",
    "🧠", "✨", "🌈", "👏", "🤓", "💪", "🌍",
];

/// What to do when the model call fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Return the error to the caller; history is left untouched
    Propagate,
    /// Answer with an apology and record it like any other response
    Apologize,
}

impl FailurePolicy {
    pub fn from_config(apologize_on_failure: bool) -> Self {
        if apologize_on_failure {
            Self::Apologize
        } else {
            Self::Propagate
        }
    }
}

/// Values read from the shared context for one request
struct RequestView {
    topic: Option<Topic>,
    difficulty: Difficulty,
    history_len: usize,
}

pub struct QueryOrchestrator {
    context: Mutex<ConversationContext>,
    llm_provider: Arc<dyn LlmProvider>,
    formatter: ResponseFormatter,
    failure_policy: FailurePolicy,
}

pub fn is_identity_query(query: &str) -> bool {
    let query_lower = query.to_lowercase();
    IDENTITY_KEYWORDS.iter().any(|k| query_lower.contains(k))
}

pub fn apology() -> String {
    let emoji = EMOJIS.choose(&mut rand::rng()).copied().unwrap_or("😊");
    format!("{} {}", APOLOGY_PREFIX, emoji)
}

impl QueryOrchestrator {
    pub fn new(
        llm_provider: Arc<dyn LlmProvider>,
        formatter: ResponseFormatter,
        max_history: usize,
        failure_policy: FailurePolicy,
    ) -> Self {
        Self {
            context: Mutex::new(ConversationContext::new(max_history)),
            llm_provider,
            formatter,
            failure_policy,
        }
    }

    pub async fn handle(&self, query: &str) -> Result<String, ApiError> {
        // Shortcut: identity questions never reach the model
        if is_identity_query(query) {
            info!("Identity query answered locally");
            let response = IDENTITY_RESPONSE.to_string();
            self.context.lock().record(query, response.clone());
            return Ok(response);
        }

        let view = self.classify(query);
        let prompt = prompt::compose(query, view.topic, view.difficulty, view.history_len);
        debug!("Composed prompt ({} chars)", prompt.len());

        let response = match self.llm_provider.complete(&prompt).await {
            Ok(raw) => self.formatter.format(&raw),
            Err(e) => {
                error!("Response generation error: {}", e);
                match self.failure_policy {
                    FailurePolicy::Propagate => {
                        // Providers that already speak ApiError keep their variant and message
                        return Err(match e.downcast::<ApiError>() {
                            Ok(api_error) => api_error,
                            Err(other) => ApiError::LlmError(other.to_string()),
                        });
                    }
                    FailurePolicy::Apologize => {
                        warn!("Substituting apology for failed generation");
                        apology()
                    }
                }
            }
        };

        self.context.lock().record(query, response.clone());
        Ok(response)
    }

    /// Update topic/difficulty and read what the prompt needs in one critical section
    fn classify(&self, query: &str) -> RequestView {
        let topic = classifier::classify_topic(query);
        let difficulty = classifier::classify_difficulty(query);

        let mut ctx = self.context.lock();
        if let Some(topic) = topic {
            ctx.set_topic(topic);
        }
        if let Some(level) = difficulty {
            ctx.set_difficulty(level);
        }

        RequestView {
            topic,
            difficulty: ctx.difficulty_level(),
            history_len: ctx.len(),
        }
    }

    pub fn history(&self) -> Vec<Interaction> {
        self.context.lock().interactions().cloned().collect()
    }

    pub fn current_topic(&self) -> Option<Topic> {
        self.context.lock().current_topic()
    }

    pub fn difficulty_level(&self) -> Difficulty {
        self.context.lock().difficulty_level()
    }
}
