use std::collections::VecDeque;
use tracing::debug;

use crate::services::classifier::{Difficulty, Topic};
use super::types::Interaction;

pub const DEFAULT_MAX_HISTORY: usize = 5;

/// Bounded conversation state shared by every `/api/query` request
///
/// Not synchronized on its own; the orchestrator keeps it behind a mutex.
#[derive(Debug, Clone)]
pub struct ConversationContext {
    history: VecDeque<Interaction>,
    max_history: usize,
    current_topic: Option<Topic>,
    difficulty_level: Difficulty,
}

impl ConversationContext {
    pub fn new(max_history: usize) -> Self {
        // A zero bound would make `record` a no-op that still evicts
        let max_history = max_history.max(1);
        Self {
            history: VecDeque::with_capacity(max_history),
            max_history,
            current_topic: None,
            difficulty_level: Difficulty::default(),
        }
    }

    /// Append an interaction, evicting the oldest one when full
    pub fn record(&mut self, query: impl Into<String>, response: impl Into<String>) {
        if self.history.len() >= self.max_history {
            if let Some(evicted) = self.history.pop_front() {
                debug!("History full ({}), evicted query of {} chars",
                    self.max_history, evicted.query.len());
            }
        }

        self.history.push_back(Interaction::new(query, response));
    }

    pub fn set_topic(&mut self, topic: Topic) {
        self.current_topic = Some(topic);
    }

    pub fn set_difficulty(&mut self, level: Difficulty) {
        self.difficulty_level = level;
    }

    pub fn current_topic(&self) -> Option<Topic> {
        self.current_topic
    }

    pub fn difficulty_level(&self) -> Difficulty {
        self.difficulty_level
    }

    pub fn max_history(&self) -> usize {
        self.max_history
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Oldest first
    pub fn interactions(&self) -> impl Iterator<Item = &Interaction> {
        self.history.iter()
    }
}

impl Default for ConversationContext {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_HISTORY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_preserves_order() {
        let mut ctx = ConversationContext::default();
        ctx.record("q1", "r1");
        ctx.record("q2", "r2");

        let queries: Vec<&str> = ctx.interactions().map(|i| i.query.as_str()).collect();
        assert_eq!(queries, vec!["q1", "q2"]);
        assert_eq!(ctx.len(), 2);
    }

    #[test]
    fn test_record_evicts_oldest() {
        let mut ctx = ConversationContext::new(5);
        for i in 1..=6 {
            ctx.record(format!("q{}", i), format!("r{}", i));
        }

        assert_eq!(ctx.len(), 5);
        assert!(ctx.interactions().all(|i| i.query != "q1"));
        assert_eq!(ctx.interactions().next().map(|i| i.query.as_str()), Some("q2"));
        assert_eq!(ctx.interactions().last().map(|i| i.response.as_str()), Some("r6"));
    }

    #[test]
    fn test_zero_bound_is_clamped() {
        let mut ctx = ConversationContext::new(0);
        ctx.record("a", "b");
        ctx.record("c", "d");
        assert_eq!(ctx.max_history(), 1);
        assert_eq!(ctx.len(), 1);
        assert_eq!(ctx.interactions().next(), Some(&Interaction::new("c", "d")));
    }

    #[test]
    fn test_topic_and_difficulty_are_sticky() {
        let mut ctx = ConversationContext::default();
        assert!(ctx.is_empty());
        assert_eq!(ctx.current_topic(), None);
        assert_eq!(ctx.difficulty_level(), Difficulty::Intermediate);

        ctx.set_topic(Topic::History);
        ctx.set_difficulty(Difficulty::Beginner);
        ctx.record("when did rome fall", "476 AD");

        assert_eq!(ctx.current_topic(), Some(Topic::History));
        assert_eq!(ctx.difficulty_level(), Difficulty::Beginner);
    }
}
