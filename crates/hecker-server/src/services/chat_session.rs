use parking_lot::Mutex;
use tracing::debug;

use crate::services::gemini::Content;

pub const PERSONA_DESCRIPTION: &str = r#"You are Hecker, an advanced AI learning companion designed to provide personalized, context-aware educational support.
Your goal is to help students learn effectively by:
1. Breaking down complex topics into digestible explanations
2. Providing adaptive learning strategies
3. Generating targeted study materials
4. Offering motivational and constructive feedback

Key Characteristics:
- Patient and encouraging
- Adaptable to different learning styles
- Capable of explaining topics at various complexity levels
- Focused on student's individual learning journey"#;

pub const PERSONA_ACKNOWLEDGEMENT: &str =
    "I understand. I will act as Hecker, an advanced AI learning companion with the described characteristics.";

/// Chat transcript seeded with the persona exchange
///
/// Only completed exchanges are appended, so a failed call leaves the
/// transcript as it was.
pub struct ChatSession {
    seed: Vec<Content>,
    turns: Mutex<Vec<Content>>,
    max_exchanges: usize,
}

impl ChatSession {
    pub fn new(max_exchanges: usize) -> Self {
        Self {
            seed: vec![
                Content::user(PERSONA_DESCRIPTION),
                Content::model(PERSONA_ACKNOWLEDGEMENT),
            ],
            turns: Mutex::new(Vec::new()),
            max_exchanges: max_exchanges.max(1),
        }
    }

    /// Full request contents for the next message: seed, past turns, new message
    pub fn contents_for(&self, message: &str) -> Vec<Content> {
        let turns = self.turns.lock();
        let mut contents = Vec::with_capacity(self.seed.len() + turns.len() + 1);
        contents.extend(self.seed.iter().cloned());
        contents.extend(turns.iter().cloned());
        contents.push(Content::user(message));
        contents
    }

    pub fn push_exchange(&self, message: &str, reply: &str) {
        let mut turns = self.turns.lock();
        turns.push(Content::user(message));
        turns.push(Content::model(reply));

        let max_turns = self.max_exchanges * 2;
        if turns.len() > max_turns {
            let excess = turns.len() - max_turns;
            turns.drain(..excess);
            debug!("Chat session trimmed {} old turns", excess);
        }
    }

    pub fn exchange_count(&self) -> usize {
        self.turns.lock().len() / 2
    }
}
