use crate::services::classifier::{Difficulty, Topic};

pub const GENERAL_TOPIC: &str = "General";

/// Build the context-aware instruction block sent to the model.
/// The query is appended verbatim as the last line.
pub fn compose(
    query: &str,
    topic: Option<Topic>,
    difficulty: Difficulty,
    history_len: usize,
) -> String {
    let topic_label = topic.map(|t| t.as_str()).unwrap_or(GENERAL_TOPIC);

    format!(
        "Context:\n\
         - Topic: {topic_label}\n\
         - Difficulty Level: {difficulty}\n\
         - Conversation History: {history_len} previous interactions\n\
         \n\
         Guidelines:\n\
         1. Provide a clear, concise response\n\
         2. Adapt the explanation to the {difficulty} level\n\
         3. Reference earlier parts of the conversation if relevant\n\
         4. Use engaging and accessible language\n\
         5. Include practical examples or real-world applications\n\
         \n\
         Query: {query}"
    )
}
