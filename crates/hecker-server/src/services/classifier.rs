/// Query classifier
/// Maps a learner's query to a coarse subject and a complexity level
/// by substring lookup over ordered keyword tables.

use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Mathematics,
    Science,
    Language,
    History,
    Technology,
}

impl Topic {
    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::Mathematics => "mathematics",
            Topic::Science => "science",
            Topic::Language => "language",
            Topic::History => "history",
            Topic::Technology => "technology",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Earlier rows win when a query hits keywords of several topics.
pub const TOPIC_KEYWORDS: &[(Topic, &[&str])] = &[
    (Topic::Mathematics, &["math", "algebra", "geometry", "calculus", "trigonometry"]),
    (Topic::Science, &["physics", "chemistry", "biology", "science"]),
    (Topic::Language, &["english", "grammar", "writing", "literature"]),
    (Topic::History, &["history", "historical", "civilization", "era"]),
    (Topic::Technology, &["computer", "programming", "tech", "coding"]),
];

/// Advanced is checked first, so "explain how to prove X" is advanced.
pub const DIFFICULTY_KEYWORDS: &[(Difficulty, &[&str])] = &[
    (Difficulty::Advanced, &["prove", "derive", "complex", "advanced", "theoretical"]),
    (Difficulty::Beginner, &["explain", "what is", "basic", "simple", "introduction"]),
];

fn first_match<T: Copy>(table: &[(T, &[&str])], query: &str) -> Option<T> {
    let query_lower = query.to_lowercase();

    table
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| query_lower.contains(k)))
        .map(|(label, _)| *label)
}

pub fn classify_topic(query: &str) -> Option<Topic> {
    let topic = first_match(TOPIC_KEYWORDS, query);
    debug!("Topic classification: {:?}", topic);
    topic
}

/// `None` means the query carries no complexity hint; callers keep
/// whatever level they had.
pub fn classify_difficulty(query: &str) -> Option<Difficulty> {
    let level = first_match(DIFFICULTY_KEYWORDS, query);
    debug!("Difficulty classification: {:?}", level);
    level
}
