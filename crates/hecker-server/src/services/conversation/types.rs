use serde::Serialize;

/// One completed exchange: what the learner asked and what they got back
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interaction {
    pub query: String,
    pub response: String,
}

impl Interaction {
    pub fn new(query: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            response: response.into(),
        }
    }
}
