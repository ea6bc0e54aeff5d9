use serde::{Deserialize, Serialize};

// ===== REQUEST MODELS =====

#[derive(Debug, Deserialize, Default)]
pub struct GenerateRequest {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct QueryRequest {
    #[serde(default)]
    pub query: String,
    /// Sent by the chat UI's "regenerate" button; every query is answered fresh anyway
    #[serde(default)]
    pub regenerate: bool,
}

// ===== RESPONSE MODELS =====

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub response: String,
    pub timestamp: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QueryResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl QueryResponse {
    pub fn ok(response: String) -> Self {
        Self { success: true, response: Some(response), error: None }
    }

    pub fn failed(error: String) -> Self {
        Self { success: false, response: None, error: Some(error) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_fields_default_to_empty() {
        let req: QueryRequest = serde_json::from_value(json!({})).unwrap();
        assert_eq!(req.query, "");
        assert!(!req.regenerate);

        let req: GenerateRequest = serde_json::from_value(json!({ "other": 1 })).unwrap();
        assert_eq!(req.message, "");
    }

    #[test]
    fn test_query_response_shape() {
        assert_eq!(
            serde_json::to_value(QueryResponse::ok("hi".into())).unwrap(),
            json!({ "success": true, "response": "hi" })
        );
        assert_eq!(
            serde_json::to_value(QueryResponse::failed("boom".into())).unwrap(),
            json!({ "success": false, "error": "boom" })
        );
    }
}
