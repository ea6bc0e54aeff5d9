use crate::models::chat::{GenerateRequest, GenerateResponse};
use crate::state::AppState;
use crate::utils::display_time;
use axum::{extract::State, Json};
use std::sync::Arc;
use tracing::{info, warn};

/// `POST /generate_response` - raw persona-chat reply, always HTTP 200
pub async fn generate_response_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<GenerateRequest>,
) -> Json<GenerateResponse> {
    info!("Chat message received: message_len={}", request.message.len());

    let response = match state.chat_provider.send_message(&request.message).await {
        Ok(text) => text,
        Err(e) => {
            warn!("Chat generation failed: {}", e);
            format!("I'm experiencing some difficulties. Error: {}", e)
        }
    };

    Json(GenerateResponse {
        response,
        timestamp: display_time(),
    })
}
