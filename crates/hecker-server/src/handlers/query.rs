use crate::models::chat::{QueryRequest, QueryResponse};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use tracing::{debug, error, info};

/// `POST /api/query` - context-aware, formatted answer
///
/// Any failure, including an unreadable body, is reported as
/// `500 {success: false, error}`.
pub async fn query_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<QueryRequest>, JsonRejection>,
) -> (StatusCode, Json<QueryResponse>) {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            error!("Query processing error: {}", rejection.body_text());
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(QueryResponse::failed(rejection.body_text())),
            );
        }
    };

    info!("Query received: query_len={}", request.query.len());
    debug!("Regenerate flag: {}", request.regenerate);

    match state.orchestrator.handle(&request.query).await {
        Ok(response) => (StatusCode::OK, Json(QueryResponse::ok(response))),
        Err(e) => {
            error!("Query processing error: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(QueryResponse::failed(e.to_string())),
            )
        }
    }
}
