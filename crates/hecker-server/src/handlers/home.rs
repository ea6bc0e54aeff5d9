use crate::state::AppState;
use crate::utils::{display_time, ApiError};
use axum::{extract::State, response::Html};
use handlebars::Handlebars;
use serde::Serialize;
use std::sync::Arc;

pub const INDEX_TEMPLATE: &str = "index";
pub const WELCOME_MESSAGE: &str = "Welcome to Hecker! What would you like to learn today?";

#[derive(Serialize)]
struct IndexContext<'a> {
    now: String,
    initial_question: &'a str,
}

/// Register the landing page template (compiled into the binary)
pub fn register_templates() -> Result<Handlebars<'static>, ApiError> {
    let mut templates = Handlebars::new();
    templates
        .register_template_string(INDEX_TEMPLATE, include_str!("../../templates/index.html"))
        .map_err(|e| ApiError::ConfigError(format!("Invalid landing template: {}", e)))?;
    Ok(templates)
}

pub async fn index_handler(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    let context = IndexContext {
        now: display_time(),
        initial_question: WELCOME_MESSAGE,
    };

    let page = state
        .templates
        .render(INDEX_TEMPLATE, &context)
        .map_err(|e| ApiError::InternalError(format!("Failed to render landing page: {}", e)))?;

    Ok(Html(page))
}
