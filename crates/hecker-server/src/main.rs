use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

use hecker_server::config::Settings;
use hecker_server::handlers::home::register_templates;
use hecker_server::router::build_router;
use hecker_server::services::{
    keep_alive, FailurePolicy, GeminiService, QueryOrchestrator, ResponseFormatter,
};
use hecker_server::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,hecker_server=debug".to_string()),
        )
        .with_target(true)
        .with_thread_ids(true)
        .json()
        .init();

    info!("🚀 Starting Hecker server...");

    // Load configuration
    let settings = Settings::load()?;
    info!("✅ Configuration loaded (model: {})", settings.gemini.model);

    if settings.gemini.api_key.trim().is_empty() {
        tracing::warn!("GEMINI_API_KEY is not set, model calls will fail");
    }

    // Initialize services
    let gemini_service = Arc::new(GeminiService::new(settings.gemini.clone()));

    let orchestrator = Arc::new(QueryOrchestrator::new(
        gemini_service.clone(),
        ResponseFormatter::new()?,
        settings.conversation.max_history,
        FailurePolicy::from_config(settings.conversation.apologize_on_failure),
    ));

    let templates = register_templates()?;

    // Keep-alive runs detached for the life of the process
    if keep_alive::spawn(&settings.keep_alive).is_some() {
        info!("✅ Keep-alive task started");
    }

    // Server address
    let addr = SocketAddr::from((
        settings.server.host.parse::<std::net::IpAddr>()?,
        settings.server.port,
    ));

    let state = Arc::new(AppState::new(
        settings,
        orchestrator,
        gemini_service,
        templates,
    ));

    // Build router
    let app = build_router(state);

    info!("🎯 Server listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
