use std::sync::Arc;
use handlebars::Handlebars;

use crate::config::Settings;
use crate::services::{ChatProvider, QueryOrchestrator};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub orchestrator: Arc<QueryOrchestrator>,
    pub chat_provider: Arc<dyn ChatProvider>,
    pub templates: Arc<Handlebars<'static>>,
}

impl AppState {
    pub fn new(
        settings: Settings,
        orchestrator: Arc<QueryOrchestrator>,
        chat_provider: Arc<dyn ChatProvider>,
        templates: Handlebars<'static>,
    ) -> Self {
        Self {
            settings,
            orchestrator,
            chat_provider,
            templates: Arc::new(templates),
        }
    }
}
