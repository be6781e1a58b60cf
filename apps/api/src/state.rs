use std::sync::Arc;

use tokio::sync::RwLock;

use crate::filtering::engine::FilterEngine;
use crate::llm_client::CompletionModel;
use crate::suggestion::prompts::PromptVariant;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Single filter engine; one logical owner, so no per-client sessions.
    pub engine: Arc<RwLock<FilterEngine>>,
    /// Pluggable completion backend. Default: Gemini. Swap via LLM_PROVIDER.
    pub model: Arc<dyn CompletionModel>,
    pub default_variant: PromptVariant,
}

impl AppState {
    pub fn new(
        engine: FilterEngine,
        model: Arc<dyn CompletionModel>,
        default_variant: PromptVariant,
    ) -> Self {
        Self {
            engine: Arc::new(RwLock::new(engine)),
            model,
            default_variant,
        }
    }
}
