use std::{path::PathBuf, sync::Arc};

use ai_llm_service::{
    ChatModel, LlmModelConfig,
    config::default_config::config_chat_from,
    error_handler::{VarLookup, opt_var, process_env},
};
use review_store::ReviewStore;

use crate::{error_handler::AppResult, review::ReviewService};

/// Default listen address when `API_ADDRESS` is unset.
pub const DEFAULT_API_ADDRESS: &str = "127.0.0.1:8000";

/// Process-wide settings, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Listen address, e.g. "127.0.0.1:8000".
    pub api_address: String,
    /// SQLite file holding the `reviews` table.
    pub database_path: PathBuf,
    /// Chat model used for both prompts.
    pub llm: LlmModelConfig,
}

impl AppConfig {
    /// Load settings from the process environment.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(&process_env)
    }

    /// Load settings from an arbitrary variable source.
    ///
    /// Fails when the API key for the selected provider is missing.
    pub fn from_lookup(vars: VarLookup<'_>) -> AppResult<Self> {
        let llm = config_chat_from(vars)?;
        Ok(Self {
            api_address: opt_var(vars, "API_ADDRESS")
                .unwrap_or_else(|| DEFAULT_API_ADDRESS.to_string()),
            database_path: opt_var(vars, "REVIEWS_DB_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(ReviewStore::default_path),
            llm,
        })
    }
}

/// Shared state for all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// Submission pipeline (model + store).
    pub reviews: ReviewService,
    /// Provider name reported by `/health`.
    pub provider: String,
}

impl AppState {
    pub fn new(model: Arc<dyn ChatModel>, store: ReviewStore, provider: impl Into<String>) -> Self {
        Self {
            reviews: ReviewService::new(model, store),
            provider: provider.into(),
        }
    }
}
