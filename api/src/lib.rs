//! HTTP surface of the review assistant.
//!
//! Routes:
//! - `POST /submit-review`: store a review and return the AI reply
//! - `GET /admin/reviews`: list stored reviews with summary and action
//! - `GET /health`: store liveness and configured model

use std::sync::Arc;

mod app;
mod error_handler;
pub mod review;
mod routes;

use ai_llm_service::{ChatModel, OpenAiService};
use axum::{
    Router,
    routing::{get, post},
};
use review_store::ReviewStore;
use tokio::signal;
use tracing::{info, warn};

pub use crate::{
    app::app_state::{AppConfig, AppState, DEFAULT_API_ADDRESS},
    error_handler::{AppError, AppResult},
};
use crate::routes::{
    admin_reviews::admin_reviews_route::admin_reviews, health::health_route::health, not_found,
    submit_review::submit_review_route::submit_review,
};

/// Builds the application router over shared state.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/submit-review", post(submit_review))
        .route("/admin/reviews", get(admin_reviews))
        .route("/health", get(health))
        .fallback(not_found)
        .with_state(state)
}

/// Loads configuration, opens the store, builds the model client and serves
/// until Ctrl+C.
pub async fn start() -> Result<(), AppError> {
    let cfg = AppConfig::from_env()?;

    let store = ReviewStore::open(&cfg.database_path)
        .await
        .map_err(AppError::Storage)?;

    let provider = cfg.llm.provider.to_string();
    let model: Arc<dyn ChatModel> = Arc::new(OpenAiService::new(cfg.llm.clone())?);

    let state = Arc::new(AppState::new(model, store, provider));
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&cfg.api_address)
        .await
        .map_err(AppError::Bind)?;

    info!(
        address = %cfg.api_address,
        database = %cfg.database_path.display(),
        model = %cfg.llm.model,
        provider = %cfg.llm.provider,
        "review api listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    info!("review api stopped");
    Ok(())
}

/// Resolves when Ctrl+C is pressed.
async fn shutdown_signal() {
    if let Err(err) = signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
