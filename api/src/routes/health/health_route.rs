use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};
use tracing::warn;

use crate::{app::app_state::AppState, routes::health::health_response::HealthStatus};

/// Handler: GET /health
///
/// Pings the store; the model is not called.
pub async fn health(State(state): State<Arc<AppState>>) -> (StatusCode, Json<HealthStatus>) {
    let database_ok = match state.reviews.store().ping().await {
        Ok(()) => true,
        Err(err) => {
            warn!(error = %err, "health: review store ping failed");
            false
        }
    };

    let body = HealthStatus {
        status: if database_ok { "ok" } else { "degraded" },
        database: if database_ok { "ok" } else { "unavailable" },
        model: state.reviews.model_id().to_string(),
        provider: state.provider.clone(),
    };

    let status = if database_ok {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status, Json(body))
}
