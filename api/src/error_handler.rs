use ai_llm_service::{AiLlmError, ConfigError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::review::ReviewError;

/// Public application error type.
#[derive(Debug, Error)]
pub enum AppError {
    // --- Boot / config ---
    #[error(transparent)]
    Config(#[from] ConfigError),

    // --- IO / network / server ---
    #[error("failed to bind listener")]
    Bind(#[source] std::io::Error),

    #[error("server error")]
    Server(#[source] std::io::Error),

    // --- Request / routing ---
    #[error("{0}")]
    Validation(&'static str),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("not found")]
    NotFound,

    // --- Downstream ---
    /// Model call failed. The upstream details stay in the logs.
    #[error("failed to generate AI response")]
    Upstream(#[source] AiLlmError),

    #[error("failed to access review storage")]
    Storage(#[source] review_store::Error),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            // 4xx
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,

            // 5xx
            AppError::Config(_)
            | AppError::Upstream(_)
            | AppError::Storage(_)
            | AppError::Bind(_)
            | AppError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::Bind(_) => "BIND_ERROR",
            AppError::Server(_) => "SERVER_ERROR",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::NotFound => "NOT_FOUND",
            AppError::Upstream(_) => "UPSTREAM_ERROR",
            AppError::Storage(_) => "STORAGE_ERROR",
        }
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            match std::error::Error::source(&self) {
                Some(source) => error!(code = self.error_code(), error = %source, "{}", self),
                None => error!(code = self.error_code(), "{}", self),
            }
        }
        let body = ErrorBody {
            error: self.error_code(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Handy result alias used across handlers.
pub type AppResult<T> = Result<T, AppError>;

/// Convert Axum JSON body rejections to `AppError`.
impl From<axum::extract::rejection::JsonRejection> for AppError {
    fn from(err: axum::extract::rejection::JsonRejection) -> Self {
        AppError::BadRequest(err.body_text())
    }
}

/// Config problems stay config errors; everything else from the model is upstream.
impl From<AiLlmError> for AppError {
    fn from(err: AiLlmError) -> Self {
        match err {
            AiLlmError::Config(c) => AppError::Config(c),
            other => AppError::Upstream(other),
        }
    }
}

impl From<ReviewError> for AppError {
    fn from(err: ReviewError) -> Self {
        match err {
            ReviewError::EmptyReview => AppError::Validation("Review cannot be empty"),
            ReviewError::Model(e) => AppError::from(e),
            ReviewError::Store(e) => AppError::Storage(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn empty_review_maps_to_400_validation() {
        let err = AppError::from(ReviewError::EmptyReview);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        assert_eq!(err.to_string(), "Review cannot be empty");
    }

    #[test]
    fn model_failure_is_a_generic_500() {
        let err = AppError::from(ReviewError::Model(AiLlmError::Timeout(Duration::from_secs(30))));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.error_code(), "UPSTREAM_ERROR");
        assert_eq!(err.to_string(), "failed to generate AI response");
    }

    #[test]
    fn missing_key_is_a_config_500() {
        let err = AppError::from(AiLlmError::Config(ConfigError::MissingVar(
            "OPENROUTER_API_KEY",
        )));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.error_code(), "CONFIG_ERROR");
    }
}
