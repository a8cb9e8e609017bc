pub mod admin_reviews;
pub mod health;
pub mod submit_review;

use crate::error_handler::AppError;

/// Fallback for unknown paths.
pub async fn not_found() -> AppError {
    AppError::NotFound
}
