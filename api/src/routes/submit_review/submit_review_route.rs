use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::{info, instrument};

use crate::{
    app::app_state::AppState,
    error_handler::AppResult,
    review::Submission,
    routes::submit_review::{
        submit_review_request::SubmitReviewRequest,
        submit_review_response::{SUBMITTED_MESSAGE, SubmitReviewResponse},
    },
};

/// Handler: POST /submit-review
///
/// Validates the review, asks the model for a reply and an admin summary,
/// stores the row and returns the reply.
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:8000/submit-review \
///   -H 'content-type: application/json' \
///   -d '{"rating":5,"review":"Great service!"}'
/// ```
#[instrument(name = "submit_review_route", skip(state, payload))]
pub async fn submit_review(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SubmitReviewRequest>, JsonRejection>,
) -> AppResult<Json<SubmitReviewResponse>> {
    let Json(body) = payload?;

    let receipt = state
        .reviews
        .submit(Submission {
            rating: body.rating,
            review: body.review,
        })
        .await?;

    info!(id = receipt.id, "review submission accepted");

    Ok(Json(SubmitReviewResponse {
        message: SUBMITTED_MESSAGE.to_string(),
        ai_response: receipt.ai_response,
    }))
}
