use serde::Serialize;

/// Confirmation text returned on every successful submission.
pub const SUBMITTED_MESSAGE: &str = "Review submitted successfully";

/// Response body for `POST /submit-review`.
#[derive(Debug, Serialize)]
pub struct SubmitReviewResponse {
    /// Human-readable confirmation.
    pub message: String,
    /// Model-written reply for the reviewer.
    pub ai_response: String,
}
