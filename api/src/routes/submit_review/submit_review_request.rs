use serde::Deserialize;

/// Request body for `POST /submit-review`.
#[derive(Debug, Deserialize)]
pub struct SubmitReviewRequest {
    /// Star rating; passed through without range checks.
    pub rating: i64,
    /// Free-text review; must contain something other than whitespace.
    pub review: String,
}
