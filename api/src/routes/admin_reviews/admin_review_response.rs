use review_store::ReviewDigest;
use serde::Serialize;

/// One entry of `GET /admin/reviews`. Never carries `id` or `ai_response`.
#[derive(Debug, Serialize)]
pub struct AdminReviewItem {
    pub rating: i64,
    pub review: String,
    pub summary: String,
    pub action: String,
}

impl From<ReviewDigest> for AdminReviewItem {
    fn from(d: ReviewDigest) -> Self {
        Self {
            rating: d.rating,
            review: d.review,
            summary: d.ai_summary,
            action: d.ai_action,
        }
    }
}
