use std::sync::Arc;

use axum::{Json, extract::State};
use tracing::{debug, instrument};

use crate::{
    app::app_state::AppState, error_handler::AppResult,
    routes::admin_reviews::admin_review_response::AdminReviewItem,
};

/// Handler: GET /admin/reviews
///
/// Returns every stored review as a plain JSON array, in store order.
#[instrument(name = "admin_reviews_route", skip(state))]
pub async fn admin_reviews(
    State(state): State<Arc<AppState>>,
) -> AppResult<Json<Vec<AdminReviewItem>>> {
    let digests = state.reviews.list_for_admin().await?;
    debug!(count = digests.len(), "listing reviews for admin");
    Ok(Json(digests.into_iter().map(AdminReviewItem::from).collect()))
}
