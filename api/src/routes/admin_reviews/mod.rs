pub mod admin_review_response;
pub mod admin_reviews_route;
