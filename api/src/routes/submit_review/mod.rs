pub mod submit_review_request;
pub mod submit_review_response;
pub mod submit_review_route;
