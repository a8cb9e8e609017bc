//! Review submission pipeline: prompts, model calls, admin JSON extraction, persistence.

pub mod json_fragment;
pub mod prompts;
pub mod service;

pub use json_fragment::{AdminInsight, ExtractError, extract_json_object};
pub use service::{ReviewError, ReviewService, Submission, SubmissionReceipt};
