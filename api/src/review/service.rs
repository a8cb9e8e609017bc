use std::sync::Arc;

use ai_llm_service::{AiLlmError, ChatModel};
use review_store::{NewReview, ReviewDigest, ReviewStore};
use thiserror::Error;
use tracing::{debug, info, instrument};

use crate::review::{
    json_fragment::AdminInsight,
    prompts::{SYSTEM_PROMPT, admin_insight_prompt, user_reply_prompt},
};

/// Errors produced while handling a submission or listing.
#[derive(Debug, Error)]
pub enum ReviewError {
    /// Review text is empty after trimming.
    #[error("Review cannot be empty")]
    EmptyReview,

    /// One of the model calls failed.
    #[error("model call failed: {0}")]
    Model(#[from] AiLlmError),

    /// Reading or writing the store failed.
    #[error("storage failure: {0}")]
    Store(#[from] review_store::Error),
}

/// Submission as received from the client.
#[derive(Debug, Clone)]
pub struct Submission {
    pub rating: i64,
    pub review: String,
}

/// Outcome returned to the submitter; carries no admin fields.
#[derive(Debug, Clone)]
pub struct SubmissionReceipt {
    pub id: i64,
    pub ai_response: String,
}

/// Orchestrates one submission: validate, two model calls, extract, persist.
#[derive(Clone)]
pub struct ReviewService {
    model: Arc<dyn ChatModel>,
    store: ReviewStore,
}

impl ReviewService {
    pub fn new(model: Arc<dyn ChatModel>, store: ReviewStore) -> Self {
        Self { model, store }
    }

    pub fn model_id(&self) -> &str {
        self.model.model_id()
    }

    pub fn store(&self) -> &ReviewStore {
        &self.store
    }

    /// Handles one submission.
    ///
    /// The two model calls run one after the other; the row is written only
    /// after both have returned, so any failure leaves the store untouched.
    /// A missing or malformed admin JSON does not fail the submission.
    #[instrument(name = "review_submit", skip(self, submission), fields(rating = submission.rating, review_len = submission.review.len()))]
    pub async fn submit(&self, submission: Submission) -> Result<SubmissionReceipt, ReviewError> {
        if submission.review.trim().is_empty() {
            debug!("rejecting empty review");
            return Err(ReviewError::EmptyReview);
        }

        let user_prompt = user_reply_prompt(submission.rating, &submission.review);
        let admin_prompt = admin_insight_prompt(&submission.review);

        let ai_response = self
            .model
            .generate(&user_prompt, Some(SYSTEM_PROMPT))
            .await?;
        let admin_output = self
            .model
            .generate(&admin_prompt, Some(SYSTEM_PROMPT))
            .await?;

        let insight = AdminInsight::from_model_output(&admin_output);

        let id = self
            .store
            .reviews()
            .insert(&NewReview {
                rating: submission.rating,
                review: submission.review,
                ai_response: ai_response.clone(),
                ai_summary: insight.summary,
                ai_action: insight.action,
            })
            .await?;

        info!(id, "review stored");
        Ok(SubmissionReceipt { id, ai_response })
    }

    /// Every stored review, admin projection, store order.
    pub async fn list_for_admin(&self) -> Result<Vec<ReviewDigest>, ReviewError> {
        Ok(self.store.reviews().list_digests().await?)
    }
}
