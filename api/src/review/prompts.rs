//! Prompt texts sent to the chat model for one submission.

/// System message sent ahead of both prompts.
pub const SYSTEM_PROMPT: &str = "You are a helpful assistant. Follow instructions strictly.";

/// Prompt asking for a polite reply addressed to the reviewer.
///
/// The review text is quoted verbatim (no trimming).
pub fn user_reply_prompt(rating: i64, review: &str) -> String {
    format!(
        "User gave {rating} stars.\n\
         \n\
         Review:\n\
         {review}\n\
         \n\
         Write a polite and friendly reply to the user.\n"
    )
}

/// Prompt asking for a bare JSON object with `summary` and `action`.
pub fn admin_insight_prompt(review: &str) -> String {
    format!(
        "You are a JSON API.\n\
         \n\
         Return ONLY valid JSON.\n\
         No markdown.\n\
         No explanation text.\n\
         \n\
         Review:\n\
         {review}\n\
         \n\
         Return EXACTLY this format:\n\
         \n\
         {{\n  \"summary\": \"one sentence summary of the review\",\n  \"action\": \"recommended next action for admin\"\n}}\n"
    )
}
