use std::{future::Future, pin::Pin};

use crate::error_handler::AiLlmError;

/// Boxed future returned by [`ChatModel::generate`].
pub type GenerateFuture<'a> = Pin<Box<dyn Future<Output = Result<String, AiLlmError>> + Send + 'a>>;

/// Provider interface for single-turn chat generation.
///
/// Implement this trait to plug in a different backend or a test double.
/// Callers hold it as `Arc<dyn ChatModel>`.
pub trait ChatModel: Send + Sync {
    /// Sends `prompt` as the user message (preceded by `system` when given)
    /// and returns the generated text.
    fn generate<'a>(&'a self, prompt: &'a str, system: Option<&'a str>) -> GenerateFuture<'a>;

    /// Model identifier, for logs and health output.
    fn model_id(&self) -> &str;
}
