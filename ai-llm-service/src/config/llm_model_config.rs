use crate::{
    config::llm_provider::LlmProvider,
    error_handler::{ConfigError, Result, validate_http_endpoint, validate_range_f32},
};

/// Configuration for a chat-completion model invocation.
///
/// # Fields
///
/// - `provider`: Which OpenAI-compatible backend to call.
/// - `model`: The model identifier (e.g., `"mistralai/mistral-7b-instruct"`).
/// - `endpoint`: API base URL; `/chat/completions` is appended by the client.
/// - `api_key`: Bearer secret. `None` is rejected by the client constructor.
/// - `max_tokens`: Maximum number of tokens to generate (if supported).
/// - `temperature`: Controls randomness (0.0 = deterministic).
/// - `timeout_secs`: Request timeout in seconds.
/// - `app_referer` / `app_title`: attribution headers sent to OpenRouter.
///
/// # Examples
///
/// ```
/// use ai_llm_service::config::{llm_model_config::LlmModelConfig, llm_provider::LlmProvider};
///
/// let cfg = LlmModelConfig {
///     provider: LlmProvider::OpenRouter,
///     model: "mistralai/mistral-7b-instruct".to_string(),
///     endpoint: "https://openrouter.ai/api/v1".to_string(),
///     api_key: Some("sk-or-...".to_string()),
///     max_tokens: None,
///     temperature: Some(0.0),
///     timeout_secs: Some(30),
///     app_referer: Some("http://localhost".to_string()),
///     app_title: Some("Review Assistant".to_string()),
/// };
/// assert!(cfg.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LlmModelConfig {
    /// The LLM provider/backend.
    pub provider: LlmProvider,

    /// Model identifier string.
    pub model: String,

    /// API base URL.
    pub endpoint: String,

    /// API key for bearer authentication.
    pub api_key: Option<String>,

    /// Maximum number of tokens to generate.
    pub max_tokens: Option<u32>,

    /// Sampling temperature.
    pub temperature: Option<f32>,

    /// Optional request timeout (in seconds).
    pub timeout_secs: Option<u64>,

    /// Value for the `HTTP-Referer` header.
    pub app_referer: Option<String>,

    /// Value for the `X-Title` header.
    pub app_title: Option<String>,
}

impl LlmModelConfig {
    /// Timeout used when `timeout_secs` is not set.
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

    /// Checks model, endpoint and sampling parameters.
    ///
    /// The API key is checked by the client constructor, not here, so a config
    /// can be validated before secrets are wired in.
    pub fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            return Err(ConfigError::EmptyModel.into());
        }
        validate_http_endpoint("LLM_ENDPOINT", self.endpoint.trim())?;
        if let Some(t) = self.temperature {
            validate_range_f32("temperature", t, 0.0, 2.0)?;
        }
        Ok(())
    }

    /// Effective timeout in seconds.
    pub fn timeout_secs_or_default(&self) -> u64 {
        self.timeout_secs.unwrap_or(Self::DEFAULT_TIMEOUT_SECS)
    }
}
