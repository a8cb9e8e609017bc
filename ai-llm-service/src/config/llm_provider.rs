use std::{fmt, str::FromStr};

use crate::error_handler::ConfigError;

/// Represents the OpenAI-compatible provider used for chat completions.
///
/// Both providers speak the same `/chat/completions` wire format; they differ
/// in default endpoint, the env var holding the key and the attribution
/// headers OpenRouter expects.
///
/// # Examples
///
/// ```
/// use ai_llm_service::config::llm_provider::LlmProvider;
///
/// let provider: LlmProvider = "openrouter".parse().unwrap();
/// assert_eq!(provider, LlmProvider::OpenRouter);
/// assert_eq!(provider.api_key_var(), "OPENROUTER_API_KEY");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LlmProvider {
    /// OpenRouter gateway (`https://openrouter.ai/api/v1`).
    OpenRouter,
    /// OpenAI's API.
    OpenAI,
}

impl LlmProvider {
    /// Default API base for this provider (without the `/chat/completions` suffix).
    pub fn default_endpoint(self) -> &'static str {
        match self {
            LlmProvider::OpenRouter => "https://openrouter.ai/api/v1",
            LlmProvider::OpenAI => "https://api.openai.com/v1",
        }
    }

    /// Name of the env var that holds the bearer secret.
    pub fn api_key_var(self) -> &'static str {
        match self {
            LlmProvider::OpenRouter => "OPENROUTER_API_KEY",
            LlmProvider::OpenAI => "OPENAI_API_KEY",
        }
    }

    /// Whether `HTTP-Referer` / `X-Title` should be sent.
    pub fn wants_attribution(self) -> bool {
        matches!(self, LlmProvider::OpenRouter)
    }
}

impl FromStr for LlmProvider {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "openrouter" => Ok(LlmProvider::OpenRouter),
            "openai" | "chatgpt" => Ok(LlmProvider::OpenAI),
            other => Err(ConfigError::UnsupportedProvider(other.to_string())),
        }
    }
}

impl fmt::Display for LlmProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LlmProvider::OpenRouter => f.write_str("openrouter"),
            LlmProvider::OpenAI => f.write_str("openai"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_providers_case_insensitively() {
        assert_eq!(
            " OpenRouter ".parse::<LlmProvider>().unwrap(),
            LlmProvider::OpenRouter
        );
        assert_eq!("OPENAI".parse::<LlmProvider>().unwrap(), LlmProvider::OpenAI);
    }

    #[test]
    fn rejects_unknown_provider() {
        let err = "ollama".parse::<LlmProvider>().unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedProvider(ref p) if p == "ollama"));
    }

    #[test]
    fn only_openrouter_wants_attribution() {
        assert!(LlmProvider::OpenRouter.wants_attribution());
        assert!(!LlmProvider::OpenAI.wants_attribution());
    }
}
