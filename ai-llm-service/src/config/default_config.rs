//! Default chat-completion config loaded from environment variables.
//!
//! # Environment variables
//!
//! - `LLM_PROVIDER`        = `openrouter` (default) or `openai`
//! - `OPENROUTER_API_KEY` / `OPENAI_API_KEY` = bearer secret for the selected provider (mandatory)
//! - `LLM_ENDPOINT`        = API base, defaults per provider
//! - `LLM_MODEL`           = model id, defaults to [`DEFAULT_MODEL`]
//! - `LLM_TIMEOUT_SECS`    = per-call timeout (u64), defaults to 30
//! - `LLM_MAX_TOKENS`      = optional max tokens (u32)
//! - `LLM_APP_REFERER`     = `HTTP-Referer` attribution header
//! - `LLM_APP_TITLE`       = `X-Title` attribution header

use crate::{
    config::{llm_model_config::LlmModelConfig, llm_provider::LlmProvider},
    error_handler::{Result, VarLookup, must_var, opt_u32, opt_u64, opt_var},
};

/// Model used when `LLM_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "mistralai/mistral-7b-instruct";

/// Attribution defaults sent to OpenRouter.
pub const DEFAULT_APP_REFERER: &str = "http://localhost";
pub const DEFAULT_APP_TITLE: &str = "Review Assistant";

/// Builds the chat config from a variable lookup such as
/// [`crate::error_handler::process_env`].
///
/// # Errors
///
/// - [`crate::error_handler::ConfigError::MissingVar`] if the provider's API key is absent
/// - [`crate::error_handler::ConfigError::UnsupportedProvider`] for unknown `LLM_PROVIDER`
/// - [`crate::error_handler::ConfigError::InvalidNumber`] for malformed numeric vars
///
/// Sampling is pinned to `temperature = 0.0`.
pub fn config_chat_from(vars: VarLookup<'_>) -> Result<LlmModelConfig> {
    let provider = match opt_var(vars, "LLM_PROVIDER") {
        Some(raw) => raw.parse::<LlmProvider>()?,
        None => LlmProvider::OpenRouter,
    };

    let api_key = must_var(vars, provider.api_key_var())?;
    let endpoint = opt_var(vars, "LLM_ENDPOINT")
        .unwrap_or_else(|| provider.default_endpoint().to_string());
    let model = opt_var(vars, "LLM_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());
    let timeout_secs =
        opt_u64(vars, "LLM_TIMEOUT_SECS")?.unwrap_or(LlmModelConfig::DEFAULT_TIMEOUT_SECS);
    let max_tokens = opt_u32(vars, "LLM_MAX_TOKENS")?;

    let (app_referer, app_title) = if provider.wants_attribution() {
        (
            Some(
                opt_var(vars, "LLM_APP_REFERER")
                    .unwrap_or_else(|| DEFAULT_APP_REFERER.to_string()),
            ),
            Some(opt_var(vars, "LLM_APP_TITLE").unwrap_or_else(|| DEFAULT_APP_TITLE.to_string())),
        )
    } else {
        (None, None)
    };

    let cfg = LlmModelConfig {
        provider,
        model,
        endpoint,
        api_key: Some(api_key),
        max_tokens,
        temperature: Some(0.0),
        timeout_secs: Some(timeout_secs),
        app_referer,
        app_title,
    };
    cfg.validate()?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handler::{AiLlmError, ConfigError};
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Result<LlmModelConfig> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        config_chat_from(&|k: &str| map.get(k).cloned())
    }

    #[test]
    fn openrouter_defaults() {
        let cfg = load(&[("OPENROUTER_API_KEY", "sk-or-1")]).unwrap();
        assert_eq!(cfg.provider, LlmProvider::OpenRouter);
        assert_eq!(cfg.endpoint, "https://openrouter.ai/api/v1");
        assert_eq!(cfg.model, DEFAULT_MODEL);
        assert_eq!(cfg.api_key.as_deref(), Some("sk-or-1"));
        assert_eq!(cfg.temperature, Some(0.0));
        assert_eq!(cfg.timeout_secs, Some(30));
        assert_eq!(cfg.app_referer.as_deref(), Some(DEFAULT_APP_REFERER));
        assert_eq!(cfg.app_title.as_deref(), Some(DEFAULT_APP_TITLE));
    }

    #[test]
    fn missing_key_is_a_config_error() {
        let err = load(&[]).unwrap_err();
        assert!(matches!(
            err,
            AiLlmError::Config(ConfigError::MissingVar("OPENROUTER_API_KEY"))
        ));
    }

    #[test]
    fn openai_uses_its_own_key_and_no_attribution() {
        let cfg = load(&[
            ("LLM_PROVIDER", "openai"),
            ("OPENAI_API_KEY", "sk-1"),
            ("LLM_MODEL", "gpt-4o-mini"),
            ("LLM_TIMEOUT_SECS", "5"),
        ])
        .unwrap();
        assert_eq!(cfg.endpoint, "https://api.openai.com/v1");
        assert_eq!(cfg.model, "gpt-4o-mini");
        assert_eq!(cfg.timeout_secs, Some(5));
        assert!(cfg.app_referer.is_none());
        assert!(cfg.app_title.is_none());
    }

    #[test]
    fn bad_endpoint_fails_validation() {
        let err = load(&[
            ("OPENROUTER_API_KEY", "k"),
            ("LLM_ENDPOINT", "ftp://example.com"),
        ])
        .unwrap_err();
        assert!(matches!(
            err,
            AiLlmError::Config(ConfigError::InvalidFormat { var: "LLM_ENDPOINT", .. })
        ));
    }
}
