//! OpenAI-compatible chat-completion service (OpenRouter, OpenAI).
//!
//! Minimal, non-streaming client around the `/chat/completions` REST call.
//! The URL is derived from `LlmModelConfig::endpoint`:
//! - POST {endpoint}/chat/completions
//!
//! Constructor validation:
//! - `cfg.api_key` must be present
//! - `cfg.endpoint` must start with http:// or https://
//!
//! Errors are normalized via unified error types in `error_handler`.

use std::time::{Duration, Instant};

use reqwest::header;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::{
    config::{llm_model_config::LlmModelConfig, llm_provider::LlmProvider},
    error_handler::{
        AiLlmError, HttpError, Provider, ProviderError, ProviderErrorKind, make_snippet,
    },
    services::chat_model::{ChatModel, GenerateFuture},
};

/// Thin client for an OpenAI-compatible chat API.
///
/// Constructed from a complete [`LlmModelConfig`]. Internally keeps a
/// preconfigured `reqwest::Client` (with timeout and default headers).
#[derive(Debug)]
pub struct OpenAiService {
    client: reqwest::Client,
    cfg: LlmModelConfig,
    url_chat: String,
    timeout: Duration,
}

impl OpenAiService {
    /// Creates a new [`OpenAiService`] from the given config.
    ///
    /// Validates the API key and endpoint scheme. Builds an HTTP client with
    /// default headers and the configured timeout.
    ///
    /// # Errors
    /// - [`AiLlmError::Provider`] with `MissingApiKey` if `cfg.api_key` is `None` or blank
    /// - [`AiLlmError::Provider`] with `InvalidEndpoint` if `cfg.endpoint` is invalid
    /// - [`AiLlmError::HttpTransport`] if the HTTP client cannot be built
    pub fn new(cfg: LlmModelConfig) -> Result<Self, AiLlmError> {
        let provider = provider_tag(cfg.provider);

        // 1) API key must be present.
        let api_key = cfg
            .api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| ProviderError::new(provider, ProviderErrorKind::MissingApiKey))?;

        // 2) Endpoint must use http/https.
        let endpoint = cfg.endpoint.trim();
        if endpoint.is_empty()
            || !(endpoint.starts_with("http://") || endpoint.starts_with("https://"))
        {
            return Err(ProviderError::new(
                provider,
                ProviderErrorKind::InvalidEndpoint(cfg.endpoint.clone()),
            )
            .into());
        }

        // 3) HTTP client: timeout + default headers.
        let timeout = Duration::from_secs(cfg.timeout_secs_or_default());
        let headers = default_headers(&cfg, &api_key)?;

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()?;

        let base = endpoint.trim_end_matches('/');
        let url_chat = format!("{base}/chat/completions");

        info!(
            provider = %cfg.provider,
            model = %cfg.model,
            endpoint = %cfg.endpoint,
            timeout_secs = timeout.as_secs(),
            "OpenAiService initialized"
        );

        Ok(Self {
            client,
            cfg,
            url_chat,
            timeout,
        })
    }

    /// Performs a **non-streaming** chat completion request.
    ///
    /// `messages` array:
    /// - optional system message (if provided)
    /// - user message with `prompt`.
    ///
    /// Mapped options from config: `model`, `temperature`, `max_tokens`.
    ///
    /// # Errors
    /// - [`AiLlmError::Provider`] with `HttpStatus` for non-2xx responses
    /// - [`AiLlmError::Timeout`] if the call exceeds the configured timeout
    /// - [`AiLlmError::HttpTransport`] for other client/network failures
    /// - [`AiLlmError::Provider`] with `Decode` if the JSON cannot be parsed
    /// - [`AiLlmError::Provider`] with `EmptyChoices` if no choice carries content
    pub async fn generate(&self, prompt: &str, system: Option<&str>) -> Result<String, AiLlmError> {
        let started = Instant::now();
        let provider = provider_tag(self.cfg.provider);
        let body = ChatCompletionRequest::from_cfg(&self.cfg, prompt, system);

        debug!(
            model = %self.cfg.model,
            prompt_len = prompt.len(),
            has_system = system.is_some(),
            "POST {}", self.url_chat
        );

        let resp = self
            .client
            .post(&self.url_chat)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.transport_error(e, started))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let url = self.url_chat.clone();
            let text = resp.text().await.unwrap_or_default();
            let snippet = make_snippet(&text);

            error!(
                %status,
                %url,
                %snippet,
                model = %self.cfg.model,
                latency_ms = started.elapsed().as_millis(),
                "chat completion returned non-success status"
            );

            return Err(ProviderError::new(
                provider,
                ProviderErrorKind::HttpStatus(HttpError {
                    status,
                    url,
                    snippet,
                }),
            )
            .into());
        }

        let out: ChatCompletionResponse = match resp.json().await {
            Ok(v) => v,
            Err(e) if e.is_timeout() => return Err(self.transport_error(e, started)),
            Err(e) => {
                error!(
                    error = %e,
                    model = %self.cfg.model,
                    latency_ms = started.elapsed().as_millis(),
                    "failed to decode chat completion response"
                );
                return Err(ProviderError::new(
                    provider,
                    ProviderErrorKind::Decode(format!(
                        "serde error: {e}; expected `choices[0].message.content`"
                    )),
                )
                .into());
            }
        };

        let content = out
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| ProviderError::new(provider, ProviderErrorKind::EmptyChoices))?;

        info!(
            model = %self.cfg.model,
            latency_ms = started.elapsed().as_millis(),
            completion_len = content.len(),
            "chat completion completed"
        );

        Ok(content)
    }

    fn transport_error(&self, e: reqwest::Error, started: Instant) -> AiLlmError {
        error!(
            error = %e,
            model = %self.cfg.model,
            latency_ms = started.elapsed().as_millis(),
            timed_out = e.is_timeout(),
            "chat completion transport failure"
        );
        if e.is_timeout() {
            AiLlmError::Timeout(self.timeout)
        } else {
            AiLlmError::HttpTransport(e)
        }
    }
}

impl ChatModel for OpenAiService {
    fn generate<'a>(&'a self, prompt: &'a str, system: Option<&'a str>) -> GenerateFuture<'a> {
        Box::pin(OpenAiService::generate(self, prompt, system))
    }

    fn model_id(&self) -> &str {
        &self.cfg.model
    }
}

fn provider_tag(p: LlmProvider) -> Provider {
    match p {
        LlmProvider::OpenRouter => Provider::OpenRouter,
        LlmProvider::OpenAI => Provider::OpenAI,
    }
}

fn default_headers(cfg: &LlmModelConfig, api_key: &str) -> Result<header::HeaderMap, AiLlmError> {
    let provider = provider_tag(cfg.provider);
    let invalid = |what: &str, e: header::InvalidHeaderValue| {
        ProviderError::new(
            provider,
            ProviderErrorKind::Decode(format!("invalid {what} header: {e}")),
        )
    };

    let mut headers = header::HeaderMap::new();
    headers.insert(
        header::AUTHORIZATION,
        header::HeaderValue::from_str(&format!("Bearer {api_key}"))
            .map_err(|e| invalid("API key", e))?,
    );
    headers.insert(
        header::CONTENT_TYPE,
        header::HeaderValue::from_static("application/json"),
    );

    if cfg.provider.wants_attribution() {
        if let Some(referer) = cfg.app_referer.as_deref() {
            headers.insert(
                "HTTP-Referer",
                header::HeaderValue::from_str(referer).map_err(|e| invalid("HTTP-Referer", e))?,
            );
        }
        if let Some(title) = cfg.app_title.as_deref() {
            headers.insert(
                "X-Title",
                header::HeaderValue::from_str(title).map_err(|e| invalid("X-Title", e))?,
            );
        }
    }

    Ok(headers)
}

/* ===========================================================================
HTTP payloads
======================================================================== */

/// Minimal request body for `/chat/completions` (non-streaming).
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

impl<'a> ChatCompletionRequest<'a> {
    /// Builds a chat request from config, `prompt`, and an optional system message.
    fn from_cfg(cfg: &'a LlmModelConfig, prompt: &'a str, system: Option<&'a str>) -> Self {
        let mut messages = Vec::with_capacity(2);
        if let Some(sys) = system {
            messages.push(ChatMessage {
                role: "system",
                content: sys,
            });
        }
        messages.push(ChatMessage {
            role: "user",
            content: prompt,
        });

        Self {
            model: &cfg.model,
            messages,
            temperature: cfg.temperature,
            max_tokens: cfg.max_tokens,
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Minimal response for `/chat/completions`.
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageOut,
}

#[derive(Debug, Deserialize)]
struct ChatMessageOut {
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> LlmModelConfig {
        LlmModelConfig {
            provider: LlmProvider::OpenRouter,
            model: "mistralai/mistral-7b-instruct".into(),
            endpoint: "https://openrouter.ai/api/v1/".into(),
            api_key: Some("sk-test".into()),
            max_tokens: None,
            temperature: Some(0.0),
            timeout_secs: Some(30),
            app_referer: Some("http://localhost".into()),
            app_title: Some("Review Assistant".into()),
        }
    }

    #[test]
    fn request_body_has_system_then_user_message() {
        let c = cfg();
        let body = ChatCompletionRequest::from_cfg(&c, "hello", Some("be strict"));
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "mistralai/mistral-7b-instruct");
        assert_eq!(json["temperature"], 0.0);
        assert!(json.get("max_tokens").is_none());
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][0]["content"], "be strict");
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["messages"][1]["content"], "hello");
    }

    #[test]
    fn request_body_without_system_is_single_turn() {
        let c = cfg();
        let body = ChatCompletionRequest::from_cfg(&c, "hello", None);
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["messages"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn url_is_built_from_trimmed_base() {
        let svc = OpenAiService::new(cfg()).unwrap();
        assert_eq!(svc.url_chat, "https://openrouter.ai/api/v1/chat/completions");
        assert_eq!(svc.timeout, Duration::from_secs(30));
    }

    #[test]
    fn missing_key_is_refused() {
        let mut c = cfg();
        c.api_key = None;
        let err = OpenAiService::new(c).unwrap_err();
        assert!(matches!(
            err,
            AiLlmError::Provider(ProviderError {
                kind: ProviderErrorKind::MissingApiKey,
                ..
            })
        ));
    }

    #[test]
    fn attribution_headers_only_for_openrouter() {
        let c = cfg();
        let h = default_headers(&c, "sk-test").unwrap();
        assert_eq!(h.get(header::AUTHORIZATION).unwrap(), "Bearer sk-test");
        assert_eq!(h.get("HTTP-Referer").unwrap(), "http://localhost");
        assert_eq!(h.get("X-Title").unwrap(), "Review Assistant");

        let mut c = cfg();
        c.provider = LlmProvider::OpenAI;
        let h = default_headers(&c, "sk-test").unwrap();
        assert!(h.get("HTTP-Referer").is_none());
        assert!(h.get("X-Title").is_none());
    }
}
