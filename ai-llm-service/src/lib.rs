//! Chat-completion client used by the review service.
//!
//! - [`config`]: model/provider config and env loading
//! - [`services`]: the [`ChatModel`] seam and its HTTP implementation
//! - [`error_handler`]: unified errors and config helpers
//! - [`telemetry`]: tracing layer/filter helpers for the binary

pub mod config {
    pub mod default_config;
    pub mod llm_model_config;
    pub mod llm_provider;
}

pub mod services {
    pub mod chat_model;
    pub mod open_ai_service;
}

pub mod error_handler;
pub mod telemetry;

pub use config::{llm_model_config::LlmModelConfig, llm_provider::LlmProvider};
pub use error_handler::{AiLlmError, ConfigError};
pub use services::{chat_model::ChatModel, open_ai_service::OpenAiService};
