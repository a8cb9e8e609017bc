use serde::Serialize;

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    /// "ok" when every probe passed, "degraded" otherwise.
    pub status: &'static str,
    /// "ok" or "unavailable".
    pub database: &'static str,
    /// Configured model identifier.
    pub model: String,
    /// Configured provider name.
    pub provider: String,
}
