use std::time::Duration;

use serde::Deserialize;
use url::Url;

/// LLM service health check and model listing probes
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LlmConfig {
    /// Actuator health endpoint
    #[serde(default = "default_health_url")]
    pub health_url: Url,
    /// Candidate routes for the model list; every one is tried with GET and POST
    #[serde(default = "default_model_urls")]
    pub model_urls: Vec<Url>,
    /// Value of the `X-User-Id` header on model requests
    #[serde(default = "default_user_id")]
    pub user_id: String,
    /// Per-request timeout (e.g. "5s")
    #[serde(default = "default_timeout")]
    pub timeout: String,
}

impl LlmConfig {
    /// Parsed per-request timeout
    ///
    /// # Errors
    ///
    /// Returns an error if `timeout` is not a valid duration string
    pub fn timeout_duration(&self) -> anyhow::Result<Duration> {
        duration_str::parse(&self.timeout)
            .map_err(|e| anyhow::anyhow!("invalid llm.timeout '{}': {e}", self.timeout))
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            health_url: default_health_url(),
            model_urls: default_model_urls(),
            user_id: default_user_id(),
            timeout: default_timeout(),
        }
    }
}

fn default_health_url() -> Url {
    crate::default_url("http://localhost:8084/actuator/health")
}

fn default_model_urls() -> Vec<Url> {
    vec![
        crate::default_url("http://localhost:8084/api/llm/models"),
        crate::default_url("http://localhost:8084/llm/models"),
    ]
}

fn default_user_id() -> String {
    "test-user".to_string()
}

fn default_timeout() -> String {
    "5s".to_string()
}
