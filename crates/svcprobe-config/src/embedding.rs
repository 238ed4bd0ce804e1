use std::time::Duration;

use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Third-party embedding API probe
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EmbeddingConfig {
    /// Embeddings endpoint
    #[serde(default = "default_url")]
    pub url: Url,
    /// Bearer token; the probe is skipped without one
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Embedding model identifier
    #[serde(default = "default_model")]
    pub model: String,
    /// Text to embed
    #[serde(default = "default_input")]
    pub input: String,
    /// Optional request timeout (e.g. "30s"); the transport default applies when unset
    #[serde(default)]
    pub timeout: Option<String>,
}

impl EmbeddingConfig {
    /// Parsed request timeout, if one is configured
    ///
    /// # Errors
    ///
    /// Returns an error if `timeout` is set but not a valid duration string
    pub fn timeout_duration(&self) -> anyhow::Result<Option<Duration>> {
        self.timeout
            .as_deref()
            .map(|raw| {
                duration_str::parse(raw).map_err(|e| anyhow::anyhow!("invalid embedding.timeout '{raw}': {e}"))
            })
            .transpose()
    }
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            api_key: None,
            model: default_model(),
            input: default_input(),
            timeout: None,
        }
    }
}

fn default_url() -> Url {
    crate::default_url("https://api.siliconflow.cn/v1/embeddings")
}

fn default_model() -> String {
    "BAAI/bge-large-zh-v1.5".to_string()
}

fn default_input() -> String {
    "Silicon flow embedding online: fast, affordable, and high-quality embedding services. come try it out!"
        .to_string()
}
