#![allow(clippy::must_use_candidate)]

//! Configuration for the service probes
//!
//! Every field defaults to the endpoints the probes were written against, so
//! an empty (or absent) config file reproduces the stock run.

pub mod chat_stream;
pub mod embedding;
mod env;
pub mod fixture;
pub mod gateway;
pub mod imagegen;
pub mod llm;
mod loader;
pub mod telemetry;
pub mod upload;

use serde::Deserialize;
use url::Url;

pub use chat_stream::*;
pub use embedding::*;
pub use fixture::*;
pub use gateway::*;
pub use imagegen::*;
pub use llm::*;
pub use telemetry::TelemetryConfig;
pub use upload::*;

/// Top-level probe configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Scratch file uploaded by the gateway and upload suites
    #[serde(default)]
    pub fixture: FixtureConfig,
    /// Gateway upload probe and its direct-service comparison
    #[serde(default)]
    pub gateway: GatewayConfig,
    /// Upload-only probe against the file service
    #[serde(default)]
    pub upload: UploadConfig,
    /// LLM service health and model listing probes
    #[serde(default)]
    pub llm: LlmConfig,
    /// Third-party embedding API probe
    #[serde(default)]
    pub embedding: EmbeddingConfig,
    /// Streaming chat probes
    #[serde(default)]
    pub chat_stream: ChatStreamConfig,
    /// Image generation probe
    #[serde(default)]
    pub imagegen: ImageGenConfig,
    /// Log output
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Parse a built-in default URL
///
/// Only called with literals from this crate.
pub(crate) fn default_url(raw: &str) -> Url {
    Url::parse(raw).expect("built-in default URL must be valid")
}
