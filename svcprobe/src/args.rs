use std::path::PathBuf;

use clap::{Parser, Subcommand};
use svcprobe_suites::Suite;

/// Service probes
#[derive(Debug, Parser)]
#[command(
    name = "svcprobe",
    about = "Diagnostic HTTP probes for the gateway, file, LLM and embedding services"
)]
pub struct Args {
    /// Path to configuration file; built-in endpoints are used when omitted
    #[arg(short, long, env = "SVCPROBE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log filter for stderr diagnostics (overrides `telemetry.log_filter`)
    #[arg(long, env = "SVCPROBE_LOG")]
    pub log_filter: Option<String>,

    /// Bearer token for the embedding API (overrides `embedding.api_key`)
    #[arg(long, env = "EMBEDDING_API_KEY", hide_env_values = true)]
    pub embedding_api_key: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Which probes to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Upload through the gateway (redirects not followed), then directly for comparison
    Gateway,
    /// Upload directly to the file service
    Upload,
    /// LLM service health check and model listing
    Llm,
    /// Third-party embedding API
    Embedding,
    /// Streaming chat through the gateway and directly
    ChatStream,
    /// Image generation on the LLM service
    #[command(name = "imagegen")]
    ImageGen,
    /// Every suite, in order
    All,
}

impl Command {
    pub fn suites(self) -> Vec<Suite> {
        match self {
            Self::Gateway => vec![Suite::Gateway],
            Self::Upload => vec![Suite::Upload],
            Self::Llm => vec![Suite::Llm],
            Self::Embedding => vec![Suite::Embedding],
            Self::ChatStream => vec![Suite::ChatStream],
            Self::ImageGen => vec![Suite::ImageGen],
            Self::All => Suite::ALL.to_vec(),
        }
    }
}
