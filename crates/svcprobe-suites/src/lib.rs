#![allow(clippy::missing_errors_doc)]

//! Probe suites
//!
//! Each suite is a fixed, strictly sequential list of probes. A failed probe
//! is printed and counted; it never stops the probes after it.

pub mod chat_stream;
pub mod embedding;
mod fixture;
pub mod gateway;
pub mod imagegen;
pub mod llm;
mod summary;
pub mod upload;

use std::io::Write;

use svcprobe_config::Config;
use svcprobe_core::{Prober, Report};

pub use summary::SuiteSummary;

/// Synthetic user identity header understood by the backend services
pub(crate) const USER_ID_HEADER: &str = "X-User-Id";

/// A runnable probe suite
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suite {
    Gateway,
    Upload,
    Llm,
    Embedding,
    ChatStream,
    ImageGen,
}

impl Suite {
    /// Every suite, in the order `all` runs them
    pub const ALL: [Self; 6] = [
        Self::Gateway,
        Self::Upload,
        Self::Llm,
        Self::Embedding,
        Self::ChatStream,
        Self::ImageGen,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Gateway => "gateway",
            Self::Upload => "upload",
            Self::Llm => "llm",
            Self::Embedding => "embedding",
            Self::ChatStream => "chat-stream",
            Self::ImageGen => "imagegen",
        }
    }

    /// Run this suite to completion
    ///
    /// Errors are limited to the local side: an unwritable scratch file or
    /// report sink, or an unusable config value.
    pub async fn run<W: Write>(
        self,
        prober: &Prober,
        config: &Config,
        report: &mut Report<W>,
    ) -> anyhow::Result<SuiteSummary> {
        tracing::info!(suite = self.name(), "running suite");

        let summary = match self {
            Self::Gateway => gateway::run(prober, config, report).await?,
            Self::Upload => upload::run(prober, config, report).await?,
            Self::Llm => llm::run(prober, &config.llm, report).await?,
            Self::Embedding => embedding::run(prober, &config.embedding, report).await?,
            Self::ChatStream => chat_stream::run(prober, &config.chat_stream, report).await?,
            Self::ImageGen => imagegen::run(prober, &config.imagegen, report).await?,
        };

        tracing::info!(
            suite = self.name(),
            attempted = summary.attempted,
            failed = summary.failed,
            "suite finished"
        );

        Ok(summary)
    }
}

/// Run several suites one after another
pub async fn run_all<W: Write>(
    suites: &[Suite],
    prober: &Prober,
    config: &Config,
    report: &mut Report<W>,
) -> anyhow::Result<Vec<SuiteSummary>> {
    let mut summaries = Vec::with_capacity(suites.len());
    for suite in suites {
        summaries.push(suite.run(prober, config, report).await?);
    }
    Ok(summaries)
}
