//! Third-party embedding API probe
//!
//! Unlike the other suites a non-success status counts as a failure here,
//! and each failure kind gets its own message.

use std::io::{self, Write};

use secrecy::ExposeSecret;
use serde_json::{Value, json};
use svcprobe_config::EmbeddingConfig;
use svcprobe_core::{ProbeError, ProbeRequest, Prober, Report};

use crate::SuiteSummary;

pub async fn run<W: Write>(
    prober: &Prober,
    config: &EmbeddingConfig,
    report: &mut Report<W>,
) -> anyhow::Result<SuiteSummary> {
    let mut summary = SuiteSummary::new("embedding");

    report.section("Embedding API")?;
    let Some(api_key) = &config.api_key else {
        report.line("Skipped: no API key configured (set EMBEDDING_API_KEY or embedding.api_key)")?;
        summary.fail(&"no embedding API key");
        return Ok(summary);
    };

    let request = ProbeRequest::post(config.url.clone())
        .header("Authorization", format!("Bearer {}", api_key.expose_secret()))
        .header("Content-Type", "application/json")
        .json(json!({
            "model": config.model,
            "input": config.input,
        }))
        .timeout(config.timeout_duration()?);
    report.request(&request)?;

    let outcome = embed(prober, &request).await;
    summary.record(&outcome);
    match outcome {
        Ok(result) => {
            report.line("Request succeeded")?;
            report.line("Response:")?;
            report.line(serde_json::to_string_pretty(&result).unwrap_or_else(|_| result.to_string()))?;
        }
        Err(error) => render_failure(report, &error)?,
    }

    Ok(summary)
}

/// Send, reject error statuses, decode JSON
async fn embed(prober: &Prober, request: &ProbeRequest) -> svcprobe_core::Result<Value> {
    prober.send(request).await?.error_for_status()?.json()
}

fn render_failure<W: Write>(report: &mut Report<W>, error: &ProbeError) -> io::Result<()> {
    match error {
        ProbeError::Status { status, body, .. } => {
            report.field("HTTP error", error)?;
            report.field("Status", status.as_u16())?;
            report.field("Body", body)
        }
        ProbeError::Connect(_) => report.field("Connection error", error),
        ProbeError::Timeout(_) => report.field("Request timed out", error),
        ProbeError::Decode { status, body, .. } => {
            report.line("Response is not valid JSON")?;
            report.field("Status", status.as_u16())?;
            report.field("Body", body)
        }
        ProbeError::Request(_)
        | ProbeError::EventStream(_)
        | ProbeError::InvalidRequest(_)
        | ProbeError::Io(_) => {
            report.field("Request error", error)
        }
    }
}
