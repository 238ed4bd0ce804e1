//! Image generation probe against the LLM service

use std::io::Write;

use serde_json::json;
use svcprobe_config::ImageGenConfig;
use svcprobe_core::{ProbeRequest, Prober, Report};

use crate::{SuiteSummary, USER_ID_HEADER};

pub async fn run<W: Write>(
    prober: &Prober,
    config: &ImageGenConfig,
    report: &mut Report<W>,
) -> anyhow::Result<SuiteSummary> {
    let mut summary = SuiteSummary::new("imagegen");

    report.section("Image generation")?;
    let request = ProbeRequest::post(config.url.clone())
        .header("Content-Type", "application/json")
        .header(USER_ID_HEADER, &config.user_id)
        .json(json!({
            "prompt": config.prompt,
            "size": config.size,
            "n": config.n,
            "responseFormat": config.response_format,
            "model": config.model,
            "user": config.user_id,
        }));
    report.request(&request)?;

    let outcome = prober.send(&request).await;
    summary.record(&outcome);
    match outcome {
        Ok(response) => report.response(&response)?,
        Err(error) => report.failure("Request error", &error)?,
    }

    Ok(summary)
}
