//! LLM service health check, then every model route with GET and POST

use std::io::Write;

use http::{Method, StatusCode};
use serde_json::json;
use svcprobe_config::LlmConfig;
use svcprobe_core::{ProbeRequest, Prober, Report};

use crate::{SuiteSummary, USER_ID_HEADER};

pub async fn run<W: Write>(prober: &Prober, config: &LlmConfig, report: &mut Report<W>) -> anyhow::Result<SuiteSummary> {
    let mut summary = SuiteSummary::new("llm");
    let timeout = Some(config.timeout_duration()?);

    report.section("LLM service health")?;
    let request = ProbeRequest::get(config.health_url.clone()).timeout(timeout);
    report.request(&request)?;

    let outcome = prober.send(&request).await;
    summary.record(&outcome);
    match outcome {
        Ok(response) => {
            report.status("Health status", &response)?;
            report.body("Health response", &response)?;
            if response.status() == StatusCode::OK {
                report.line("Service is healthy")?;
            }
        }
        Err(error) => report.failure("Health check failed", &error)?,
    }

    // Both routes are candidates for the same endpoint; each is probed on its own.
    for url in &config.model_urls {
        report.section(format_args!("Model list: {url}"))?;

        for method in [Method::GET, Method::POST] {
            report.line(format_args!("Trying {method} request..."))?;

            let mut request = ProbeRequest::new(method.clone(), url.clone())
                .header(USER_ID_HEADER, &config.user_id)
                .timeout(timeout);
            if method == Method::POST {
                request = request.json(json!({}));
            }
            report.request(&request)?;

            let outcome = prober.send(&request).await;
            summary.record(&outcome);
            match outcome {
                Ok(response) => {
                    report.status(&format!("{method} status"), &response)?;
                    report.body(&format!("{method} response"), &response)?;
                }
                Err(error) => report.failure(&format!("{method} request error"), &error)?,
            }
        }
    }

    Ok(summary)
}
