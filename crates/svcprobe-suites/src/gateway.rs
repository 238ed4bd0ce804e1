//! Upload through the gateway with redirects disabled, then directly to the
//! file service for comparison

use std::io::Write;

use http::StatusCode;
use svcprobe_config::Config;
use svcprobe_core::{ProbeRequest, Prober, Redirects, Report};

use crate::{SuiteSummary, USER_ID_HEADER, fixture};

pub async fn run<W: Write>(prober: &Prober, config: &Config, report: &mut Report<W>) -> anyhow::Result<SuiteSummary> {
    let mut summary = SuiteSummary::new("gateway");
    let gateway = &config.gateway;
    let scratch = fixture::write_scratch(&config.fixture)?;

    report.section("Gateway upload")?;
    let request = ProbeRequest::post(gateway.url.clone())
        .header(USER_ID_HEADER, &gateway.user_id)
        .header("User-Agent", &gateway.user_agent)
        .multipart(fixture::upload_form(&config.fixture, &scratch)?)
        .redirects(Redirects::Disabled);
    report.request(&request)?;

    let outcome = prober.send(&request).await;
    summary.record(&outcome);
    match outcome {
        Ok(response) => report.response(&response)?,
        Err(error) => report.failure("Error", &error)?,
    }

    report.section("Direct file service upload (comparison)")?;
    let request = ProbeRequest::post(gateway.direct_url.clone())
        .header(USER_ID_HEADER, &gateway.user_id)
        .multipart(fixture::upload_form(&config.fixture, &scratch)?);
    report.request(&request)?;

    let outcome = prober.send(&request).await;
    summary.record(&outcome);
    match outcome {
        Ok(response) => {
            report.status("Direct status", &response)?;
            if response.status() == StatusCode::OK {
                report.line("Direct access succeeded")?;
            } else {
                report.body("Direct response", &response)?;
            }
        }
        Err(error) => report.failure("Direct access error", &error)?,
    }

    Ok(summary)
}
