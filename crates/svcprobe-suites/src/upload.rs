//! Upload the scratch file straight to the file service

use std::io::Write;

use svcprobe_config::Config;
use svcprobe_core::{ProbeRequest, Prober, Report};

use crate::{SuiteSummary, USER_ID_HEADER, fixture};

pub async fn run<W: Write>(prober: &Prober, config: &Config, report: &mut Report<W>) -> anyhow::Result<SuiteSummary> {
    let mut summary = SuiteSummary::new("upload");
    let scratch = fixture::write_scratch(&config.fixture)?;

    report.section("File service upload")?;
    let request = ProbeRequest::post(config.upload.url.clone())
        .header(USER_ID_HEADER, &config.upload.user_id)
        .multipart(fixture::upload_form(&config.fixture, &scratch)?);
    report.request(&request)?;

    let outcome = prober.send(&request).await;
    summary.record(&outcome);
    match outcome {
        Ok(response) => {
            report.status("Status", &response)?;
            report.body("Response body", &response)?;
        }
        Err(error) => report.failure("Error", &error)?,
    }

    Ok(summary)
}
