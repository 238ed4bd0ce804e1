#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod args;

use std::io::Write;

use args::Args;
use clap::Parser;
use secrecy::SecretString;
use svcprobe_config::Config;
use svcprobe_core::{Prober, Report};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Load configuration
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    if let Some(key) = args.embedding_api_key {
        config.embedding.api_key = Some(SecretString::from(key));
    }

    svcprobe_telemetry::init(&config.telemetry, args.log_filter.as_deref())?;

    tracing::info!(
        config_path = ?args.config,
        command = ?args.command,
        "starting probes"
    );

    let prober = Prober::new()?;
    let mut report = Report::new(std::io::stdout().lock());

    let summaries = svcprobe_suites::run_all(&args.command.suites(), &prober, &config, &mut report).await?;

    report.section("Summary")?;
    for summary in &summaries {
        report.line(summary)?;
    }
    report.into_inner().flush()?;

    tracing::info!("probes finished");
    Ok(())
}
