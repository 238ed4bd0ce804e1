//! Streaming chat probes
//!
//! Prints each chunk (or server-sent event) as it arrives instead of waiting
//! for the whole body.

use std::io::Write;

use serde_json::json;
use svcprobe_config::ChatStreamConfig;
use svcprobe_core::{ProbeRequest, Prober, Report, StreamItem};

use crate::{SuiteSummary, USER_ID_HEADER};

pub async fn run<W: Write>(
    prober: &Prober,
    config: &ChatStreamConfig,
    report: &mut Report<W>,
) -> anyhow::Result<SuiteSummary> {
    let mut summary = SuiteSummary::new("chat-stream");

    report.section("Streaming chat via gateway")?;
    let mut url = config.gateway_url.clone();
    url.query_pairs_mut()
        .append_pair("message", &config.gateway_message)
        .append_pair("modelType", &config.model)
        .append_pair("temperature", &config.temperature.to_string())
        .append_pair("maxTokens", &config.max_tokens.to_string())
        .append_pair("userId", &config.user_id);
    let request = ProbeRequest::get(url)
        .header(USER_ID_HEADER, &config.user_id)
        .header("Accept", "text/event-stream");
    stream_probe(prober, &request, report, &mut summary).await?;

    report.section("Streaming chat direct to LLM service")?;
    let request = ProbeRequest::post(config.direct_url.clone())
        .header("Content-Type", "application/json")
        .header(USER_ID_HEADER, &config.user_id)
        .json(json!({
            "message": config.direct_message,
            "modelType": config.model,
            "temperature": config.temperature,
            "maxTokens": config.max_tokens,
            "useReAct": false,
        }));
    stream_probe(prober, &request, report, &mut summary).await?;

    Ok(summary)
}

async fn stream_probe<W: Write>(
    prober: &Prober,
    request: &ProbeRequest,
    report: &mut Report<W>,
    summary: &mut SuiteSummary,
) -> anyhow::Result<()> {
    report.request(request)?;

    let mut stream = match prober.open_stream(request).await {
        Ok(stream) => stream,
        Err(error) => {
            summary.fail(&error);
            report.failure("Request error", &error)?;
            return Ok(());
        }
    };

    report.field("Status", stream.status().as_u16())?;
    report.response_headers(stream.headers())?;

    let mut stream_error = None;
    while let Some(item) = stream.next().await {
        match item {
            Ok(StreamItem::Event(data)) => report.field("Event", data)?,
            Ok(StreamItem::Chunk(text)) => report.field("Received", text)?,
            Err(error) => {
                report.failure("Stream error", &error)?;
                stream_error = Some(error);
                break;
            }
        }
    }
    report.line("Stream ended")?;

    match stream_error {
        Some(error) => summary.fail(&error),
        None => summary.pass(),
    }

    Ok(())
}
