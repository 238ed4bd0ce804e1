mod harness;

use harness::mock_service::{MockReply, MockService};
use harness::{closed_port_url, config_in, run_suite};
use http::Method;
use svcprobe_config::Config;
use svcprobe_suites::Suite;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use url::Url;

const GATEWAY_PATH: &str = "/api/llm/chat/stream";
const DIRECT_PATH: &str = "/direct/api/llm/chat/stream";

fn stream_config(dir: &std::path::Path, mock: &MockService) -> Config {
    let mut config = config_in(dir);
    config.chat_stream.gateway_url = mock.url(GATEWAY_PATH);
    config.chat_stream.direct_url = mock.url(DIRECT_PATH);
    config
}

#[tokio::test]
async fn event_stream_payloads_are_printed_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let mock = MockService::start().await.unwrap();
    mock.reply(
        Method::GET,
        GATEWAY_PATH,
        MockReply::new(200, "data: 你好\n\ndata: {\"done\":true}\n\n")
            .header("content-type", "text/event-stream"),
    );
    let config = stream_config(dir.path(), &mock);

    let (summary, out) = run_suite(Suite::ChatStream, &config).await;

    let first = out.find("Event: 你好").expect(&out);
    let second = out.find("Event: {\"done\":true}").expect(&out);
    assert!(first < second);
    assert_eq!(out.matches("Stream ended").count(), 2);
    assert_eq!((summary.attempted, summary.failed), (2, 0));
}

#[tokio::test]
async fn keep_alives_are_skipped_and_multiline_data_is_joined() {
    let dir = tempfile::tempdir().unwrap();
    let mock = MockService::start().await.unwrap();
    mock.reply(
        Method::GET,
        GATEWAY_PATH,
        MockReply::new(200, ": ping\r\n\r\ndata: first\r\ndata: second\r\n\r\n")
            .header("content-type", "text/event-stream;charset=UTF-8"),
    );
    let config = stream_config(dir.path(), &mock);

    let (_, out) = run_suite(Suite::ChatStream, &config).await;

    assert!(out.contains("Event: first\nsecond"), "{out}");
    assert!(!out.contains("ping"), "{out}");
}

#[tokio::test]
async fn plain_body_is_printed_as_received_chunks() {
    let dir = tempfile::tempdir().unwrap();
    let mock = MockService::start().await.unwrap();
    mock.reply(Method::POST, DIRECT_PATH, MockReply::new(200, "plain answer"));
    let config = stream_config(dir.path(), &mock);

    let (_, out) = run_suite(Suite::ChatStream, &config).await;

    assert!(out.contains("Received: plain answer"), "{out}");
}

#[tokio::test]
async fn gateway_request_sends_chat_parameters_as_query() {
    let dir = tempfile::tempdir().unwrap();
    let mock = MockService::start().await.unwrap();
    let config = stream_config(dir.path(), &mock);

    let (_, out) = run_suite(Suite::ChatStream, &config).await;

    let request = &mock.requests_to(GATEWAY_PATH)[0];
    assert_eq!(request.method, Method::GET);
    assert!(
        out.contains(r#"Request headers: {"X-User-Id": "test-user-001", "Accept": "text/event-stream"}"#),
        "{out}"
    );
    assert_eq!(request.header("accept"), Some("text/event-stream"));
    assert_eq!(request.header("x-user-id"), Some("test-user-001"));

    let query: Vec<(String, String)> = url::form_urlencoded::parse(request.query.as_deref().unwrap().as_bytes())
        .into_owned()
        .collect();
    let expected: Vec<(String, String)> = [
        ("message", "你好，请介绍一下自己"),
        ("modelType", "deepseek-ai/DeepSeek-V3"),
        ("temperature", "0.7"),
        ("maxTokens", "2048"),
        ("userId", "test-user-001"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_owned(), v.to_owned()))
    .collect();
    assert_eq!(query, expected);
}

#[tokio::test]
async fn direct_request_posts_json_without_react() {
    let dir = tempfile::tempdir().unwrap();
    let mock = MockService::start().await.unwrap();
    let config = stream_config(dir.path(), &mock);

    run_suite(Suite::ChatStream, &config).await;

    let request = &mock.requests_to(DIRECT_PATH)[0];
    assert_eq!(request.method, Method::POST);
    assert_eq!(
        request.json(),
        serde_json::json!({
            "message": "hello",
            "modelType": "deepseek-ai/DeepSeek-V3",
            "temperature": 0.7,
            "maxTokens": 2048,
            "useReAct": false,
        })
    );
}

#[tokio::test]
async fn unreachable_gateway_still_probes_direct_route() {
    let dir = tempfile::tempdir().unwrap();
    let mock = MockService::start().await.unwrap();
    let mut config = stream_config(dir.path(), &mock);
    config.chat_stream.gateway_url = closed_port_url(GATEWAY_PATH);

    let (summary, out) = run_suite(Suite::ChatStream, &config).await;

    assert!(out.contains("Request error: connection failed"), "{out}");
    assert_eq!(mock.requests_to(DIRECT_PATH).len(), 1);
    assert_eq!((summary.attempted, summary.failed), (2, 1));
}

/// Serves one connection whose body stops well short of its `Content-Length`
async fn truncated_body_server() -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                return;
            }
            request.extend_from_slice(&buf[..n]);
        }

        socket
            .write_all(b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 100\r\n\r\npartial")
            .await
            .unwrap();
        socket.flush().await.unwrap();
    });

    Url::parse(&format!("http://{addr}{GATEWAY_PATH}")).unwrap()
}

#[tokio::test]
async fn body_cut_short_is_reported_and_ends_the_stream() {
    let dir = tempfile::tempdir().unwrap();
    let mock = MockService::start().await.unwrap();
    let mut config = stream_config(dir.path(), &mock);
    config.chat_stream.gateway_url = truncated_body_server().await;

    let (summary, out) = run_suite(Suite::ChatStream, &config).await;

    let error = out.find("Stream error: request failed").expect(&out);
    let ended = out.find("Stream ended").expect(&out);
    assert!(error < ended, "{out}");
    assert_eq!(mock.requests_to(DIRECT_PATH).len(), 1);
    assert_eq!((summary.attempted, summary.failed), (2, 1));
}
