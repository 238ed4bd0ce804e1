use eventsource_stream::{EventStreamError, Eventsource};
use futures_util::StreamExt;
use futures_util::stream::BoxStream;
use http::header::CONTENT_TYPE;
use http::{HeaderMap, StatusCode};

use crate::error::{ProbeError, Result};

/// Piece of a streamed body, in arrival order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamItem {
    /// Raw chunk of a non-SSE body
    Chunk(String),
    /// `data` payload of one server-sent event
    Event(String),
}

/// Response whose body is consumed incrementally
pub struct ProbeStream {
    status: StatusCode,
    headers: HeaderMap,
    event_stream: bool,
    items: BoxStream<'static, Result<StreamItem>>,
}

impl ProbeStream {
    pub(crate) fn new(response: reqwest::Response) -> Self {
        let status = response.status();
        let headers = response.headers().clone();
        let event_stream = is_event_stream(&headers);
        let body = response.bytes_stream();

        let items = if event_stream {
            body.eventsource()
                .filter_map(|result| async move {
                    match result {
                        // keep-alives and bare `event:` lines carry no payload
                        Ok(event) if event.data.is_empty() => None,
                        Ok(event) => Some(Ok(StreamItem::Event(event.data))),
                        Err(EventStreamError::Transport(e)) => Some(Err(ProbeError::from(e))),
                        Err(e) => Some(Err(ProbeError::EventStream(e.to_string()))),
                    }
                })
                .boxed()
        } else {
            body.map(|result| {
                result
                    .map(|bytes| StreamItem::Chunk(String::from_utf8_lossy(&bytes).into_owned()))
                    .map_err(ProbeError::from)
            })
            .boxed()
        };

        Self {
            status,
            headers,
            event_stream,
            items,
        }
    }

    pub const fn status(&self) -> StatusCode {
        self.status
    }

    pub const fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Whether the body is decoded as server-sent events
    pub const fn is_event_stream(&self) -> bool {
        self.event_stream
    }

    /// Next item of the body, `None` once it has ended
    pub async fn next(&mut self) -> Option<Result<StreamItem>> {
        self.items.next().await
    }
}

impl std::fmt::Debug for ProbeStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProbeStream")
            .field("status", &self.status)
            .field("event_stream", &self.event_stream)
            .finish_non_exhaustive()
    }
}

fn is_event_stream(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.trim_start().starts_with("text/event-stream"))
}

#[cfg(test)]
mod tests {
    use http::HeaderValue;

    use super::*;

    #[test]
    fn event_stream_detection_ignores_parameters() {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/event-stream;charset=UTF-8"));
        assert!(is_event_stream(&headers));

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        assert!(!is_event_stream(&headers));

        assert!(!is_event_stream(&HeaderMap::new()));
    }
}
