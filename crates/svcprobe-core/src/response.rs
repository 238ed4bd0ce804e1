use std::borrow::Cow;

use bytes::Bytes;
use http::header::LOCATION;
use http::{HeaderMap, StatusCode};
use serde_json::Value;
use url::Url;

use crate::error::{ProbeError, Result};

/// Status codes whose `Location` header is reported
const REDIRECT_CODES: [StatusCode; 4] = [
    StatusCode::MOVED_PERMANENTLY,
    StatusCode::FOUND,
    StatusCode::TEMPORARY_REDIRECT,
    StatusCode::PERMANENT_REDIRECT,
];

/// Fully read response to a probe
#[derive(Debug, Clone)]
pub struct ProbeResponse {
    status: StatusCode,
    headers: HeaderMap,
    url: Url,
    body: Bytes,
}

impl ProbeResponse {
    pub const fn new(status: StatusCode, headers: HeaderMap, url: Url, body: Bytes) -> Self {
        Self {
            status,
            headers,
            url,
            body,
        }
    }

    pub const fn status(&self) -> StatusCode {
        self.status
    }

    pub const fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// URL the response came from, after any followed redirects
    pub const fn url(&self) -> &Url {
        &self.url
    }

    pub const fn bytes(&self) -> &Bytes {
        &self.body
    }

    /// Body as text, replacing invalid UTF-8
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// True for 301, 302, 307 and 308
    pub fn is_redirect(&self) -> bool {
        REDIRECT_CODES.contains(&self.status)
    }

    /// `Location` header value, if present and readable
    pub fn location(&self) -> Option<&str> {
        self.headers.get(LOCATION).and_then(|value| value.to_str().ok())
    }

    /// Turn a 4xx or 5xx response into [`ProbeError::Status`]
    pub fn error_for_status(self) -> Result<Self> {
        if self.status.is_client_error() || self.status.is_server_error() {
            return Err(ProbeError::Status {
                status: self.status,
                body: self.text().into_owned(),
                url: self.url,
            });
        }

        Ok(self)
    }

    /// Decode the body as JSON
    pub fn json(&self) -> Result<Value> {
        serde_json::from_slice(&self.body).map_err(|source| ProbeError::Decode {
            status: self.status,
            body: self.text().into_owned(),
            source,
        })
    }

    /// Body for display: pretty JSON when it parses, raw text otherwise
    pub fn render_body(&self) -> String {
        match serde_json::from_slice::<Value>(&self.body) {
            Ok(value) => serde_json::to_string_pretty(&value).unwrap_or_else(|_| self.text().into_owned()),
            Err(_) => self.text().into_owned(),
        }
    }
}
