use http::StatusCode;
use url::Url;

/// Probe result type
pub type Result<T> = std::result::Result<T, ProbeError>;

/// Everything that can end a single probe attempt
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    /// Could not reach the target (refused, reset, DNS)
    #[error("connection failed: {0}")]
    Connect(#[source] reqwest::Error),

    /// The request or body read exceeded its timeout
    #[error("timed out: {0}")]
    Timeout(#[source] reqwest::Error),

    /// Any other transport or protocol failure
    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// Non-success status, raised only where a probe asks for it
    #[error("{status} for url: {url}")]
    Status {
        /// Status returned by the target
        status: StatusCode,
        /// Final request URL
        url: Url,
        /// Raw response body
        body: String,
    },

    /// Body was expected to be JSON but is not
    #[error("response is not valid JSON: {source}")]
    Decode {
        /// Status returned by the target
        status: StatusCode,
        /// Raw response body
        body: String,
        /// Parser error
        #[source]
        source: serde_json::Error,
    },

    /// The body claimed to be `text/event-stream` but could not be decoded
    #[error("malformed event stream: {0}")]
    EventStream(String),

    /// The request description cannot be turned into a request
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Local file or output failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for ProbeError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout(error)
        } else if error.is_connect() {
            Self::Connect(error)
        } else {
            Self::Request(error)
        }
    }
}
