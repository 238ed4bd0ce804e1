use std::fmt::{self, Write as _};
use std::time::Duration;

use bytes::Bytes;
use http::Method;
use http::header::AUTHORIZATION;
use indexmap::IndexMap;
use serde_json::Value;
use url::Url;

/// Whether the transport follows 3xx responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Redirects {
    /// Follow redirects with the transport's default policy
    #[default]
    Follow,
    /// Return the 3xx response as-is
    Disabled,
}

/// File part of a multipart body
#[derive(Debug, Clone)]
pub struct FilePart {
    /// Form field name (e.g. `file`)
    pub field_name: String,
    /// `filename` parameter of the part
    pub file_name: String,
    /// Declared content type of the part
    pub content_type: String,
    /// Part content
    pub bytes: Bytes,
}

/// Multipart form: text fields followed by one file part
#[derive(Debug, Clone)]
pub struct MultipartBody {
    pub fields: IndexMap<String, String>,
    pub file: FilePart,
}

/// Request payload
#[derive(Debug, Clone, Default)]
pub enum ProbeBody {
    #[default]
    Empty,
    Json(Value),
    Multipart(MultipartBody),
}

/// Fully described probe request
///
/// Built up front and handed to [`crate::Prober`] unchanged, so the same
/// description can be printed and sent.
#[derive(Debug, Clone)]
pub struct ProbeRequest {
    method: Method,
    url: Url,
    headers: IndexMap<String, String>,
    body: ProbeBody,
    redirects: Redirects,
    timeout: Option<Duration>,
}

impl ProbeRequest {
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: IndexMap::new(),
            body: ProbeBody::Empty,
            redirects: Redirects::Follow,
            timeout: None,
        }
    }

    pub fn get(url: Url) -> Self {
        Self::new(Method::GET, url)
    }

    pub fn post(url: Url) -> Self {
        Self::new(Method::POST, url)
    }

    /// Add a header; a repeated name replaces the earlier value in place
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn json(mut self, body: Value) -> Self {
        self.body = ProbeBody::Json(body);
        self
    }

    #[must_use]
    pub fn multipart(mut self, body: MultipartBody) -> Self {
        self.body = ProbeBody::Multipart(body);
        self
    }

    #[must_use]
    pub fn redirects(mut self, redirects: Redirects) -> Self {
        self.redirects = redirects;
        self
    }

    #[must_use]
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub const fn method(&self) -> &Method {
        &self.method
    }

    pub const fn url(&self) -> &Url {
        &self.url
    }

    pub const fn headers(&self) -> &IndexMap<String, String> {
        &self.headers
    }

    pub const fn body(&self) -> &ProbeBody {
        &self.body
    }

    pub const fn redirect_policy(&self) -> Redirects {
        self.redirects
    }

    pub const fn timeout_duration(&self) -> Option<Duration> {
        self.timeout
    }

    /// Headers as they should be printed, with credentials masked
    pub fn display_headers(&self) -> DisplayHeaders<'_> {
        DisplayHeaders(&self.headers)
    }

    /// One-line description of the payload, without its raw bytes
    pub fn body_shape(&self) -> String {
        match &self.body {
            ProbeBody::Empty => "none".to_owned(),
            ProbeBody::Json(value) => format!("json {value}"),
            ProbeBody::Multipart(form) => {
                let mut shape = format!(
                    "multipart {}={} ({}, {} bytes)",
                    form.file.field_name,
                    form.file.file_name,
                    form.file.content_type,
                    form.file.bytes.len()
                );
                for (name, value) in &form.fields {
                    let _ = write!(shape, ", {name}={value}");
                }
                shape
            }
        }
    }
}

/// Header map formatted as `{"Name": "value", ...}`
pub struct DisplayHeaders<'a>(&'a IndexMap<String, String>);

impl fmt::Display for DisplayHeaders<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (name, value)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            let value = if name.eq_ignore_ascii_case(AUTHORIZATION.as_str()) {
                mask_credentials(value)
            } else {
                value.clone()
            };
            write!(f, "\"{name}\": \"{value}\"")?;
        }
        f.write_str("}")
    }
}

/// Keep the auth scheme and the first four characters of the credential
fn mask_credentials(value: &str) -> String {
    let (scheme, credential) = value.split_once(' ').unwrap_or(("", value));
    let visible: String = credential.chars().take(4).collect();
    let masked = if credential.chars().count() > 4 {
        format!("{visible}****")
    } else {
        "****".to_owned()
    };

    if scheme.is_empty() {
        masked
    } else {
        format!("{scheme} {masked}")
    }
}
