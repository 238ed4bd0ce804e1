use http::{HeaderName, HeaderValue};
use reqwest::multipart::{Form, Part};
use reqwest::redirect::Policy;

use crate::error::{ProbeError, Result};
use crate::request::{MultipartBody, ProbeBody, ProbeRequest, Redirects};
use crate::response::ProbeResponse;
use crate::stream::ProbeStream;

/// Sends [`ProbeRequest`]s
///
/// Holds one client per redirect policy so a request can opt out of
/// following redirects without rebuilding a client.
#[derive(Debug, Clone)]
pub struct Prober {
    following: reqwest::Client,
    manual: reqwest::Client,
}

impl Prober {
    /// Build the underlying HTTP clients
    pub fn new() -> Result<Self> {
        Ok(Self {
            following: reqwest::Client::builder().build()?,
            manual: reqwest::Client::builder().redirect(Policy::none()).build()?,
        })
    }

    /// Send a request and read the whole response body
    pub async fn send(&self, request: &ProbeRequest) -> Result<ProbeResponse> {
        let response = self.dispatch(request).await?;

        let status = response.status();
        let headers = response.headers().clone();
        let url = response.url().clone();
        let body = response.bytes().await?;

        tracing::debug!(
            method = %request.method(),
            url = %request.url(),
            status = status.as_u16(),
            bytes = body.len(),
            "probe response received"
        );

        Ok(ProbeResponse::new(status, headers, url, body))
    }

    /// Send a request and hand back the body unread
    pub async fn open_stream(&self, request: &ProbeRequest) -> Result<ProbeStream> {
        let response = self.dispatch(request).await?;
        Ok(ProbeStream::new(response))
    }

    async fn dispatch(&self, request: &ProbeRequest) -> Result<reqwest::Response> {
        let builder = self.build(request)?;

        tracing::debug!(
            method = %request.method(),
            url = %request.url(),
            redirects = ?request.redirect_policy(),
            "sending probe request"
        );

        builder.send().await.map_err(|e| {
            let error = ProbeError::from(e);
            tracing::warn!(url = %request.url(), error = %error, "probe request failed");
            error
        })
    }

    fn build(&self, request: &ProbeRequest) -> Result<reqwest::RequestBuilder> {
        let client = match request.redirect_policy() {
            Redirects::Follow => &self.following,
            Redirects::Disabled => &self.manual,
        };

        let mut builder = client.request(request.method().clone(), request.url().as_str());

        for (name, value) in request.headers() {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| ProbeError::InvalidRequest(format!("header name '{name}': {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| ProbeError::InvalidRequest(format!("header value for '{name}': {e}")))?;
            builder = builder.header(name, value);
        }

        if let Some(timeout) = request.timeout_duration() {
            builder = builder.timeout(timeout);
        }

        builder = match request.body() {
            ProbeBody::Empty => builder,
            ProbeBody::Json(value) => builder.json(value),
            ProbeBody::Multipart(form) => builder.multipart(build_form(form)?),
        };

        Ok(builder)
    }
}

/// Text fields first, then the file part
fn build_form(body: &MultipartBody) -> Result<Form> {
    let mut form = Form::new();
    for (name, value) in &body.fields {
        form = form.text(name.clone(), value.clone());
    }

    let part = Part::bytes(body.file.bytes.to_vec())
        .file_name(body.file.file_name.clone())
        .mime_str(&body.file.content_type)
        .map_err(|e| ProbeError::InvalidRequest(format!("content type '{}': {e}", body.file.content_type)))?;

    Ok(form.part(body.file.field_name.clone(), part))
}
