#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

//! HTTP diagnostic probes
//!
//! A probe is one request described by [`ProbeRequest`], sent by a
//! [`Prober`], and rendered to a [`Report`] for a human to read.

mod client;
pub mod error;
pub mod report;
pub mod request;
pub mod response;
pub mod scratch;
pub mod stream;

pub use client::Prober;
pub use error::{ProbeError, Result};
pub use report::Report;
pub use request::{FilePart, MultipartBody, ProbeBody, ProbeRequest, Redirects};
pub use response::ProbeResponse;
pub use scratch::ScratchFile;
pub use stream::{ProbeStream, StreamItem};
