//! Human-readable probe output

use std::fmt;
use std::io::{self, Write};

use http::HeaderMap;

use crate::error::ProbeError;
use crate::request::ProbeRequest;
use crate::response::ProbeResponse;

/// Line-oriented report written by the probes
///
/// Generic over the sink so the binary writes to stdout and tests capture
/// into a `Vec<u8>`.
#[derive(Debug)]
pub struct Report<W> {
    out: W,
}

impl<W: Write> Report<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Blank line followed by a section title
    pub fn section(&mut self, title: impl fmt::Display) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "=== {title} ===")
    }

    pub fn line(&mut self, text: impl fmt::Display) -> io::Result<()> {
        writeln!(self.out, "{text}")?;
        self.out.flush()
    }

    /// `label: value`
    pub fn field(&mut self, label: &str, value: impl fmt::Display) -> io::Result<()> {
        self.line(format_args!("{label}: {value}"))
    }

    /// Method, URL, headers and body shape of a request about to be sent
    pub fn request(&mut self, request: &ProbeRequest) -> io::Result<()> {
        self.field("Request", format_args!("{} {}", request.method(), request.url()))?;
        self.field("Request headers", request.display_headers())?;
        self.field("Request body", request.body_shape())
    }

    /// Status code as a bare number
    pub fn status(&mut self, label: &str, response: &ProbeResponse) -> io::Result<()> {
        self.field(label, response.status().as_u16())
    }

    pub fn response_headers(&mut self, headers: &HeaderMap) -> io::Result<()> {
        self.field("Response headers", DisplayHeaderMap(headers))
    }

    /// Body, pretty-printed when it is JSON
    pub fn body(&mut self, label: &str, response: &ProbeResponse) -> io::Result<()> {
        if response.bytes().is_empty() {
            return self.field(label, "<empty>");
        }

        let rendered = response.render_body();
        if rendered.contains('\n') {
            self.line(format_args!("{label}:"))?;
            self.line(rendered)
        } else {
            self.field(label, rendered)
        }
    }

    /// `Location` of a 301/302/307/308 response; prints nothing otherwise
    pub fn redirect(&mut self, response: &ProbeResponse) -> io::Result<()> {
        if response.is_redirect() {
            self.field("Redirect location", response.location().unwrap_or("<none>"))?;
        }
        Ok(())
    }

    /// Status, headers, body and redirect target
    pub fn response(&mut self, response: &ProbeResponse) -> io::Result<()> {
        self.status("Status", response)?;
        self.response_headers(response.headers())?;
        self.body("Response body", response)?;
        self.redirect(response)
    }

    /// A caught probe failure
    pub fn failure(&mut self, label: &str, error: &ProbeError) -> io::Result<()> {
        self.field(label, error)
    }
}

/// Response headers formatted as `{"name": "value", ...}`
struct DisplayHeaderMap<'a>(&'a HeaderMap);

impl fmt::Display for DisplayHeaderMap<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (name, value)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "\"{name}\": \"{}\"", String::from_utf8_lossy(value.as_bytes()))?;
        }
        f.write_str("}")
    }
}
