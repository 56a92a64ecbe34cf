//! Response types
//!
//! What an HTTP client hands back after a request completes: status,
//! headers, raw body bytes and the time it took.

mod status;

use std::time::Duration;

pub use status::StatusCode;

use crate::request::{Header, headers_to_text};

/// A completed HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// Response status.
    pub status: StatusCode,
    /// Response headers in wire order.
    pub headers: Vec<Header>,
    /// Raw response body.
    pub body: Vec<u8>,
    /// Time from sending the request to receiving the full body.
    pub elapsed: Duration,
}

impl HttpResponse {
    /// Creates a new response.
    #[must_use]
    pub fn new(
        status: impl Into<StatusCode>,
        headers: Vec<Header>,
        body: Vec<u8>,
        elapsed: Duration,
    ) -> Self {
        Self {
            status: status.into(),
            headers,
            body,
            elapsed,
        }
    }

    /// Returns the body as a lossy UTF-8 string.
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Returns the body re-indented if it is JSON, otherwise the raw text.
    #[must_use]
    pub fn pretty_body(&self) -> String {
        serde_json::from_slice::<serde_json::Value>(&self.body)
            .ok()
            .and_then(|value| serde_json::to_string_pretty(&value).ok())
            .unwrap_or_else(|| self.text())
    }

    /// Returns the headers as `Key: Value` lines.
    #[must_use]
    pub fn headers_text(&self) -> String {
        headers_to_text(&self.headers)
    }

    /// Returns the elapsed time in seconds.
    #[must_use]
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// One-line status summary, e.g. `Status: 200 | Time: 0.125s`.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Status: {} | Time: {:.3}s",
            self.status.as_u16(),
            self.elapsed_seconds()
        )
    }
}
