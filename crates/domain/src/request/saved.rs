//! Saved request record (`<name>.json`).

use serde::{Deserialize, Serialize};

use super::header::{Header, parse_header_lines};

/// A request definition as stored on disk.
///
/// Every field is optional: files written by hand or by older versions may
/// omit any of them, and absent fields are omitted again on save. Headers
/// and body are kept as the raw text the user typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedRequest {
    /// HTTP method name, e.g. `"GET"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,

    /// Target URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Raw header text, one `Key: Value` pair per line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<String>,

    /// Raw request body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl SavedRequest {
    /// Creates a record with a method and URL.
    #[must_use]
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: Some(method.into()),
            url: Some(url.into()),
            headers: None,
            body: None,
        }
    }

    /// Sets the raw header text.
    #[must_use]
    pub fn with_headers(mut self, headers: impl Into<String>) -> Self {
        self.headers = Some(headers.into());
        self
    }

    /// Appends one `name: value` line to the raw header text.
    #[must_use]
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        let line = format!("{name}: {value}");
        self.headers = Some(match self.headers.take() {
            Some(existing) if !existing.is_empty() => format!("{existing}\n{line}"),
            _ => line,
        });
        self
    }

    /// Sets the raw body.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Parses the raw header text.
    #[must_use]
    pub fn header_list(&self) -> Vec<Header> {
        self.headers
            .as_deref()
            .map(parse_header_lines)
            .unwrap_or_default()
    }
}
