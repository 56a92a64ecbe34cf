//! Executable request built from a saved record.

use super::header::Header;
use super::method::HttpMethod;
use super::saved::SavedRequest;
use crate::error::DomainResult;

/// A request ready to be handed to an HTTP client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// HTTP method.
    pub method: HttpMethod,
    /// Target URL, trimmed.
    pub url: String,
    /// Parsed headers, in the order they were written.
    pub headers: Vec<Header>,
    /// Body text; `None` when the saved body is absent or empty.
    pub body: Option<String>,
}

impl HttpRequest {
    /// Creates a request without headers or body.
    #[must_use]
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Builds an executable request from a saved record.
    ///
    /// A missing method means GET and a missing URL yields an empty URL,
    /// which callers are expected to reject before sending.
    ///
    /// # Errors
    ///
    /// Returns an error if the saved method is not a supported HTTP method.
    pub fn from_saved(saved: &SavedRequest) -> DomainResult<Self> {
        let method = match saved.method.as_deref() {
            Some(m) if !m.trim().is_empty() => m.parse()?,
            _ => HttpMethod::default(),
        };

        Ok(Self {
            method,
            url: saved.url.as_deref().unwrap_or_default().trim().to_string(),
            headers: saved.header_list(),
            body: saved.body.clone().filter(|b| !b.is_empty()),
        })
    }
}
