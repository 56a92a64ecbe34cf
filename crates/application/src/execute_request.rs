//! Execute Request Use Case
//!
//! Sends one request through the `HttpClient` port after checking that it
//! has something sendable in its URL.

use std::sync::Arc;

use hellorest_domain::{HttpRequest, HttpResponse};
use thiserror::Error;

use crate::ports::{CancellationReceiver, HttpClient, HttpClientError};

/// Result type for request execution.
pub type ExecuteResult = Result<HttpResponse, ExecuteRequestError>;

/// Error type for the execute request use case.
#[derive(Debug, Clone, Error)]
pub enum ExecuteRequestError {
    /// URL is empty.
    #[error("URL is required")]
    EmptyUrl,

    /// URL is invalid.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTTP request failed.
    #[error("{0}")]
    HttpError(#[from] HttpClientError),
}

/// Use case for executing HTTP requests.
///
/// # Example
///
/// ```ignore
/// let use_case = ExecuteRequest::new(Arc::new(ReqwestHttpClient::new()?));
/// let request = HttpRequest::new(HttpMethod::Get, "https://api.example.com/users");
/// let response = use_case.execute(&request).await?;
/// ```
pub struct ExecuteRequest<C: HttpClient> {
    client: Arc<C>,
}

impl<C: HttpClient> ExecuteRequest<C> {
    /// Creates a new `ExecuteRequest` use case with the given HTTP client.
    pub const fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    /// Executes the request and returns the result.
    ///
    /// # Errors
    ///
    /// Returns `ExecuteRequestError` on validation or HTTP failures.
    pub async fn execute(&self, request: &HttpRequest) -> ExecuteResult {
        Self::validate(request)?;
        let response = self.client.execute(request).await?;
        Ok(response)
    }

    /// Executes the request, giving up as soon as `cancel` fires.
    ///
    /// # Errors
    ///
    /// Returns `HttpClientError::Cancelled` if cancelled first, otherwise
    /// the same errors as [`Self::execute`].
    pub async fn execute_with_cancellation(
        &self,
        request: &HttpRequest,
        mut cancel: CancellationReceiver,
    ) -> ExecuteResult {
        Self::validate(request)?;

        tokio::select! {
            result = self.client.execute(request) => {
                result.map_err(ExecuteRequestError::from)
            }
            () = cancel.cancelled() => {
                Err(ExecuteRequestError::HttpError(HttpClientError::Cancelled))
            }
        }
    }

    fn validate(request: &HttpRequest) -> Result<(), ExecuteRequestError> {
        let url = request.url.trim();
        if url.is_empty() {
            return Err(ExecuteRequestError::EmptyUrl);
        }

        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ExecuteRequestError::InvalidUrl(
                "URL must start with http:// or https://".to_string(),
            ));
        }

        Ok(())
    }
}
