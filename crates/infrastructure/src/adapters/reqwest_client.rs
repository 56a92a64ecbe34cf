//! HTTP Client implementation using reqwest.
//!
//! This adapter implements the `HttpClient` port using the reqwest library.

use std::future::Future;
use std::pin::Pin;
use std::time::{Duration, Instant};

use hellorest_application::ports::{HttpClient, HttpClientError};
use hellorest_domain::{DEFAULT_TIMEOUT_MS, Header, HttpMethod, HttpRequest, HttpResponse};
use reqwest::{Client, Method, Url};
use tracing::debug;

/// Redirects followed before giving up.
const MAX_REDIRECTS: usize = 10;

/// HTTP client implementation using reqwest.
pub struct ReqwestHttpClient {
    client: Client,
    timeout_ms: u64,
}

impl ReqwestHttpClient {
    /// Creates a new HTTP client with the default 30 second timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn new() -> Result<Self, HttpClientError> {
        Self::with_timeout(DEFAULT_TIMEOUT_MS)
    }

    /// Creates a new HTTP client applying `timeout_ms` to every request.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn with_timeout(timeout_ms: u64) -> Result<Self, HttpClientError> {
        let client = Client::builder()
            .user_agent(concat!("HelloRest/", env!("CARGO_PKG_VERSION")))
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()
            .map_err(|e| HttpClientError::Other(e.to_string()))?;

        Ok(Self { client, timeout_ms })
    }

    /// Converts domain `HttpMethod` to reqwest `Method`.
    const fn to_reqwest_method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Delete => Method::DELETE,
            HttpMethod::Patch => Method::PATCH,
            HttpMethod::Head => Method::HEAD,
            HttpMethod::Options => Method::OPTIONS,
        }
    }

    /// Maps reqwest errors to `HttpClientError`.
    fn map_error(error: &reqwest::Error, timeout_ms: u64) -> HttpClientError {
        if error.is_timeout() {
            HttpClientError::Timeout { timeout_ms }
        } else if error.is_connect() {
            HttpClientError::ConnectionFailed(error.to_string())
        } else if error.is_redirect() {
            HttpClientError::TooManyRedirects { max: MAX_REDIRECTS }
        } else {
            HttpClientError::Other(error.to_string())
        }
    }
}

impl HttpClient for ReqwestHttpClient {
    fn execute(
        &self,
        request: &HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpClientError>> + Send + '_>> {
        let request = request.clone();
        let timeout_ms = self.timeout_ms;

        Box::pin(async move {
            let url = Url::parse(&request.url)
                .map_err(|e| HttpClientError::InvalidUrl(format!("{e}: {}", request.url)))?;

            let mut builder = self
                .client
                .request(Self::to_reqwest_method(request.method), url)
                .timeout(Duration::from_millis(timeout_ms));
            for header in &request.headers {
                builder = builder.header(&header.name, &header.value);
            }
            if let Some(body) = request.body {
                builder = builder.body(body);
            }

            debug!(method = %request.method, url = %request.url, "Sending request");
            let start = Instant::now();
            let response = builder
                .send()
                .await
                .map_err(|e| Self::map_error(&e, timeout_ms))?;

            let status = response.status().as_u16();
            let headers = response
                .headers()
                .iter()
                .map(|(name, value)| {
                    Header::new(name.as_str(), String::from_utf8_lossy(value.as_bytes()))
                })
                .collect();
            let body = response
                .bytes()
                .await
                .map_err(|e| Self::map_error(&e, timeout_ms))?
                .to_vec();
            let elapsed = start.elapsed();

            debug!(status, elapsed_ms = elapsed.as_millis(), "Response received");
            Ok(HttpResponse::new(status, headers, body, elapsed))
        })
    }
}
