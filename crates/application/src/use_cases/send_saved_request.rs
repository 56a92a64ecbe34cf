//! Send saved request use case.
//!
//! Loads a request from the store, converts it to an executable request and
//! sends it. The store is only read, so a failed send leaves the saved file
//! untouched.

use std::path::Path;
use std::sync::Arc;

use hellorest_domain::{HttpRequest, HttpResponse};

use crate::error::ApplicationResult;
use crate::execute_request::ExecuteRequest;
use crate::ports::{CancellationReceiver, CollectionStore, HttpClient};

/// Output from sending a saved request.
#[derive(Debug, Clone)]
pub struct SendSavedRequestOutput {
    /// The request as it was sent.
    pub request: HttpRequest,
    /// The response received.
    pub response: HttpResponse,
}

/// Use case for sending a request straight from its file.
pub struct SendSavedRequest<S: CollectionStore, C: HttpClient> {
    store: Arc<S>,
    execute: ExecuteRequest<C>,
}

impl<S: CollectionStore, C: HttpClient> SendSavedRequest<S, C> {
    /// Creates a new `SendSavedRequest` use case.
    pub const fn new(store: Arc<S>, client: Arc<C>) -> Self {
        Self {
            store,
            execute: ExecuteRequest::new(client),
        }
    }

    /// Loads the request at `path` and sends it.
    ///
    /// # Errors
    /// - Returns error if the request cannot be loaded
    /// - Returns error if the saved method is unsupported
    /// - Returns error if the URL is empty or invalid, or the HTTP call fails
    pub async fn execute(
        &self,
        path: &Path,
        cancel: CancellationReceiver,
    ) -> ApplicationResult<SendSavedRequestOutput> {
        let saved = self.store.load_request(path)?;
        let request = HttpRequest::from_saved(&saved)?;
        let response = self
            .execute
            .execute_with_cancellation(&request, cancel)
            .await?;
        Ok(SendSavedRequestOutput { request, response })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApplicationError;
    use crate::execute_request::ExecuteRequestError;
    use crate::execute_request::tests::MockHttpClient;
    use crate::ports::CancellationToken;
    use crate::use_cases::memory_store::MemoryStore;
    use hellorest_domain::{DomainError, HttpMethod, SavedRequest};

    type TestSend = SendSavedRequest<MemoryStore, MockHttpClient>;

    fn setup(saved: &SavedRequest) -> (TestSend, std::path::PathBuf) {
        let store = Arc::new(MemoryStore::new());
        let path = store
            .save_request("Ping", saved, None)
            .expect("save should succeed");
        let use_case = SendSavedRequest::new(store, Arc::new(MockHttpClient::success()));
        (use_case, path)
    }

    #[tokio::test]
    async fn test_send_saved_request() {
        let saved = SavedRequest::new("head", "https://example.com/ping");
        let (use_case, path) = setup(&saved);
        let (_token, cancel) = CancellationToken::new();

        let output = use_case.execute(&path, cancel).await.expect("send");
        assert_eq!(output.request.method, HttpMethod::Head);
        assert!(output.response.status.is_success());
    }

    #[tokio::test]
    async fn test_send_rejects_unknown_method() {
        let saved = SavedRequest::new("BREW", "https://example.com/pot");
        let (use_case, path) = setup(&saved);
        let (_token, cancel) = CancellationToken::new();

        let result = use_case.execute(&path, cancel).await;
        assert!(matches!(
            result,
            Err(ApplicationError::Domain(DomainError::UnsupportedMethod(_)))
        ));
    }

    #[tokio::test]
    async fn test_send_without_url() {
        let (use_case, path) = setup(&SavedRequest::default());
        let (_token, cancel) = CancellationToken::new();

        let result = use_case.execute(&path, cancel).await;
        assert!(matches!(
            result,
            Err(ApplicationError::Execute(ExecuteRequestError::EmptyUrl))
        ));
    }
}
