//! Application error types

use hellorest_domain::DomainError;
use thiserror::Error;

use crate::execute_request::ExecuteRequestError;
use crate::ports::CollectionError;

/// Application-level errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A domain validation error occurred.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// A collection store operation failed.
    #[error(transparent)]
    Collection(#[from] CollectionError),

    /// Sending a request failed.
    #[error(transparent)]
    Execute(#[from] ExecuteRequestError),
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
