//! HelloRest Application - Use cases and ports
//!
//! This crate defines the application layer with:
//! - Port traits (collection store, file system, HTTP client)
//! - Use case orchestration for the shell's workflows
//! - Application-level error handling

pub mod error;
pub mod execute_request;
pub mod ports;
pub mod use_cases;

pub use error::{ApplicationError, ApplicationResult};
pub use execute_request::{ExecuteRequest, ExecuteRequestError, ExecuteResult};
pub use ports::{
    CancellationReceiver, CancellationToken, CollectionError, CollectionStore, FileSystem,
    FileSystemError, HttpClient, HttpClientError,
};
pub use use_cases::{
    CreateCollection, CreateCollectionInput, CreateCollectionOutput, OpenRequest,
    OpenRequestOutput, SaveRequest, SaveRequestInput, SaveRequestOutput, SendSavedRequest,
    SendSavedRequestOutput,
};
