//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the application core and external systems.
//! Each port is a trait that can be implemented by adapters in the infrastructure layer.

mod collection_store;
mod file_system;
mod http_client;

pub use collection_store::{CollectionError, CollectionStore};
pub use file_system::{FileSystem, FileSystemError};
pub use http_client::{CancellationReceiver, CancellationToken, HttpClient, HttpClientError};
