//! HelloRest Domain - Core types
//!
//! This crate defines the domain model for the HelloRest client:
//! saved request records, collection trees, name sanitization and
//! the HTTP response shape reported back to the user.
//! All types here are pure Rust with no I/O dependencies.

pub mod error;
pub mod name;
pub mod request;
pub mod response;
pub mod settings;
pub mod tree;

pub use error::{DomainError, DomainResult};
pub use name::{
    DEFAULT_REQUEST_NAME, REQUEST_EXTENSION, collection_dir_name, request_file_stem,
    sanitize_name,
};
pub use request::{Header, HttpMethod, HttpRequest, SavedRequest, parse_header_lines};
pub use response::{HttpResponse, StatusCode};
pub use settings::{AppSettings, DEFAULT_TIMEOUT_MS};
pub use tree::{CollectionTree, TreeEntry, TreeEntryKind, TreeNode};
