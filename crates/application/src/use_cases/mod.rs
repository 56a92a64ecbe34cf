//! Application use cases (business logic orchestration).
//!
//! Each use case wraps one shell workflow. They take the store as a shared
//! handle so a single instance, built once at startup, serves them all.

mod create_collection;
mod open_request;
mod save_request;
mod send_saved_request;

#[cfg(test)]
pub(crate) mod memory_store;

pub use create_collection::*;
pub use open_request::*;
pub use save_request::*;
pub use send_saved_request::*;
