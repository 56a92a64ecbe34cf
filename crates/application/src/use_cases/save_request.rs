//! Save request use case.

use std::path::PathBuf;
use std::sync::Arc;

use hellorest_domain::{CollectionTree, SavedRequest, request_file_stem};

use crate::ports::{CollectionError, CollectionStore};

/// Input for saving a request.
#[derive(Debug, Clone)]
pub struct SaveRequestInput {
    /// Name as typed by the user.
    pub name: String,
    /// The record to persist.
    pub request: SavedRequest,
    /// Target directory; the store root when `None`.
    pub parent: Option<PathBuf>,
}

/// Output from saving a request.
#[derive(Debug, Clone)]
pub struct SaveRequestOutput {
    /// Path the request was written to.
    pub path: PathBuf,
    /// Name the request is listed under, i.e. the file stem.
    pub name: String,
    /// Tree enumerated after the save; `None` if that enumeration failed.
    /// The request was written either way.
    pub tree: Option<CollectionTree>,
}

/// Use case for saving a request, overwriting any request of the same name.
pub struct SaveRequest<S: CollectionStore> {
    store: Arc<S>,
}

impl<S: CollectionStore> SaveRequest<S> {
    /// Creates a new `SaveRequest` use case.
    #[must_use]
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Writes the request and returns where it went plus a refreshed tree.
    ///
    /// # Errors
    /// - Returns error if the request cannot be serialized or written
    pub fn execute(&self, input: SaveRequestInput) -> Result<SaveRequestOutput, CollectionError> {
        let path =
            self.store
                .save_request(&input.name, &input.request, input.parent.as_deref())?;
        let tree = self.store.enumerate_tree().ok();
        Ok(SaveRequestOutput {
            path,
            name: request_file_stem(&input.name),
            tree,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::memory_store::MemoryStore;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_save_reports_sanitized_name() {
        let use_case = SaveRequest::new(Arc::new(MemoryStore::new()));
        let output = use_case
            .execute(SaveRequestInput {
                name: "  List/Users ".to_string(),
                request: SavedRequest::new("GET", "https://example.com/users"),
                parent: None,
            })
            .expect("save should succeed");

        assert_eq!(output.name, "ListUsers");
        assert_eq!(output.path, PathBuf::from("/mem/ListUsers.json"));
        assert_eq!(output.tree.as_ref().map(CollectionTree::request_count), Some(1));
    }

    #[test]
    fn test_save_with_empty_name_uses_untitled() {
        let use_case = SaveRequest::new(Arc::new(MemoryStore::new()));
        let output = use_case
            .execute(SaveRequestInput {
                name: String::new(),
                request: SavedRequest::default(),
                parent: None,
            })
            .expect("save should succeed");

        assert_eq!(output.name, "untitled");
    }

    #[test]
    fn test_refresh_failure_keeps_saved_request() {
        let store = Arc::new(MemoryStore::with_unreadable_tree());
        let output = SaveRequest::new(Arc::clone(&store))
            .execute(SaveRequestInput {
                name: "ping".to_string(),
                request: SavedRequest::new("GET", "https://example.com/ping"),
                parent: None,
            })
            .expect("save should succeed");

        assert!(output.tree.is_none());
        assert!(store.contains(&output.path));
    }
}
