//! Open request use case.

use std::path::Path;
use std::sync::Arc;

use hellorest_domain::{REQUEST_EXTENSION, SavedRequest};

use crate::ports::{CollectionError, CollectionStore};

/// Output from opening a request.
#[derive(Debug, Clone)]
pub struct OpenRequestOutput {
    /// Display name derived from the file name.
    pub name: String,
    /// The loaded record; an editable copy owned by the caller.
    pub request: SavedRequest,
}

/// Use case for loading a saved request into an editor.
pub struct OpenRequest<S: CollectionStore> {
    store: Arc<S>,
}

impl<S: CollectionStore> OpenRequest<S> {
    /// Creates a new `OpenRequest` use case.
    #[must_use]
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Loads the request at `path`.
    ///
    /// # Errors
    /// - Returns error if the file is missing, unreadable or malformed
    pub fn execute(&self, path: &Path) -> Result<OpenRequestOutput, CollectionError> {
        let request = self.store.load_request(path)?;
        Ok(OpenRequestOutput {
            name: display_name(path),
            request,
        })
    }
}

fn display_name(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    file_name
        .strip_suffix(&format!(".{REQUEST_EXTENSION}"))
        .map_or_else(|| file_name.clone(), ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::memory_store::MemoryStore;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_open_returns_name_and_record() {
        let store = Arc::new(MemoryStore::new());
        let saved = SavedRequest::new("DELETE", "https://example.com/users/1");
        let path = store
            .save_request("Delete User", &saved, None)
            .expect("save should succeed");

        let output = OpenRequest::new(store).execute(&path).expect("open");
        assert_eq!(output.name, "Delete User");
        assert_eq!(output.request, saved);
    }

    #[test]
    fn test_open_missing_request_fails() {
        let use_case = OpenRequest::new(Arc::new(MemoryStore::new()));
        let result = use_case.execute(Path::new("/mem/nope.json"));
        assert!(matches!(result, Err(CollectionError::Io { .. })));
    }

    #[test]
    fn test_display_name_without_extension() {
        assert_eq!(display_name(Path::new("/a/b/notes.txt")), "notes.txt");
        assert_eq!(display_name(Path::new("/a/b/login.json")), "login");
    }
}
