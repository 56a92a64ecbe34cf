//! Create collection use case.

use std::path::PathBuf;
use std::sync::Arc;

use hellorest_domain::CollectionTree;

use crate::ports::{CollectionError, CollectionStore};

/// Input for creating a collection.
#[derive(Debug, Clone)]
pub struct CreateCollectionInput {
    /// Name as typed by the user.
    pub name: String,
    /// Parent directory; the store root when `None`.
    pub parent: Option<PathBuf>,
}

/// Output from creating a collection.
#[derive(Debug, Clone)]
pub struct CreateCollectionOutput {
    /// Path of the new directory.
    pub path: PathBuf,
    /// Tree enumerated after the create; `None` if that enumeration failed.
    /// The directory exists either way.
    pub tree: Option<CollectionTree>,
}

/// Use case for creating a new collection (folder).
pub struct CreateCollection<S: CollectionStore> {
    store: Arc<S>,
}

impl<S: CollectionStore> CreateCollection<S> {
    /// Creates a new `CreateCollection` use case.
    #[must_use]
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Creates the directory and returns it along with a refreshed tree.
    ///
    /// # Errors
    /// - Returns error if the name sanitizes to nothing
    /// - Returns error if the directory already exists
    /// - Returns error if file system operations fail
    pub fn execute(
        &self,
        input: CreateCollectionInput,
    ) -> Result<CreateCollectionOutput, CollectionError> {
        let path = self
            .store
            .create_collection(&input.name, input.parent.as_deref())?;
        let tree = self.store.enumerate_tree().ok();
        Ok(CreateCollectionOutput { path, tree })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::memory_store::MemoryStore;

    #[test]
    fn test_create_collection_refreshes_tree() {
        let use_case = CreateCollection::new(Arc::new(MemoryStore::new()));
        let output = use_case
            .execute(CreateCollectionInput {
                name: "Users!".to_string(),
                parent: None,
            })
            .expect("create should succeed");

        assert_eq!(output.path, PathBuf::from("/mem/Users"));
        let tree = output.tree.expect("tree should be refreshed");
        assert_eq!(tree.children.len(), 1);
        assert_eq!(tree.children[0].name(), "Users");
    }

    #[test]
    fn test_create_collection_rejects_empty_name() {
        let store = Arc::new(MemoryStore::new());
        let use_case = CreateCollection::new(Arc::clone(&store));
        let result = use_case.execute(CreateCollectionInput {
            name: "???".to_string(),
            parent: None,
        });

        assert!(matches!(result, Err(CollectionError::Validation(_))));
        assert!(store.enumerate_tree().expect("enumerate").is_empty());
    }

    #[test]
    fn test_refresh_failure_keeps_created_folder() {
        let store = Arc::new(MemoryStore::with_unreadable_tree());
        let output = CreateCollection::new(Arc::clone(&store))
            .execute(CreateCollectionInput {
                name: "Users".to_string(),
                parent: None,
            })
            .expect("create should succeed");

        assert!(output.tree.is_none());
        assert!(store.contains(&output.path));
    }
}
