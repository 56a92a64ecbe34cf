//! Collection store port.
//!
//! The store maps a tree of named folders and requests onto a directory of
//! JSON files. Every operation is one synchronous file-system transaction;
//! there is no cache and no locking.

use std::path::{Path, PathBuf};

use hellorest_domain::{CollectionTree, DomainError, SavedRequest};

use super::file_system::FileSystemError;

/// Error type for collection store operations.
#[derive(Debug, thiserror::Error)]
pub enum CollectionError {
    /// The name has no usable characters.
    #[error("Invalid name: {0}")]
    Validation(#[from] DomainError),

    /// A collection already exists at the target path.
    #[error("Already exists: {path}")]
    AlreadyExists {
        /// The path that is already taken.
        path: PathBuf,
    },

    /// Creating, reading or writing on disk failed.
    #[error("File system error at {path}: {source}")]
    Io {
        /// The path being operated on.
        path: PathBuf,
        /// The underlying failure.
        #[source]
        source: FileSystemError,
    },

    /// A request file is not a valid request document.
    #[error("Malformed request file {path}: {message}")]
    Parse {
        /// The file that failed to parse.
        path: PathBuf,
        /// Parser diagnostic.
        message: String,
    },
}

impl CollectionError {
    /// Wraps a file-system failure on `path`.
    #[must_use]
    pub fn io(path: &Path, source: FileSystemError) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Repository of collections (directories) and saved requests (JSON files).
pub trait CollectionStore: Send + Sync {
    /// The directory every collection and request lives under.
    fn root(&self) -> &Path;

    /// Returns true if the root could not be created at construction.
    fn is_degraded(&self) -> bool;

    /// Walks the root and returns a fresh snapshot.
    ///
    /// Folders come before requests at every level, each sorted by name.
    /// A missing root yields an empty tree. Sub-directories that cannot be
    /// read and symlinked directories are left out.
    ///
    /// # Errors
    ///
    /// Returns an error if the root exists but cannot be read.
    fn enumerate_tree(&self) -> Result<CollectionTree, CollectionError>;

    /// Creates a collection directory named after `name` under `parent`
    /// (the root when `None`) and returns its path.
    ///
    /// # Errors
    ///
    /// - [`CollectionError::Validation`] if `name` sanitizes to nothing
    /// - [`CollectionError::AlreadyExists`] if the target path is taken
    /// - [`CollectionError::Io`] if the directory cannot be created
    fn create_collection(
        &self,
        name: &str,
        parent: Option<&Path>,
    ) -> Result<PathBuf, CollectionError>;

    /// Writes `request` to `<parent>/<sanitized name>.json`, replacing any
    /// existing file, and returns the path. An empty sanitized name is
    /// saved as `untitled`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be serialized or written.
    fn save_request(
        &self,
        name: &str,
        request: &SavedRequest,
        parent: Option<&Path>,
    ) -> Result<PathBuf, CollectionError>;

    /// Reads and parses the request file at `path`.
    ///
    /// # Errors
    ///
    /// - [`CollectionError::Io`] if the file is missing or unreadable
    /// - [`CollectionError::Parse`] if the content is not a request document
    fn load_request(&self, path: &Path) -> Result<SavedRequest, CollectionError>;
}
