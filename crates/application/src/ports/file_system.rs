//! File system abstraction port.

use std::io;
use std::path::{Path, PathBuf};

/// Error type for file system operations.
#[derive(Debug, thiserror::Error)]
pub enum FileSystemError {
    /// File not found.
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    /// Permission denied.
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// Path already exists.
    #[error("Path already exists: {0}")]
    AlreadyExists(PathBuf),

    /// Path is not a directory.
    #[error("Path is not a directory: {0}")]
    NotADirectory(PathBuf),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl FileSystemError {
    /// Classifies an I/O error raised while operating on `path`.
    #[must_use]
    pub fn from_io(path: &Path, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => Self::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => Self::PermissionDenied(path.to_path_buf()),
            io::ErrorKind::AlreadyExists => Self::AlreadyExists(path.to_path_buf()),
            io::ErrorKind::NotADirectory => Self::NotADirectory(path.to_path_buf()),
            _ => Self::Io(error),
        }
    }
}

/// Abstraction over the blocking file system calls the collection store needs.
///
/// This trait allows substituting the file system in tests.
pub trait FileSystem: Send + Sync {
    /// Reads a file's contents as a UTF-8 string.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid UTF-8.
    fn read_file_string(&self, path: &Path) -> Result<String, FileSystemError>;

    /// Replaces the file at `path` with `contents`.
    ///
    /// Readers never observe a partially written file: either the old
    /// contents or the new ones.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    fn write_file_atomic(&self, path: &Path, contents: &[u8]) -> Result<(), FileSystemError>;

    /// Creates a directory and all parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    fn create_dir_all(&self, path: &Path) -> Result<(), FileSystemError>;

    /// Creates exactly one directory; its parent must exist.
    ///
    /// # Errors
    ///
    /// Returns [`FileSystemError::AlreadyExists`] if anything exists at `path`.
    fn create_dir(&self, path: &Path) -> Result<(), FileSystemError>;

    /// Checks if a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Checks if a path is a directory, following symlinks.
    fn is_dir(&self, path: &Path) -> bool;

    /// Checks if the path itself is a symbolic link.
    fn is_symlink(&self, path: &Path) -> bool;

    /// Lists entries in a directory, sorted by path.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be read.
    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>, FileSystemError>;
}
