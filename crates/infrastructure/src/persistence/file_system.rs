//! Real file system implementation.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use hellorest_application::ports::{FileSystem, FileSystemError};

/// Prefix of the temporary files written next to a file being replaced.
/// The leading dot keeps them out of tree enumeration.
const TEMP_PREFIX: &str = ".hellorest-";

/// Blocking file system implementation using `std::fs`.
#[derive(Debug, Clone, Default)]
pub struct StdFileSystem;

impl StdFileSystem {
    /// Creates a new `StdFileSystem`.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl FileSystem for StdFileSystem {
    fn read_file_string(&self, path: &Path) -> Result<String, FileSystemError> {
        fs::read_to_string(path).map_err(|e| FileSystemError::from_io(path, e))
    }

    fn write_file_atomic(&self, path: &Path, contents: &[u8]) -> Result<(), FileSystemError> {
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(dir).map_err(|e| FileSystemError::from_io(dir, e))?;

        let mut temp = tempfile::Builder::new()
            .prefix(TEMP_PREFIX)
            .suffix(".tmp")
            .tempfile_in(dir)
            .map_err(|e| FileSystemError::from_io(dir, e))?;
        temp.write_all(contents)
            .and_then(|()| temp.as_file().sync_all())
            .map_err(|e| FileSystemError::from_io(temp.path(), e))?;

        // The temp file is removed on drop if persisting fails.
        temp.persist(path)
            .map_err(|e| FileSystemError::from_io(path, e.error))?;
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), FileSystemError> {
        fs::create_dir_all(path).map_err(|e| FileSystemError::from_io(path, e))
    }

    fn create_dir(&self, path: &Path) -> Result<(), FileSystemError> {
        fs::create_dir(path).map_err(|e| FileSystemError::from_io(path, e))
    }

    fn exists(&self, path: &Path) -> bool {
        fs::symlink_metadata(path).is_ok()
    }

    fn is_dir(&self, path: &Path) -> bool {
        fs::metadata(path).is_ok_and(|m| m.is_dir())
    }

    fn is_symlink(&self, path: &Path) -> bool {
        fs::symlink_metadata(path).is_ok_and(|m| m.file_type().is_symlink())
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>, FileSystemError> {
        let mut entries = fs::read_dir(path)
            .and_then(|dir| {
                dir.map(|entry| entry.map(|e| e.path()))
                    .collect::<Result<Vec<_>, _>>()
            })
            .map_err(|e| FileSystemError::from_io(path, e))?;
        entries.sort();
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_atomic_write_replaces_contents() {
        let dir = tempdir().expect("temp dir");
        let file = dir.path().join("a.json");
        let fs = StdFileSystem::new();

        fs.write_file_atomic(&file, b"first").expect("write");
        fs.write_file_atomic(&file, b"second").expect("overwrite");

        assert_eq!(fs.read_file_string(&file).expect("read"), "second");
        assert_eq!(fs.read_dir(dir.path()).expect("list"), vec![file]);
    }

    #[test]
    fn test_atomic_write_creates_parent() {
        let dir = tempdir().expect("temp dir");
        let file = dir.path().join("nested/deeper/b.json");

        StdFileSystem::new()
            .write_file_atomic(&file, b"{}")
            .expect("write");
        assert!(file.is_file());
    }

    #[test]
    fn test_create_dir_reports_existing() {
        let dir = tempdir().expect("temp dir");
        let fs = StdFileSystem::new();
        let target = dir.path().join("x");

        fs.create_dir(&target).expect("first create");
        assert!(matches!(
            fs.create_dir(&target),
            Err(FileSystemError::AlreadyExists(_))
        ));
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempdir().expect("temp dir");
        let missing = dir.path().join("missing.json");
        assert!(matches!(
            StdFileSystem::new().read_file_string(&missing),
            Err(FileSystemError::NotFound(p)) if p == missing
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_detection() {
        let dir = tempdir().expect("temp dir");
        let target = dir.path().join("real");
        let link = dir.path().join("link");
        fs::create_dir(&target).expect("seed");
        std::os::unix::fs::symlink(&target, &link).expect("symlink");

        let fs = StdFileSystem::new();
        assert!(fs.is_dir(&link));
        assert!(fs.is_symlink(&link));
        assert!(!fs.is_symlink(&target));
        assert!(!fs.is_symlink(&dir.path().join("missing")));
    }

    #[test]
    fn test_read_dir_is_sorted() {
        let dir = tempdir().expect("temp dir");
        for name in ["c", "a", "b"] {
            fs::write(dir.path().join(name), "").expect("seed");
        }
        let names: Vec<_> = StdFileSystem::new()
            .read_dir(dir.path())
            .expect("list")
            .into_iter()
            .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }
}
