//! File system based collection store.
//!
//! Layout under the root:
//!
//! ```text
//! <root>/
//!   Users/                  collection (plain directory, no metadata)
//!     Admin/                nested collection
//!     Create User.json      saved request
//!   Health.json
//! ```

use std::io;
use std::path::{Path, PathBuf};

use hellorest_application::ports::{CollectionError, CollectionStore, FileSystem, FileSystemError};
use hellorest_domain::{
    CollectionTree, REQUEST_EXTENSION, SavedRequest, TreeNode, collection_dir_name,
    request_file_stem,
};
use tracing::{debug, warn};

use crate::persistence::StdFileSystem;
use crate::serialization::{from_json, to_json_stable};

/// File system based implementation of `CollectionStore`.
///
/// Construction never fails. If the root cannot be created the store starts
/// degraded: enumeration reports an empty tree and every write re-attempts
/// root creation, failing with that error while it persists.
pub struct FileSystemCollectionStore<F: FileSystem = StdFileSystem> {
    fs: F,
    root: PathBuf,
    init_error: Option<FileSystemError>,
}

impl FileSystemCollectionStore<StdFileSystem> {
    /// Opens a store on the real file system, creating `root` if needed.
    #[must_use]
    pub fn open(root: impl Into<PathBuf>) -> Self {
        Self::with_file_system(StdFileSystem::new(), root)
    }
}

impl<F: FileSystem> FileSystemCollectionStore<F> {
    /// Opens a store over the given file system implementation.
    #[must_use]
    pub fn with_file_system(fs: F, root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let init_error = match fs.create_dir_all(&root) {
            Ok(()) => None,
            Err(error) => {
                warn!(root = %root.display(), %error, "Collection root unavailable");
                Some(error)
            }
        };

        Self {
            fs,
            root,
            init_error,
        }
    }

    /// The error raised while creating the root, if any.
    #[must_use]
    pub const fn init_error(&self) -> Option<&FileSystemError> {
        self.init_error.as_ref()
    }

    /// Resolves a caller-supplied parent. Relative paths are taken from the
    /// root; `None` is the root itself.
    fn parent_dir(&self, parent: Option<&Path>) -> PathBuf {
        parent.map_or_else(|| self.root.clone(), |p| self.root.join(p))
    }

    /// Makes sure the root exists before a write.
    fn ensure_root(&self) -> Result<(), CollectionError> {
        if self.init_error.is_none() {
            return Ok(());
        }
        self.fs
            .create_dir_all(&self.root)
            .map_err(|e| CollectionError::io(&self.root, e))
    }

    /// Reads one directory level and recurses into sub-directories.
    ///
    /// Symlinked directories are left out and never entered, so a link back
    /// to an ancestor cannot loop. A sub-directory that cannot be read is
    /// dropped from the tree with a warning.
    fn read_folder(&self, dir: &Path) -> Result<Vec<TreeNode>, FileSystemError> {
        let entries = self.fs.read_dir(dir)?;

        let mut folders = Vec::new();
        let mut requests = Vec::new();

        for entry in entries {
            let Some(file_name) = entry.file_name().map(|n| n.to_string_lossy().into_owned())
            else {
                continue;
            };

            if file_name.starts_with('.') {
                continue;
            }

            if self.fs.is_dir(&entry) {
                if self.fs.is_symlink(&entry) {
                    debug!(path = %entry.display(), "Not following symlinked directory");
                    continue;
                }
                match self.read_folder(&entry) {
                    Ok(children) => folders.push(TreeNode::Folder {
                        name: file_name,
                        path: entry,
                        children,
                    }),
                    Err(error) => {
                        warn!(path = %entry.display(), %error, "Skipping unreadable folder");
                    }
                }
            } else if let Some(stem) = request_stem(&file_name) {
                requests.push(TreeNode::Request {
                    name: stem.to_string(),
                    path: entry,
                });
            }
        }

        folders.sort_by(|a, b| a.name().cmp(b.name()));
        requests.sort_by(|a, b| a.name().cmp(b.name()));
        folders.extend(requests);
        Ok(folders)
    }
}

/// Returns the request name for a file name ending in `.json`.
fn request_stem(file_name: &str) -> Option<&str> {
    file_name
        .strip_suffix(REQUEST_EXTENSION)
        .and_then(|rest| rest.strip_suffix('.'))
        .filter(|stem| !stem.is_empty())
}

impl<F: FileSystem> CollectionStore for FileSystemCollectionStore<F> {
    fn root(&self) -> &Path {
        &self.root
    }

    fn is_degraded(&self) -> bool {
        self.init_error.is_some()
    }

    fn enumerate_tree(&self) -> Result<CollectionTree, CollectionError> {
        if !self.fs.is_dir(&self.root) {
            debug!(root = %self.root.display(), "Root missing, returning empty tree");
            return Ok(CollectionTree::empty(&self.root));
        }

        let children = self
            .read_folder(&self.root)
            .map_err(|e| CollectionError::io(&self.root, e))?;
        debug!(root = %self.root.display(), entries = children.len(), "Enumerated collections");
        Ok(CollectionTree {
            root: self.root.clone(),
            children,
        })
    }

    fn create_collection(
        &self,
        name: &str,
        parent: Option<&Path>,
    ) -> Result<PathBuf, CollectionError> {
        let dir_name = collection_dir_name(name)?;
        self.ensure_root()?;

        let parent_dir = self.parent_dir(parent);
        let path = parent_dir.join(dir_name);
        if self.fs.exists(&path) {
            return Err(CollectionError::AlreadyExists { path });
        }

        self.fs
            .create_dir_all(&parent_dir)
            .map_err(|e| CollectionError::io(&parent_dir, e))?;
        match self.fs.create_dir(&path) {
            Ok(()) => {}
            Err(FileSystemError::AlreadyExists(_)) => {
                return Err(CollectionError::AlreadyExists { path });
            }
            Err(e) => return Err(CollectionError::io(&path, e)),
        }

        debug!(path = %path.display(), "Created collection");
        Ok(path)
    }

    fn save_request(
        &self,
        name: &str,
        request: &SavedRequest,
        parent: Option<&Path>,
    ) -> Result<PathBuf, CollectionError> {
        self.ensure_root()?;

        let path = self
            .parent_dir(parent)
            .join(format!("{}.{REQUEST_EXTENSION}", request_file_stem(name)));
        let json = to_json_stable(request).map_err(|e| {
            CollectionError::io(
                &path,
                FileSystemError::Io(io::Error::new(io::ErrorKind::InvalidData, e)),
            )
        })?;

        self.fs
            .write_file_atomic(&path, json.as_bytes())
            .map_err(|e| CollectionError::io(&path, e))?;

        debug!(path = %path.display(), "Saved request");
        Ok(path)
    }

    fn load_request(&self, path: &Path) -> Result<SavedRequest, CollectionError> {
        let content = self
            .fs
            .read_file_string(path)
            .map_err(|e| CollectionError::io(path, e))?;

        let request = from_json(&content).map_err(|e| CollectionError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        debug!(path = %path.display(), "Loaded request");
        Ok(request)
    }
}
