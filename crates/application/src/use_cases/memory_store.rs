//! In-memory `CollectionStore` for use case tests.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use hellorest_domain::{
    CollectionTree, REQUEST_EXTENSION, SavedRequest, TreeNode, collection_dir_name,
    request_file_stem,
};

use crate::ports::{CollectionError, CollectionStore, FileSystemError};

/// Flat map of path to entry; `None` marks a directory.
pub(crate) struct MemoryStore {
    root: PathBuf,
    entries: Mutex<BTreeMap<PathBuf, Option<SavedRequest>>>,
    unreadable: AtomicBool,
}

impl MemoryStore {
    pub(crate) fn new() -> Self {
        Self {
            root: PathBuf::from("/mem"),
            entries: Mutex::new(BTreeMap::new()),
            unreadable: AtomicBool::new(false),
        }
    }

    /// Writes keep working but every enumeration fails.
    pub(crate) fn with_unreadable_tree() -> Self {
        let store = Self::new();
        store.unreadable.store(true, Ordering::SeqCst);
        store
    }

    pub(crate) fn contains(&self, path: &Path) -> bool {
        self.entries
            .lock()
            .is_ok_and(|entries| entries.contains_key(path))
    }

    fn children_of(
        entries: &BTreeMap<PathBuf, Option<SavedRequest>>,
        dir: &Path,
    ) -> Vec<TreeNode> {
        let mut folders = Vec::new();
        let mut requests = Vec::new();
        for (path, entry) in entries.iter().filter(|(p, _)| p.parent() == Some(dir)) {
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            match entry {
                None => folders.push(TreeNode::Folder {
                    name: file_name,
                    path: path.clone(),
                    children: Self::children_of(entries, path),
                }),
                Some(_) => requests.push(TreeNode::Request {
                    name: file_name
                        .trim_end_matches(&format!(".{REQUEST_EXTENSION}"))
                        .to_string(),
                    path: path.clone(),
                }),
            }
        }
        folders.extend(requests);
        folders
    }
}

impl CollectionStore for MemoryStore {
    fn root(&self) -> &Path {
        &self.root
    }

    fn is_degraded(&self) -> bool {
        false
    }

    fn enumerate_tree(&self) -> Result<CollectionTree, CollectionError> {
        if self.unreadable.load(Ordering::SeqCst) {
            return Err(CollectionError::io(
                &self.root,
                FileSystemError::PermissionDenied(self.root.clone()),
            ));
        }
        let entries = self.entries.lock().map_err(|_| poisoned(&self.root))?;
        Ok(CollectionTree {
            root: self.root.clone(),
            children: Self::children_of(&entries, &self.root),
        })
    }

    fn create_collection(
        &self,
        name: &str,
        parent: Option<&Path>,
    ) -> Result<PathBuf, CollectionError> {
        let dir = parent.unwrap_or(self.root.as_path()).join(collection_dir_name(name)?);
        let mut entries = self.entries.lock().map_err(|_| poisoned(&dir))?;
        if entries.contains_key(&dir) {
            return Err(CollectionError::AlreadyExists { path: dir });
        }
        entries.insert(dir.clone(), None);
        Ok(dir)
    }

    fn save_request(
        &self,
        name: &str,
        request: &SavedRequest,
        parent: Option<&Path>,
    ) -> Result<PathBuf, CollectionError> {
        let file = parent
            .unwrap_or(self.root.as_path())
            .join(format!("{}.{REQUEST_EXTENSION}", request_file_stem(name)));
        let mut entries = self.entries.lock().map_err(|_| poisoned(&file))?;
        entries.insert(file.clone(), Some(request.clone()));
        Ok(file)
    }

    fn load_request(&self, path: &Path) -> Result<SavedRequest, CollectionError> {
        let entries = self.entries.lock().map_err(|_| poisoned(path))?;
        entries.get(path).cloned().flatten().ok_or_else(|| {
            CollectionError::io(path, FileSystemError::NotFound(path.to_path_buf()))
        })
    }
}

fn poisoned(path: &Path) -> CollectionError {
    CollectionError::io(
        path,
        FileSystemError::Io(std::io::Error::other("memory store lock poisoned")),
    )
}
