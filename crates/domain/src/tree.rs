//! Collection tree snapshot.
//!
//! A tree is an owned copy of what was on disk at enumeration time. It
//! keeps no link back to the store; observing later changes requires a new
//! enumeration.

use std::path::{Path, PathBuf};

/// A node in the collection tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    /// A collection directory.
    Folder {
        /// Directory name.
        name: String,
        /// Full path to the directory.
        path: PathBuf,
        /// Sub-collections first, then requests, each sorted by name.
        children: Vec<TreeNode>,
    },
    /// A saved request file.
    Request {
        /// File name without the extension.
        name: String,
        /// Full path to the file.
        path: PathBuf,
    },
}

impl TreeNode {
    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Folder { name, .. } | Self::Request { name, .. } => name,
        }
    }

    /// Returns the path on disk.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Folder { path, .. } | Self::Request { path, .. } => path,
        }
    }

    /// Returns true for folders.
    #[must_use]
    pub const fn is_folder(&self) -> bool {
        matches!(self, Self::Folder { .. })
    }

    /// Returns the children of a folder; requests have none.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        match self {
            Self::Folder { children, .. } => children,
            Self::Request { .. } => &[],
        }
    }

    fn request_count(&self) -> usize {
        match self {
            Self::Folder { children, .. } => children.iter().map(Self::request_count).sum(),
            Self::Request { .. } => 1,
        }
    }
}

/// Kind of a flattened tree entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeEntryKind {
    /// A collection directory.
    Folder,
    /// A saved request.
    Request,
}

/// A tree node flattened for list rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    /// Display name.
    pub name: String,
    /// Path on disk.
    pub path: PathBuf,
    /// Nesting depth, 0 for direct children of the root.
    pub depth: usize,
    /// Folder or request.
    pub kind: TreeEntryKind,
}

/// Snapshot of every collection and request under a store root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionTree {
    /// The store root the snapshot was taken from.
    pub root: PathBuf,
    /// Top-level nodes, ordered like folder children.
    pub children: Vec<TreeNode>,
}

impl CollectionTree {
    /// Creates an empty tree for `root`.
    #[must_use]
    pub fn empty(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            children: Vec::new(),
        }
    }

    /// Returns true if the tree has no folders and no requests.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Counts requests at every depth.
    #[must_use]
    pub fn request_count(&self) -> usize {
        self.children.iter().map(TreeNode::request_count).sum()
    }

    /// Finds the first request with the given name, depth first.
    #[must_use]
    pub fn find_request(&self, name: &str) -> Option<&TreeNode> {
        fn walk<'a>(nodes: &'a [TreeNode], name: &str) -> Option<&'a TreeNode> {
            nodes.iter().find_map(|node| match node {
                TreeNode::Request { name: n, .. } if n == name => Some(node),
                TreeNode::Folder { children, .. } => walk(children, name),
                TreeNode::Request { .. } => None,
            })
        }
        walk(&self.children, name)
    }

    /// Flattens the tree in display order (pre-order).
    #[must_use]
    pub fn flatten(&self) -> Vec<TreeEntry> {
        fn push(nodes: &[TreeNode], depth: usize, out: &mut Vec<TreeEntry>) {
            for node in nodes {
                let kind = if node.is_folder() {
                    TreeEntryKind::Folder
                } else {
                    TreeEntryKind::Request
                };
                out.push(TreeEntry {
                    name: node.name().to_string(),
                    path: node.path().to_path_buf(),
                    depth,
                    kind,
                });
                push(node.children(), depth + 1, out);
            }
        }

        let mut entries = Vec::new();
        push(&self.children, 0, &mut entries);
        entries
    }
}
