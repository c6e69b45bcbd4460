//! TreeWalker - builds full tree in memory for JSON output

use std::path::Path;

use crate::error::TreeError;

use super::config::WalkerConfig;
use super::entry::FileSystemEntry;
use super::json_types::TreeNode;
use super::traversal::{BaseTraversal, Children};

/// Tree walker that builds the full tree in memory.
/// Required for JSON output serialization.
/// For console output, use StreamingWalker instead.
pub struct TreeWalker {
    config: WalkerConfig,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    pub fn walk(&self, root: &Path) -> Result<TreeNode, TreeError> {
        let root = FileSystemEntry::from_path(root.to_path_buf());
        self.walk_dir(root, 0)
    }

    fn walk_dir(&self, dir: FileSystemEntry, depth: usize) -> Result<TreeNode, TreeError> {
        let base = BaseTraversal::new(&self.config);

        let (children, denied) = match base.children(&dir)? {
            Children::Entries(entries) => {
                let mut children = Vec::with_capacity(entries.len());
                for entry in entries {
                    children.push(self.walk_entry(entry, depth + 1)?);
                }
                (children, false)
            }
            Children::Denied => (Vec::new(), true),
        };

        Ok(TreeNode::Dir {
            name: dir.name,
            path: dir.path,
            children,
            denied,
        })
    }

    fn walk_entry(&self, entry: FileSystemEntry, depth: usize) -> Result<TreeNode, TreeError> {
        let base = BaseTraversal::new(&self.config);

        if base.should_descend(&entry, depth) {
            return self.walk_dir(entry, depth);
        }

        Ok(if entry.is_dir() {
            TreeNode::Dir {
                name: entry.name,
                path: entry.path,
                children: Vec::new(),
                denied: false,
            }
        } else {
            TreeNode::File {
                name: entry.name,
                path: entry.path,
            }
        })
    }
}
