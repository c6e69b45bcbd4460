//! JSON serialization types for tree output

use std::path::PathBuf;

use serde::Serialize;

fn is_false(b: &bool) -> bool {
    !*b
}

/// TreeNode for JSON output - builds full tree in memory.
/// For console output, use StreamingWalker instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TreeNode {
    File {
        name: String,
        path: PathBuf,
    },
    Dir {
        name: String,
        path: PathBuf,
        children: Vec<TreeNode>,
        /// Listing was refused; `children` is empty.
        #[serde(skip_serializing_if = "is_false")]
        denied: bool,
    },
}

impl TreeNode {
    pub fn name(&self) -> &str {
        match self {
            TreeNode::File { name, .. } => name,
            TreeNode::Dir { name, .. } => name,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, TreeNode::Dir { .. })
    }

    pub fn children(&self) -> &[TreeNode] {
        match self {
            TreeNode::File { .. } => &[],
            TreeNode::Dir { children, .. } => children,
        }
    }
}
