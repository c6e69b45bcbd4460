//! Twig - print a directory as a sorted, colored tree

pub mod error;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::TreeError;
pub use output::{DENIED_MARKER, OutputConfig, StreamingFormatter, print_json, write_json};
pub use tree::{
    FileSystemEntry, IndentContext, Listing, StreamingOutput, StreamingWalker, TreeNode,
    TreeWalker, WalkSummary, WalkerConfig, list_entries, resolve_root,
};
