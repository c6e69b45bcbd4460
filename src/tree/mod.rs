//! Directory tree walking logic
//!
//! This module provides tree walking capabilities for displaying directory structures.
//! It supports two main modes:
//!
//! - `StreamingWalker`: Streams lines to a `StreamingOutput` sink, uses O(depth) memory
//! - `TreeWalker`: Builds full tree in memory, required for JSON output
//!
//! Both read one directory level at a time through `list_entries`.

mod config;
mod context;
mod entry;
mod json_types;
mod lister;
mod streaming;
mod traversal;
mod utils;
mod walker;

// Re-export public types
pub use config::WalkerConfig;
pub use context::{BLANK, BRANCH, BranchMarker, IndentContext, LAST_BRANCH, VERTICAL, connector};
pub use entry::{EntryKind, FileSystemEntry, entry_name};
pub use json_types::TreeNode;
pub use lister::{Listing, list_entries};
pub use streaming::{StreamingOutput, StreamingWalker, WalkSummary};
pub use utils::{expand_tilde, resolve_root};
pub use walker::TreeWalker;
