//! Common tree traversal logic shared by TreeWalker and StreamingWalker.

use tracing::debug;

use crate::error::TreeError;

use super::config::WalkerConfig;
use super::entry::FileSystemEntry;
use super::lister::{Listing, list_entries};

/// Children of one directory, ready to display.
pub enum Children {
    Entries(Vec<FileSystemEntry>),
    Denied,
}

/// Common base traversal functionality shared by both walker implementations.
pub struct BaseTraversal<'a> {
    pub config: &'a WalkerConfig,
}

impl<'a> BaseTraversal<'a> {
    pub fn new(config: &'a WalkerConfig) -> Self {
        Self { config }
    }

    /// Check if we're at maximum depth
    pub fn at_max_depth(&self, depth: usize) -> bool {
        self.config.max_depth.is_some_and(|max| depth >= max)
    }

    /// Whether a directory printed at `depth` should have its children listed.
    pub fn should_descend(&self, entry: &FileSystemEntry, depth: usize) -> bool {
        if !entry.is_dir() || self.at_max_depth(depth) {
            return false;
        }
        if entry.is_symlink && !self.config.follow_links {
            debug!(path = %entry.path.display(), "not following symlinked directory");
            return false;
        }
        true
    }

    /// List a directory and apply the display filters, directories first.
    pub fn children(&self, dir: &FileSystemEntry) -> Result<Children, TreeError> {
        let children = match list_entries(&dir.path)? {
            Listing::Denied => Children::Denied,
            Listing::Entries { dirs, .. } if self.config.dirs_only => Children::Entries(dirs),
            listing => Children::Entries(listing.into_ordered()),
        };
        Ok(children)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::tree::EntryKind;

    fn dir_entry(is_symlink: bool) -> FileSystemEntry {
        FileSystemEntry {
            name: "d".to_string(),
            path: PathBuf::from("d"),
            kind: EntryKind::Dir,
            is_symlink,
        }
    }

    #[test]
    fn test_at_max_depth() {
        let config = WalkerConfig {
            max_depth: Some(2),
            ..Default::default()
        };
        let base = BaseTraversal::new(&config);
        assert!(!base.at_max_depth(1));
        assert!(base.at_max_depth(2));
        assert!(base.at_max_depth(3));
    }

    #[test]
    fn test_unlimited_depth() {
        let config = WalkerConfig::default();
        let base = BaseTraversal::new(&config);
        assert!(!base.at_max_depth(1000));
    }

    #[test]
    fn test_symlinked_dirs_followed_by_default() {
        let config = WalkerConfig::default();
        let base = BaseTraversal::new(&config);
        assert!(base.should_descend(&dir_entry(false), 1));
        assert!(base.should_descend(&dir_entry(true), 1));

        let config = WalkerConfig {
            follow_links: false,
            ..Default::default()
        };
        let base = BaseTraversal::new(&config);
        assert!(base.should_descend(&dir_entry(false), 1));
        assert!(!base.should_descend(&dir_entry(true), 1));
    }

    #[test]
    fn test_files_never_descended() {
        let config = WalkerConfig::default();
        let base = BaseTraversal::new(&config);
        let file = FileSystemEntry {
            kind: EntryKind::File,
            ..dir_entry(false)
        };
        assert!(!base.should_descend(&file, 1));
    }
}
