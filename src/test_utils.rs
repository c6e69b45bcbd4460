//! Test utilities for creating temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree for testing.
///
/// The tree lives under a named root directory inside a temp dir, so the
/// root line of the output is predictable. Everything is removed on drop;
/// directories locked with [`TestTree::lock_dir`] are unlocked first.
pub struct TestTree {
    dir: TempDir,
    root: PathBuf,
    locked: Vec<PathBuf>,
}

impl TestTree {
    /// Create an empty tree whose root directory is called `name`.
    pub fn new(name: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let root = dir.path().join(name);
        fs::create_dir(&root).expect("Failed to create root dir");
        Self {
            dir,
            root,
            locked: Vec::new(),
        }
    }

    /// Path to the tree's root directory.
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Path to the temp dir holding the root.
    pub fn parent(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add a directory (and any missing parents).
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.root.join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Remove all permissions from a directory.
    ///
    /// Returns false if the directory can still be listed afterwards (for
    /// example when running as root), in which case permission tests
    /// should skip their assertions.
    #[cfg(unix)]
    pub fn lock_dir(&mut self, path: &str) -> bool {
        use std::os::unix::fs::PermissionsExt;

        let full_path = self.add_dir(path);
        fs::set_permissions(&full_path, fs::Permissions::from_mode(0o000))
            .expect("Failed to set permissions");
        self.locked.push(full_path.clone());
        fs::read_dir(&full_path).is_err()
    }
}

impl Drop for TestTree {
    fn drop(&mut self) {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;

            for path in &self.locked {
                let _ = fs::set_permissions(path, fs::Permissions::from_mode(0o755));
            }
        }
    }
}
