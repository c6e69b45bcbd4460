//! Filesystem entries observed during a walk

use std::fs::{self, DirEntry};
use std::path::{Path, PathBuf};

/// Whether an entry is listed and entered as a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Dir,
    File,
}

/// A path seen during traversal.
///
/// Built fresh for every listing and never cached. If the filesystem changes
/// mid-walk the entry may no longer describe what is on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSystemEntry {
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
    /// The entry itself is a symbolic link (checked without following it).
    pub is_symlink: bool,
}

impl FileSystemEntry {
    /// Classify `path`, following symbolic links. A broken link is a file.
    pub fn from_path(path: PathBuf) -> Self {
        let kind = if path.is_dir() {
            EntryKind::Dir
        } else {
            EntryKind::File
        };
        let is_symlink = path.is_symlink();
        Self {
            name: entry_name(&path),
            path,
            kind,
            is_symlink,
        }
    }

    /// Classify a listed child from its directory entry.
    ///
    /// The entry's own file type decides, so plain files and directories
    /// cost no extra stat. Only symbolic links are resolved, and a link
    /// that cannot be resolved is a file.
    pub fn from_dir_entry(entry: &DirEntry) -> Self {
        let path = entry.path();
        let (is_dir, is_symlink) = match entry.file_type() {
            Ok(ft) if ft.is_symlink() => (fs::metadata(&path).is_ok_and(|m| m.is_dir()), true),
            Ok(ft) => (ft.is_dir(), false),
            Err(_) => (path.is_dir(), path.is_symlink()),
        };
        let kind = if is_dir { EntryKind::Dir } else { EntryKind::File };
        Self {
            name: entry.file_name().to_string_lossy().to_string(),
            path,
            kind,
            is_symlink,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }

    /// Key used to order siblings: case-folded name, then the raw name.
    pub(crate) fn sort_key(&self) -> (String, String) {
        (self.name.to_lowercase(), self.name.clone())
    }
}

/// Last path component, or the whole path when there is none (e.g. `/`).
pub fn entry_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}
