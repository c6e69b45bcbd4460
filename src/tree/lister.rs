//! Listing a single directory level

use std::io;
use std::path::Path;

use tracing::{debug, trace};

use crate::error::TreeError;

use super::entry::FileSystemEntry;

/// Outcome of listing one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    /// Immediate children, each group sorted case-insensitively.
    Entries {
        dirs: Vec<FileSystemEntry>,
        files: Vec<FileSystemEntry>,
    },
    /// The host refused to enumerate the directory.
    Denied,
}

impl Listing {
    /// Directories then files, in display order.
    pub fn into_ordered(self) -> Vec<FileSystemEntry> {
        match self {
            Listing::Entries { mut dirs, files } => {
                dirs.extend(files);
                dirs
            }
            Listing::Denied => Vec::new(),
        }
    }
}

/// List the immediate children of `dir`, partitioned into directories and files.
///
/// Permission failures become [`Listing::Denied`]; any other failure is
/// returned as [`TreeError::Io`]. The directory handle is closed before this
/// returns.
pub fn list_entries(dir: &Path) -> Result<Listing, TreeError> {
    let read_dir = match std::fs::read_dir(dir) {
        Ok(rd) => rd,
        Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
            debug!(path = %dir.display(), "permission denied");
            return Ok(Listing::Denied);
        }
        Err(e) => return Err(TreeError::io(dir, e)),
    };

    let mut dirs = Vec::new();
    let mut files = Vec::new();

    for entry in read_dir {
        let entry = match entry {
            Ok(e) => e,
            Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
                debug!(path = %dir.display(), "permission denied while reading entries");
                return Ok(Listing::Denied);
            }
            Err(e) => return Err(TreeError::io(dir, e)),
        };

        let entry = FileSystemEntry::from_dir_entry(&entry);
        if entry.is_dir() {
            dirs.push(entry);
        } else {
            files.push(entry);
        }
    }

    dirs.sort_by_cached_key(FileSystemEntry::sort_key);
    files.sort_by_cached_key(FileSystemEntry::sort_key);

    trace!(
        path = %dir.display(),
        dirs = dirs.len(),
        files = files.len(),
        "listed directory"
    );

    Ok(Listing::Entries { dirs, files })
}
