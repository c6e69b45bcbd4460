//! Error types for tree walking

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that stop a walk.
///
/// Permission denial while listing a directory is not represented here:
/// it is recovered by the walker (see [`crate::tree::Listing::Denied`]).
#[derive(Error, Debug)]
pub enum TreeError {
    /// The requested root does not exist.
    #[error("path does not exist: {}", .path.display())]
    NotFound { path: PathBuf },

    /// The requested root exists, but is not a directory.
    #[error("not a directory: {}", .path.display())]
    NotADirectory { path: PathBuf },

    /// A directory could not be enumerated for a reason other than
    /// missing permissions (e.g. it vanished mid-walk).
    #[error("unable to read directory {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing to the output sink failed.
    #[error("error writing output: {0}")]
    Output(#[from] io::Error),

    #[error("error serializing tree: {0}")]
    Json(#[from] serde_json::Error),
}

impl TreeError {
    /// Wrap an enumeration failure for `path`.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        let not_found = TreeError::NotFound {
            path: PathBuf::from("/missing"),
        };
        assert_eq!(not_found.to_string(), "path does not exist: /missing");

        let not_dir = TreeError::NotADirectory {
            path: PathBuf::from("/etc/hosts"),
        };
        assert_eq!(not_dir.to_string(), "not a directory: /etc/hosts");
    }

    #[test]
    fn test_io_error_keeps_source() {
        use std::error::Error as _;

        let err = TreeError::io("/gone", io::Error::new(io::ErrorKind::NotFound, "vanished"));
        assert!(err.to_string().contains("/gone"));
        assert!(err.source().is_some());
    }
}
