//! Root path resolution and validation

use std::path::{Path, PathBuf};

use crate::error::TreeError;

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match dirs::home_dir() {
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}

/// Resolve the user-supplied root to an absolute directory path.
///
/// Existing paths are canonicalized; missing ones are only made absolute so
/// the error can name them.
pub fn resolve_root(path: &Path) -> Result<PathBuf, TreeError> {
    let expanded = expand_tilde(path);
    let resolved = match expanded.canonicalize() {
        Ok(p) => p,
        Err(_) => std::path::absolute(&expanded).unwrap_or(expanded),
    };

    if !resolved.exists() {
        return Err(TreeError::NotFound { path: resolved });
    }
    if !resolved.is_dir() {
        return Err(TreeError::NotADirectory { path: resolved });
    }
    Ok(resolved)
}
