//! Configuration types for tree walkers

/// Configuration for tree walking behavior.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Directories at this depth are printed but not entered.
    pub max_depth: Option<usize>,
    pub dirs_only: bool,
    /// Enter symbolic links that point to directories.
    /// When false they are printed as directories but not entered.
    pub follow_links: bool,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            max_depth: None,
            dirs_only: false,
            follow_links: true,
        }
    }
}
