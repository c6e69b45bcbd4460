//! StreamingWalker - writes each line as it is reached, without building the tree

use std::io;
use std::path::Path;

use tracing::debug;

use crate::error::TreeError;

use super::config::WalkerConfig;
use super::context::IndentContext;
use super::entry::FileSystemEntry;
use super::traversal::{BaseTraversal, Children};

/// Counts gathered during a walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkSummary {
    /// Directories below the root.
    pub dirs: usize,
    pub files: usize,
    /// Directories whose listing was refused.
    pub denied: usize,
}

/// Callback for streaming output - receives lines in display order.
pub trait StreamingOutput {
    /// The root line, printed once before anything else.
    fn output_root(&mut self, name: &str) -> io::Result<()>;

    /// One child entry. `context` is the indentation of the entry's own line.
    fn output_node(
        &mut self,
        entry: &FileSystemEntry,
        is_last: bool,
        context: &IndentContext,
    ) -> io::Result<()>;

    /// Stands in for the children of a directory that could not be listed.
    /// `context` is the indentation those children would have had.
    fn output_denied(&mut self, context: &IndentContext) -> io::Result<()>;

    fn finish(&mut self, summary: &WalkSummary) -> io::Result<()>;
}

/// Streaming tree walker that outputs directly without building tree in memory.
/// Uses O(depth) memory for the tree structure.
pub struct StreamingWalker {
    config: WalkerConfig,
}

impl StreamingWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Walk `root` depth-first, directories before files at every level.
    ///
    /// A directory that denies listing is reported through
    /// [`StreamingOutput::output_denied`] and the walk continues. Any other
    /// listing failure aborts the walk.
    pub fn walk_streaming<O: StreamingOutput>(
        &self,
        root: &Path,
        output: &mut O,
    ) -> Result<WalkSummary, TreeError> {
        let root = FileSystemEntry::from_path(root.to_path_buf());
        let mut summary = WalkSummary::default();

        output.output_root(&root.name)?;
        self.walk_dir_streaming(&root, &IndentContext::root(), output, &mut summary)?;
        output.finish(&summary)?;

        debug!(
            dirs = summary.dirs,
            files = summary.files,
            denied = summary.denied,
            "walk finished"
        );
        Ok(summary)
    }

    fn walk_dir_streaming<O: StreamingOutput>(
        &self,
        dir: &FileSystemEntry,
        context: &IndentContext,
        output: &mut O,
        summary: &mut WalkSummary,
    ) -> Result<(), TreeError> {
        let base = BaseTraversal::new(&self.config);

        let entries = match base.children(dir)? {
            Children::Entries(entries) => entries,
            Children::Denied => {
                summary.denied += 1;
                output.output_denied(context)?;
                return Ok(());
            }
        };

        let total = entries.len();
        for (i, entry) in entries.iter().enumerate() {
            let is_last = i == total - 1;
            output.output_node(entry, is_last, context)?;

            if entry.is_dir() {
                summary.dirs += 1;
                // Entry depth is one more than the markers above it
                if base.should_descend(entry, context.depth() + 1) {
                    let child_context = context.child(is_last);
                    self.walk_dir_streaming(entry, &child_context, output, summary)?;
                }
            } else {
                summary.files += 1;
            }
        }

        Ok(())
    }
}
