//! JSON output formatting

use std::io::{self, Write};

use crate::error::TreeError;
use crate::tree::TreeNode;

/// Serialize a tree as pretty-printed JSON followed by a newline.
pub fn write_json<W: Write>(writer: &mut W, node: &TreeNode) -> Result<(), TreeError> {
    serde_json::to_writer_pretty(&mut *writer, node)?;
    writeln!(writer)?;
    Ok(())
}

/// Print tree node as pretty-printed JSON to stdout.
pub fn print_json(node: &TreeNode) -> Result<(), TreeError> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    write_json(&mut lock, node)?;
    lock.flush()?;
    Ok(())
}
