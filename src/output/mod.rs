//! Tree formatting and display
//!
//! - `config` - Output configuration types
//! - `streaming` - Streaming formatter for console output
//! - `json` - JSON output

mod config;
mod json;
mod streaming;

pub use config::OutputConfig;
pub use json::{print_json, write_json};
pub use streaming::{DENIED_MARKER, StreamingFormatter};
