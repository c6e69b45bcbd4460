//! Streaming output formatter
//!
//! This module provides `StreamingFormatter` which writes tree lines as the
//! `StreamingWalker` reaches them, for console output.

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::{FileSystemEntry, IndentContext, StreamingOutput, WalkSummary, connector};

use super::config::OutputConfig;

/// Line standing in for the children of a directory that could not be listed.
pub const DENIED_MARKER: &str = "[permission denied]";

/// Streaming output formatter - writes each line without buffering the tree.
/// Implements the StreamingOutput trait for use with StreamingWalker.
///
/// Colors are cosmetic; with colors disabled the output is plain text.
pub struct StreamingFormatter<W: WriteColor> {
    config: OutputConfig,
    out: W,
}

impl StreamingFormatter<StandardStream> {
    /// Formatter writing to the process's stdout.
    ///
    /// `use_color` is taken as already decided; termcolor's own environment
    /// detection is not applied on top of it.
    ///
    /// Create this once per process and call [`StreamingFormatter::teardown`]
    /// before exiting.
    pub fn stdout(config: OutputConfig) -> Self {
        let choice = if config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        let out = StandardStream::stdout(choice);
        Self::new(out, config)
    }
}

impl<W: WriteColor> StreamingFormatter<W> {
    pub fn new(out: W, config: OutputConfig) -> Self {
        Self { config, out }
    }

    /// Reset colors and flush. Safe to call after a failed walk.
    pub fn teardown(&mut self) -> io::Result<()> {
        self.out.reset()?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_styled(&mut self, text: &str, spec: &ColorSpec) -> io::Result<()> {
        self.out.set_color(spec)?;
        write!(self.out, "{}", text)?;
        self.out.reset()
    }
}

fn root_spec() -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(Color::Blue)).set_bold(true);
    spec
}

fn dir_spec() -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(Color::Cyan)).set_bold(true).set_intense(true);
    spec
}

fn file_spec() -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(Color::Green));
    spec
}

fn denied_spec() -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(Color::Red));
    spec
}

impl<W: WriteColor> StreamingOutput for StreamingFormatter<W> {
    fn output_root(&mut self, name: &str) -> io::Result<()> {
        self.write_styled(name, &root_spec())?;
        writeln!(self.out)
    }

    fn output_node(
        &mut self,
        entry: &FileSystemEntry,
        is_last: bool,
        context: &IndentContext,
    ) -> io::Result<()> {
        write!(self.out, "{}{}", context.prefix(), connector(is_last))?;
        let spec = if entry.is_dir() { dir_spec() } else { file_spec() };
        self.write_styled(&entry.name, &spec)?;
        writeln!(self.out)
    }

    fn output_denied(&mut self, context: &IndentContext) -> io::Result<()> {
        write!(self.out, "{}", context.prefix())?;
        self.write_styled(DENIED_MARKER, &denied_spec())?;
        writeln!(self.out)
    }

    fn finish(&mut self, summary: &WalkSummary) -> io::Result<()> {
        if self.config.summary {
            writeln!(self.out)?;
            writeln!(
                self.out,
                "{} directories, {} files",
                summary.dirs, summary.files
            )?;
        }
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use termcolor::Buffer;

    use super::*;
    use crate::tree::EntryKind;

    fn entry(name: &str, kind: EntryKind) -> FileSystemEntry {
        FileSystemEntry {
            name: name.to_string(),
            path: PathBuf::from(name),
            kind,
            is_symlink: false,
        }
    }

    fn plain() -> StreamingFormatter<Buffer> {
        StreamingFormatter::new(
            Buffer::no_color(),
            OutputConfig {
                use_color: false,
                summary: false,
            },
        )
    }

    fn text(formatter: StreamingFormatter<Buffer>) -> String {
        String::from_utf8(formatter.into_inner().into_inner()).unwrap()
    }

    #[test]
    fn test_plain_lines() {
        let mut f = plain();
        let ctx = IndentContext::root();
        f.output_root("project").unwrap();
        f.output_node(&entry("Src", EntryKind::Dir), false, &ctx).unwrap();
        f.output_node(&entry("b.txt", EntryKind::File), true, &ctx.child(false))
            .unwrap();
        f.output_node(&entry("A.txt", EntryKind::File), true, &ctx).unwrap();
        f.finish(&WalkSummary::default()).unwrap();

        assert_eq!(
            text(f),
            "project\n├── Src\n│   └── b.txt\n└── A.txt\n"
        );
    }

    #[test]
    fn test_denied_marker_uses_child_indent() {
        let mut f = plain();
        let ctx = IndentContext::root();
        f.output_root("root").unwrap();
        f.output_node(&entry("locked", EntryKind::Dir), true, &ctx).unwrap();
        f.output_denied(&ctx.child(true)).unwrap();

        assert_eq!(text(f), "root\n└── locked\n    [permission denied]\n");
    }

    #[test]
    fn test_summary_line() {
        let mut f = StreamingFormatter::new(
            Buffer::no_color(),
            OutputConfig {
                use_color: false,
                summary: true,
            },
        );
        f.output_root("r").unwrap();
        f.finish(&WalkSummary {
            dirs: 2,
            files: 5,
            denied: 0,
        })
        .unwrap();

        assert_eq!(text(f), "r\n\n2 directories, 5 files\n");
    }

    #[test]
    fn test_colors_are_cosmetic() {
        let mut colored = StreamingFormatter::new(Buffer::ansi(), OutputConfig::default());
        colored.output_root("r").unwrap();
        colored
            .output_node(&entry("f.txt", EntryKind::File), true, &IndentContext::root())
            .unwrap();
        let raw = text(colored);
        assert!(raw.contains("\x1b["));

        // Strip escape sequences and compare with the plain rendering
        let mut stripped = String::new();
        let mut chars = raw.chars();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                for c in chars.by_ref() {
                    if c == 'm' {
                        break;
                    }
                }
            } else {
                stripped.push(c);
            }
        }
        assert_eq!(stripped, "r\n└── f.txt\n");
    }
}
