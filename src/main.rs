//! CLI entry point for twig

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use tracing::{debug, level_filters::LevelFilter};
use twig::{
    OutputConfig, StreamingFormatter, StreamingWalker, TreeError, TreeWalker, WalkerConfig,
    print_json, resolve_root,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").is_ok_and(|t| t == "dumb") {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "twig")]
#[command(about = "Print a directory as a sorted, colored tree")]
#[command(version)]
struct Args {
    /// Directory to display
    path: PathBuf,

    /// Descend only N levels deep
    #[arg(short = 'L', long = "level")]
    level: Option<usize>,

    /// List directories only
    #[arg(short = 'd', long = "dirs-only")]
    dirs_only: bool,

    /// Print symbolic links to directories without entering them
    #[arg(long = "no-follow-links")]
    no_follow_links: bool,

    /// Finish with a directory and file count
    #[arg(long = "summary", conflicts_with = "json")]
    summary: bool,

    /// Output in JSON format
    #[arg(long = "json")]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Log diagnostics to stderr (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn run(args: &Args) -> Result<(), TreeError> {
    let root = resolve_root(&args.path)?;
    debug!(root = %root.display(), "resolved root");

    let walker_config = WalkerConfig {
        max_depth: args.level,
        dirs_only: args.dirs_only,
        follow_links: !args.no_follow_links,
    };

    if args.json {
        // JSON output requires full tree in memory (for serialization)
        let tree = TreeWalker::new(walker_config).walk(&root)?;
        return print_json(&tree);
    }

    let output_config = OutputConfig {
        use_color: should_use_color(args.color),
        summary: args.summary,
    };

    let mut formatter = StreamingFormatter::stdout(output_config);
    let result = StreamingWalker::new(walker_config).walk_streaming(&root, &mut formatter);
    // Reset colors even when the walk failed part-way
    let teardown = formatter.teardown();
    result?;
    teardown?;
    Ok(())
}

fn main() {
    // clap exits with status 2 on usage errors
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("twig: {}", e);
        process::exit(1);
    }
}
