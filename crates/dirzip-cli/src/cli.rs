//! Command-line argument definitions.

use clap::Parser;
use clap_complete::Shell;
use dirzip_core::DEFAULT_MAX_DEPTH;
use std::path::PathBuf;

/// Command-line utility for depth-bounded directory archiving.
///
/// Walks a directory tree down to a configurable depth and packs every
/// regular file it finds into a timestamped zip archive.
#[derive(Parser, Debug)]
#[command(name = "dirzip")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Source directory to archive
    #[arg(short = 'p', long, value_name = "PATH", default_value = ".")]
    pub path: PathBuf,

    /// Directory the archive is written to, created if missing
    #[arg(
        short = 'o',
        long,
        alias = "output_dir",
        value_name = "PATH",
        default_value = "."
    )]
    pub output_dir: PathBuf,

    /// Maximum traversal depth below the source directory
    #[arg(
        short = 'd',
        long,
        value_name = "DEPTH",
        default_value_t = DEFAULT_MAX_DEPTH,
        allow_hyphen_values = true
    )]
    pub depth: i64,

    /// Deflate compression level (1-9)
    #[arg(
        short = 'l',
        long,
        value_name = "LEVEL",
        value_parser = clap::value_parser!(u8).range(1..=9)
    )]
    pub compression_level: Option<u8>,

    /// Archive the targets of symbolic links instead of skipping them
    #[arg(long)]
    pub follow_symlinks: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Generate shell completions and exit
    #[arg(long, value_name = "SHELL", value_enum)]
    pub completions: Option<Shell>,
}
