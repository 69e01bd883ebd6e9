//! dirzip - archive a directory tree into a timestamped zip file.

mod cli;
mod error;
mod output;
mod progress;

use crate::cli::Cli;
use crate::output::OutputFormatter;
use crate::progress::LineProgress;
use anyhow::Result;
use clap::CommandFactory;
use clap::Parser;
use dirzip_core::ArchiveConfig;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "dirzip", &mut io::stdout());
        return ExitCode::SUCCESS;
    }

    let formatter = output::create_formatter(cli.json, cli.verbose, cli.quiet);
    match run(&cli, formatter.as_ref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            formatter.format_error(&err);
            ExitCode::FAILURE
        }
    }
}

/// Runs the archive operation described by the parsed arguments.
fn run(cli: &Cli, formatter: &dyn OutputFormatter) -> Result<()> {
    let mut config = ArchiveConfig::default()
        .with_max_depth(cli.depth)
        .with_follow_symlinks(cli.follow_symlinks);
    if let Some(level) = cli.compression_level {
        config = config.with_compression_level(level);
    }

    // JSON and quiet modes emit no per-file lines.
    let outcome = if cli.quiet || cli.json {
        dirzip_core::archive_directory(&cli.path, &cli.output_dir, &config)
    } else {
        let mut progress = LineProgress::new();
        dirzip_core::archive_directory_with_progress(
            &cli.path,
            &cli.output_dir,
            &config,
            &mut progress,
        )
    }
    .map_err(|err| error::convert_archive_error(err, &cli.path))?;

    formatter.format_archive_result(&outcome)
}
