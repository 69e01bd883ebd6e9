//! Human-readable output formatting with optional colors.

use crate::output::formatter::OutputFormatter;
use anyhow::Result;
use console::Term;
use console::style;
use dirzip_core::ArchiveOutcome;
use std::time::Duration;

/// Width of the separator line printed before the summary.
const SEPARATOR_WIDTH: usize = 50;

/// Human-readable formatter honoring verbosity and color settings.
pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
}

impl HumanFormatter {
    /// Creates a formatter for the given verbosity flags.
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
        }
    }

    /// Formats a duration as zero-padded `HH:MM:SS`.
    ///
    /// Hours count the full elapsed time and do not wrap at 24, so a run
    /// of twenty-five hours renders as `25:00:00`.
    fn format_hms(duration: Duration) -> String {
        let total = duration.as_secs();
        let hours = total / 3600;
        let minutes = (total % 3600) / 60;
        let seconds = total % 60;
        format!("{hours:02}:{minutes:02}:{seconds:02}")
    }

    /// Formats a byte count in human-readable units.
    fn format_size(bytes: u64) -> String {
        const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
        let mut size = bytes as f64;
        let mut unit = 0;
        while size >= 1024.0 && unit < UNITS.len() - 1 {
            size /= 1024.0;
            unit += 1;
        }
        if unit == 0 {
            format!("{bytes} B")
        } else {
            format!("{size:.1} {}", UNITS[unit])
        }
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_archive_result(&self, outcome: &ArchiveOutcome) -> Result<()> {
        if self.quiet {
            return Ok(());
        }
        let report = &outcome.report;

        let _ = self.term.write_line(&"-".repeat(SEPARATOR_WIDTH));

        let created = format!("Archive created: {}", outcome.archive_path.display());
        if self.use_colors {
            let _ = self
                .term
                .write_line(&format!("{} {created}", style("✓").green().bold()));
        } else {
            let _ = self.term.write_line(&created);
        }

        let _ = self.term.write_line(&format!(
            "Elapsed time: {}",
            Self::format_hms(report.duration)
        ));

        if self.verbose {
            let _ = self
                .term
                .write_line(&format!("Files archived: {}", report.files_added));
            if report.files_skipped > 0 {
                let _ = self
                    .term
                    .write_line(&format!("Files skipped: {}", report.files_skipped));
            }
            let _ = self.term.write_line(&format!(
                "Total size: {}",
                Self::format_size(report.bytes_written)
            ));
        }

        if report.has_warnings() {
            for warning in &report.warnings {
                if self.use_colors {
                    let _ = self
                        .term
                        .write_line(&format!("{} {warning}", style("⚠").yellow().bold()));
                } else {
                    let _ = self.term.write_line(&format!("WARNING: {warning}"));
                }
            }
        }

        Ok(())
    }

    fn format_error(&self, error: &anyhow::Error) {
        // Errors go to stderr and are always shown, even in quiet mode
        let term = Term::stderr();
        if console::colors_enabled_stderr() {
            let _ = term.write_line(&format!("{} {error:?}", style("ERROR:").red().bold()));
        } else {
            let _ = term.write_line(&format!("ERROR: {error:?}"));
        }
    }
}
