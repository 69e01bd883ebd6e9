//! JSON output formatting for machine consumption.

use crate::output::formatter::JsonOutput;
use crate::output::formatter::OutputFormatter;
use anyhow::Result;
use dirzip_core::ArchiveOutcome;
use serde::Serialize;
use std::io;
use std::io::Write;

/// Formatter emitting one pretty-printed JSON document per run.
pub struct JsonFormatter;

/// Payload describing a completed archive run.
#[derive(Serialize, Debug)]
struct ArchiveData {
    archive_path: String,
    files_added: usize,
    files_skipped: usize,
    bytes_written: u64,
    duration_ms: u128,
    warnings: Vec<String>,
}

impl JsonFormatter {
    fn output<T: Serialize>(envelope: &JsonOutput<T>) -> Result<()> {
        let json = serde_json::to_string_pretty(envelope)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_archive_result(&self, outcome: &ArchiveOutcome) -> Result<()> {
        let data = ArchiveData {
            archive_path: outcome.archive_path.display().to_string(),
            files_added: outcome.report.files_added,
            files_skipped: outcome.report.files_skipped,
            bytes_written: outcome.report.bytes_written,
            duration_ms: outcome.report.duration.as_millis(),
            warnings: outcome.report.warnings.clone(),
        };
        Self::output(&JsonOutput::success("archive", data))
    }

    fn format_error(&self, error: &anyhow::Error) {
        let envelope = JsonOutput::error("archive", format!("{error:#}"));
        if let Ok(json) = serde_json::to_string_pretty(&envelope) {
            let _ = writeln!(io::stdout(), "{json}");
        }
    }
}
