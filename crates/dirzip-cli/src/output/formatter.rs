//! Output formatter trait and the shared JSON envelope.

use anyhow::Result;
use dirzip_core::ArchiveOutcome;
use serde::Serialize;

/// Formats operation results for a particular output mode.
pub trait OutputFormatter {
    /// Formats the outcome of a completed archive run.
    fn format_archive_result(&self, outcome: &ArchiveOutcome) -> Result<()>;

    /// Formats an error. Errors are shown even in quiet mode.
    fn format_error(&self, error: &anyhow::Error);
}

/// Status of a JSON-reported operation.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Operation completed successfully.
    Success,
    /// Operation failed.
    Error,
}

/// Envelope wrapping every JSON document the CLI emits.
#[derive(Serialize, Debug)]
pub struct JsonOutput<T: Serialize> {
    /// Name of the operation that produced this output.
    pub operation: String,
    /// Whether the operation succeeded.
    pub status: Status,
    /// Operation-specific payload, present on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error message, present on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> JsonOutput<T> {
    /// Creates a success envelope carrying `data`.
    pub fn success(operation: impl Into<String>, data: T) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Success,
            data: Some(data),
            error: None,
        }
    }
}

impl JsonOutput<()> {
    /// Creates an error envelope carrying `message`.
    pub fn error(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Error,
            data: None,
            error: Some(message.into()),
        }
    }
}
