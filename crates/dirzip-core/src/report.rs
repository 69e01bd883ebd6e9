//! Archive run reporting and progress callbacks.

use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

/// Statistics gathered over one archive run.
///
/// # Examples
///
/// ```
/// use dirzip_core::ArchiveReport;
///
/// let mut report = ArchiveReport::new();
/// report.files_added = 10;
/// report.bytes_written = 1024;
/// assert!(!report.has_warnings());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ArchiveReport {
    /// Number of files written into the archive.
    pub files_added: usize,

    /// Number of entries skipped (symlinks when not following them).
    pub files_skipped: usize,

    /// Total uncompressed bytes read from the source tree.
    pub bytes_written: u64,

    /// Wall-clock duration of the run.
    pub duration: Duration,

    /// Warnings generated during the run.
    pub warnings: Vec<String>,
}

impl ArchiveReport {
    /// Creates a new empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a warning message to the report.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Returns whether any warnings were generated.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Returns the total number of entries the walk touched, archived or
    /// skipped.
    #[must_use]
    pub fn total_entries(&self) -> usize {
        self.files_added + self.files_skipped
    }
}

/// Result of a successful archive run: where the archive landed plus the
/// run statistics.
#[derive(Debug, Clone)]
pub struct ArchiveOutcome {
    /// Absolute path of the created archive file.
    pub archive_path: PathBuf,

    /// Statistics for the run.
    pub report: ArchiveReport,
}

/// Callback trait for per-file progress during an archive run.
///
/// The walk streams entries, so the total file count is not known up
/// front; callbacks fire as files are encountered. The trait requires
/// `Send` so callers may hand the archiver off to a worker thread.
///
/// # Examples
///
/// ```
/// use dirzip_core::ProgressCallback;
/// use std::path::Path;
///
/// struct LineProgress;
///
/// impl ProgressCallback for LineProgress {
///     fn on_file_start(&mut self, path: &Path) {
///         println!("Archiving: {}", path.display());
///     }
///
///     fn on_file_complete(&mut self, _path: &Path, _bytes: u64) {}
///
///     fn on_complete(&mut self) {
///         println!("done");
///     }
/// }
/// ```
pub trait ProgressCallback: Send {
    /// Called before a file starts streaming into the archive.
    fn on_file_start(&mut self, path: &Path);

    /// Called after a file has been fully written.
    ///
    /// `bytes` is the uncompressed size that was read from disk.
    fn on_file_complete(&mut self, path: &Path, bytes: u64);

    /// Called once after the archive has been finalized.
    fn on_complete(&mut self);
}

/// No-op implementation of `ProgressCallback`.
///
/// Use this when no progress reporting is needed but the API requires a
/// callback implementation.
#[derive(Debug, Default)]
pub struct NoopProgress;

impl ProgressCallback for NoopProgress {
    fn on_file_start(&mut self, _path: &Path) {}

    fn on_file_complete(&mut self, _path: &Path, _bytes: u64) {}

    fn on_complete(&mut self) {}
}
