//! Per-file progress output for CLI operations.

use console::Term;
use dirzip_core::ProgressCallback;
use std::path::Path;

/// Prints an `Archiving: <path>` line for each file added to the archive.
///
/// Lines go through [`console::Term`] so they behave the same whether
/// stdout is a terminal or a pipe.
pub struct LineProgress {
    term: Term,
}

impl LineProgress {
    /// Creates a progress printer writing to stdout.
    #[must_use]
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }
}

impl Default for LineProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressCallback for LineProgress {
    fn on_file_start(&mut self, path: &Path) {
        let _ = self
            .term
            .write_line(&format!("Archiving: {}", path.display()));
    }

    fn on_file_complete(&mut self, _path: &Path, _bytes: u64) {}

    fn on_complete(&mut self) {}
}
