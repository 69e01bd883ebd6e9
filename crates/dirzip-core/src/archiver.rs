//! The archive operation: validation, naming, writing, and cleanup.

use std::env;
use std::fs;
use std::fs::File;
use std::path::Path;
use std::path::PathBuf;
use std::time::Instant;

use crate::ArchiveError;
use crate::Result;
use crate::config::ArchiveConfig;
use crate::naming;
use crate::report::ArchiveOutcome;
use crate::report::ArchiveReport;
use crate::report::NoopProgress;
use crate::report::ProgressCallback;
use crate::zip;

/// Archives a directory into a timestamped zip file inside `output_dir`.
///
/// The archive is named `<basename(source)>_<YYYYMMDDHHMM>.zip`. The output
/// directory is created (with intermediates) if absent. Validation happens
/// before any filesystem side effect, and a failure after the archive file
/// has been opened removes the partial file before the error is returned.
///
/// # Examples
///
/// ```no_run
/// use dirzip_core::ArchiveConfig;
/// use dirzip_core::archive_directory;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ArchiveConfig::default().with_max_depth(3);
/// let outcome = archive_directory("./photos", "./backups", &config)?;
/// println!(
///     "{}: {} files",
///     outcome.archive_path.display(),
///     outcome.report.files_added
/// );
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns an error if:
/// - The configuration fails validation (depth below 1, bad level)
/// - The source is missing, not a directory, or not readable
/// - The source path has no final component to name the archive after
/// - Any I/O operation fails while walking or writing
pub fn archive_directory<P: AsRef<Path>, Q: AsRef<Path>>(
    source: P,
    output_dir: Q,
    config: &ArchiveConfig,
) -> Result<ArchiveOutcome> {
    archive_directory_with_progress(source, output_dir, config, &mut NoopProgress)
}

/// Archives a directory, reporting per-file progress through `progress`.
///
/// Behaves exactly like [`archive_directory`]; see there for semantics.
///
/// # Errors
///
/// Same conditions as [`archive_directory`].
pub fn archive_directory_with_progress<P: AsRef<Path>, Q: AsRef<Path>>(
    source: P,
    output_dir: Q,
    config: &ArchiveConfig,
    progress: &mut dyn ProgressCallback,
) -> Result<ArchiveOutcome> {
    let source = naming::absolutize(source.as_ref())?;
    let output_dir = naming::absolutize(output_dir.as_ref())?;

    config.validate()?;
    probe_source(&source)?;

    fs::create_dir_all(&output_dir)?;
    let archive_path = output_dir.join(naming::archive_file_name(&source)?);

    let start = Instant::now();
    let mut report = ArchiveReport::new();

    match write_fresh_archive(&archive_path, &source, config, &mut report, progress) {
        Ok(()) => {
            report.duration = start.elapsed();
            progress.on_complete();
            Ok(ArchiveOutcome {
                archive_path,
                report,
            })
        }
        Err(err) => {
            remove_partial(&archive_path);
            Err(err)
        }
    }
}

/// Checks that the source exists, is a directory, and is readable.
fn probe_source(source: &Path) -> Result<()> {
    let metadata = match fs::metadata(source) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ArchiveError::SourceNotFound {
                path: source.to_path_buf(),
            });
        }
        Err(e) => return Err(e.into()),
    };

    if !metadata.is_dir() {
        return Err(ArchiveError::NotADirectory {
            path: source.to_path_buf(),
        });
    }

    // metadata() succeeds on unreadable directories; opening the listing
    // actually exercises read permission.
    fs::read_dir(source).map_err(|e| ArchiveError::SourceNotReadable {
        path: source.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

fn write_fresh_archive(
    archive_path: &Path,
    source: &Path,
    config: &ArchiveConfig,
    report: &mut ArchiveReport,
    progress: &mut dyn ProgressCallback,
) -> Result<()> {
    let file = File::create(archive_path)?;
    zip::write_archive(file, source, config, report, progress)
}

/// Best-effort removal of a partially written archive.
fn remove_partial(archive_path: &Path) {
    if archive_path.exists() {
        let _ = fs::remove_file(archive_path);
    }
}

/// Builder for configuring and running an archive operation.
///
/// Source and output directory default to the current working directory
/// when unset, matching the command-line defaults.
///
/// # Examples
///
/// ```no_run
/// use dirzip_core::Archiver;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let outcome = Archiver::new()
///     .source("./photos")
///     .output_dir("./backups")
///     .max_depth(2)
///     .run()?;
/// println!("created {}", outcome.archive_path.display());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct Archiver {
    source: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    config: ArchiveConfig,
}

impl Archiver {
    /// Creates a new `Archiver` with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source directory.
    #[must_use]
    pub fn source<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.source = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the output directory.
    #[must_use]
    pub fn output_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.output_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the maximum traversal depth.
    ///
    /// Values below 1 are rejected when the operation runs, not here.
    #[must_use]
    pub fn max_depth(mut self, depth: i64) -> Self {
        self.config.max_depth = depth;
        self
    }

    /// Sets the deflate compression level (0-9).
    ///
    /// Out-of-range values are rejected when the operation runs.
    #[must_use]
    pub fn compression_level(mut self, level: u8) -> Self {
        self.config.compression_level = Some(level);
        self
    }

    /// Sets whether to follow symlinks.
    #[must_use]
    pub fn follow_symlinks(mut self, follow: bool) -> Self {
        self.config.follow_symlinks = follow;
        self
    }

    /// Replaces the whole configuration.
    #[must_use]
    pub fn config(mut self, config: ArchiveConfig) -> Self {
        self.config = config;
        self
    }

    /// Runs the archive operation.
    ///
    /// # Errors
    ///
    /// Same conditions as [`archive_directory`].
    pub fn run(self) -> Result<ArchiveOutcome> {
        self.run_with_progress(&mut NoopProgress)
    }

    /// Runs the archive operation with per-file progress reporting.
    ///
    /// # Errors
    ///
    /// Same conditions as [`archive_directory`].
    pub fn run_with_progress(self, progress: &mut dyn ProgressCallback) -> Result<ArchiveOutcome> {
        let source = match self.source {
            Some(path) => path,
            None => env::current_dir()?,
        };
        let output_dir = match self.output_dir {
            Some(path) => path,
            None => env::current_dir()?,
        };
        archive_directory_with_progress(source, output_dir, &self.config, progress)
    }
}
