//! Depth-bounded directory archiving library.
//!
//! `dirzip-core` archives a directory tree into a timestamped,
//! deflate-compressed zip file, pruning traversal at a configurable depth.
//! A failed run never leaves a partial archive behind: the file is removed
//! before the error reaches the caller.
//!
//! # Examples
//!
//! ```no_run
//! use dirzip_core::ArchiveConfig;
//! use dirzip_core::archive_directory;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ArchiveConfig::default().with_max_depth(2);
//! let outcome = archive_directory("./photos", "./backups", &config)?;
//! println!("Archived {} files", outcome.report.files_added);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod archiver;
pub mod config;
pub mod error;
pub mod naming;
pub mod report;
pub mod walker;

mod zip;

// Re-export main API types
pub use archiver::Archiver;
pub use archiver::archive_directory;
pub use archiver::archive_directory_with_progress;
pub use config::ArchiveConfig;
pub use config::DEFAULT_MAX_DEPTH;
pub use error::ArchiveError;
pub use error::Result;
pub use report::ArchiveOutcome;
pub use report::ArchiveReport;
pub use report::NoopProgress;
pub use report::ProgressCallback;
