//! Error types for archive creation operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `ArchiveError`.
pub type Result<T> = std::result::Result<T, ArchiveError>;

/// Errors that can occur while building a directory archive.
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Requested traversal depth is below the minimum of one level.
    #[error("maximum depth must be at least 1 (got {depth})")]
    InvalidDepth {
        /// The rejected depth value.
        depth: i64,
    },

    /// Requested compression level is outside the supported range.
    #[error("compression level must be between 0 and 9 (got {level})")]
    InvalidCompressionLevel {
        /// The rejected compression level.
        level: u8,
    },

    /// Source directory does not exist.
    #[error("source directory not found: {path}")]
    SourceNotFound {
        /// The missing source path.
        path: PathBuf,
    },

    /// Source path exists but is not a directory.
    #[error("source path is not a directory: {path}")]
    NotADirectory {
        /// The offending source path.
        path: PathBuf,
    },

    /// Source directory exists but cannot be read.
    #[error("source directory not readable: {path}")]
    SourceNotReadable {
        /// The unreadable source path.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Source path has no final component to derive the archive name from.
    #[error("cannot derive an archive name from source path: {path}")]
    MissingBaseName {
        /// The nameless source path.
        path: PathBuf,
    },
}

impl ArchiveError {
    /// Returns `true` if this error was raised by configuration validation,
    /// before any filesystem side effect.
    ///
    /// # Examples
    ///
    /// ```
    /// use dirzip_core::ArchiveError;
    ///
    /// let err = ArchiveError::InvalidDepth { depth: 0 };
    /// assert!(err.is_validation());
    ///
    /// let err = ArchiveError::SourceNotFound {
    ///     path: "missing".into(),
    /// };
    /// assert!(!err.is_validation());
    /// ```
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidDepth { .. } | Self::InvalidCompressionLevel { .. }
        )
    }

    /// Returns `true` if this error concerns the source directory itself
    /// rather than an individual file encountered during the walk.
    ///
    /// # Examples
    ///
    /// ```
    /// use dirzip_core::ArchiveError;
    ///
    /// let err = ArchiveError::NotADirectory {
    ///     path: "notes.txt".into(),
    /// };
    /// assert!(err.is_source_error());
    ///
    /// let err = ArchiveError::InvalidDepth { depth: -3 };
    /// assert!(!err.is_source_error());
    /// ```
    #[must_use]
    pub const fn is_source_error(&self) -> bool {
        matches!(
            self,
            Self::SourceNotFound { .. }
                | Self::NotADirectory { .. }
                | Self::SourceNotReadable { .. }
                | Self::MissingBaseName { .. }
        )
    }
}
