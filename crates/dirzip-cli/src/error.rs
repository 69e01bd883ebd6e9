//! Error conversion utilities for CLI.
//!
//! Converts dirzip-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use dirzip_core::ArchiveError;
use std::path::Path;

/// Converts `ArchiveError` to a user-friendly anyhow error with context.
pub fn convert_archive_error(err: ArchiveError, source: &Path) -> anyhow::Error {
    match err {
        ArchiveError::InvalidDepth { depth } => {
            anyhow!(
                "Invalid maximum depth: {depth}\n\
                 HINT: The depth must be at least 1. A depth of 1 archives only files \
                 directly inside the source directory."
            )
        }
        ArchiveError::InvalidCompressionLevel { level } => {
            anyhow!(
                "Invalid compression level: {level}\n\
                 HINT: Supported levels range from 0 (store) to 9 (best compression)."
            )
        }
        ArchiveError::SourceNotFound { path } => {
            anyhow!(
                "Source directory not found: '{}'\n\
                 HINT: Check the --path argument; the directory must exist before archiving.",
                path.display()
            )
        }
        ArchiveError::NotADirectory { path } => {
            anyhow!(
                "Source path is not a directory: '{}'\n\
                 HINT: Only directories can be archived. Pass the containing directory instead.",
                path.display()
            )
        }
        ArchiveError::SourceNotReadable { path, source: cause } => {
            anyhow!(
                "Source directory not readable: '{}': {cause}\n\
                 HINT: Check the directory permissions.",
                path.display()
            )
        }
        ArchiveError::MissingBaseName { path } => {
            anyhow!(
                "Cannot derive an archive name from '{}'\n\
                 HINT: The source must be a named directory, not a filesystem root.",
                path.display()
            )
        }
        ArchiveError::Io(io_err) => {
            anyhow!("I/O error while archiving '{}': {io_err}", source.display())
        }
    }
}
