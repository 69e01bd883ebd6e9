//! Path normalization and archive file naming.

use std::env;
use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

use chrono::Local;

use crate::ArchiveError;
use crate::Result;

/// Timestamp format embedded in archive names (year month day hour minute).
const STAMP_FORMAT: &str = "%Y%m%d%H%M";

/// Normalizes a path lexically: drops `.` components, resolves `..` against
/// preceding components, and collapses redundant separators.
///
/// Symlinks are not resolved and the filesystem is not consulted. A `..`
/// at the root of an absolute path disappears; on a relative path it is
/// kept, so `../x` stays `../x`.
#[must_use]
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(prefix) => normalized.push(prefix.as_os_str()),
            Component::RootDir => normalized.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                let popped = match normalized.components().next_back() {
                    Some(Component::Normal(_)) => normalized.pop(),
                    _ => false,
                };
                if !popped && !normalized.has_root() {
                    normalized.push(component.as_os_str());
                }
            }
            Component::Normal(part) => normalized.push(part),
        }
    }
    normalized
}

/// Makes a path absolute against the current working directory, then
/// normalizes it lexically.
///
/// # Errors
///
/// Returns an error if the current working directory cannot be determined.
pub fn absolutize(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(normalize_path(path))
    } else {
        let cwd = env::current_dir()?;
        Ok(normalize_path(&cwd.join(path)))
    }
}

/// Computes the archive file name for a source directory:
/// `<basename>_<YYYYMMDDHHMM>.zip`, stamped with the current local time.
///
/// # Errors
///
/// Returns [`ArchiveError::MissingBaseName`] if the source path has no
/// final component (e.g. the filesystem root).
pub fn archive_file_name(source: &Path) -> Result<String> {
    let base = source
        .file_name()
        .ok_or_else(|| ArchiveError::MissingBaseName {
            path: source.to_path_buf(),
        })?;
    let stamp = Local::now().format(STAMP_FORMAT);
    Ok(format!("{}_{stamp}.zip", base.to_string_lossy()))
}
