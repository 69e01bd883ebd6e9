//! Depth-bounded directory tree walking.
//!
//! The walk yields the files to archive together with their source-relative
//! entry names. Depth is counted in directory levels below the source root:
//! the root is depth 0, so a file directly inside it sits at depth 1. A
//! directory at the configured bound is treated as a leaf and never opened,
//! which keeps unreadable or enormous subtrees past the bound from being
//! touched at all.

use crate::ArchiveError;
use crate::Result;
use crate::config::ArchiveConfig;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Walks a directory tree, pruning at the configured depth bound.
///
/// Files inside directories at depth `max_depth` or deeper never surface;
/// directories themselves produce no entries. Symlinks surface with their
/// own kind when `follow_symlinks` is off so the caller can account for
/// skipping them.
///
/// # Examples
///
/// ```no_run
/// use dirzip_core::ArchiveConfig;
/// use dirzip_core::walker::DepthWalker;
/// use std::path::Path;
///
/// let config = ArchiveConfig::default().with_max_depth(2);
/// let walker = DepthWalker::new(Path::new("./project"), &config);
///
/// for entry in walker.walk() {
///     let entry = entry?;
///     println!("would add: {}", entry.archive_path.display());
/// }
/// # Ok::<(), dirzip_core::ArchiveError>(())
/// ```
pub struct DepthWalker<'a> {
    root: &'a Path,
    config: &'a ArchiveConfig,
}

impl<'a> DepthWalker<'a> {
    /// Creates a new walker rooted at the given directory.
    #[must_use]
    pub fn new(root: &'a Path, config: &'a ArchiveConfig) -> Self {
        Self { root, config }
    }

    /// Returns an iterator over the files eligible for archiving.
    ///
    /// The iterator:
    /// - Never descends into a directory at depth `max_depth` or deeper
    /// - Yields regular files with their archive-relative paths
    /// - Yields symlinks (when not following them) and non-regular files
    ///   so the caller can record the skip
    /// - Surfaces traversal failures as errors
    pub fn walk(&self) -> impl Iterator<Item = Result<WalkedEntry>> + '_ {
        let walker = WalkDir::new(self.root)
            .min_depth(1)
            .max_depth(self.config.depth_limit())
            .follow_links(self.config.follow_symlinks)
            .into_iter();

        walker.filter_map(move |entry| match entry {
            Ok(entry) => {
                if entry.file_type().is_dir() {
                    return None;
                }
                Some(self.build_entry(&entry))
            }
            Err(e) => Some(Err(ArchiveError::Io(std::io::Error::other(format!(
                "directory walk failed: {e}"
            ))))),
        })
    }

    fn build_entry(&self, entry: &walkdir::DirEntry) -> Result<WalkedEntry> {
        let path = entry.path().to_path_buf();

        let kind = if entry.file_type().is_symlink() {
            EntryKind::Symlink
        } else if entry.file_type().is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        };

        let archive_path = path
            .strip_prefix(self.root)
            .map_err(|_| {
                ArchiveError::Io(std::io::Error::other(format!(
                    "walked entry {} is outside {}",
                    path.display(),
                    self.root.display()
                )))
            })?
            .to_path_buf();

        Ok(WalkedEntry {
            path,
            archive_path,
            kind,
        })
    }
}

/// A walked entry with its computed archive path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkedEntry {
    /// Full filesystem path to the entry.
    pub path: PathBuf,

    /// Path to use inside the archive, relative to the source root.
    pub archive_path: PathBuf,

    /// What the entry is.
    pub kind: EntryKind,
}

/// Kind of walked entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Regular file, eligible for archiving.
    File,

    /// Symbolic link encountered while not following links.
    Symlink,

    /// Anything else (FIFO, socket, device); never archived.
    Other,
}
