//! Configuration for archive creation operations.

use crate::ArchiveError;
use crate::Result;

/// Default traversal depth bound.
pub const DEFAULT_MAX_DEPTH: i64 = 10;

/// Configuration for archive creation operations.
///
/// Controls how deep the directory walk descends, how hard the zip writer
/// compresses, and whether symlinks are followed.
///
/// # Examples
///
/// ```
/// use dirzip_core::ArchiveConfig;
///
/// // Defaults: depth 10, deflate level 6, symlinks skipped
/// let config = ArchiveConfig::default();
///
/// // Customize for specific needs
/// let custom = ArchiveConfig::default()
///     .with_max_depth(3)
///     .with_compression_level(9);
/// ```
#[derive(Debug, Clone)]
pub struct ArchiveConfig {
    /// Maximum traversal depth, counted in directory levels below the
    /// source root (the root itself is depth 0).
    ///
    /// Files inside directories at depth `max_depth` or deeper are not
    /// archived, and those directories are never opened. Values below 1
    /// fail validation.
    ///
    /// Default: `10`.
    pub max_depth: i64,

    /// Deflate compression level (0-9).
    ///
    /// Level 0 stores entries uncompressed; higher values trade speed for
    /// compression. `None` uses the zip writer's default.
    ///
    /// Default: `Some(6)` (balanced).
    pub compression_level: Option<u8>,

    /// Follow symlinks while walking the source tree.
    ///
    /// When `false`, symlinks are skipped with a warning rather than
    /// archived; following them may pull in files from outside the source
    /// directory or loop on cyclic links.
    ///
    /// Default: `false`.
    pub follow_symlinks: bool,
}

impl Default for ArchiveConfig {
    /// Creates an `ArchiveConfig` with default settings.
    ///
    /// Default values:
    /// - `max_depth`: `10`
    /// - `compression_level`: `Some(6)`
    /// - `follow_symlinks`: `false`
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            compression_level: Some(6),
            follow_symlinks: false,
        }
    }
}

impl ArchiveConfig {
    /// Creates a new `ArchiveConfig` with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum traversal depth.
    ///
    /// Out-of-range values are accepted here and rejected by `validate`,
    /// so callers forwarding user input get a typed error instead of a
    /// panic.
    #[must_use]
    pub fn with_max_depth(mut self, depth: i64) -> Self {
        self.max_depth = depth;
        self
    }

    /// Sets the compression level.
    ///
    /// # Panics
    ///
    /// Panics if the compression level is not in the range 0-9.
    /// Use `validate()` for non-panicking validation.
    #[must_use]
    pub fn with_compression_level(mut self, level: u8) -> Self {
        assert!((0..=9).contains(&level), "compression level must be 0-9");
        self.compression_level = Some(level);
        self
    }

    /// Sets whether to follow symlinks.
    #[must_use]
    pub fn with_follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `max_depth` is below 1
    /// - `compression_level` is set but not in range 0-9
    pub fn validate(&self) -> Result<()> {
        if self.max_depth < 1 {
            return Err(ArchiveError::InvalidDepth {
                depth: self.max_depth,
            });
        }
        if let Some(level) = self.compression_level
            && !(0..=9).contains(&level)
        {
            return Err(ArchiveError::InvalidCompressionLevel { level });
        }
        Ok(())
    }

    /// Returns the depth bound as a `usize` for the directory walker.
    ///
    /// Negative values (which fail `validate`) clamp to zero; values past
    /// `usize::MAX` saturate.
    #[must_use]
    pub fn depth_limit(&self) -> usize {
        usize::try_from(self.max_depth)
            .unwrap_or(if self.max_depth < 0 { 0 } else { usize::MAX })
    }
}
