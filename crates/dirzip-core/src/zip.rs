//! ZIP archive writing.
//!
//! Streams walked files into a deflate-compressed archive. Entries are
//! written in walk order; directories produce no entries of their own.

use crate::ArchiveError;
use crate::Result;
use crate::config::ArchiveConfig;
use crate::report::ArchiveReport;
use crate::report::ProgressCallback;
use crate::walker::DepthWalker;
use crate::walker::EntryKind;
use crate::walker::WalkedEntry;
use std::fs::File;
use std::io::Read;
use std::io::Seek;
use std::io::Write;
use std::path::Path;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Copy buffer size for streaming file contents into the archive.
const COPY_BUFFER_SIZE: usize = 64 * 1024;

/// Writes every eligible file under `source` into a ZIP archive on `writer`.
///
/// Counters and skip warnings accumulate into `report`; `progress` fires
/// around each file. The caller owns failure cleanup of the destination
/// file.
pub(crate) fn write_archive<W: Write + Seek>(
    writer: W,
    source: &Path,
    config: &ArchiveConfig,
    report: &mut ArchiveReport,
    progress: &mut dyn ProgressCallback,
) -> Result<()> {
    let mut zip = ZipWriter::new(writer);

    let options = if config.compression_level == Some(0) {
        SimpleFileOptions::default().compression_method(CompressionMethod::Stored)
    } else {
        let level = config.compression_level.unwrap_or(6);
        SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .compression_level(Some(i64::from(level)))
    };

    let mut buffer = vec![0u8; COPY_BUFFER_SIZE];
    let walker = DepthWalker::new(source, config);

    for entry in walker.walk() {
        let entry = entry?;
        match entry.kind {
            EntryKind::File => {
                progress.on_file_start(&entry.path);
                let bytes = add_file(&mut zip, &entry, options, &mut buffer)?;
                report.files_added += 1;
                report.bytes_written += bytes;
                progress.on_file_complete(&entry.path, bytes);
            }
            EntryKind::Symlink => {
                report.files_skipped += 1;
                report.add_warning(format!("skipped symlink: {}", entry.path.display()));
            }
            EntryKind::Other => {
                report.files_skipped += 1;
                report.add_warning(format!(
                    "skipped non-regular file: {}",
                    entry.path.display()
                ));
            }
        }
    }

    zip.finish()
        .map_err(|e| std::io::Error::other(format!("failed to finish archive: {e}")))?;

    Ok(())
}

/// Streams a single file into the archive, returning its uncompressed size.
fn add_file<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    entry: &WalkedEntry,
    options: SimpleFileOptions,
    buffer: &mut [u8],
) -> Result<u64> {
    let mut file = File::open(&entry.path)?;

    #[cfg(unix)]
    let file_options = {
        use std::os::unix::fs::PermissionsExt;
        options.unix_permissions(file.metadata()?.permissions().mode())
    };
    #[cfg(not(unix))]
    let file_options = options;

    let archive_name = normalize_zip_path(&entry.archive_path)?;
    zip.start_file(archive_name, file_options)
        .map_err(|e| std::io::Error::other(format!("failed to start entry in archive: {e}")))?;

    let mut bytes_written = 0u64;
    loop {
        let bytes_read = file.read(buffer)?;
        if bytes_read == 0 {
            break;
        }
        zip.write_all(&buffer[..bytes_read])?;
        bytes_written += bytes_read as u64;
    }

    Ok(bytes_written)
}

/// Normalizes an entry path for the ZIP format, which requires forward
/// slashes regardless of platform.
fn normalize_zip_path(path: &Path) -> Result<String> {
    let path_str = path.to_str().ok_or_else(|| {
        ArchiveError::Io(std::io::Error::other(format!(
            "entry path is not valid UTF-8: {}",
            path.display()
        )))
    })?;

    #[cfg(windows)]
    let normalized = path_str.replace('\\', "/");

    #[cfg(not(windows))]
    let normalized = path_str.to_string();

    Ok(normalized)
}
