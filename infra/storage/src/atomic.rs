//! Atomic file replacement: unique temp write, `fsync`, then rename over the target.

use crate::error::{StorageError, StorageErrorExt};
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, warn};

/// Marker embedded in temporary file names.
pub(crate) const TMP_MARKER: &str = ".rostertmp.";

static TMP_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Writes `target` atomically.
///
/// 1. A symlinked `target` is resolved, so the linked document is replaced and the link kept.
/// 2. Parent directories are created when missing.
/// 3. `write` fills a unique temporary file next to the resolved target.
/// 4. The buffer is flushed and the file synced to disk.
/// 5. The temporary file is renamed over the resolved target.
///
/// The temporary file is removed on every failure path, so the previous content
/// of `target` (if any) stays intact.
pub(crate) fn write_atomic<F>(target: &Path, write: F) -> Result<(), StorageError>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<(), StorageError>,
{
    let resolved = resolve_target(target)?;
    let parent = resolved.parent().filter(|p| !p.as_os_str().is_empty());

    if let Some(parent) = parent {
        fs::create_dir_all(parent)
            .context(format!("Failed to create parent directories for {}", resolved.display()))?;
    }

    let temp = unique_tmp_path(&resolved);
    let result = write_temp(&temp, write).and_then(|()| swap(&temp, &resolved));

    if result.is_err() {
        if let Err(err) = fs::remove_file(&temp) {
            if err.kind() != std::io::ErrorKind::NotFound {
                warn!(path = %temp.display(), error = %err, "Failed to remove temporary file");
            }
        }
        return result;
    }

    if let Some(parent) = parent {
        sync_dir(parent);
    }

    debug!(path = %target.display(), resolved = %resolved.display(), "File saved atomically");
    Ok(())
}

/// Follows a symlink at `target` to the file it points to.
///
/// A dangling link resolves to its destination (relative destinations are taken from the
/// link's directory), so the save creates the linked file. Anything else is returned as is.
fn resolve_target(target: &Path) -> Result<PathBuf, StorageError> {
    match fs::symlink_metadata(target) {
        Ok(meta) if meta.file_type().is_symlink() => match target.canonicalize() {
            Ok(resolved) => Ok(resolved),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                let destination = fs::read_link(target)
                    .context(format!("Failed to read symlink {}", target.display()))?;
                Ok(match target.parent() {
                    Some(dir) if destination.is_relative() => dir.join(destination),
                    _ => destination,
                })
            },
            Err(err) => Err(StorageError::Io {
                source: err,
                context: Some(format!("Failed to resolve symlink {}", target.display()).into()),
            }),
        },
        _ => Ok(target.to_path_buf()),
    }
}

fn write_temp<F>(temp: &Path, write: F) -> Result<(), StorageError>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<(), StorageError>,
{
    let file = OpenOptions::new()
        .create_new(true)
        .write(true)
        .open(temp)
        .context(format!("Temp creation failed: {}", temp.display()))?;

    let mut writer = BufWriter::new(file);
    write(&mut writer)?;
    writer.flush().context("Flush failed")?;

    let file = writer.into_inner().map_err(|err| StorageError::Io {
        source: err.into_error(),
        context: Some("Flush failed".into()),
    })?;
    file.sync_all().context("Hardware sync failed")
}

fn swap(temp: &Path, target: &Path) -> Result<(), StorageError> {
    match fs::rename(temp, target) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == std::io::ErrorKind::AlreadyExists => {
            fs::remove_file(target)
                .context(format!("Failed to replace existing file: {}", target.display()))?;
            fs::rename(temp, target).context(format!(
                "Atomic swap failed: {} -> {}",
                temp.display(),
                target.display()
            ))
        },
        Err(err) => Err(StorageError::Io {
            source: err,
            context: Some(
                format!("Atomic swap failed: {} -> {}", temp.display(), target.display()).into(),
            ),
        }),
    }
}

#[cfg(unix)]
fn sync_dir(path: &Path) {
    match File::open(path) {
        Ok(dir) => {
            if let Err(err) = dir.sync_all() {
                warn!(path = %path.display(), error = %err, "Directory sync failed");
            }
        },
        Err(err) => warn!(path = %path.display(), error = %err, "Directory open failed"),
    }
}

#[cfg(not(unix))]
const fn sync_dir(_path: &Path) {}

fn unique_tmp_path(target: &Path) -> PathBuf {
    let counter = TMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let file_name = target.file_name().and_then(|s| s.to_str()).unwrap_or("document");
    target.with_file_name(format!("{file_name}{TMP_MARKER}{}.{counter}", std::process::id()))
}
