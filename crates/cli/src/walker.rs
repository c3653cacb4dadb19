//! Folder scanning — turns a selected folder into ordered file descriptors.
//!
//! Traversal is deterministic (entries sorted by file name at every level)
//! so repeated scans of an unchanged folder produce identical descriptor
//! order, and with it identical admission and prompt order.

use reviewclaw_core::file::FileDescriptor;
use std::path::Path;
use tracing::warn;
use walkdir::WalkDir;

/// Collect descriptors for every regular file under `root`.
///
/// Paths are relative to `root` and slash-normalized. Files whose metadata
/// size exceeds `max_read_bytes` get a descriptor with the stat size and no
/// content — the pipeline only needs the size to record the skip, so there
/// is no point loading an over-cap artifact into memory. Files that cannot
/// be read or stat'ed are dropped with a warning — an unreadable file is the
/// selection layer's concern, not an admission skip.
pub fn collect_descriptors(root: &Path, max_read_bytes: u64) -> Vec<FileDescriptor> {
    let mut descriptors = Vec::new();

    for entry in WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| match e {
            Ok(entry) => Some(entry),
            Err(err) => {
                warn!(error = %err, "Skipping unreadable directory entry");
                None
            }
        })
        .filter(|e| e.file_type().is_file())
    {
        let relative = match entry.path().strip_prefix(root) {
            Ok(rel) => slash_path(rel),
            Err(_) => continue,
        };

        let size = match entry.metadata() {
            Ok(meta) => meta.len(),
            Err(err) => {
                warn!(path = %relative, error = %err, "Failed to stat file");
                continue;
            }
        };

        if size > max_read_bytes {
            descriptors.push(FileDescriptor {
                path: relative,
                size,
                bytes: Vec::new(),
            });
            continue;
        }

        match std::fs::read(entry.path()) {
            Ok(bytes) => descriptors.push(FileDescriptor::new(relative, bytes)),
            Err(err) => warn!(path = %relative, error = %err, "Failed to read file"),
        }
    }

    descriptors
}

/// Join path components with `/` regardless of platform separator.
fn slash_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
