//! Directory listing shared by discovery and image normalization.

use std::path::Path;

use tracing::warn;
use walkdir::{DirEntry, WalkDir};

use crate::error::{Result, SyncError};

/// Entries directly inside `folder`, sorted by name, links followed.
///
/// An entry that cannot be stat'ed (a dangling symlink, a vanished file) is
/// logged and skipped. Failing to read `folder` itself is an error.
pub(crate) fn child_entries(folder: &Path) -> Result<Vec<DirEntry>> {
    let mut entries = Vec::new();
    for entry in WalkDir::new(folder)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        match entry {
            Ok(entry) => entries.push(entry),
            Err(e) if e.path().is_some_and(|path| path != folder) => {
                warn!("Skipping unreadable entry: {}", e);
            }
            Err(e) => return Err(SyncError::list(folder, e)),
        }
    }
    Ok(entries)
}
