//! Image discovery and format normalization within a post folder.
//!
//! Legacy rasters (PNG, JPEG) are re-encoded as WebP next to the original,
//! then the original is removed.

mod format;
mod normalizer;

pub use format::ImageFormatTag;
pub use normalizer::{normalize, Conversion, FailedConversion, Normalization};

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::walk::child_entries;

/// Regular files directly inside `folder`, sorted by name.
///
/// Entries that cannot be stat'ed are skipped.
pub(crate) fn list_files(folder: &Path) -> Result<Vec<PathBuf>> {
    Ok(child_entries(folder)?
        .into_iter()
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .collect())
}

/// Names of the target-format files the folder holds after `normalization`.
///
/// Planned conversion targets are included, so a dry run sees the same
/// listing a real run would produce.
pub fn target_files(folder: &Path, normalization: &Normalization) -> Result<Vec<String>> {
    let mut names: BTreeSet<String> = list_files(folder)?
        .iter()
        .filter(|path| ImageFormatTag::from_path(path) == Some(ImageFormatTag::TARGET))
        .filter_map(|path| path.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .collect();

    names.extend(normalization.converted.iter().map(|c| c.target.clone()));

    Ok(names.into_iter().collect())
}
