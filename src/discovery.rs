//! Post folder discovery.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::SyncConfig;
use crate::error::{Result, SyncError};
use crate::walk::child_entries;

/// A post folder. Its name is the slug every asset is aligned to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub slug: String,
    pub path: PathBuf,
}

impl Post {
    /// Build a post from its folder path.
    ///
    /// Paths without a final component (`.`, `..`) are resolved first so the
    /// slug is still the folder name.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let slug = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .or_else(|| {
                std::fs::canonicalize(&path)
                    .ok()?
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
            })
            .unwrap_or_default();

        Self { slug, path }
    }
}

/// Enumerate the posts under `root`.
///
/// When `root` itself holds the index document it is the only post.
/// Otherwise every immediate subdirectory is a post, sorted by name.
pub fn discover(root: &Path, config: &SyncConfig) -> Result<Vec<Post>> {
    if !root.exists() {
        return Err(SyncError::root_not_found(root));
    }

    if root.join(&config.index_file).is_file() {
        debug!("{:?} is a single post", root);
        return Ok(vec![Post::from_path(root)]);
    }

    if !root.is_dir() {
        warn!("{:?} is not a directory, nothing to sync", root);
        return Ok(Vec::new());
    }

    let posts: Vec<Post> = child_entries(root)?
        .into_iter()
        .filter(|entry| entry.file_type().is_dir())
        .map(|entry| Post::from_path(entry.into_path()))
        .collect();

    debug!("Discovered {} post(s) under {:?}", posts.len(), root);
    Ok(posts)
}
