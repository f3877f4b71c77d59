//! Error types for slugsync.

use std::path::{Path, PathBuf};

/// Result type alias using [`SyncError`].
pub type Result<T> = std::result::Result<T, SyncError>;

/// Errors that can occur while reconciling posts.
///
/// Only [`SyncError::RootNotFound`] is fatal to a run; every other variant is
/// caught at the post boundary and reported as a warning for that post.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// The root path handed to discovery does not exist.
    #[error("path {} not found", path.display())]
    RootNotFound { path: PathBuf },

    /// A directory could not be listed.
    #[error("failed to list {}: {source}", path.display())]
    List {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// A file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A rename within a post folder failed.
    #[error("failed to rename {} -> {}: {source}", from.display(), to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file could not be removed.
    #[error("failed to remove {}: {source}", path.display())]
    Remove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Decoding an image failed.
    #[error("image error for {}: {source}", path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The WebP encoder rejected an image.
    #[error("failed to encode {}: {message}", path.display())]
    Encode { path: PathBuf, message: String },
}

impl SyncError {
    /// Create a root not found error.
    pub fn root_not_found(path: impl Into<PathBuf>) -> Self {
        Self::RootNotFound { path: path.into() }
    }

    /// Create a read error.
    pub fn read(path: &Path, source: std::io::Error) -> Self {
        Self::Read {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Create a write error.
    pub fn write(path: &Path, source: std::io::Error) -> Self {
        Self::Write {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Create a remove error.
    pub fn remove(path: &Path, source: std::io::Error) -> Self {
        Self::Remove {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Create an image codec error.
    pub fn image(path: &Path, source: image::ImageError) -> Self {
        Self::Image {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Create a WebP encoding error.
    pub fn encode(path: &Path, message: impl Into<String>) -> Self {
        Self::Encode {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }

    /// Create a listing error.
    pub fn list(path: &Path, source: walkdir::Error) -> Self {
        Self::List {
            path: path.to_path_buf(),
            source,
        }
    }
}
