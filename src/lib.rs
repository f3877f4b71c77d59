//! Slugsync - keeps blog post assets aligned with the post slug
//!
//! Each post is a folder whose name is the slug. A sync converts legacy
//! rasters to WebP, names the social preview image `og-<slug>.webp`, and
//! points the `image` front-matter field of `index.qmd` at it.
//!
//! ```no_run
//! use std::path::Path;
//! use slugsync::{config::SyncConfig, discovery, sync::Syncer};
//!
//! let config = SyncConfig::default();
//! let syncer = Syncer::new(&config, true);
//! for post in discovery::discover(Path::new("log"), &config)? {
//!     println!("{}", syncer.sync_post(&post));
//! }
//! # Ok::<(), slugsync::SyncError>(())
//! ```

pub mod config;
pub mod discovery;
pub mod error;
pub mod images;
pub mod preview;
pub mod report;
pub mod sync;
mod walk;

pub use error::{Result, SyncError};
