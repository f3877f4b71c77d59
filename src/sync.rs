//! Per-post reconciliation pipeline.
//!
//! Each post runs normalize → preview → front matter to completion before the
//! next one starts. Errors never escape a post: they become a warning report.

use std::fs;
use std::path::Path;

use slugsync_frontmatter::{Document, FieldChange};
use tracing::{debug, info, warn};

use crate::config::SyncConfig;
use crate::discovery::Post;
use crate::error::{Result, SyncError};
use crate::images;
use crate::preview::{self, PreviewOutcome};
use crate::report::PostReport;

/// Front-matter key that references the preview image.
pub const IMAGE_FIELD: &str = "image";

/// Reconciles posts according to a [`SyncConfig`].
pub struct Syncer<'a> {
    config: &'a SyncConfig,
    dry_run: bool,
}

impl<'a> Syncer<'a> {
    pub fn new(config: &'a SyncConfig, dry_run: bool) -> Self {
        Self { config, dry_run }
    }

    /// Reconcile one post. Always yields exactly one report.
    pub fn sync_post(&self, post: &Post) -> PostReport {
        info!(slug = %post.slug, dry_run = self.dry_run, "Syncing post");

        match self.try_sync_post(post) {
            Ok(report) => report,
            Err(e) => {
                warn!(slug = %post.slug, "Sync failed: {}", e);
                PostReport::warning(&post.slug, vec![e.to_string()], self.dry_run)
            }
        }
    }

    fn try_sync_post(&self, post: &Post) -> Result<PostReport> {
        let canonical = preview::canonical_filename(&self.config.preview_prefix, &post.slug);
        let mut changes = Vec::new();

        let normalization = images::normalize(&post.path, self.dry_run)?;
        let failures: Vec<String> = normalization
            .failed
            .iter()
            .map(|failed| format!("Failed to convert {}", failed.source))
            .collect();
        if normalization.converted_any() {
            changes.push("Converted images to WebP".to_string());
        }

        let target_files = images::target_files(&post.path, &normalization)?;
        match preview::reconcile(
            &post.path,
            &target_files,
            &canonical,
            &self.config.preview_prefix,
            self.dry_run,
        )? {
            PreviewOutcome::Conflict { candidates } => {
                warn!(slug = %post.slug, ?candidates, "Ambiguous preview images");
                let mut reasons = failures;
                reasons.push(format!(
                    "Multiple '{}' files found ({}). Manual fix needed.",
                    self.config.preview_prefix,
                    candidates.join(", ")
                ));
                return Ok(PostReport::warning(&post.slug, reasons, self.dry_run));
            }
            PreviewOutcome::Renamed { from, to } => {
                changes.push(format!("Renamed {} -> {}", from, to));
            }
            PreviewOutcome::Absent | PreviewOutcome::Canonical => {}
        }

        let index = post.path.join(&self.config.index_file);
        if index.is_file() {
            match self.sync_index(&index, &canonical)? {
                FieldChange::Updated { .. } => {
                    changes.push(format!("Updated {} property", self.config.index_file));
                }
                FieldChange::Injected { .. } => {
                    changes.push("Injected missing image property".to_string());
                }
                FieldChange::Unchanged | FieldChange::NoBlock => {}
            }
        } else {
            debug!(slug = %post.slug, "No {} found", self.config.index_file);
        }

        if !failures.is_empty() {
            let mut reasons = failures;
            reasons.extend(changes);
            return Ok(PostReport::warning(&post.slug, reasons, self.dry_run));
        }

        Ok(PostReport::from_changes(&post.slug, changes, self.dry_run))
    }

    /// Point the index document's image field at `canonical`.
    ///
    /// The document is rewritten in full, without a byte-order mark, only
    /// when the field changed.
    fn sync_index(&self, index: &Path, canonical: &str) -> Result<FieldChange> {
        let text = fs::read_to_string(index).map_err(|e| SyncError::read(index, e))?;
        let mut document = Document::parse(&text);

        let change = document.sync_field(IMAGE_FIELD, canonical);
        match &change {
            FieldChange::NoBlock => debug!("{:?} has no front matter block", index),
            FieldChange::Unchanged => {}
            FieldChange::Updated { previous, .. } => {
                debug!("{}: {:?} -> {:?}", IMAGE_FIELD, previous, canonical)
            }
            FieldChange::Injected { line } => {
                debug!("{}: injected at line {}", IMAGE_FIELD, line + 1)
            }
        }

        if change.is_modified() && !self.dry_run {
            fs::write(index, document.render()).map_err(|e| SyncError::write(index, e))?;
        }

        Ok(change)
    }
}
