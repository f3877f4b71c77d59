//! Social preview image reconciliation.
//!
//! A post may carry exactly one preview image, `<prefix><slug>.webp`. Any
//! single differently-named candidate is renamed to that; several candidates
//! without the canonical one among them are a conflict the tool refuses to
//! resolve on its own.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{Result, SyncError};
use crate::images::ImageFormatTag;

/// Canonical preview filename for a slug.
///
/// # Examples
///
/// ```
/// assert_eq!(slugsync::preview::canonical_filename("og-", "hello-world"), "og-hello-world.webp");
/// ```
pub fn canonical_filename(prefix: &str, slug: &str) -> String {
    format!("{}{}.{}", prefix, slug, ImageFormatTag::TARGET.extension())
}

/// Result of reconciling the preview image of one post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewOutcome {
    /// No candidate exists.
    Absent,
    /// The canonical file is already present.
    Canonical,
    /// The sole candidate was (or, under dry-run, would be) renamed.
    Renamed { from: String, to: String },
    /// Several candidates exist and none is canonical.
    Conflict { candidates: Vec<String> },
}

/// Reconcile the preview image among `target_files` of `folder`.
///
/// `target_files` are the names of target-format files after normalization;
/// candidates are those starting with `prefix`.
pub fn reconcile(
    folder: &Path,
    target_files: &[String],
    canonical: &str,
    prefix: &str,
    dry_run: bool,
) -> Result<PreviewOutcome> {
    let candidates: Vec<&String> = target_files
        .iter()
        .filter(|name| name.starts_with(prefix))
        .collect();

    match candidates.as_slice() {
        [] => Ok(PreviewOutcome::Absent),
        [only] if only.as_str() == canonical => Ok(PreviewOutcome::Canonical),
        [only] => {
            if dry_run {
                debug!("Would rename {} -> {}", only, canonical);
            } else {
                let from = folder.join(only.as_str());
                let to = folder.join(canonical);
                fs::rename(&from, &to).map_err(|source| SyncError::Rename {
                    from,
                    to,
                    source,
                })?;
                info!("Renamed {} -> {}", only, canonical);
            }
            Ok(PreviewOutcome::Renamed {
                from: only.to_string(),
                to: canonical.to_string(),
            })
        }
        many if many.iter().any(|name| name.as_str() == canonical) => {
            debug!(
                "{} preview candidates, canonical {} present",
                many.len(),
                canonical
            );
            Ok(PreviewOutcome::Canonical)
        }
        many => Ok(PreviewOutcome::Conflict {
            candidates: many.iter().map(|name| name.to_string()).collect(),
        }),
    }
}
