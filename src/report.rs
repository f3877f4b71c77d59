//! Per-post status records.
//!
//! Reconciliation produces one [`PostReport`] per post; rendering is left to
//! the caller through `Display` (text) or serde (JSON).

use std::fmt;

use serde::Serialize;

/// Classification of a post after a sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Nothing needed to change.
    UpToDate,
    /// One or more changes were made (or would be, under dry-run).
    Fixed,
    /// The post needs manual attention.
    Warning,
}

impl Status {
    fn label(&self) -> &'static str {
        match self {
            Self::UpToDate => "[OK]",
            Self::Fixed => "[FIX]",
            Self::Warning => "[WARN]",
        }
    }
}

/// Outcome of syncing one post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostReport {
    pub slug: String,
    pub status: Status,
    /// Changes made, or the reasons for a warning.
    pub details: Vec<String>,
    pub dry_run: bool,
}

impl PostReport {
    /// Fixed when `changes` is non-empty, up-to-date otherwise.
    pub fn from_changes(slug: impl Into<String>, changes: Vec<String>, dry_run: bool) -> Self {
        let status = if changes.is_empty() {
            Status::UpToDate
        } else {
            Status::Fixed
        };
        Self {
            slug: slug.into(),
            status,
            details: changes,
            dry_run,
        }
    }

    pub fn warning(slug: impl Into<String>, reasons: Vec<String>, dry_run: bool) -> Self {
        Self {
            slug: slug.into(),
            status: Status::Warning,
            details: reasons,
            dry_run,
        }
    }
}

impl fmt::Display for PostReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<6} {:<30} ", self.status.label(), self.slug)?;
        match self.status {
            Status::UpToDate => write!(f, "Up-to-date"),
            Status::Fixed => {
                write!(f, "{}", self.details.join(", "))?;
                if self.dry_run {
                    write!(f, " (DRY RUN)")?;
                }
                Ok(())
            }
            Status::Warning => write!(f, "{}", self.details.join(", ")),
        }
    }
}

/// Tally of post statuses over a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub up_to_date: usize,
    pub fixed: usize,
    pub warnings: usize,
}

impl RunSummary {
    pub fn record(&mut self, report: &PostReport) {
        match report.status {
            Status::UpToDate => self.up_to_date += 1,
            Status::Fixed => self.fixed += 1,
            Status::Warning => self.warnings += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.up_to_date + self.fixed + self.warnings
    }
}
