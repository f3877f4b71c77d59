use serde::{Deserialize, Serialize};

/// Naming conventions used when reconciling a post folder.
///
/// Every field has a default, so an empty TOML file is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SyncConfig {
    /// Name of the post's index document (default: `index.qmd`)
    #[serde(default = "default_index_file")]
    pub index_file: String,

    /// Filename prefix marking social preview images (default: `og-`)
    #[serde(default = "default_preview_prefix")]
    pub preview_prefix: String,
}

fn default_index_file() -> String {
    "index.qmd".to_string()
}

fn default_preview_prefix() -> String {
    "og-".to_string()
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            index_file: default_index_file(),
            preview_prefix: default_preview_prefix(),
        }
    }
}
