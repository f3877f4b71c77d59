mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<SyncConfig> {
    let expanded = shellexpand::tilde(&path.to_string_lossy()).into_owned();
    let path = Path::new(&expanded);

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: SyncConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;

    Ok(config)
}

/// Load config from an explicit path, or return the built-in conventions.
///
/// No default locations are searched.
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<SyncConfig> {
    match custom_path {
        Some(path) => load_config(path),
        None => Ok(SyncConfig::default()),
    }
}

/// Validate configuration
fn validate_config(config: &SyncConfig) -> Result<()> {
    if config.index_file.trim().is_empty() {
        anyhow::bail!("index_file cannot be empty");
    }
    if config.index_file.contains(['/', '\\']) {
        anyhow::bail!(
            "index_file must be a plain file name, got {:?}",
            config.index_file
        );
    }

    if config.preview_prefix.is_empty() {
        anyhow::bail!("preview_prefix cannot be empty");
    }
    if config.preview_prefix.contains(['/', '\\']) {
        anyhow::bail!(
            "preview_prefix must not contain path separators, got {:?}",
            config.preview_prefix
        );
    }

    Ok(())
}
