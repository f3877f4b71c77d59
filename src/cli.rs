use clap::Parser;
use std::path::PathBuf;

/// Root scanned when no path is given.
pub const DEFAULT_ROOT: &str = "log";

#[derive(Parser)]
#[command(name = "slugsync")]
#[command(author, version, about = "Sync blog images and metadata with the post slug")]
pub struct Cli {
    /// Post folder, or a root folder containing one subfolder per post
    #[arg(default_value = DEFAULT_ROOT)]
    pub path: PathBuf,

    /// Report what would change without touching any file
    #[arg(long)]
    pub dry_run: bool,

    /// Print one JSON object per post instead of a status line
    #[arg(long)]
    pub json: bool,

    /// Path to a TOML file overriding naming conventions
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
