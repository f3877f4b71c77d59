mod cli;

use slugsync::{
    config, discovery,
    report::{PostReport, RunSummary},
    sync::Syncer,
};

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "slugsync=trace".to_string()
        } else {
            "slugsync=warn".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config = config::load_config_or_default(cli.config.as_deref())?;

    run(&cli, &config)
}

fn run(cli: &Cli, config: &config::SyncConfig) -> Result<()> {
    let posts = discovery::discover(&cli.path, config)?;

    if !cli.json {
        println!("Starting sync on {} post(s)...\n", posts.len());
    }

    let syncer = Syncer::new(config, cli.dry_run);
    let mut summary = RunSummary::default();

    for post in &posts {
        let report = syncer.sync_post(post);
        summary.record(&report);
        emit(&report, cli.json)?;
    }

    tracing::info!(
        up_to_date = summary.up_to_date,
        fixed = summary.fixed,
        warnings = summary.warnings,
        "Sync finished for {} post(s)",
        summary.total()
    );

    Ok(())
}

fn emit(report: &PostReport, json: bool) -> Result<()> {
    if json {
        let line = serde_json::to_string(report)
            .with_context(|| format!("Failed to serialize report for {}", report.slug))?;
        println!("{}", line);
    } else {
        println!("{}", report);
    }
    Ok(())
}
