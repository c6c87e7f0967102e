mod accounting;
mod cli;
mod config;
mod error;
mod state;

use anyhow::{Context, Result};
use clap::Parser;

use accounting::Sacct;
use cli::Cli;
use config::StatusConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let config = StatusConfig::load(&cli.config)
        .with_context(|| format!("failed to load config from {}", cli.config.display()))?;

    let job_id = cli.job_id();
    let outcome = accounting::translate(&Sacct::from_config(&config), job_id, &config)
        .with_context(|| format!("failed to determine status of job {job_id}"))?;

    println!("{outcome}");
    Ok(())
}
