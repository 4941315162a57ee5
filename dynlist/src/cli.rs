//! Command line arguments and effective configuration

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use dynlist_core::Config;

/// dynlist - add and remove list items, each with its own counter
#[derive(Parser, Debug)]
#[command(name = "dynlist")]
#[command(about = "A terminal list of items, each with its own counter")]
pub struct Args {
    /// JSON config file (defaults to <config dir>/dynlist/config.json if present)
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Prefix for generated item ids
    #[arg(long, short)]
    pub prefix: Option<String>,

    /// Write logs to this file (logging is off without it)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log filter directive, e.g. "debug" or "dynlist_core=trace"; RUST_LOG wins if set
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    pub print_config: bool,
}

/// Defaults <- config file <- command line
pub fn resolve_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load_default().context("loading default config")?,
    };

    if let Some(prefix) = &args.prefix {
        config.id_prefix = prefix.clone();
    }

    config.validate().context("invalid configuration")?;
    Ok(config)
}
