//! propdoc CLI - generate component documentation data.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "propdoc")]
#[command(about = "Generate component documentation data from React component sources")]
#[command(version)]
pub struct Cli {
    /// Regenerate whenever components or examples change
    #[arg(long)]
    watch: bool,

    /// Path to propdoc.toml config file
    #[arg(short, long, default_value = "propdoc.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG takes precedence
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    fmt().with_env_filter(filter).with_target(false).init();

    let settings = config::load_config(&cli.config)?;

    if cli.watch {
        commands::watch::run(settings).await?;
    } else {
        commands::generate::run(settings)?;
    }

    Ok(())
}
