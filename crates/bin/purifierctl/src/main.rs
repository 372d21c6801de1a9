//! # purifierctl: purifier card runner
//!
//! Composition root that wires the JSON registry adapter into the
//! application services and prints the result of one card operation.
//!
//! ## Responsibilities
//! - Parse the command line and configuration (file, env vars)
//! - Install the `tracing` subscriber
//! - Load the registry snapshot and the persisted card configuration
//! - Run the requested editor, view or button use-case
//! - Print JSON to stdout and, with `--write`, persist an edited config
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer: no domain logic belongs here.

mod commands;
mod config;

use std::path::{Path, PathBuf};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use purifier_adapter_registry_json::JsonSnapshotRegistry;
use purifier_app::services::discovery_service::DiscoveryService;
use purifier_domain::card_config::PurifierConfig;

use crate::commands::Command;
use crate::config::Config;

#[derive(Debug, Parser)]
#[command(name = "purifierctl")]
#[command(about = "Inspect and edit an air purifier dashboard card against a registry snapshot")]
struct Cli {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "purifier.toml")]
    config: PathBuf,

    /// Persist an edited card configuration back to its file.
    #[arg(long)]
    write: bool,

    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .with_writer(std::io::stderr)
        .init();

    let registry = match JsonSnapshotRegistry::load(&config.registry.snapshot).await {
        Ok(registry) => registry,
        Err(err) => {
            tracing::error!(
                path = %config.registry.snapshot.display(),
                error = %err,
                "registry snapshot unavailable, continuing with an empty registry"
            );
            JsonSnapshotRegistry::default()
        }
    };
    let snapshot = DiscoveryService::new(registry).load_snapshot().await;
    let card = read_card_config(&config.card.config).await?;

    let outcome = commands::run(cli.command, card, &config.devices, &snapshot).await?;

    if let Some(updated) = outcome.updated.filter(|_| cli.write) {
        let content = serde_json::to_string_pretty(&updated)?;
        tokio::fs::write(&config.card.config, content).await?;
        tracing::info!(path = %config.card.config.display(), "card configuration saved");
    }

    println!("{}", serde_json::to_string_pretty(&outcome.output)?);
    Ok(())
}

/// Read the persisted card configuration; a missing file yields the defaults.
async fn read_card_config(path: &Path) -> anyhow::Result<PurifierConfig> {
    match tokio::fs::read_to_string(path).await {
        Ok(content) => {
            let value: serde_json::Value = serde_json::from_str(&content)?;
            Ok(PurifierConfig::from_value(value)?)
        }
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "no card configuration, using defaults");
            Ok(PurifierConfig::default())
        }
        Err(err) => Err(err.into()),
    }
}
