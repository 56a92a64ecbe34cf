//! HelloRest - Main Entry Point
//!
//! Parses the command line, loads user settings, wires the collection store
//! and the HTTP client, then runs a single command.

mod cli;
mod commands;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use hellorest_application::CollectionStore;
use hellorest_infrastructure::{FileSystemCollectionStore, ReqwestHttpClient, SettingsRepository};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;
use crate::commands::Services;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so command output can be piped.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let settings_repo = SettingsRepository::new();
    let settings = settings_repo
        .load()
        .await
        .context("loading settings")?;
    let root = settings
        .resolve_collections_root(cli.root, dirs::home_dir().as_deref())
        .unwrap_or_else(|| PathBuf::from("collections"));
    info!(root = %root.display(), "Starting HelloRest v{}", env!("CARGO_PKG_VERSION"));

    let store = FileSystemCollectionStore::open(root);
    if store.is_degraded() {
        warn!(root = %store.root().display(), "Collections root is not writable");
    }

    let services = Services {
        store: Arc::new(store),
        client: Arc::new(ReqwestHttpClient::with_timeout(settings.request_timeout_ms)?),
        settings: settings_repo,
    };

    let output = commands::run(&services, cli.command).await?;
    print!("{output}");
    Ok(())
}
