//! music-library-server - REST backend for the music library front end

use anyhow::{Context, Result};
use clap::Parser;
use music_library::infra::storage;
use music_library::MusicLibraryModule;
use std::path::PathBuf;
use tracing::info;

mod config;
mod logging;

use config::AppConfig;

#[derive(Debug, Parser)]
#[command(name = "music-library-server", version, about)]
struct Cli {
    /// YAML configuration file (optional; environment overrides apply either way)
    #[arg(short, long, default_value = "config/music_library.yaml")]
    config: PathBuf,

    /// Override the configured listen address
    #[arg(long)]
    bind: Option<std::net::SocketAddr>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(&cli.config)?;
    if let Some(bind) = cli.bind {
        config.server.bind_addr = bind;
    }

    logging::init(&config.logging)?;
    info!(
        "Starting music-library-server v{} (config: {})",
        env!("CARGO_PKG_VERSION"),
        cli.config.display()
    );

    let store = storage::connect(&config.store).context("failed to set up the store client")?;
    let module = MusicLibraryModule::new(config.library.clone(), store);
    let app = module.router()?;

    let listener = tokio::net::TcpListener::bind(config.server.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.server.bind_addr))?;
    info!("music-library-server listening on http://{}", config.server.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("music-library-server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
    }
}
