//! laptraced - laptrace Server Daemon
//!
//! HTTP backend for the laptrace frontend: CSV telemetry upload and
//! synthetic lap generation.
//!
//! Usage:
//!   laptraced [OPTIONS] [config.toml]
//!
//! If no config file is provided, built-in defaults are used (port 8000,
//! localhost frontend origin).

use std::net::SocketAddr;

use anyhow::Result;
use clap::Parser;
use laptrace_api::{create_router, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;

use config::ServerConfig;

#[derive(Parser, Debug)]
#[command(name = "laptraced")]
#[command(about = "Telemetry demo backend for the laptrace frontend")]
struct Args {
    /// Configuration file path (TOML format)
    config: Option<String>,

    /// Override the listen port from the config
    #[arg(short, long)]
    port: Option<u16>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose {
        "laptraced=debug,laptrace_api=debug,laptrace_core=debug,tower_http=debug"
    } else {
        "laptraced=info,laptrace_api=info,laptrace_core=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting laptraced");

    let mut config = match &args.config {
        Some(path) => {
            tracing::info!("Loading config from: {}", path);
            ServerConfig::load(path)?
        }
        None => {
            tracing::info!("No config file provided, using defaults");
            ServerConfig::default()
        }
    };

    if let Some(port) = args.port {
        config.port = port;
    }

    let state = AppState::new(config.api_config());
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("laptraced stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(err) => tracing::error!(%err, "Failed to listen for shutdown signal"),
    }
}
