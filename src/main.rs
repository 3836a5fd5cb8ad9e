//! grid-relay server entry point.
//!
//! Starts the Axum server with the static page, health endpoint, and the
//! WebSocket relay.

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use grid_relay::api::build_app;
use grid_relay::app_state::AppState;
use grid_relay::config::RelayConfig;
use grid_relay::error::RelayError;
use grid_relay::service::RelayService;

/// Command line arguments.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Host to bind the server to
    #[clap(short = 'H', long)]
    host: Option<String>,

    /// Port to listen on
    #[clap(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Resolve configuration: CLI flag, then environment, then default
    let args = Args::parse();
    let config = RelayConfig::resolve(args.host, args.port);
    let addr = config.bind_addr();
    tracing::info!(%addr, "starting grid-relay");

    // Build shared state
    let relay = Arc::new(RelayService::new());
    let app = build_app(AppState { relay });

    // Start server
    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port))
        .await
        .map_err(|source| RelayError::Bind {
            addr: addr.clone(),
            source,
        })?;
    tracing::info!(%addr, "server listening");

    axum::serve(listener, app)
        .await
        .map_err(RelayError::Serve)
        .context("server terminated unexpectedly")?;

    Ok(())
}
