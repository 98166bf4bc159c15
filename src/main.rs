//! URL relay
//!
//! A single-hop proxy: `GET /https://example.com/file.txt` fetches
//! `https://example.com/file.txt` and returns its content-type and body.
//!
//! ```text
//!     Client Request   ┌───────────┐   ┌─────────┐   ┌──────────┐
//!     ────────────────▶│  server   │──▶│ target  │──▶│  fetch   │──▶ Upstream
//!                      │ catch-all │   │ extract │   │ 10s, 2xx │
//!                      └───────────┘   └────┬────┘   └────┬─────┘
//!                                           │ fail        │ ok / fail
//!     Client Response  ┌────────────────────▼─────────────▼─────┐
//!     ◀────────────────│ outcome: 200 + passthrough  |  404     │
//!                      └────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use url_relay::config::{load_config, validation::validate_config, ConfigError, RelayConfig};
use url_relay::http::HttpServer;
use url_relay::lifecycle::{shutdown_signal, Shutdown};
use url_relay::observability;

#[derive(Parser)]
#[command(name = "url-relay")]
#[command(about = "Relay the URL in the request path and return its body", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Bind address, overriding the configuration file.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => RelayConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
        validate_config(&config).map_err(ConfigError::Validation)?;
    }

    observability::init_logging(&config.observability.log_level)?;

    tracing::info!("url-relay v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        fetch_timeout_secs = url_relay::FETCH_TIMEOUT.as_secs(),
        "Configuration loaded"
    );

    // One client for the whole process; its pool is shared by every request.
    let client = reqwest::Client::builder().build()?;

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let signals = shutdown.clone();
    tokio::spawn(async move {
        shutdown_signal().await;
        signals.trigger();
    });

    let server = HttpServer::new(config, client);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
