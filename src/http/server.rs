//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with a single catch-all handler
//! - Wire up middleware (tracing)
//! - Hand every request path to the relay core
//! - Serve until shutdown is signalled

use axum::{extract::State, http::Uri, routing::any, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;
use tracing::Instrument;
use uuid::Uuid;

use crate::config::RelayConfig;
use crate::lifecycle::shutdown;
use crate::relay::{Relay, RelayOutcome, UpstreamClient};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub relay: Relay,
}

/// HTTP front door of the relay.
pub struct HttpServer {
    router: Router,
    config: RelayConfig,
}

impl HttpServer {
    /// Create a new HTTP server.
    ///
    /// `client` is the single outbound client shared by every request.
    pub fn new(config: RelayConfig, client: reqwest::Client) -> Self {
        let state = AppState {
            relay: Relay::new(UpstreamClient::new(client)),
        };

        Self {
            router: Self::build_router(state),
            config,
        }
    }

    /// Build the Axum router with all middleware layers.
    pub fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(relay_handler))
            .route("/", any(relay_handler))
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }

    /// The router, for driving the server without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener until
    /// `shutdown_rx` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown_rx: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            configured = %self.config.listener.bind_address,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown::wait(shutdown_rx))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Catch-all handler: the path is the target URL.
///
/// Method, headers, query and body of the inbound request are ignored.
async fn relay_handler(State(state): State<AppState>, uri: Uri) -> RelayOutcome {
    let request_id = Uuid::new_v4();
    let span = tracing::debug_span!("relay", request_id = %request_id);

    state.relay.handle(uri.path()).instrument(span).await
}
