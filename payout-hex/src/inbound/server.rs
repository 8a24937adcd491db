//! HTTP Server configuration and startup.

use std::sync::Arc;

use axum::{
    Router,
    http::{Method, header},
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use payout_types::{DiagnosticSink, IpLookup, PayoutGateway};

use super::handlers::{self, AppState};
use crate::PayoutService;

/// HTTP Server for the payout proxy.
pub struct HttpServer<G: PayoutGateway, S: DiagnosticSink, I: IpLookup> {
    state: Arc<AppState<G, S, I>>,
}

impl<G: PayoutGateway, S: DiagnosticSink, I: IpLookup> HttpServer<G, S, I> {
    /// Creates a new HTTP server with the given service and lookup adapter.
    pub fn new(service: PayoutService<G, S>, ip_lookup: I) -> Self {
        Self {
            state: Arc::new(AppState { service, ip_lookup }),
        }
    }

    /// Builds the Axum router with all routes.
    pub fn router(&self) -> Router {
        // Browser clients call the proxy cross-origin.
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

        Router::new()
            .route("/health", get(handlers::health))
            .route("/api/payouts", post(handlers::create_payout::<G, S, I>))
            .route("/api/whoami", get(handlers::whoami::<G, S, I>))
            .layer(cors)
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Runs the server on the given address with graceful shutdown.
    pub async fn run(self, addr: &str) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Server listening on {}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
