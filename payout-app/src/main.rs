//! # Payout Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Initialize the outbound adapters
//! - Create the payout service
//! - Start the HTTP server

mod config;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use payout_hex::{PayoutService, inbound::HttpServer};
use payout_upstream::{FeexPayClient, FileSink, IpifyClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,payout_app=debug,payout_hex=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = config::Config::from_env()?;

    tracing::info!("Starting payout proxy on port {}", config.port);
    tracing::info!("Diagnostic log: {}", config.log_path.display());
    if config.credentials.is_none() {
        tracing::warn!(
            "FEEXPAY_API_KEY / SHOP_ID not set; payout requests will be rejected with 500"
        );
    }

    // Build the outbound adapters
    let gateway = FeexPayClient::new()?;
    let sink = FileSink::new(&config.log_path);

    // Create the payout service
    let service = PayoutService::new(gateway, sink, config.credentials);

    // Create and run the HTTP server
    let server = HttpServer::new(service, IpifyClient::new());
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    Ok(())
}
