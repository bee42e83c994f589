//! Telematics Rating - API Server Binary
//!
//! This binary starts the HTTP API server for the telematics rating system.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin telematics-api
//!
//! # Run with environment variables
//! API_HOST=0.0.0.0 API_PORT=8080 cargo run --bin telematics-api
//! ```
//!
//! # Environment Variables
//!
//! * `API_HOST` - Server host (default: 0.0.0.0)
//! * `API_PORT` - Server port (default: 8080)
//! * `API_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `API_RATING__CURRENCY` - Tariff currency code (default: USD)
//! * `API_RATING__BASE_PREMIUM` - Fixed starting premium (default: 2500.00)
//! * `API_RATING__DISTANCE_COST_PER_KM` - Cost per kilometre (default: 0.05)
//! * `API_RATING__SPEEDING_INCIDENT_COST` - Cost per speeding incident (default: 50.00)
//! * `API_RATING__HARD_BRAKING_COST` - Cost per hard-braking event (default: 30.00)
//! * `API_RATING__RAPID_ACCELERATION_COST` - Cost per rapid acceleration (default: 25.00)
//! * `API_RATING__NIGHT_DRIVING_MULTIPLIER` - Night uplift multiplier, >= 1 (default: 1.5)

use anyhow::Context;
use domain_rating::RatingEngine;
use interface_api::{create_router, config::ApiConfig};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Main entry point for the API server.
///
/// Initializes logging, loads configuration, validates the rating tariff,
/// and starts the HTTP server.
///
/// # Errors
///
/// Returns an error if:
/// - Configuration cannot be loaded from environment
/// - The rating tariff is invalid (this is fatal by design; a bad tariff
///   must never serve quotes)
/// - Server fails to bind to the configured address
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    // Load configuration from environment
    let config = ApiConfig::from_env().context("failed to load configuration")?;

    // Initialize tracing/logging
    init_tracing(&config.log_level);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        "Starting Telematics Rating API Server"
    );

    // Build the rating engine; tariff problems abort startup here
    let factors = config
        .rating
        .risk_factors()
        .context("invalid rating tariff configuration")?;

    tracing::info!(
        currency = %factors.currency(),
        base_premium = %factors.base_premium(),
        night_multiplier = %factors.night_driving_multiplier(),
        "Rating tariff loaded"
    );

    let engine = RatingEngine::new(factors);

    // Create the API router
    let app = create_router(engine, config.clone());

    // Parse server address
    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .context("invalid server address")?;

    tracing::info!(%addr, "Server listening");

    // Create TCP listener and serve
    let listener = TcpListener::bind(addr)
        .await
        .context("failed to bind server address")?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// # Arguments
///
/// * `log_level` - The minimum log level to output (trace, debug, info, warn, error)
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// This enables graceful shutdown of the server, allowing in-flight
/// requests to complete before the process exits.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
