//! HTTP API Layer
//!
//! This crate exposes the telematics rating engine over a REST API using
//! Axum. It is a thin adapter: request parsing, validation mapping, and JSON
//! shaping live here; all rating semantics live in `domain_rating`.
//!
//! # Architecture
//!
//! - **Handlers**: Quote, score, history, and health endpoints
//! - **DTOs**: Request/Response data transfer objects with boundary validation
//! - **Error Handling**: Consistent JSON error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(engine, config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod dto;

use axum::{
    Router,
    routing::{get, post},
};
use domain_rating::RatingEngine;
use tower_http::trace::TraceLayer;
use tower_http::cors::{CorsLayer, Any};

use crate::config::ApiConfig;
use crate::handlers::{rating, history, health};

/// Application state shared across handlers
///
/// The engine is immutable after startup, so the state clones freely into
/// every handler without locks.
#[derive(Clone)]
pub struct AppState {
    pub engine: RatingEngine,
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `engine` - Rating engine over a validated tariff
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(engine: RatingEngine, config: ApiConfig) -> Router {
    let state = AppState { engine, config };

    // Public routes (no versioned prefix)
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    // Rating routes
    let rating_routes = Router::new()
        .route("/quotes", post(rating::create_quote))
        .route("/scores", post(rating::compute_score))
        .route("/history/sample", get(history::sample_history));

    // The dashboard frontend is served from another origin, so CORS stays
    // permissive, matching the original deployment.
    Router::new()
        .merge(public_routes)
        .nest("/api/v1", rating_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
