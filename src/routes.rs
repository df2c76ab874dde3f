//! Top-level router configuration combining page and API routes.
//!
//! # Route Structure
//!
//! - `GET  /`               - Portfolio page
//! - `POST /theme`          - Theme toggle
//! - `POST /contact`        - Contact form (HTML)
//! - `POST /api/send-email` - Contact form (JSON)
//! - `GET  /health`         - Health check
//! - `/static/*`            - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on the two submission routes
//!
//! Trailing slash normalization wraps the router in [`crate::server::run`].

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `behind_proxy` - when `true`, rate limiting reads client IP from
///   `X-Forwarded-For` / `X-Real-IP` headers instead of the peer socket address;
///   enable only when the service runs behind a trusted reverse proxy
/// - `static_dir` - directory served under `/static`
///
/// The rate limiter needs the peer address, so the router must be served with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
pub fn app_router(state: AppState, behind_proxy: bool, static_dir: &str) -> Router {
    let submissions = rate_limit::limit(
        Router::new()
            .nest("/api", api::routes::submission_routes())
            .merge(web::routes::submission_routes()),
        behind_proxy,
    );

    Router::new()
        .merge(web::routes::page_routes())
        .merge(submissions)
        .route("/health", get(health_handler))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
        .layer(tracing::layer())
}
