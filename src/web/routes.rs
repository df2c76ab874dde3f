//! Portfolio page route configuration.

use crate::state::AppState;
use crate::web::handlers::{contact_handler, home_handler, theme_handler};
use axum::{
    Router,
    routing::{get, post},
};

/// Page routes.
///
/// # Endpoints
///
/// - `GET  /` - Portfolio page
/// - `POST /theme` - Toggle light/dark theme
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler))
        .route("/theme", post(theme_handler))
}

/// Form submission routes. Rate limited by the caller.
///
/// # Endpoints
///
/// - `POST /contact` - Submit the contact form without JavaScript
pub fn submission_routes() -> Router<AppState> {
    Router::new().route("/contact", post(contact_handler))
}
