//! API route configuration.

use crate::api::handlers::send_email_handler;
use crate::state::AppState;
use axum::{Router, routing::post};

/// Contact submission routes. Rate limited by the caller.
///
/// # Endpoints
///
/// - `POST /send-email` - Relay a contact submission by email
pub fn submission_routes() -> Router<AppState> {
    Router::new().route("/send-email", post(send_email_handler))
}
