//! Handler for health check endpoint.

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthQuery, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Mail transport**: sender account and secret are configured.
///    With `?verify=true` an SMTP connection is opened and authenticated.
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "mail_transport": {
///       "status": "ok",
///       "message": "Credentials configured"
///     }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
    Query(query): Query<HealthQuery>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let mail_check = check_mail_transport(&state, query.verify).await;

    let all_healthy = mail_check.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            mail_transport: mail_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks mail credentials, optionally with a live SMTP handshake.
async fn check_mail_transport(state: &AppState, verify: bool) -> CheckStatus {
    let profile = state.contact_service.profile();

    if profile.sender_address.is_none() || !profile.secret_configured {
        return CheckStatus::error("EMAIL_USER or EMAIL_PASS is not set");
    }

    if !verify {
        return CheckStatus::ok("Credentials configured");
    }

    match state.contact_service.check_connection().await {
        Ok(()) => CheckStatus::ok("SMTP connection verified"),
        Err(e) => {
            tracing::warn!(error = %e, "Health check: SMTP verification failed");
            CheckStatus::error("SMTP verification failed")
        }
    }
}
