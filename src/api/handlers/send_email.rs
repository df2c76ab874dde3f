//! Handler for the contact mail relay endpoint.

use axum::{Json, body::Bytes, extract::State};

use crate::api::dto::send_email::{SendEmailRequest, SendEmailResponse};
use crate::error::{AppError, MSG_SEND_FAILED};
use crate::state::AppState;

/// Relays one contact submission to the site owner by email.
///
/// # Endpoint
///
/// `POST /api/send-email`
///
/// # Request Body
///
/// ```json
/// { "name": "Ada", "email": "ada@example.com", "message": "Hi there" }
/// ```
///
/// The body is decoded as JSON regardless of `Content-Type`.
///
/// # Response
///
/// ```json
/// { "message": "Email sent successfully" }
/// ```
///
/// # Errors
///
/// - **400** `All fields are required` / `Invalid email format`
/// - **500** `Failed to connect to email server` when SMTP verification fails
/// - **500** `Failed to send email. Please try again later.` for anything else,
///   including an undecodable body
pub async fn send_email_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SendEmailResponse>, AppError> {
    let payload: SendEmailRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::error!(error = %e, "Email sending error: malformed request body");
        AppError::internal(MSG_SEND_FAILED)
    })?;

    state
        .contact_service
        .submit_raw(
            payload.name.as_deref(),
            payload.email.as_deref(),
            payload.message.as_deref(),
        )
        .await?;

    Ok(Json(SendEmailResponse::sent()))
}
