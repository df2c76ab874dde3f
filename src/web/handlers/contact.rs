//! HTML contact form submission handler.

use axum::{
    Form,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use std::time::Instant;

use super::page::PageTemplate;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::view_state::{ContactFields, ContactFormState, Theme};

/// Submits the contact form without JavaScript.
///
/// # Endpoint
///
/// `POST /contact` (`application/x-www-form-urlencoded`)
///
/// Runs the same validation and delivery as `POST /api/send-email`, then
/// re-renders the page scrolled to the contact section with the result banner.
/// On success the form is reset; on failure the entered values are kept and
/// the response carries the matching 4xx/5xx status.
pub async fn contact_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(fields): Form<ContactFields>,
) -> impl IntoResponse {
    let outcome = state
        .contact_service
        .submit_raw(
            Some(&fields.name),
            Some(&fields.email),
            Some(&fields.message),
        )
        .await
        .map(|_| ())
        .map_err(AppError::from);

    let status = outcome
        .as_ref()
        .err()
        .map(AppError::status)
        .unwrap_or(StatusCode::OK);

    let mut form = ContactFormState::submitting(fields);
    form.complete(
        outcome.map_err(|e| e.message().to_string()),
        Instant::now(),
    );

    (
        status,
        PageTemplate::new(Theme::from_headers(&headers), false, form),
    )
}
