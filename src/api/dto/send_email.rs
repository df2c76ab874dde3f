//! DTOs for the contact mail relay endpoint.

use serde::{Deserialize, Serialize};

pub const MSG_SENT: &str = "Email sent successfully";

/// Contact form submission as posted by the page script.
///
/// Fields are optional so that a missing field is reported as a validation
/// error rather than a decoding failure.
#[derive(Debug, Default, Deserialize)]
pub struct SendEmailRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

/// Success body of `POST /api/send-email`.
#[derive(Debug, Serialize)]
pub struct SendEmailResponse {
    pub message: &'static str,
}

impl SendEmailResponse {
    pub fn sent() -> Self {
        Self { message: MSG_SENT }
    }
}
