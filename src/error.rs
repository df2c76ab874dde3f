//! HTTP-facing error type.
//!
//! Every failure leaves the service as a JSON body `{ "error": "<message>" }`.
//! Internal details are logged where they happen and never reach the client.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::application::services::ContactError;

pub const MSG_CONNECT_FAILED: &str = "Failed to connect to email server";
pub const MSG_SEND_FAILED: &str = "Failed to send email. Please try again later.";

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug)]
pub enum AppError {
    Validation { message: String },
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AppError::Validation { message } | AppError::Internal { message } => message,
        }
    }
}

impl From<ContactError> for AppError {
    fn from(e: ContactError) -> Self {
        match e {
            ContactError::Validation(v) => AppError::bad_request(v.to_string()),
            ContactError::Unavailable(_) => AppError::internal(MSG_CONNECT_FAILED),
            ContactError::Failed(_) => AppError::internal(MSG_SEND_FAILED),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: match self {
                AppError::Validation { message } | AppError::Internal { message } => message,
            },
        };

        (status, Json(body)).into_response()
    }
}
