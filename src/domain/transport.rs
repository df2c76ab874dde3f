//! Mail transport abstraction.
//!
//! The contact flow only needs two capabilities from a mail provider:
//! checking that a connection can be established with the configured
//! credentials, and delivering one fully composed message.

use async_trait::async_trait;
use thiserror::Error;

/// A composed email ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub from_name: String,
    pub from_address: String,
    pub to: String,
    pub reply_to: String,
    pub subject: String,
    pub text_body: String,
    pub html_body: String,
}

/// Errors reported by a [`MailTransport`].
#[derive(Debug, Error)]
pub enum MailError {
    /// The transport could not connect or authenticate.
    #[error("mail server connection failed: {0}")]
    Connection(String),

    /// The message could not be turned into a valid email.
    #[error("invalid message: {0}")]
    InvalidMessage(String),

    /// The server refused or failed to accept the message.
    #[error("mail delivery failed: {0}")]
    Delivery(String),
}

/// Outbound mail provider.
///
/// # Implementations
///
/// - [`crate::infrastructure::mail::SmtpMailer`] - SMTP via `lettre`
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MailTransport: Send + Sync {
    /// Establishes a connection and checks that the server accepts it.
    ///
    /// # Errors
    ///
    /// Returns [`MailError::Connection`] if the server is unreachable or
    /// rejects the credentials.
    async fn verify(&self) -> Result<(), MailError>;

    /// Delivers one message and returns its message identifier.
    ///
    /// # Errors
    ///
    /// Returns [`MailError::InvalidMessage`] if the addresses or headers are
    /// malformed, [`MailError::Delivery`] if the server rejects the message.
    async fn send(&self, email: &OutgoingEmail) -> Result<String, MailError>;
}
