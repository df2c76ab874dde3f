//! Contact submission delivery service.

use askama::Template;
use std::sync::Arc;
use thiserror::Error;

use crate::application::templates::{ContactHtmlTemplate, ContactTextTemplate};
use crate::domain::contact::{self, ContactSubmission, ValidationError};
use crate::domain::transport::{MailError, MailTransport, OutgoingEmail};

/// Who the contact email is sent from and to.
#[derive(Debug, Clone)]
pub struct MailProfile {
    /// Display name of the sender (`"Portfolio Contact"` by default).
    pub sender_name: String,
    /// Sender address, the transport account. `None` when `EMAIL_USER` is unset.
    pub sender_address: Option<String>,
    /// Site owner's mailbox.
    pub recipient: String,
    /// Whether a transport secret is configured. The secret itself never
    /// reaches this layer.
    pub secret_configured: bool,
}

/// Failure of one contact submission.
///
/// The three variants map to the three error tiers exposed over HTTP.
#[derive(Debug, Error)]
pub enum ContactError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("failed to connect to email server")]
    Unavailable(#[source] MailError),

    #[error("failed to send email: {0}")]
    Failed(String),
}

/// Service relaying contact submissions to the site owner by email.
///
/// Every call verifies the transport before sending and sends exactly one
/// message. Nothing is retried or deduplicated.
pub struct ContactService<M: MailTransport + ?Sized> {
    transport: Arc<M>,
    profile: MailProfile,
}

impl<M: MailTransport + ?Sized> ContactService<M> {
    /// Creates a new contact service.
    pub fn new(transport: Arc<M>, profile: MailProfile) -> Self {
        Self { transport, profile }
    }

    pub fn profile(&self) -> &MailProfile {
        &self.profile
    }

    /// Validates raw input and delivers it.
    ///
    /// Returns the message identifier on success.
    ///
    /// # Errors
    ///
    /// - [`ContactError::Validation`] if a field is missing or the email is malformed;
    ///   the transport is not touched
    /// - [`ContactError::Unavailable`] if the transport fails verification
    /// - [`ContactError::Failed`] for any other failure
    pub async fn submit_raw(
        &self,
        name: Option<&str>,
        email: Option<&str>,
        message: Option<&str>,
    ) -> Result<String, ContactError> {
        let submission = contact::validate(name, email, message)?;
        self.submit(&submission).await
    }

    /// Verifies the transport, then sends one email for `submission`.
    ///
    /// Missing credentials fail verification without touching the transport.
    ///
    /// # Errors
    ///
    /// See [`Self::submit_raw`].
    pub async fn submit(&self, submission: &ContactSubmission) -> Result<String, ContactError> {
        self.log_credentials();

        if self.profile.sender_address.is_none() || !self.profile.secret_configured {
            let e = MailError::Connection("EMAIL_USER or EMAIL_PASS is not set".to_string());
            tracing::error!(error = %e, "SMTP verification failed");
            return Err(ContactError::Unavailable(e));
        }

        if let Err(e) = self.transport.verify().await {
            tracing::error!(error = %e, "SMTP verification failed");
            return Err(ContactError::Unavailable(e));
        }
        tracing::info!("SMTP connection verified");

        let email = self.compose(submission).inspect_err(|e| {
            tracing::error!(error = %e, "Email sending error");
        })?;

        match self.transport.send(&email).await {
            Ok(message_id) => {
                tracing::info!(message_id = %message_id, "Message sent");
                Ok(message_id)
            }
            Err(e) => {
                tracing::error!(error = %e, "Email sending error");
                Err(ContactError::Failed(e.to_string()))
            }
        }
    }

    /// Checks that the transport accepts a connection with the configured
    /// credentials.
    ///
    /// # Errors
    ///
    /// Returns the transport's [`MailError`] unchanged.
    pub async fn check_connection(&self) -> Result<(), MailError> {
        self.transport.verify().await
    }

    /// Builds the outbound email for a submission.
    ///
    /// # Errors
    ///
    /// Returns [`ContactError::Failed`] if the sender address is not
    /// configured or a body template fails to render.
    pub fn compose(&self, submission: &ContactSubmission) -> Result<OutgoingEmail, ContactError> {
        let from_address = self
            .profile
            .sender_address
            .clone()
            .ok_or_else(|| ContactError::Failed("sender address is not configured".to_string()))?;

        let text_body = ContactTextTemplate {
            name: submission.name(),
            email: submission.email(),
            message: submission.message(),
        }
        .render()
        .map_err(|e| ContactError::Failed(format!("text template: {e}")))?;

        let html_body = ContactHtmlTemplate {
            name: submission.name(),
            email: submission.email(),
            lines: submission.message().split('\n').collect(),
        }
        .render()
        .map_err(|e| ContactError::Failed(format!("html template: {e}")))?;

        Ok(OutgoingEmail {
            from_name: self.profile.sender_name.clone(),
            from_address,
            to: self.profile.recipient.clone(),
            reply_to: submission.email().to_string(),
            subject: format!("New message from {}", submission.name()),
            text_body,
            html_body,
        })
    }

    fn log_credentials(&self) {
        tracing::info!(
            "EMAIL_USER: {}",
            self.profile.sender_address.as_deref().unwrap_or("undefined")
        );
        tracing::info!(
            "EMAIL_PASS: {}",
            if self.profile.secret_configured {
                "[REDACTED]"
            } else {
                "undefined"
            }
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::transport::MockMailTransport;

    fn test_profile() -> MailProfile {
        MailProfile {
            sender_name: "Portfolio Contact".to_string(),
            sender_address: Some("relay@example.com".to_string()),
            recipient: "owner@example.com".to_string(),
            secret_configured: true,
        }
    }

    #[tokio::test]
    async fn test_submit_success() {
        let mut mock = MockMailTransport::new();

        mock.expect_verify().times(1).returning(|| Ok(()));
        mock.expect_send()
            .withf(|email| {
                email.to == "owner@example.com"
                    && email.reply_to == "ada@example.com"
                    && email.from_address == "relay@example.com"
                    && email.from_name == "Portfolio Contact"
                    && email.subject == "New message from Ada"
                    && email.text_body.contains("Message:\nHi\nthere")
                    && email.html_body.contains("Hi<br>there")
            })
            .times(1)
            .returning(|_| Ok("<abc@example.com>".to_string()));

        let service = ContactService::new(Arc::new(mock), test_profile());

        let result = service
            .submit_raw(Some("Ada"), Some("ada@example.com"), Some("Hi\nthere"))
            .await;

        assert_eq!(result.unwrap(), "<abc@example.com>");
    }

    #[tokio::test]
    async fn test_validation_error_skips_transport() {
        let mut mock = MockMailTransport::new();
        mock.expect_verify().times(0);
        mock.expect_send().times(0);

        let service = ContactService::new(Arc::new(mock), test_profile());

        let result = service
            .submit_raw(Some("Ada"), None, Some("Hi"))
            .await;
        assert!(matches!(
            result,
            Err(ContactError::Validation(ValidationError::MissingFields))
        ));

        let result = service
            .submit_raw(Some("Ada"), Some("foo@bar"), Some("Hi"))
            .await;
        assert!(matches!(
            result,
            Err(ContactError::Validation(ValidationError::InvalidEmail))
        ));
    }

    #[tokio::test]
    async fn test_verification_failure_does_not_send() {
        let mut mock = MockMailTransport::new();
        mock.expect_verify()
            .times(1)
            .returning(|| Err(MailError::Connection("535 bad credentials".to_string())));
        mock.expect_send().times(0);

        let service = ContactService::new(Arc::new(mock), test_profile());

        let result = service
            .submit_raw(Some("Ada"), Some("ada@example.com"), Some("Hi"))
            .await;

        assert!(matches!(result, Err(ContactError::Unavailable(_))));
    }

    #[tokio::test]
    async fn test_send_failure_is_generic() {
        let mut mock = MockMailTransport::new();
        mock.expect_verify().times(1).returning(|| Ok(()));
        mock.expect_send()
            .times(1)
            .returning(|_| Err(MailError::Delivery("550 rejected".to_string())));

        let service = ContactService::new(Arc::new(mock), test_profile());

        let result = service
            .submit_raw(Some("Ada"), Some("ada@example.com"), Some("Hi"))
            .await;

        assert!(matches!(result, Err(ContactError::Failed(_))));
    }

    #[tokio::test]
    async fn test_missing_credentials_fail_verification() {
        let profiles = [
            MailProfile {
                sender_address: None,
                secret_configured: false,
                ..test_profile()
            },
            MailProfile {
                secret_configured: false,
                ..test_profile()
            },
            MailProfile {
                sender_address: None,
                ..test_profile()
            },
        ];

        for profile in profiles {
            let mut mock = MockMailTransport::new();
            mock.expect_verify().times(0);
            mock.expect_send().times(0);

            let service = ContactService::new(Arc::new(mock), profile);

            let result = service
                .submit_raw(Some("Ada"), Some("ada@example.com"), Some("Hi"))
                .await;

            assert!(matches!(
                result,
                Err(ContactError::Unavailable(MailError::Connection(_)))
            ));
        }
    }

    #[test]
    fn test_compose_bodies() {
        let service = ContactService::new(Arc::new(MockMailTransport::new()), test_profile());
        let submission = contact::validate(
            Some("Ada"),
            Some("ada@example.com"),
            Some("Line one\nLine two\nLine three"),
        )
        .unwrap();

        let email = service.compose(&submission).unwrap();

        assert!(email.text_body.starts_with("Name: Ada\nEmail: ada@example.com\nMessage:\n"));
        assert!(email.text_body.contains("Line one\nLine two\nLine three"));
        assert!(email.html_body.contains("<h2>New Message from Portfolio</h2>"));
        assert!(email.html_body.contains("Line one<br>Line two<br>Line three"));
    }

    #[test]
    fn test_compose_escapes_html() {
        let service = ContactService::new(Arc::new(MockMailTransport::new()), test_profile());
        let submission =
            contact::validate(Some("<b>Eve</b>"), Some("eve@example.com"), Some("Hi")).unwrap();

        let email = service.compose(&submission).unwrap();

        assert!(!email.html_body.contains("<b>Eve</b>"));
        assert!(email.html_body.contains("&lt;b&gt;Eve"));
        // plain text keeps the value verbatim
        assert!(email.text_body.contains("Name: <b>Eve</b>"));
        assert_eq!(email.subject, "New message from <b>Eve</b>");
    }
}
