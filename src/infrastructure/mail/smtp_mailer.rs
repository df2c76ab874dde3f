//! SMTP mail transport backed by `lettre`.

use async_trait::async_trait;
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::debug;

use crate::config::{MailConfig, SmtpSecurity};
use crate::domain::transport::{MailError, MailTransport, OutgoingEmail};

/// SMTP implementation of [`MailTransport`].
///
/// Built without connection pooling: every [`MailTransport::verify`] and
/// [`MailTransport::send`] opens its own connection and closes it afterwards.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    authenticated: bool,
}

impl SmtpMailer {
    /// Creates a transport for the configured host, port and security mode.
    ///
    /// Credentials are attached only when both `EMAIL_USER` and `EMAIL_PASS`
    /// are set. Without them [`MailTransport::verify`] always fails.
    ///
    /// # Errors
    ///
    /// Returns [`MailError::Connection`] if TLS parameters cannot be built for
    /// the host.
    pub fn new(config: &MailConfig) -> Result<Self, MailError> {
        let builder = match config.security {
            SmtpSecurity::Tls => AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)
                .map_err(|e| MailError::Connection(format!("TLS setup failed: {}", e)))?,
            SmtpSecurity::StartTls => {
                AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
                    .map_err(|e| MailError::Connection(format!("TLS setup failed: {}", e)))?
            }
            SmtpSecurity::None => {
                AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.smtp_host)
            }
        };

        let mut builder = builder.port(config.smtp_port);

        let authenticated = match (&config.username, &config.password) {
            (Some(username), Some(password)) => {
                builder =
                    builder.credentials(Credentials::new(username.clone(), password.clone()));
                true
            }
            _ => false,
        };

        debug!(
            host = %config.smtp_host,
            port = config.smtp_port,
            security = config.security.as_str(),
            "SMTP transport configured"
        );

        Ok(Self {
            transport: builder.build(),
            authenticated,
        })
    }
}

/// Converts an [`OutgoingEmail`] into a multipart/alternative `lettre` message.
fn build_message(email: &OutgoingEmail) -> Result<Message, MailError> {
    let from = Mailbox::new(
        Some(email.from_name.clone()),
        parse_address("sender", &email.from_address)?,
    );
    let to = Mailbox::new(None, parse_address("recipient", &email.to)?);
    let reply_to = Mailbox::new(None, parse_address("reply-to", &email.reply_to)?);

    Message::builder()
        .message_id(None)
        .from(from)
        .reply_to(reply_to)
        .to(to)
        .subject(email.subject.clone())
        .multipart(MultiPart::alternative_plain_html(
            email.text_body.clone(),
            email.html_body.clone(),
        ))
        .map_err(|e| MailError::InvalidMessage(e.to_string()))
}

fn parse_address(role: &str, value: &str) -> Result<Address, MailError> {
    value
        .parse::<Address>()
        .map_err(|e| MailError::InvalidMessage(format!("invalid {} address '{}': {}", role, value, e)))
}

#[async_trait]
impl MailTransport for SmtpMailer {
    async fn verify(&self) -> Result<(), MailError> {
        if !self.authenticated {
            return Err(MailError::Connection("no SMTP credentials configured".to_string()));
        }

        match self.transport.test_connection().await {
            Ok(true) => Ok(()),
            Ok(false) => Err(MailError::Connection(
                "server did not accept the connection".to_string(),
            )),
            Err(e) => Err(MailError::Connection(e.to_string())),
        }
    }

    async fn send(&self, email: &OutgoingEmail) -> Result<String, MailError> {
        let message = build_message(email)?;
        let message_id = message
            .headers()
            .get_raw("Message-ID")
            .map(str::to_string);

        let response = self
            .transport
            .send(message)
            .await
            .map_err(|e| MailError::Delivery(e.to_string()))?;

        debug!(code = %response.code(), "SMTP server accepted message");

        Ok(message_id
            .or_else(|| response.first_line().map(str::to_string))
            .unwrap_or_default())
    }
}
