//! Outbound mail delivery.
//!
//! Provides [`SmtpMailer`], the SMTP implementation of
//! [`crate::domain::transport::MailTransport`].

mod smtp_mailer;

pub use smtp_mailer::SmtpMailer;
