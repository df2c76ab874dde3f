//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Mail Transport
//!
//! ```bash
//! export SMTP_HOST="smtp.gmail.com"
//! export SMTP_SECURITY="tls"        # tls | starttls | none
//! export EMAIL_USER="relay@gmail.com"
//! export EMAIL_PASS="app-password"
//! ```
//!
//! `EMAIL_USER` is both the SMTP account and the sender address. Missing
//! credentials do not prevent startup; they surface as a verification failure
//! when a message is submitted and as a degraded health check.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `BEHIND_PROXY` - Read client IP from proxy headers for rate limiting (default: `false`)
//! - `STATIC_DIR` - Directory served under `/static` (default: `static`)
//! - `SMTP_PORT` - Defaults to 465 (`tls`), 587 (`starttls`) or 25 (`none`)
//! - `CONTACT_RECIPIENT` - Mailbox receiving contact messages
//! - `CONTACT_SENDER_NAME` - Display name of the sender (default: `Portfolio Contact`)

use anyhow::{Context, Result};
use std::{env, fmt, str::FromStr};

use crate::application::services::MailProfile;
use crate::domain::contact::is_valid_email;

/// Mailbox of the site owner.
pub const DEFAULT_RECIPIENT: &str = "ruquiyanasir57@gmail.com";
pub const DEFAULT_SENDER_NAME: &str = "Portfolio Contact";
pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";

/// How the SMTP connection is secured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmtpSecurity {
    /// Implicit TLS from the first byte.
    Tls,
    /// Plain connection upgraded with `STARTTLS`.
    StartTls,
    /// Unencrypted. Local development servers only.
    None,
}

impl SmtpSecurity {
    pub fn default_port(self) -> u16 {
        match self {
            Self::Tls => 465,
            Self::StartTls => 587,
            Self::None => 25,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tls => "tls",
            Self::StartTls => "starttls",
            Self::None => "none",
        }
    }
}

impl FromStr for SmtpSecurity {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "tls" | "ssl" => Ok(Self::Tls),
            "starttls" => Ok(Self::StartTls),
            "none" | "plain" => Ok(Self::None),
            other => anyhow::bail!(
                "SMTP_SECURITY must be 'tls', 'starttls' or 'none', got '{}'",
                other
            ),
        }
    }
}

/// Mail transport and addressing settings.
#[derive(Clone)]
pub struct MailConfig {
    pub smtp_host: String,
    pub smtp_port: u16,
    pub security: SmtpSecurity,
    /// SMTP account, also used as the sender address (`EMAIL_USER`).
    pub username: Option<String>,
    /// SMTP secret (`EMAIL_PASS`). Never logged.
    pub password: Option<String>,
    pub recipient: String,
    pub sender_name: String,
}

impl MailConfig {
    /// Returns whether both the account and the secret are set.
    pub fn has_credentials(&self) -> bool {
        self.username.is_some() && self.password.is_some()
    }

    /// Addressing information handed to the contact service.
    pub fn profile(&self) -> MailProfile {
        MailProfile {
            sender_name: self.sender_name.clone(),
            sender_address: self.username.clone(),
            recipient: self.recipient.clone(),
            secret_configured: self.password.is_some(),
        }
    }
}

impl fmt::Debug for MailConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailConfig")
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .field("security", &self.security)
            .field("username", &self.username)
            .field("password", &redact(self.password.as_deref()))
            .field("recipient", &self.recipient)
            .field("sender_name", &self.sender_name)
            .finish()
    }
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// When true, rate limiting reads client IP from X-Forwarded-For / X-Real-IP headers.
    /// Enable only when the service is behind a trusted reverse proxy.
    pub behind_proxy: bool,
    pub static_dir: String,
    pub mail: MailConfig,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `SMTP_SECURITY` holds an unknown mode.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let behind_proxy = env::var("BEHIND_PROXY")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string());

        let mail = Self::load_mail_config().context("Failed to load mail configuration")?;

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            behind_proxy,
            static_dir,
            mail,
        })
    }

    fn load_mail_config() -> Result<MailConfig> {
        let security = match non_empty_var("SMTP_SECURITY") {
            Some(v) => v.parse()?,
            None => SmtpSecurity::Tls,
        };

        let smtp_host = env::var("SMTP_HOST").unwrap_or_else(|_| DEFAULT_SMTP_HOST.to_string());

        let smtp_port = match non_empty_var("SMTP_PORT") {
            Some(v) => v
                .trim()
                .parse::<u16>()
                .with_context(|| format!("SMTP_PORT must be a port number, got '{}'", v))?,
            None => security.default_port(),
        };

        Ok(MailConfig {
            smtp_host,
            smtp_port,
            security,
            username: non_empty_var("EMAIL_USER"),
            password: non_empty_var("EMAIL_PASS"),
            recipient: non_empty_var("CONTACT_RECIPIENT")
                .unwrap_or_else(|| DEFAULT_RECIPIENT.to_string()),
            sender_name: non_empty_var("CONTACT_SENDER_NAME")
                .unwrap_or_else(|| DEFAULT_SENDER_NAME.to_string()),
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - SMTP host is empty or port is 0
    /// - recipient is not a valid email address
    /// - sender name is empty
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.mail.smtp_host.trim().is_empty() {
            anyhow::bail!("SMTP_HOST must not be empty");
        }

        if self.mail.smtp_port == 0 {
            anyhow::bail!("SMTP_PORT must be greater than 0");
        }

        if !is_valid_email(&self.mail.recipient) {
            anyhow::bail!(
                "CONTACT_RECIPIENT must be a valid email address, got '{}'",
                self.mail.recipient
            );
        }

        if self.mail.sender_name.trim().is_empty() {
            anyhow::bail!("CONTACT_SENDER_NAME must not be empty");
        }

        Ok(())
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Behind proxy: {}", self.behind_proxy);
        tracing::info!(
            "  SMTP: {}:{} ({})",
            self.mail.smtp_host,
            self.mail.smtp_port,
            self.mail.security.as_str()
        );
        tracing::info!(
            "  EMAIL_USER: {}",
            self.mail.username.as_deref().unwrap_or("not set")
        );
        tracing::info!("  EMAIL_PASS: {}", redact(self.mail.password.as_deref()));
        tracing::info!("  Recipient: {}", self.mail.recipient);
        tracing::info!("  Sender name: {}", self.mail.sender_name);

        if !self.mail.has_credentials() {
            tracing::warn!("EMAIL_USER or EMAIL_PASS is not set; contact messages will fail");
        }
    }
}

/// Presence marker for a secret value.
pub fn redact(secret: Option<&str>) -> &'static str {
    match secret {
        Some(_) => "[REDACTED]",
        None => "not set",
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if variables are malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
