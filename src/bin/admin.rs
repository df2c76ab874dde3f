//! CLI administration tool for the portfolio contact relay.
//!
//! Lets the site owner check the mail setup without going through the
//! website.
//!
//! # Usage
//!
//! ```bash
//! # Show the effective configuration (secrets redacted)
//! cargo run --bin admin -- config
//!
//! # Check that the SMTP server accepts the configured credentials
//! cargo run --bin admin -- verify
//!
//! # Send a test contact message (prompts for missing fields)
//! cargo run --bin admin -- send --name "Ada" --email ada@example.com
//! ```
//!
//! # Environment Variables
//!
//! Same as the server, see [`portfolio_site::config`].

use portfolio_site::application::services::{ContactError, ContactService};
use portfolio_site::config::{self, Config, redact};
use portfolio_site::domain::transport::MailTransport;
use portfolio_site::infrastructure::mail::SmtpMailer;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use std::sync::Arc;

/// CLI tool for managing the portfolio contact relay.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Print the configuration summary
    Config,

    /// Verify the SMTP connection and credentials
    Verify,

    /// Send a test contact message through the relay
    Send {
        /// Sender name
        #[arg(short, long)]
        name: Option<String>,

        /// Sender email address (used as Reply-To)
        #[arg(short, long)]
        email: Option<String>,

        /// Message body
        #[arg(short, long)]
        message: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Invalid configuration")?;

    match cli.command {
        Commands::Config => print_config(&config),
        Commands::Verify => verify(&config).await?,
        Commands::Send {
            name,
            email,
            message,
            yes,
        } => send(&config, name, email, message, yes).await?,
    }

    Ok(())
}

fn build_service(config: &Config) -> Result<ContactService<dyn MailTransport>> {
    let transport: Arc<dyn MailTransport> =
        Arc::new(SmtpMailer::new(&config.mail).context("Failed to configure SMTP transport")?);

    Ok(ContactService::new(transport, config.mail.profile()))
}

/// Prints the effective configuration with secrets redacted.
fn print_config(config: &Config) {
    println!("{}", "⚙️  Configuration".bright_blue().bold());
    println!();
    println!("  {:<16} {}", "Listen:".bold(), config.listen_addr);
    println!(
        "  {:<16} {} / {}",
        "Logging:".bold(),
        config.log_level,
        config.log_format
    );
    println!(
        "  {:<16} {}:{} ({})",
        "SMTP:".bold(),
        config.mail.smtp_host,
        config.mail.smtp_port,
        config.mail.security.as_str()
    );
    println!(
        "  {:<16} {}",
        "EMAIL_USER:".bold(),
        config.mail.username.as_deref().unwrap_or("not set")
    );
    println!(
        "  {:<16} {}",
        "EMAIL_PASS:".bold(),
        redact(config.mail.password.as_deref())
    );
    println!("  {:<16} {}", "Recipient:".bold(), config.mail.recipient);
    println!("  {:<16} {}", "Sender name:".bold(), config.mail.sender_name);

    if !config.mail.has_credentials() {
        println!();
        println!(
            "{}",
            "⚠️  EMAIL_USER or EMAIL_PASS is not set; contact messages will fail".yellow()
        );
    }
}

/// Opens an SMTP connection with the configured credentials.
async fn verify(config: &Config) -> Result<()> {
    println!(
        "{} {}:{}",
        "🔌 Connecting to".bright_blue().bold(),
        config.mail.smtp_host,
        config.mail.smtp_port
    );

    let service = build_service(config)?;

    match service.check_connection().await {
        Ok(()) => {
            println!("{}", "✓ SMTP connection verified".green());
            Ok(())
        }
        Err(e) => {
            println!("{} {}", "✗ Verification failed:".red(), e);
            anyhow::bail!("SMTP verification failed")
        }
    }
}

/// Sends one contact message, prompting for any field not given as a flag.
async fn send(
    config: &Config,
    name: Option<String>,
    email: Option<String>,
    message: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "✉️  Send Test Message".bright_blue().bold());
    println!();

    let name = match name {
        Some(n) => n,
        None => Input::new().with_prompt("Name").interact_text()?,
    };
    let email = match email {
        Some(e) => e,
        None => Input::new().with_prompt("Email").interact_text()?,
    };
    let message = match message {
        Some(m) => m,
        None => Input::new()
            .with_prompt("Message")
            .with_initial_text("Test message from the admin CLI")
            .interact_text()?,
    };

    println!();
    println!("  {:<12} {}", "To:".bold(), config.mail.recipient);
    println!("  {:<12} {} <{}>", "Reply-To:".bold(), name, email);
    println!();

    if !skip_confirm
        && !Confirm::new()
            .with_prompt("Send this message?")
            .default(true)
            .interact()?
    {
        println!("{}", "Cancelled".yellow());
        return Ok(());
    }

    let service = build_service(config)?;

    match service
        .submit_raw(Some(&name), Some(&email), Some(&message))
        .await
    {
        Ok(message_id) => {
            println!("{}", "✓ Message sent".green());
            println!("  {:<12} {}", "Message-ID:".bold(), message_id);
            Ok(())
        }
        Err(ContactError::Validation(e)) => {
            println!("{} {}", "✗".red(), e);
            anyhow::bail!("Invalid input")
        }
        Err(e) => {
            println!("{} {}", "✗ Delivery failed:".red(), e);
            Err(e.into())
        }
    }
}
