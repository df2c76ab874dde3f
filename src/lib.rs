//! # Portfolio Site
//!
//! A personal portfolio page with a contact form that relays submissions to
//! the site owner by email.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Contact submission, validation rules, mail transport trait
//! - **Application Layer** ([`application`]) - Contact delivery service and email templates
//! - **Infrastructure Layer** ([`infrastructure`]) - SMTP transport
//! - **API Layer** ([`api`]) - JSON mail relay endpoint, health check, middleware
//! - **Web Layer** ([`web`]) - Server-rendered portfolio page and HTML form flow
//!
//! ## Quick Start
//!
//! ```bash
//! export EMAIL_USER="relay@gmail.com"
//! export EMAIL_PASS="app-password"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{ContactError, ContactService, MailProfile};
    pub use crate::domain::contact::{ContactSubmission, ValidationError};
    pub use crate::domain::transport::{MailError, MailTransport, OutgoingEmail};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
