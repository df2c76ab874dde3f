//! Application layer services implementing business logic.
//!
//! Services consume domain traits and provide a clean API for HTTP handlers
//! and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::contact_service::ContactService`] - Contact submission validation and delivery
//!
//! Email bodies are rendered from the Askama templates in [`templates`].

pub mod services;
pub mod templates;
