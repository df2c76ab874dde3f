//! Web layer for the browser-facing portfolio page.
//!
//! Renders the page server-side with Askama templates. A small script under
//! `static/js` upgrades the contact form to `fetch` when JavaScript is
//! available; without it the form posts to [`handlers::contact_handler`].
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`profile`] - Static page content
//! - [`routes`] - Page route configuration
//! - [`view_state`] - Theme, menu and contact form state

pub mod handlers;
pub mod profile;
pub mod routes;
pub mod view_state;
