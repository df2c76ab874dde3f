//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::{ContactService, MailProfile};
use crate::domain::transport::MailTransport;

#[derive(Clone)]
pub struct AppState {
    pub contact_service: Arc<ContactService<dyn MailTransport>>,
}

impl AppState {
    pub fn new(transport: Arc<dyn MailTransport>, profile: MailProfile) -> Self {
        Self {
            contact_service: Arc::new(ContactService::new(transport, profile)),
        }
    }
}
