#![allow(dead_code)]

use async_trait::async_trait;
use portfolio_site::application::services::MailProfile;
use portfolio_site::domain::transport::{MailError, MailTransport, OutgoingEmail};
use portfolio_site::state::AppState;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// In-memory transport recording every call.
#[derive(Default)]
pub struct RecordingTransport {
    verify_error: Option<String>,
    send_error: Option<String>,
    verify_calls: AtomicUsize,
    sent: Mutex<Vec<OutgoingEmail>>,
}

impl RecordingTransport {
    pub fn healthy() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing_verify(reason: &str) -> Arc<Self> {
        Arc::new(Self {
            verify_error: Some(reason.to_string()),
            ..Self::default()
        })
    }

    pub fn failing_send(reason: &str) -> Arc<Self> {
        Arc::new(Self {
            send_error: Some(reason.to_string()),
            ..Self::default()
        })
    }

    pub fn verify_calls(&self) -> usize {
        self.verify_calls.load(Ordering::SeqCst)
    }

    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MailTransport for RecordingTransport {
    async fn verify(&self) -> Result<(), MailError> {
        self.verify_calls.fetch_add(1, Ordering::SeqCst);
        match &self.verify_error {
            Some(reason) => Err(MailError::Connection(reason.clone())),
            None => Ok(()),
        }
    }

    async fn send(&self, email: &OutgoingEmail) -> Result<String, MailError> {
        if let Some(reason) = &self.send_error {
            return Err(MailError::Delivery(reason.clone()));
        }

        let mut sent = self.sent.lock().unwrap();
        sent.push(email.clone());
        Ok(format!("<test-{}@localhost>", sent.len()))
    }
}

pub fn test_profile() -> MailProfile {
    MailProfile {
        sender_name: "Portfolio Contact".to_string(),
        sender_address: Some("relay@example.com".to_string()),
        recipient: "owner@example.com".to_string(),
        secret_configured: true,
    }
}

pub fn create_test_state(transport: Arc<RecordingTransport>) -> AppState {
    AppState::new(transport, test_profile())
}

pub fn create_test_state_with_profile(
    transport: Arc<RecordingTransport>,
    profile: MailProfile,
) -> AppState {
    AppState::new(transport, profile)
}
