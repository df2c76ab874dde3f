//! Domain layer: the contact submission and the mail transport contract.
//!
//! - [`contact`] - Submission entity and the shared validation rules
//! - [`transport`] - Outbound mail trait implemented by the infrastructure layer
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers.

pub mod contact;
pub mod transport;

pub use contact::{ContactSubmission, ValidationError, validate};
pub use transport::{MailError, MailTransport, OutgoingEmail};

#[cfg(test)]
pub use transport::MockMailTransport;
