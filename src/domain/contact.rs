//! Contact submission entity and the validation shared by every entry point.
//!
//! Both the JSON endpoint and the HTML form flow call [`validate`] so the two
//! paths can never disagree on what a valid submission is.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// `local@domain.tld` where no part contains whitespace or `@`.
///
/// Unanchored, as the HTML `pattern` attribute expects. The page renders it
/// on the email input so the browser applies the same rule.
pub const EMAIL_PATTERN: &str = r"[^\s@]+@[^\s@]+\.[^\s@]+";

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^{}$", EMAIL_PATTERN)).expect("valid email pattern")
});

/// Reasons a submission is rejected before any mail is sent.
///
/// The display strings are returned verbatim to the client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("All fields are required")]
    MissingFields,

    #[error("Invalid email format")]
    InvalidEmail,
}

/// A validated contact form submission.
///
/// Exists only for the duration of one request. Construct it through
/// [`validate`] so that every instance satisfies the field and email rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    name: String,
    email: String,
    message: String,
}

impl ContactSubmission {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Returns `true` if `email` has the `local@domain.tld` shape.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Validates raw form input and builds a [`ContactSubmission`].
///
/// # Rules
///
/// Checked in order, the first failure wins:
///
/// 1. `name`, `email` and `message` must all be present and non-empty
/// 2. `email` must match `local@domain.tld`
///
/// Values are kept exactly as submitted. Whitespace-only values count as
/// present.
///
/// # Errors
///
/// Returns [`ValidationError::MissingFields`] or [`ValidationError::InvalidEmail`].
pub fn validate(
    name: Option<&str>,
    email: Option<&str>,
    message: Option<&str>,
) -> Result<ContactSubmission, ValidationError> {
    let (Some(name), Some(email), Some(message)) = (
        name.filter(|v| !v.is_empty()),
        email.filter(|v| !v.is_empty()),
        message.filter(|v| !v.is_empty()),
    ) else {
        return Err(ValidationError::MissingFields);
    };

    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(ContactSubmission {
        name: name.to_string(),
        email: email.to_string(),
        message: message.to_string(),
    })
}
