//! Per-request UI state of the portfolio page.
//!
//! Nothing here is shared between requests or persisted on the server. The
//! theme lives in a cookie, the menu flag in the query string, and the contact
//! form state only for the duration of one submission.

use axum::http::{HeaderMap, header::COOKIE};
use serde::Deserialize;
use std::time::{Duration, Instant};
use thiserror::Error;

/// How long a success or error banner stays visible.
pub const BANNER_DISPLAY: Duration = Duration::from_secs(5);

pub const SUBMITTING_MESSAGE: &str = "Sending your message...";
pub const SUCCESS_MESSAGE: &str =
    "Your message has been sent successfully! I will get back to you soon.";

pub const THEME_COOKIE: &str = "theme";
/// Client hint sent by browsers that honour `Accept-CH`.
pub const PREFERS_COLOR_SCHEME: &str = "sec-ch-prefers-color-scheme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Resolves the theme for a request.
    ///
    /// Priority:
    /// 1. `theme` cookie set by an explicit toggle
    /// 2. `Sec-CH-Prefers-Color-Scheme` system preference hint
    /// 3. [`Theme::Light`]
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let from_cookie = headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|cookies| cookies.split(';'))
            .find_map(|cookie| {
                let mut parts = cookie.trim().splitn(2, '=');
                match (parts.next(), parts.next()) {
                    (Some(THEME_COOKIE), Some(value)) => Self::parse(value),
                    _ => None,
                }
            });

        from_cookie
            .or_else(|| {
                headers
                    .get(PREFERS_COLOR_SCHEME)
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| Self::parse(v.trim_matches('"')))
            })
            .unwrap_or_default()
    }

    fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// `Set-Cookie` value persisting this theme for a year.
    pub fn cookie(self) -> String {
        format!(
            "{}={}; Path=/; Max-Age=31536000; SameSite=Lax",
            THEME_COOKIE,
            self.as_str()
        )
    }
}

/// Query parameters accepted by the page.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub menu: Option<String>,
}

impl PageQuery {
    /// Mobile menu is open when the query carries `menu=open`.
    pub fn menu_open(&self) -> bool {
        self.menu.as_deref() == Some("open")
    }
}

/// Raw contact form values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ContactFields {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Success(String),
    Error(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("a submission is already in progress")]
    InProgress,
}

/// Banner shown above the contact form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: &'static str,
    pub message: String,
}

/// Contact form values plus the submission state machine.
///
/// ```text
/// Idle ──begin_submit──▶ Submitting ──complete──▶ Success | Error
///   ▲                                                  │
///   └──────────── expire (after BANNER_DISPLAY) ───────┘
/// ```
///
/// A new submission may start from `Idle` or while a result is shown.
/// `begin_submit` and `expire` follow the transitions the page script makes
/// in the browser; a server-rendered form post starts from [`Self::submitting`].
#[derive(Debug, Clone, Default)]
pub struct ContactFormState {
    pub fields: ContactFields,
    status: FormStatus,
    shown_at: Option<Instant>,
}

impl ContactFormState {
    pub fn with_fields(fields: ContactFields) -> Self {
        Self {
            fields,
            ..Self::default()
        }
    }

    /// State of a form whose values were just posted.
    pub fn submitting(fields: ContactFields) -> Self {
        Self {
            fields,
            status: FormStatus::Submitting,
            shown_at: None,
        }
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == FormStatus::Submitting
    }

    /// Moves to `Submitting` and returns the values to submit.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::InProgress`] while a submission is in flight.
    pub fn begin_submit(&mut self) -> Result<ContactFields, SubmitError> {
        if self.is_submitting() {
            return Err(SubmitError::InProgress);
        }

        self.status = FormStatus::Submitting;
        self.shown_at = None;
        Ok(self.fields.clone())
    }

    /// Records the outcome of the in-flight submission.
    ///
    /// Success clears the fields; failure keeps them so the visitor can retry.
    /// Ignored unless a submission is in flight.
    pub fn complete(&mut self, outcome: Result<(), String>, now: Instant) {
        if !self.is_submitting() {
            return;
        }

        self.status = match outcome {
            Ok(()) => {
                self.fields = ContactFields::default();
                FormStatus::Success(SUCCESS_MESSAGE.to_string())
            }
            Err(message) => FormStatus::Error(message),
        };
        self.shown_at = Some(now);
    }

    /// Returns a shown result to `Idle` once [`BANNER_DISPLAY`] has elapsed.
    ///
    /// Returns `true` if the state changed.
    pub fn expire(&mut self, now: Instant) -> bool {
        match self.shown_at {
            Some(shown_at) if now.saturating_duration_since(shown_at) >= BANNER_DISPLAY => {
                self.status = FormStatus::Idle;
                self.shown_at = None;
                true
            }
            _ => false,
        }
    }

    pub fn banner(&self) -> Option<Banner> {
        let (kind, message) = match &self.status {
            FormStatus::Idle => return None,
            FormStatus::Submitting => ("loading", SUBMITTING_MESSAGE.to_string()),
            FormStatus::Success(message) => ("success", message.clone()),
            FormStatus::Error(message) => ("error", message.clone()),
        };

        Some(Banner { kind, message })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn filled() -> ContactFields {
        ContactFields {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hi".to_string(),
        }
    }

    #[test]
    fn test_theme_from_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("session=abc; theme=dark"));

        assert_eq!(Theme::from_headers(&headers), Theme::Dark);
    }

    #[test]
    fn test_theme_cookie_overrides_system_preference() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("theme=light"));
        headers.insert(PREFERS_COLOR_SCHEME, HeaderValue::from_static("\"dark\""));

        assert_eq!(Theme::from_headers(&headers), Theme::Light);
    }

    #[test]
    fn test_theme_from_system_preference() {
        let mut headers = HeaderMap::new();
        headers.insert(PREFERS_COLOR_SCHEME, HeaderValue::from_static("\"dark\""));

        assert_eq!(Theme::from_headers(&headers), Theme::Dark);
    }

    #[test]
    fn test_theme_defaults_to_light() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("theme=purple"));

        assert_eq!(Theme::from_headers(&headers), Theme::Light);
        assert_eq!(Theme::from_headers(&HeaderMap::new()), Theme::Light);
    }

    #[test]
    fn test_theme_toggle_and_cookie() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert!(Theme::Dark.cookie().starts_with("theme=dark;"));
    }

    #[test]
    fn test_menu_query() {
        let open = PageQuery {
            menu: Some("open".to_string()),
        };
        assert!(open.menu_open());
        assert!(!PageQuery::default().menu_open());
    }

    #[test]
    fn test_success_resets_fields_and_expires() {
        let mut form = ContactFormState::with_fields(filled());
        let start = Instant::now();

        assert_eq!(form.begin_submit().unwrap(), filled());
        assert_eq!(form.banner().unwrap().kind, "loading");

        form.complete(Ok(()), start);

        assert_eq!(form.fields, ContactFields::default());
        assert_eq!(form.status(), &FormStatus::Success(SUCCESS_MESSAGE.to_string()));

        assert!(!form.expire(start + Duration::from_secs(4)));
        assert!(form.banner().is_some());

        assert!(form.expire(start + BANNER_DISPLAY));
        assert_eq!(form.status(), &FormStatus::Idle);
        assert!(form.banner().is_none());
    }

    #[test]
    fn test_error_keeps_fields() {
        let mut form = ContactFormState::with_fields(filled());
        let start = Instant::now();

        form.begin_submit().unwrap();
        form.complete(Err("Invalid email format".to_string()), start);

        assert_eq!(form.fields, filled());
        let banner = form.banner().unwrap();
        assert_eq!(banner.kind, "error");
        assert_eq!(banner.message, "Invalid email format");
    }

    #[test]
    fn test_cannot_submit_while_submitting() {
        let mut form = ContactFormState::with_fields(filled());

        form.begin_submit().unwrap();

        assert_eq!(form.begin_submit(), Err(SubmitError::InProgress));
    }

    #[test]
    fn test_can_resubmit_while_result_is_shown() {
        let mut form = ContactFormState::with_fields(filled());
        form.begin_submit().unwrap();
        form.complete(Err("Failed to connect to email server".to_string()), Instant::now());

        assert!(form.begin_submit().is_ok());
        assert!(form.is_submitting());
    }

    #[test]
    fn test_posted_form_starts_submitting() {
        let mut form = ContactFormState::submitting(filled());

        assert!(form.is_submitting());
        assert_eq!(form.banner().unwrap().kind, "loading");

        form.complete(Err("Invalid email format".to_string()), Instant::now());

        assert_eq!(form.fields, filled());
        assert_eq!(form.banner().unwrap().kind, "error");
    }

    #[test]
    fn test_complete_without_submission_is_ignored() {
        let mut form = ContactFormState::with_fields(filled());

        form.complete(Ok(()), Instant::now());

        assert_eq!(form.status(), &FormStatus::Idle);
        assert_eq!(form.fields, filled());
    }
}
