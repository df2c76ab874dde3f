//! Portfolio page template shared by the page handlers.

use askama::Template;
use askama_web::WebTemplate;
use chrono::{Datelike, Utc};

use crate::domain::contact::EMAIL_PATTERN;
use crate::web::profile::{OWNER, Profile};
use crate::web::view_state::{BANNER_DISPLAY, ContactFormState, Theme};

/// Renders `templates/index.html`: every profile section plus the contact form.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct PageTemplate {
    pub profile: &'static Profile,
    pub theme: Theme,
    pub menu_open: bool,
    pub form: ContactFormState,
    /// Banner display window handed to the page script.
    pub banner_ms: u128,
    /// Shape the email input must match before the form is sent.
    pub email_pattern: &'static str,
    pub year: i32,
}

impl PageTemplate {
    pub fn new(theme: Theme, menu_open: bool, form: ContactFormState) -> Self {
        Self {
            profile: &OWNER,
            theme,
            menu_open,
            form,
            banner_ms: BANNER_DISPLAY.as_millis(),
            email_pattern: EMAIL_PATTERN,
            year: Utc::now().year(),
        }
    }
}
