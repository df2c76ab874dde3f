//! Askama templates for the outbound contact email.

use askama::Template;

/// Plain text body, rendered from `templates/emails/contact.txt`.
#[derive(Template)]
#[template(path = "emails/contact.txt", escape = "none")]
pub struct ContactTextTemplate<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub message: &'a str,
}

/// HTML body, rendered from `templates/emails/contact.html`.
///
/// The message is passed pre-split on `\n` so the template can join the
/// escaped lines with `<br>`.
#[derive(Template)]
#[template(path = "emails/contact.html")]
pub struct ContactHtmlTemplate<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub lines: Vec<&'a str>,
}
