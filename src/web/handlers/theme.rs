//! Theme toggle handler.

use axum::{
    http::{HeaderMap, header::SET_COOKIE},
    response::{IntoResponse, Redirect},
};

use crate::web::view_state::Theme;

/// Flips between light and dark theme and returns to the page.
///
/// # Endpoint
///
/// `POST /theme`
///
/// Persists the new theme in the `theme` cookie and answers `303 See Other`
/// to `/`.
pub async fn theme_handler(headers: HeaderMap) -> impl IntoResponse {
    let theme = Theme::from_headers(&headers).toggled();

    ([(SET_COOKIE, theme.cookie())], Redirect::to("/"))
}
