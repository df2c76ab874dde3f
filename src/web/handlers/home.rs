//! Portfolio home page handler.

use axum::{
    extract::Query,
    http::{HeaderMap, HeaderName, header::VARY},
    response::IntoResponse,
};

use super::page::PageTemplate;
use crate::web::view_state::{ContactFormState, PageQuery, Theme};

const ACCEPT_CH: HeaderName = HeaderName::from_static("accept-ch");
const COLOR_SCHEME_HINT: &str = "Sec-CH-Prefers-Color-Scheme";

/// Renders the portfolio page.
///
/// # Endpoint
///
/// `GET /`
///
/// # Query
///
/// - `menu=open` renders the mobile navigation expanded
///
/// The theme comes from the `theme` cookie or the system preference hint.
/// The response asks the browser to send that hint on later requests.
pub async fn home_handler(headers: HeaderMap, Query(query): Query<PageQuery>) -> impl IntoResponse {
    let page = PageTemplate::new(
        Theme::from_headers(&headers),
        query.menu_open(),
        ContactFormState::default(),
    );

    (
        [(ACCEPT_CH, COLOR_SCHEME_HINT), (VARY, COLOR_SCHEME_HINT)],
        page,
    )
}
