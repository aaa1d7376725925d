//! The embedded single-page frontend.
//!
//! The whole UI is one static HTML file compiled into the binary; there is
//! no asset pipeline and nothing to serve from disk.

use axum::response::Html;

const INDEX_HTML: &str = include_str!("../assets/index.html");

/// `GET /` — the paint-by-text page.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
