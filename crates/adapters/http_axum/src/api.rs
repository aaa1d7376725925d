//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod generate;

use axum::Router;
use axum::routing::post;

use paintbox_app::ports::ImageGenerator;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<G>() -> Router<AppState<G>>
where
    G: ImageGenerator + Send + Sync + 'static,
{
    Router::new().route("/generate", post(generate::generate::<G>))
}
