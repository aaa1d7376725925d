//! Axum router assembly.

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use paintbox_app::ports::ImageGenerator;

use crate::state::AppState;

/// Request bodies carry base64 images, so the default 2 MiB limit is far
/// too small. Matches the original deployment's 10 MB limit.
const BODY_LIMIT_BYTES: usize = 10 * 1024 * 1024;

/// Build the top-level axum [`Router`].
///
/// Mounts the API under `/api`, the frontend at `/`, and a liveness probe
/// at `/health`. Includes a [`TraceLayer`] that logs each HTTP
/// request/response at the `DEBUG` level using the `tracing` ecosystem.
pub fn build<G>(state: AppState<G>) -> Router
where
    G: ImageGenerator + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .route("/", get(crate::page::index))
        .nest("/api", crate::api::routes())
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
