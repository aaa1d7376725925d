//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use paintbox_domain::error::PaintboxError;

/// JSON error body returned by API endpoints.
///
/// `detail` is always set; `error` is added for upstream failures, matching
/// what the frontend error handler looks for.
#[derive(Serialize)]
struct ErrorBody {
    detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Maps [`PaintboxError`] to an HTTP response with appropriate status code.
pub struct ApiError(PaintboxError);

impl From<PaintboxError> for ApiError {
    fn from(err: PaintboxError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail, error) = match &self.0 {
            PaintboxError::Validation(err) => {
                (StatusCode::BAD_REQUEST, err.to_string(), None)
            }
            PaintboxError::MissingApiKey => {
                (StatusCode::UNAUTHORIZED, self.0.to_string(), None)
            }
            PaintboxError::Upstream(err) => {
                tracing::error!(error = %err, "image generation failed");
                let message = err.to_string();
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    message.clone(),
                    Some(message),
                )
            }
        };

        (status, Json(ErrorBody { detail, error })).into_response()
    }
}
