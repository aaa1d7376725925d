//! `POST /api/generate` — one round of prompt-driven image editing.

use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use paintbox_app::ports::ImageGenerator;
use paintbox_domain::data_url::DataUrl;
use paintbox_domain::edit_request::EditRequest;

use crate::error::ApiError;
use crate::state::AppState;

/// Header carrying the user's own API key.
pub const API_KEY_HEADER: &str = "x-google-api-key";

/// Request body. Every field is optional on the wire so that absent and
/// `null` fields are treated alike; the prompt requirement is enforced by
/// domain validation (400), not by deserialization (422).
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub input_image: Option<String>,
    #[serde(default)]
    pub aspect_ratio: Option<String>,
    #[serde(default)]
    pub person_generation: Option<String>,
    #[serde(default)]
    pub n: Option<i64>,
}

/// Success body: the generated image as a data URL.
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub image: String,
}

impl IntoResponse for GenerateResponse {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

impl GenerateRequest {
    fn into_edit_request(self) -> EditRequest {
        // An input image that is not a base64 data URL is silently dropped
        // and the round proceeds text-to-image, mirroring the frontend's
        // seed-image URLs which are plain https links.
        let input_image = self
            .input_image
            .and_then(|raw| raw.parse::<DataUrl>().ok());

        EditRequest {
            prompt: self.prompt.unwrap_or_default(),
            input_image,
            aspect_ratio: self.aspect_ratio,
            person_generation: self.person_generation,
            // `0` means "not asked for", matching a truthiness check.
            n: self
                .n
                .filter(|&value| value != 0)
                .map(|value| u8::try_from(value.clamp(1, 4)).unwrap_or(1)),
        }
    }
}

/// `POST /api/generate`
pub async fn generate<G>(
    State(state): State<AppState<G>>,
    headers: HeaderMap,
    Json(body): Json<GenerateRequest>,
) -> Result<GenerateResponse, ApiError>
where
    G: ImageGenerator + Send + Sync + 'static,
{
    let api_key = headers
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok());

    let request = body.into_edit_request();
    let image = state
        .generation_service
        .generate(api_key, &request)
        .await?;

    Ok(GenerateResponse {
        image: image.to_data_url().to_string(),
    })
}
