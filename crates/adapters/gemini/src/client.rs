//! HTTP client for the Gemini `generateContent` endpoint.

use paintbox_app::ports::ImageGenerator;
use paintbox_domain::edit_request::EditRequest;
use paintbox_domain::error::{PaintboxError, UpstreamError};
use paintbox_domain::image::GeneratedImage;

use crate::model;
use crate::wire::{self, GenerateContentRequest, GenerateContentResponse};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Client for the Gemini REST API.
///
/// Holds no API key — each call carries the key of the user it is made for.
/// A single instance (and its connection pool) is shared by all requests.
pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
}

impl GeminiClient {
    /// Create a client for the given model name.
    ///
    /// The name goes through [`model::resolve`], so deprecated aliases and
    /// `models/` prefixes are accepted.
    #[must_use]
    pub fn new(configured_model: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: model::resolve(configured_model),
        }
    }

    /// Point the client at a different host. Used by tests to target a
    /// local mock server.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// The resolved model identifier this client calls.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    async fn generate_impl(
        &self,
        api_key: &str,
        request: &EditRequest,
    ) -> Result<GeneratedImage, PaintboxError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model,
        );
        let body = GenerateContentRequest::from_edit_request(request);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(|err| UpstreamError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = wire::error_message(status.as_u16(), &text);
            tracing::warn!(status = status.as_u16(), %message, "generation failed");
            return Err(UpstreamError::Api {
                status: status.as_u16(),
                message,
            }
            .into());
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|err| UpstreamError::UnexpectedResponse(err.to_string()))?;

        Ok(parsed.into_image()?)
    }
}

impl ImageGenerator for GeminiClient {
    async fn generate(
        &self,
        api_key: &str,
        request: &EditRequest,
    ) -> Result<GeneratedImage, PaintboxError> {
        self.generate_impl(api_key, request).await
    }
}
