//! Generation service — the single use-case of this application.

use paintbox_domain::edit_request::EditRequest;
use paintbox_domain::error::PaintboxError;
use paintbox_domain::image::GeneratedImage;

use crate::ports::ImageGenerator;

/// Application service for one round of prompt-driven image editing.
///
/// The service owns the fallback API key (from server configuration); the
/// per-request key supplied by the browser always wins when present.
pub struct GenerationService<G> {
    generator: G,
    fallback_api_key: Option<String>,
}

impl<G: ImageGenerator> GenerationService<G> {
    /// Create a new service backed by the given generator.
    pub fn new(generator: G, fallback_api_key: Option<String>) -> Self {
        Self {
            generator,
            fallback_api_key,
        }
    }

    /// Validate the request, resolve the API key, and call the backend.
    ///
    /// # Errors
    ///
    /// Returns [`PaintboxError::Validation`] when the prompt is missing,
    /// [`PaintboxError::MissingApiKey`] when neither the request nor the
    /// configuration carries a key, or an upstream error from the backend.
    #[tracing::instrument(skip_all, fields(has_input_image = request.input_image.is_some()))]
    pub async fn generate(
        &self,
        request_api_key: Option<&str>,
        request: &EditRequest,
    ) -> Result<GeneratedImage, PaintboxError> {
        request.validate()?;

        let api_key = request_api_key
            .filter(|key| !key.is_empty())
            .or(self.fallback_api_key.as_deref())
            .ok_or(PaintboxError::MissingApiKey)?;

        let image = self.generator.generate(api_key, request).await?;
        tracing::debug!(mime_type = %image.mime_type, "image generated");
        Ok(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Generator that records the key it was called with.
    struct RecordingGenerator {
        seen_key: Mutex<Option<String>>,
    }

    impl RecordingGenerator {
        fn new() -> Self {
            Self {
                seen_key: Mutex::new(None),
            }
        }
    }

    impl ImageGenerator for RecordingGenerator {
        async fn generate(
            &self,
            api_key: &str,
            _request: &EditRequest,
        ) -> Result<GeneratedImage, PaintboxError> {
            *self.seen_key.lock().unwrap() = Some(api_key.to_string());
            Ok(GeneratedImage::new(
                Some("image/png".to_string()),
                "aaaa".to_string(),
            ))
        }
    }

    struct FailingGenerator;

    impl ImageGenerator for FailingGenerator {
        async fn generate(
            &self,
            _api_key: &str,
            _request: &EditRequest,
        ) -> Result<GeneratedImage, PaintboxError> {
            Err(paintbox_domain::error::UpstreamError::Transport(
                "connection refused".to_string(),
            )
            .into())
        }
    }

    #[tokio::test]
    async fn should_prefer_request_key_over_fallback() {
        let generator = Arc::new(RecordingGenerator::new());
        let service =
            GenerationService::new(Arc::clone(&generator), Some("server-key".to_string()));

        let request = EditRequest::new("a red balloon");
        service.generate(Some("user-key"), &request).await.unwrap();

        assert_eq!(
            generator.seen_key.lock().unwrap().as_deref(),
            Some("user-key")
        );
    }

    #[tokio::test]
    async fn should_fall_back_to_configured_key() {
        let generator = Arc::new(RecordingGenerator::new());
        let service =
            GenerationService::new(Arc::clone(&generator), Some("server-key".to_string()));

        let request = EditRequest::new("a red balloon");
        service.generate(None, &request).await.unwrap();

        assert_eq!(
            generator.seen_key.lock().unwrap().as_deref(),
            Some("server-key")
        );
    }

    #[tokio::test]
    async fn should_ignore_empty_request_key() {
        let generator = Arc::new(RecordingGenerator::new());
        let service =
            GenerationService::new(Arc::clone(&generator), Some("server-key".to_string()));

        let request = EditRequest::new("a red balloon");
        service.generate(Some(""), &request).await.unwrap();

        assert_eq!(
            generator.seen_key.lock().unwrap().as_deref(),
            Some("server-key")
        );
    }

    #[tokio::test]
    async fn should_error_when_no_key_available() {
        let service = GenerationService::new(RecordingGenerator::new(), None);

        let request = EditRequest::new("a red balloon");
        let err = service.generate(None, &request).await.unwrap_err();

        assert!(matches!(err, PaintboxError::MissingApiKey));
    }

    #[tokio::test]
    async fn should_reject_before_touching_the_backend() {
        let service = GenerationService::new(FailingGenerator, Some("key".to_string()));

        let request = EditRequest::new("  ");
        let err = service.generate(None, &request).await.unwrap_err();

        assert!(matches!(err, PaintboxError::Validation(_)));
    }

    #[tokio::test]
    async fn should_propagate_upstream_errors() {
        let service = GenerationService::new(FailingGenerator, Some("key".to_string()));

        let request = EditRequest::new("a red balloon");
        let err = service.generate(None, &request).await.unwrap_err();

        assert!(matches!(err, PaintboxError::Upstream(_)));
    }
}
