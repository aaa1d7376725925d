//! Image generator port — the outbound boundary to a generative backend.

use std::future::Future;

use paintbox_domain::edit_request::EditRequest;
use paintbox_domain::error::PaintboxError;
use paintbox_domain::image::GeneratedImage;

/// Turns an [`EditRequest`] into a [`GeneratedImage`] using some external
/// generative-image service.
///
/// The API key is per-call rather than per-client: every browser request
/// carries the user's own key, so one client instance serves all of them.
pub trait ImageGenerator {
    /// Generate (or edit) an image.
    fn generate(
        &self,
        api_key: &str,
        request: &EditRequest,
    ) -> impl Future<Output = Result<GeneratedImage, PaintboxError>> + Send;
}

impl<T: ImageGenerator + Send + Sync> ImageGenerator for std::sync::Arc<T> {
    fn generate(
        &self,
        api_key: &str,
        request: &EditRequest,
    ) -> impl Future<Output = Result<GeneratedImage, PaintboxError>> + Send {
        (**self).generate(api_key, request)
    }
}
