//! Shared application state for axum handlers.

use std::sync::Arc;

use paintbox_app::ports::ImageGenerator;
use paintbox_app::services::generation_service::GenerationService;

/// Application state shared across all axum handlers.
///
/// Generic over the generator type to avoid dynamic dispatch. `Clone` is
/// implemented manually so the generator itself does not need to be `Clone`
/// — only the `Arc` wrapper is cloned.
pub struct AppState<G> {
    /// The one use-case of this application.
    pub generation_service: Arc<GenerationService<G>>,
}

impl<G> Clone for AppState<G> {
    fn clone(&self) -> Self {
        Self {
            generation_service: Arc::clone(&self.generation_service),
        }
    }
}

impl<G> AppState<G>
where
    G: ImageGenerator + Send + Sync + 'static,
{
    /// Create a new application state from the service instance.
    pub fn new(generation_service: GenerationService<G>) -> Self {
        Self {
            generation_service: Arc::new(generation_service),
        }
    }
}
