//! The image produced by a generation backend.

use serde::{Deserialize, Serialize};

use crate::data_url::DataUrl;

/// Mime type assumed when the backend omits one.
pub const DEFAULT_MIME_TYPE: &str = "image/png";

/// A generated image, still in the base64 form the backend returned it in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedImage {
    /// Mime type reported by the backend, e.g. `image/png`.
    pub mime_type: String,
    /// Base64-encoded image bytes.
    pub data: String,
}

impl GeneratedImage {
    /// Wrap backend output, falling back to [`DEFAULT_MIME_TYPE`] when the
    /// backend did not report a mime type.
    #[must_use]
    pub fn new(mime_type: Option<String>, data: String) -> Self {
        Self {
            mime_type: mime_type.unwrap_or_else(|| DEFAULT_MIME_TYPE.to_string()),
            data,
        }
    }

    /// Render as a browser-displayable data URL.
    #[must_use]
    pub fn to_data_url(&self) -> DataUrl {
        DataUrl::new(self.mime_type.clone(), self.data.clone())
    }
}
