//! The edit request submitted by the browser.

use serde::{Deserialize, Serialize};

use crate::data_url::DataUrl;
use crate::error::ValidationError;

/// Candidate counts outside `1..=4` are clamped to this range.
const MIN_CANDIDATES: u8 = 1;
const MAX_CANDIDATES: u8 = 4;

/// One round of the edit conversation: a natural-language instruction plus
/// the image it applies to (absent on the first, text-to-image round).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditRequest {
    /// The instruction, e.g. "make the sky purple".
    pub prompt: String,
    /// The image being edited, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_image: Option<DataUrl>,
    /// Requested aspect ratio, e.g. "16:9". Accepted but not forwarded to
    /// the backend (the image-editing models ignore it).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<String>,
    /// Person-generation policy hint. Accepted but not forwarded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person_generation: Option<String>,
    /// Requested number of candidates, clamped to `1..=4`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n: Option<u8>,
}

impl EditRequest {
    /// Build a minimal text-to-image request.
    #[must_use]
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            input_image: None,
            aspect_ratio: None,
            person_generation: None,
            n: None,
        }
    }

    /// Attach the image to edit.
    #[must_use]
    pub fn with_input_image(mut self, image: DataUrl) -> Self {
        self.input_image = Some(image);
        self
    }

    /// Request a specific number of candidates.
    #[must_use]
    pub fn with_candidates(mut self, n: u8) -> Self {
        self.n = Some(n);
        self
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingPrompt`] when the prompt is empty
    /// after trimming.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.prompt.trim().is_empty() {
            return Err(ValidationError::MissingPrompt);
        }
        Ok(())
    }

    /// The number of candidates to request from the backend, if the user
    /// asked for one, clamped to `1..=4`.
    #[must_use]
    pub fn candidate_count(&self) -> Option<u8> {
        self.n
            .map(|n| n.clamp(MIN_CANDIDATES, MAX_CANDIDATES))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_plain_prompt() {
        let request = EditRequest::new("a cat wearing a hat");
        assert!(request.validate().is_ok());
        assert!(request.candidate_count().is_none());
    }

    #[test]
    fn should_reject_empty_prompt() {
        let request = EditRequest::new("");
        assert!(matches!(
            request.validate(),
            Err(ValidationError::MissingPrompt)
        ));
    }

    #[test]
    fn should_reject_whitespace_prompt() {
        let request = EditRequest::new("   \n");
        assert!(request.validate().is_err());
    }

    #[test]
    fn should_clamp_candidate_count() {
        assert_eq!(
            EditRequest::new("x").with_candidates(0).candidate_count(),
            Some(1)
        );
        assert_eq!(
            EditRequest::new("x").with_candidates(3).candidate_count(),
            Some(3)
        );
        assert_eq!(
            EditRequest::new("x").with_candidates(9).candidate_count(),
            Some(4)
        );
    }

    #[test]
    fn should_carry_input_image() {
        let image = "data:image/png;base64,aaaa".parse().unwrap();
        let request = EditRequest::new("crop it").with_input_image(image);
        assert_eq!(
            request.input_image.as_ref().map(super::DataUrl::mime_type),
            Some("image/png")
        );
    }

    #[test]
    fn should_deserialize_sparse_json() {
        let request: EditRequest =
            serde_json::from_str(r#"{"prompt": "add a rainbow"}"#).unwrap();
        assert_eq!(request.prompt, "add a rainbow");
        assert!(request.input_image.is_none());
        assert!(request.n.is_none());
    }
}
