//! Gemini `generateContent` wire format.
//!
//! Request and response shapes for the REST endpoint, plus the mapping to
//! and from the domain types. Everything on the wire is camelCase.

use serde::{Deserialize, Serialize};

use paintbox_domain::edit_request::EditRequest;
use paintbox_domain::error::UpstreamError;
use paintbox_domain::image::GeneratedImage;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<RequestPart>,
}

/// A part in a Gemini request — either text or inline image data.
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum RequestPart {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    #[serde(default)]
    mime_type: Option<String>,
    data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_modalities: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    candidate_count: Option<u8>,
}

impl GenerateContentRequest {
    /// Build the wire request: input image first (when editing), then the
    /// text prompt, wrapped in a single user content.
    pub(crate) fn from_edit_request(request: &EditRequest) -> Self {
        let mut parts = Vec::new();

        if let Some(image) = &request.input_image {
            parts.push(RequestPart::InlineData {
                inline_data: InlineData {
                    mime_type: Some(image.mime_type().to_string()),
                    data: image.payload().to_string(),
                },
            });
        }

        parts.push(RequestPart::Text {
            text: request.prompt.clone(),
        });

        Self {
            contents: vec![Content { parts }],
            generation_config: GenerationConfig {
                response_modalities: vec!["IMAGE".to_string()],
                candidate_count: request.candidate_count(),
            },
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
    #[serde(default)]
    block_reason_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponsePart {
    #[serde(default)]
    inline_data: Option<InlineData>,
    #[serde(default)]
    text: Option<String>,
}

/// Finish reasons that mean the safety stack suppressed the image.
const BLOCKING_FINISH_REASONS: &[&str] = &[
    "SAFETY",
    "IMAGE_SAFETY",
    "IMAGE_PROHIBITED_CONTENT",
    "IMAGE_RECITATION",
    "RECITATION",
    "PROHIBITED_CONTENT",
    "BLOCKLIST",
];

impl GenerateContentResponse {
    /// Extract the first inline image from the response.
    ///
    /// Prompt-feedback blocks and safety finish reasons arrive with HTTP
    /// 200, so they are surfaced here rather than in status handling.
    pub(crate) fn into_image(self) -> Result<GeneratedImage, UpstreamError> {
        if let Some(feedback) = &self.prompt_feedback {
            if let Some(reason) = &feedback.block_reason {
                let message = feedback
                    .block_reason_message
                    .clone()
                    .unwrap_or_else(|| format!("Prompt blocked: {reason}"));
                return Err(UpstreamError::ContentBlocked(message));
            }
        }

        let candidate = self.candidates.into_iter().next().ok_or_else(|| {
            UpstreamError::UnexpectedResponse("no candidates in response".to_string())
        })?;

        if let Some(reason) = candidate
            .finish_reason
            .as_deref()
            .filter(|reason| BLOCKING_FINISH_REASONS.contains(reason))
        {
            return Err(UpstreamError::ContentBlocked(format!(
                "Content blocked by Gemini safety filter: {reason}"
            )));
        }

        let parts = candidate.content.map(|content| content.parts).ok_or_else(
            || UpstreamError::UnexpectedResponse("no content in candidate".to_string()),
        )?;

        let mut texts = Vec::new();
        for part in parts {
            match part {
                ResponsePart {
                    inline_data: Some(inline),
                    ..
                } if inline
                    .mime_type
                    .as_deref()
                    .is_none_or(|mime| mime.starts_with("image/")) =>
                {
                    return Ok(GeneratedImage::new(inline.mime_type, inline.data));
                }
                ResponsePart {
                    text: Some(text), ..
                } => texts.push(text),
                ResponsePart { .. } => {}
            }
        }

        // No image part: the model answered in text (refusal, clarification).
        let message = if texts.is_empty() {
            "No image returned by Gemini".to_string()
        } else {
            texts.join("")
        };
        Err(UpstreamError::NoImage(message))
    }
}

/// Best-effort message extraction from a non-success error body.
///
/// The REST API wraps errors as `{"error": {"message": ...}}`; anything
/// else falls back to the raw body, or a generic line when that is empty.
pub(crate) fn error_message(status: u16, body: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        error: ErrorDetail,
    }
    #[derive(Deserialize)]
    struct ErrorDetail {
        message: String,
    }

    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        return parsed.error.message;
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("Gemini returned HTTP {status}")
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paintbox_domain::data_url::DataUrl;

    #[test]
    fn should_serialize_text_only_request_in_camel_case() {
        let request = GenerateContentRequest::from_edit_request(&EditRequest::new("A puppy"));
        let json = serde_json::to_value(&request).unwrap();

        assert!(json.get("generationConfig").is_some());
        assert!(json.get("generation_config").is_none());
        assert_eq!(
            json["generationConfig"]["responseModalities"],
            serde_json::json!(["IMAGE"])
        );
        assert!(json["generationConfig"].get("candidateCount").is_none());
        assert_eq!(json["contents"][0]["parts"][0]["text"], "A puppy");
    }

    #[test]
    fn should_place_input_image_before_prompt() {
        let image: DataUrl = "data:image/jpeg;base64,/9j/4AAQ".parse().unwrap();
        let request = GenerateContentRequest::from_edit_request(
            &EditRequest::new("Make it rain").with_input_image(image),
        );
        let json = serde_json::to_value(&request).unwrap();

        let parts = json["contents"][0]["parts"].as_array().unwrap();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0]["inline_data"]["mimeType"], "image/jpeg");
        assert_eq!(parts[0]["inline_data"]["data"], "/9j/4AAQ");
        assert_eq!(parts[1]["text"], "Make it rain");
    }

    #[test]
    fn should_carry_clamped_candidate_count() {
        let request =
            GenerateContentRequest::from_edit_request(&EditRequest::new("x").with_candidates(9));
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["generationConfig"]["candidateCount"], 4);
    }

    #[test]
    fn should_extract_inline_image() {
        let json = r#"{
            "candidates": [{
                "content": {
                    "parts": [{
                        "inlineData": {"mimeType": "image/png", "data": "iVBORw0KGgo="}
                    }]
                },
                "finishReason": "STOP"
            }]
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        let image = response.into_image().unwrap();
        assert_eq!(image.mime_type, "image/png");
        assert_eq!(image.data, "iVBORw0KGgo=");
    }

    #[test]
    fn should_skip_text_parts_before_the_image() {
        let json = r#"{
            "candidates": [{
                "content": {
                    "parts": [
                        {"text": "Here you go:"},
                        {"inlineData": {"mimeType": "image/webp", "data": "aaaa"}}
                    ]
                }
            }]
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        let image = response.into_image().unwrap();
        assert_eq!(image.mime_type, "image/webp");
    }

    #[test]
    fn should_report_text_answer_when_no_image() {
        let json = r#"{
            "candidates": [{
                "content": {"parts": [{"text": "I cannot edit this image."}]}
            }]
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        let err = response.into_image().unwrap_err();
        assert!(
            matches!(err, UpstreamError::NoImage(message) if message == "I cannot edit this image.")
        );
    }

    #[test]
    fn should_fall_back_to_generic_no_image_message() {
        let json = r#"{"candidates": [{"content": {"parts": [{}]}}]}"#;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        let err = response.into_image().unwrap_err();
        assert!(
            matches!(err, UpstreamError::NoImage(message) if message == "No image returned by Gemini")
        );
    }

    #[test]
    fn should_surface_prompt_feedback_block() {
        let json = r#"{
            "candidates": [],
            "promptFeedback": {
                "blockReason": "SAFETY",
                "blockReasonMessage": "Prompt was blocked due to safety"
            }
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        let err = response.into_image().unwrap_err();
        assert!(
            matches!(err, UpstreamError::ContentBlocked(message) if message.contains("safety"))
        );
    }

    #[test]
    fn should_surface_safety_finish_reason() {
        let json = r#"{"candidates": [{"finishReason": "IMAGE_SAFETY"}]}"#;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        let err = response.into_image().unwrap_err();
        assert!(
            matches!(err, UpstreamError::ContentBlocked(message) if message.contains("IMAGE_SAFETY"))
        );
    }

    #[test]
    fn should_error_on_empty_candidate_list() {
        let json = r#"{"candidates": []}"#;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert!(matches!(
            response.into_image().unwrap_err(),
            UpstreamError::UnexpectedResponse(_)
        ));
    }

    #[test]
    fn should_extract_api_error_message() {
        let body = r#"{"error": {"code": 400, "message": "API key not valid", "status": "INVALID_ARGUMENT"}}"#;
        assert_eq!(error_message(400, body), "API key not valid");
    }

    #[test]
    fn should_fall_back_to_raw_body() {
        assert_eq!(error_message(503, "service melted"), "service melted");
    }

    #[test]
    fn should_fall_back_to_status_line_for_empty_body() {
        assert_eq!(error_message(503, "  "), "Gemini returned HTTP 503");
    }
}
