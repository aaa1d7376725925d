//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`PaintboxError`] via `#[from]` — no stringly-typed catch-all variants
//! at the domain boundary.

/// Top-level error for the paintbox workspace.
#[derive(Debug, thiserror::Error)]
pub enum PaintboxError {
    /// The request violated a domain invariant.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No API key was supplied in the request and none is configured.
    #[error(
        "Missing Google API key. Please provide your key in the x-google-api-key header."
    )]
    MissingApiKey,

    /// The generative-image backend failed.
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

/// Domain invariant violations.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// The prompt was absent or empty after trimming.
    #[error("Missing required field: prompt")]
    MissingPrompt,
}

/// Failures reported by (or while talking to) the image backend.
///
/// All variants map to an HTTP 500 at the edge; the distinctions exist so
/// the relay can log them apart and surface a useful `detail` message.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// Could not reach the backend at all.
    #[error("image backend unreachable: {0}")]
    Transport(String),

    /// The backend answered with a non-success status.
    #[error("{message}")]
    Api {
        /// HTTP status returned by the backend.
        status: u16,
        /// Best-effort message extracted from the error body.
        message: String,
    },

    /// The backend refused the request on safety grounds.
    #[error("{0}")]
    ContentBlocked(String),

    /// The backend answered successfully but returned no image.
    #[error("{0}")]
    NoImage(String),

    /// The backend returned a body we could not make sense of.
    #[error("unexpected response from image backend: {0}")]
    UnexpectedResponse(String),
}

/// Malformed data URL strings.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum DataUrlError {
    /// The string does not start with the `data:` scheme.
    #[error("not a data URL")]
    MissingScheme,

    /// The string is not base64-encoded (`;base64,` marker absent).
    #[error("data URL is not base64-encoded")]
    NotBase64,

    /// The mime type between `data:` and `;base64,` is empty.
    #[error("data URL has an empty mime type")]
    EmptyMimeType,
}
