//! Model name resolution.

/// Model used when the deployment does not configure one.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-image-preview";

/// Resolve a configured model name into the identifier used in the URL path.
///
/// Deprecated aliases of the preview image model are mapped to the preview
/// name, and a leading `models/` prefix is stripped since the request path
/// already carries it.
#[must_use]
pub fn resolve(configured: &str) -> String {
    let trimmed = configured.trim();
    if trimmed.is_empty() {
        return DEFAULT_MODEL.to_string();
    }
    let name = trimmed.strip_prefix("models/").unwrap_or(trimmed);
    if name == "gemini-2.5-flash-image" {
        return DEFAULT_MODEL.to_string();
    }
    name.to_string()
}
