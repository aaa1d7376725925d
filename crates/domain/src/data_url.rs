//! Base64 data URL value object.
//!
//! Images cross the JSON boundary as `data:<mime>;base64,<payload>` strings,
//! both inbound (the previous image the user is editing) and outbound (the
//! image the backend generated). [`DataUrl`] keeps the two halves split so
//! adapters never re-parse the string.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DataUrlError;

/// A parsed `data:<mime>;base64,<payload>` URL.
///
/// Parsing validates the shape only — the payload is kept as the original
/// base64 text and is not decoded here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DataUrl {
    mime_type: String,
    payload: String,
}

impl DataUrl {
    /// Assemble a data URL from a mime type and a base64 payload.
    #[must_use]
    pub fn new(mime_type: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            payload: payload.into(),
        }
    }

    /// The mime type, e.g. `image/png`.
    #[must_use]
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// The base64 payload, without the `data:...;base64,` prefix.
    #[must_use]
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// Whether the mime type is in the `image/*` family.
    #[must_use]
    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }
}

impl FromStr for DataUrl {
    type Err = DataUrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rest = s.strip_prefix("data:").ok_or(DataUrlError::MissingScheme)?;
        let (mime_type, payload) = rest
            .split_once(";base64,")
            .ok_or(DataUrlError::NotBase64)?;
        if mime_type.is_empty() {
            return Err(DataUrlError::EmptyMimeType);
        }
        Ok(Self {
            mime_type: mime_type.to_string(),
            payload: payload.to_string(),
        })
    }
}

impl TryFrom<String> for DataUrl {
    type Error = DataUrlError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DataUrl> for String {
    fn from(value: DataUrl) -> Self {
        value.to_string()
    }
}

impl fmt::Display for DataUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "data:{};base64,{}", self.mime_type, self.payload)
    }
}
