//! # paintbox-adapter-gemini
//!
//! Outbound adapter implementing the
//! [`ImageGenerator`](paintbox_app::ports::ImageGenerator) port against the
//! Google Gemini `generateContent` REST API.
//!
//! ## Responsibilities
//! - Resolve the model name (including deprecated aliases)
//! - Map an [`EditRequest`](paintbox_domain::edit_request::EditRequest) into
//!   the Gemini wire format (inline image part + text part)
//! - Map the Gemini response back into a
//!   [`GeneratedImage`](paintbox_domain::image::GeneratedImage), surfacing
//!   safety blocks and missing images as typed upstream errors
//!
//! ## Dependency rule
//! Depends on `paintbox-app` (for the port trait) and `paintbox-domain`
//! (for the types crossing the boundary). Never leaks reqwest or wire types
//! upward.

pub mod client;
pub mod model;
mod wire;

pub use client::GeminiClient;
