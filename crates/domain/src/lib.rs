//! # paintbox-domain
//!
//! Pure domain model for paintbox, an image-editing relay: the user types a
//! natural-language instruction, the server forwards it (plus the previous
//! image, if any) to a generative-image backend and hands the result back as
//! a data URL.
//!
//! ## Responsibilities
//! - Define the [`EditRequest`](edit_request::EditRequest) submitted by the
//!   browser and its invariants
//! - Define the [`DataUrl`](data_url::DataUrl) value object used to move
//!   images over JSON
//! - Define the [`GeneratedImage`](image::GeneratedImage) produced by a
//!   backend
//! - Define the error conventions shared across the workspace
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod data_url;
pub mod edit_request;
pub mod error;
pub mod image;
