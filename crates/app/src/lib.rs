//! # paintbox-app
//!
//! Application layer: use-cases and port definitions.
//!
//! ## Responsibilities
//! - Define the [`ImageGenerator`](ports::ImageGenerator) port that image
//!   backends implement
//! - Orchestrate one edit round: validate the request, pick a key, call the
//!   backend ([`services::generation_service::GenerationService`])
//!
//! ## Dependency rule
//! Depends only on `paintbox-domain`. Adapters depend on this crate to
//! implement its ports; this crate never depends on adapters.

pub mod ports;
pub mod services;
