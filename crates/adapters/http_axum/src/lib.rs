//! # paintbox-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve `POST /api/generate` — the JSON relay endpoint the browser calls
//!   for each edit round
//! - Serve the embedded single-page frontend at `/` (token modal, prompt
//!   form, history list, drag-and-drop upload)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application errors into the `{detail, error}` JSON bodies the
//!   frontend expects
//!
//! ## Dependency rule
//! Depends on `paintbox-app` (for the port trait and service) and
//! `paintbox-domain` (for the types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod page;
pub mod router;
pub mod state;
