//! Application services — one per use-case family.

pub mod generation_service;
