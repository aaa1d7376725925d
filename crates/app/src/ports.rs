//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside
//! world. They live here so that both the use-case layer and the adapter
//! layer can depend on them without creating circular dependencies.

pub mod generator;

pub use generator::ImageGenerator;
