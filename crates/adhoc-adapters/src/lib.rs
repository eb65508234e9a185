//! Infrastructure adapters for adhoc.
//!
//! This crate implements the ports defined in `adhoc-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod build_loader;
pub mod schema;
pub mod writer;

// Re-export commonly used adapters
pub use build_loader::{BuildFile, BuildFileLoader};
pub use schema::InMemorySchema;
pub use writer::{JsonWriter, TextWriter};
