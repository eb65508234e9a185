//! Attribute schema adapters (sources of default ecosystems).

pub mod memory;

pub use memory::InMemorySchema;
