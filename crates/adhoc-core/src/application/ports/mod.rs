//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `adhoc-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `EcosystemSource`: default ecosystems of a build unit
//!   - `MetadataWriter`: renders publications for downstream consumers

pub mod output;

pub use output::{EcosystemSource, MetadataWriter};

#[cfg(test)]
pub use output::MockMetadataWriter;
