//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `adhoc-adapters` crate provides implementations.

use crate::application::services::Publication;
use crate::error::AdhocResult;

/// Port for the default ecosystems of a build unit.
///
/// Defined next to the aggregate that consumes it; re-exported here so
/// adapters find every port in one place.
pub use crate::domain::EcosystemSource;

/// Port for metadata serialization.
///
/// Implemented by:
/// - `adhoc_adapters::writer::JsonWriter` (module-metadata style JSON)
/// - `adhoc_adapters::writer::TextWriter` (human summary)
#[cfg_attr(test, mockall::automock)]
pub trait MetadataWriter: Send + Sync {
    /// Short identifier used in errors and logs, e.g. `"json"`.
    fn format(&self) -> &'static str;

    /// Render one publication.
    fn write(&self, publication: &Publication) -> AdhocResult<String>;
}
