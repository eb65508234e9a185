//! Producer of a component's default ecosystems.
//!
//! The component only calls this when nothing was registered explicitly. It
//! lives in the domain because the aggregate depends on it; the application
//! layer re-exports it as a driven port.

use crate::domain::value_objects::Ecosystem;

/// Zero-argument producer of default ecosystems.
///
/// Called once per [`ecosystems`](crate::domain::SoftwareComponent::ecosystems)
/// query while no explicit ecosystem exists, so implementations must be
/// deterministic and free of side effects.
///
/// Implemented by:
/// - any `Fn() -> Vec<Ecosystem> + Send + Sync`
/// - `adhoc_adapters::schema::InMemorySchema` (build-unit attribute schema)
#[cfg_attr(test, mockall::automock)]
pub trait EcosystemSource: Send + Sync {
    fn default_ecosystems(&self) -> Vec<Ecosystem>;
}

impl<F> EcosystemSource for F
where
    F: Fn() -> Vec<Ecosystem> + Send + Sync,
{
    fn default_ecosystems(&self) -> Vec<Ecosystem> {
        self()
    }
}

/// Source that never yields anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoEcosystems;

impl EcosystemSource for NoEcosystems {
    fn default_ecosystems(&self) -> Vec<Ecosystem> {
        Vec::new()
    }
}
