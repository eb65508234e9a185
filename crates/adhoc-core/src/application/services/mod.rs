//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "create a component" or "publish a build".

pub mod component_factory;
pub mod publication_service;

pub use component_factory::ComponentFactory;
pub use publication_service::{Publication, PublicationService};
