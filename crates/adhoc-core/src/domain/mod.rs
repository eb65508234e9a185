//! Core domain layer for adhoc.
//!
//! This module contains pure business logic with no I/O. Everything the
//! domain reads from a build (artifact sets, default ecosystems) arrives
//! through traits.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No logging**: Spans and events are emitted by the application layer
//! - **Value semantics**: Usage contexts and ecosystems compare by value
//!
// Public API - what the world sees
pub mod ecosystem_source;
pub mod entities;
pub mod error;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use ecosystem_source::{EcosystemSource, NoEcosystems};
pub use entities::{
    artifact_set::{
        ArtifactSet, ConfigurationVariant, OutgoingConfiguration, OutgoingConfigurationBuilder,
    },
    component::SoftwareComponent,
    usage::{UsageContext, UsageSet, UsageSetBuilder},
    variant::{Customizer, VariantBinding, VariantDetails, VariantKind},
};

pub use error::{CustomizeError, DomainError, ErrorCategory};

pub use value_objects::{
    Artifact, Attributes, Capability, Coordinates, Dependency, DependencyConstraint, Ecosystem,
    Scope,
};

pub use validation::DomainValidator;
