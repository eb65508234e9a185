//! adhoc Core - Hexagonal Architecture Implementation
//!
//! This crate models **ad-hoc software components**: named descriptions of
//! what a build output publishes, assembled from variants of outgoing
//! artifact sets and tagged with ecosystems.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            adhoc-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (ComponentFactory, PublicationService)  │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Driven: EcosystemSource, MetadataWriter)│
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    adhoc-adapters (Infrastructure)      │
//! │ (InMemorySchema, JsonWriter, loaders)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (SoftwareComponent, VariantBinding,     │
//! │  UsageContext, Ecosystem)               │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use adhoc_core::prelude::*;
//!
//! let factory = ComponentFactory::new(Arc::new(|| {
//!     vec![Ecosystem::new("java", None).unwrap()]
//! }));
//!
//! let mut component = factory.adhoc("java").unwrap();
//! component.add_variant(
//!     Arc::new(
//!         OutgoingConfiguration::builder("apiElements")
//!             .attribute("usage", "java-api")
//!             .build(),
//!     ),
//!     |details| {
//!         details.map_to_scope(Scope::Compile);
//!         Ok(())
//!     },
//! );
//!
//! let usages = component.usages().unwrap();
//! assert_eq!(usages.len(), 1);
//! assert_eq!(component.ecosystems()[0].name(), "java");
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ComponentFactory, Publication, PublicationService,
        ports::{EcosystemSource, MetadataWriter},
    };
    pub use crate::domain::{
        Artifact, ArtifactSet, Attributes, Capability, ConfigurationVariant, Coordinates,
        Ecosystem, OutgoingConfiguration, Scope, SoftwareComponent, UsageContext, UsageSet,
        VariantDetails, VariantKind,
    };
    pub use crate::error::{AdhocError, AdhocResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
