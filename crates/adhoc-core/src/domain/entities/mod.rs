pub mod artifact_set;
pub mod component;
pub mod usage;
pub mod variant;

pub use crate::domain::DomainError;
pub use artifact_set::{ArtifactSet, ConfigurationVariant, OutgoingConfiguration};
pub use component::SoftwareComponent;
pub use usage::{UsageContext, UsageSet};
pub use variant::{VariantBinding, VariantDetails};
