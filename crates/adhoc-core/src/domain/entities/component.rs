//! The `SoftwareComponent` aggregate root.
//!
//! A component is a named, mutable description of what a build output
//! publishes. Plugin code registers variant bindings and ecosystems during
//! configuration; the publication pass later asks for usages and ecosystems.
//!
//! # Lazy usages
//!
//! Nothing is materialized on registration. [`SoftwareComponent::usages`]
//! replays every binding on each call, so the result always matches the
//! bindings registered so far and there is no cache to invalidate. Returned
//! sets are owned by the caller and never change afterwards.
//!
//! # Ecosystems: override, not merge
//!
//! The first explicit [`SoftwareComponent::register_ecosystem`] allocates the
//! explicit list. From then on the default source is never consulted again.
//!
//! # Domain purity
//!
//! This module must not import `tracing`. Observability is the responsibility
//! of the application and CLI layers, not the domain.

use std::fmt;
use std::sync::Arc;

use crate::domain::{
    ecosystem_source::EcosystemSource,
    entities::{
        artifact_set::ArtifactSet,
        usage::{UsageSet, UsageSetBuilder},
        variant::{VariantBinding, VariantDetails},
    },
    error::{CustomizeError, DomainError},
    value_objects::Ecosystem,
};

/// A publishable software component built from ad-hoc variants.
pub struct SoftwareComponent {
    name: String,
    variants: Vec<VariantBinding>,
    explicit_ecosystems: Option<Vec<Ecosystem>>,
    default_ecosystems: Arc<dyn EcosystemSource>,
}

impl SoftwareComponent {
    /// Create a component. Usually called by
    /// [`ComponentFactory`](crate::application::ComponentFactory).
    pub fn new(name: impl Into<String>, default_ecosystems: Arc<dyn EcosystemSource>) -> Self {
        Self {
            name: name.into(),
            variants: Vec::with_capacity(4),
            explicit_ecosystems: None,
            default_ecosystems,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register the variants of `source`, adjusted by `customizer`.
    ///
    /// The customizer is not called here; it runs on every [`Self::usages`]
    /// query. Registering the same source twice creates two independent
    /// bindings.
    pub fn add_variant<F>(&mut self, source: Arc<dyn ArtifactSet>, customizer: F)
    where
        F: Fn(&mut VariantDetails<'_>) -> Result<(), CustomizeError> + Send + Sync + 'static,
    {
        self.variants.push(VariantBinding::new(source, customizer));
    }

    /// Register the variants of `source` unchanged.
    pub fn add_variant_verbatim(&mut self, source: Arc<dyn ArtifactSet>) {
        self.add_variant(source, |_| Ok(()));
    }

    /// Register an explicit ecosystem, overriding the defaults from now on.
    ///
    /// An empty `name` is rejected and leaves the component unchanged.
    pub fn register_ecosystem(
        &mut self,
        name: impl Into<String>,
        description: Option<&str>,
    ) -> Result<(), DomainError> {
        let ecosystem = Ecosystem::new(name, description)?;
        self.explicit_ecosystems
            .get_or_insert_with(|| Vec::with_capacity(2))
            .push(ecosystem);
        Ok(())
    }

    /// Materialize every binding, in registration order, into a fresh set.
    ///
    /// Any failure aborts the whole query; no partial set is returned.
    pub fn usages(&self) -> Result<UsageSet, DomainError> {
        let mut builder = UsageSetBuilder::new();
        for binding in &self.variants {
            binding.collect_usage_contexts(&mut builder)?;
        }
        Ok(builder.build())
    }

    /// The explicit ecosystems if any were registered, otherwise the defaults.
    pub fn ecosystems(&self) -> Vec<Ecosystem> {
        match &self.explicit_ecosystems {
            Some(explicit) => explicit.clone(),
            None => self.default_ecosystems.default_ecosystems(),
        }
    }

    /// Whether [`Self::ecosystems`] returns explicitly registered values.
    pub fn has_explicit_ecosystems(&self) -> bool {
        self.explicit_ecosystems.is_some()
    }

    pub fn variant_count(&self) -> usize {
        self.variants.len()
    }

}

impl fmt::Debug for SoftwareComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SoftwareComponent")
            .field("name", &self.name)
            .field("variants", &self.variants)
            .field("explicit_ecosystems", &self.explicit_ecosystems)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for SoftwareComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} variant bindings)", self.name, self.variants.len())
    }
}
