//! Variant bindings and the usage-materialization protocol.
//!
//! A [`VariantBinding`] pairs an artifact set with a customizer. When usages
//! are queried the binding walks the set's primary variant and then each
//! secondary variant, hands the customizer a fresh [`VariantDetails`] for each,
//! and contributes one [`UsageContext`] per variant that was not skipped.
//!
//! Secondary variants publish as `<set name><Capitalized variant name>`, so
//! `runtimeElements` + `classes` becomes `runtimeElementsClasses`.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::domain::{
    entities::{
        artifact_set::{ArtifactSet, ConfigurationVariant},
        usage::{UsageContext, UsageSetBuilder},
    },
    error::{CustomizeError, DomainError},
    value_objects::{Artifact, Attributes, Capability, Scope},
};

/// Caller-supplied adjustment of a variant's publication details.
pub type Customizer =
    Box<dyn Fn(&mut VariantDetails<'_>) -> Result<(), CustomizeError> + Send + Sync + 'static>;

/// Which variant of an artifact set a [`VariantDetails`] handle describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantKind<'a> {
    /// The artifact set itself.
    Primary,
    /// One of the set's secondary variants.
    Secondary(&'a ConfigurationVariant),
}

/// Mutable handle given to a customizer, once per variant and per query.
///
/// Left untouched, the variant is published verbatim.
#[derive(Debug)]
pub struct VariantDetails<'a> {
    kind: VariantKind<'a>,
    name: String,
    attributes: Attributes,
    artifacts: Vec<Artifact>,
    capabilities: Vec<Capability>,
    scope: Option<Scope>,
    optional: bool,
    skipped: bool,
}

impl<'a> VariantDetails<'a> {
    fn primary(source: &dyn ArtifactSet) -> Self {
        Self {
            kind: VariantKind::Primary,
            name: source.name().to_owned(),
            attributes: source.attributes(),
            artifacts: source.artifacts(),
            capabilities: source.capabilities(),
            scope: None,
            optional: false,
            skipped: false,
        }
    }

    fn secondary(source: &dyn ArtifactSet, variant: &'a ConfigurationVariant) -> Self {
        let mut attributes = source.attributes();
        attributes.extend(variant.attributes.clone());
        Self {
            kind: VariantKind::Secondary(variant),
            name: format!("{}{}", source.name(), capitalize(&variant.name)),
            attributes,
            artifacts: variant.artifacts.clone(),
            capabilities: source.capabilities(),
            scope: None,
            optional: false,
            skipped: false,
        }
    }

    /// The variant being customized.
    pub fn variant(&self) -> VariantKind<'a> {
        self.kind
    }

    /// Name the variant will be published under.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn artifacts(&self) -> &[Artifact] {
        &self.artifacts
    }

    /// Exclude this variant from publication.
    pub fn skip(&mut self) {
        self.skipped = true;
    }

    /// Publish under a different name.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Remap the published artifacts.
    pub fn map_artifacts<F>(&mut self, f: F)
    where
        F: FnOnce(Vec<Artifact>) -> Vec<Artifact>,
    {
        let artifacts = std::mem::take(&mut self.artifacts);
        self.artifacts = f(artifacts);
    }

    /// Attach an extra capability.
    pub fn add_capability(&mut self, capability: Capability) {
        if !self.capabilities.contains(&capability) {
            self.capabilities.push(capability);
        }
    }

    pub fn map_to_scope(&mut self, scope: Scope) {
        self.scope = Some(scope);
    }

    pub fn map_to_optional(&mut self) {
        self.optional = true;
    }

    fn into_context(self, source: &dyn ArtifactSet) -> UsageContext {
        UsageContext {
            name: self.name,
            attributes: self.attributes,
            artifacts: self.artifacts,
            dependencies: source.dependencies(),
            dependency_constraints: source.dependency_constraints(),
            capabilities: self.capabilities,
            scope: self.scope,
            optional: self.optional,
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ── Binding ───────────────────────────────────────────────────────────────────

/// An artifact set registered on a component together with its customizer.
pub struct VariantBinding {
    source: Arc<dyn ArtifactSet>,
    customizer: Customizer,
}

impl VariantBinding {
    pub fn new<F>(source: Arc<dyn ArtifactSet>, customizer: F) -> Self
    where
        F: Fn(&mut VariantDetails<'_>) -> Result<(), CustomizeError> + Send + Sync + 'static,
    {
        Self {
            source,
            customizer: Box::new(customizer),
        }
    }

    /// Materialize this binding's variants into `out`.
    ///
    /// Customizer errors abort the walk and are returned as
    /// [`DomainError::CustomizationFailed`]. Two published variants of this
    /// binding may not share a name.
    pub fn collect_usage_contexts(&self, out: &mut UsageSetBuilder) -> Result<(), DomainError> {
        let source = self.source.as_ref();
        let mut seen = HashSet::new();

        self.process(VariantDetails::primary(source), &mut seen, out)?;

        let secondaries = source.secondary_variants();
        for variant in &secondaries {
            self.process(VariantDetails::secondary(source, variant), &mut seen, out)?;
        }
        Ok(())
    }

    fn process(
        &self,
        mut details: VariantDetails<'_>,
        seen: &mut HashSet<String>,
        out: &mut UsageSetBuilder,
    ) -> Result<(), DomainError> {
        let variant = details.name.clone();
        (self.customizer)(&mut details).map_err(|e| DomainError::customization(variant, e))?;

        if details.skipped {
            return Ok(());
        }
        if !seen.insert(details.name.clone()) {
            return Err(DomainError::DuplicateVariant { name: details.name });
        }
        out.add(details.into_context(self.source.as_ref()));
        Ok(())
    }
}

impl fmt::Debug for VariantBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VariantBinding")
            .field("source", &self.source.name())
            .finish_non_exhaustive()
    }
}
