//! Outgoing artifact sets: what a build output can publish.
//!
//! The component never owns the data it publishes. It keeps an
//! `Arc<dyn ArtifactSet>` per binding and reads through the trait every time
//! usages are materialized, so implementations backed by live build state are
//! observed as they are at query time.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{
    Artifact, Attributes, Capability, Dependency, DependencyConstraint,
};

/// Read access to an outgoing artifact set (an "outgoing configuration").
pub trait ArtifactSet: Send + Sync {
    fn name(&self) -> &str;
    fn attributes(&self) -> Attributes;
    fn artifacts(&self) -> Vec<Artifact>;

    fn dependencies(&self) -> Vec<Dependency> {
        Vec::new()
    }

    fn dependency_constraints(&self) -> Vec<DependencyConstraint> {
        Vec::new()
    }

    fn capabilities(&self) -> Vec<Capability> {
        Vec::new()
    }

    /// Additional variants published alongside the primary one.
    fn secondary_variants(&self) -> Vec<ConfigurationVariant> {
        Vec::new()
    }
}

/// A secondary variant of an artifact set, e.g. `classes` next to a jar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurationVariant {
    pub name: String,
    #[serde(default)]
    pub attributes: Attributes,
    #[serde(default)]
    pub artifacts: Vec<Artifact>,
}

impl ConfigurationVariant {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Attributes::new(),
            artifacts: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn with_artifact(mut self, artifact: Artifact) -> Self {
        self.artifacts.push(artifact);
        self
    }
}

// ── Concrete artifact set ─────────────────────────────────────────────────────

/// Plain-data [`ArtifactSet`] used by adapters, the CLI and tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingConfiguration {
    name: String,
    attributes: Attributes,
    artifacts: Vec<Artifact>,
    dependencies: Vec<Dependency>,
    dependency_constraints: Vec<DependencyConstraint>,
    capabilities: Vec<Capability>,
    variants: Vec<ConfigurationVariant>,
}

impl OutgoingConfiguration {
    pub fn builder(name: impl Into<String>) -> OutgoingConfigurationBuilder {
        OutgoingConfigurationBuilder::new(name)
    }
}

impl ArtifactSet for OutgoingConfiguration {
    fn name(&self) -> &str {
        &self.name
    }

    fn attributes(&self) -> Attributes {
        self.attributes.clone()
    }

    fn artifacts(&self) -> Vec<Artifact> {
        self.artifacts.clone()
    }

    fn dependencies(&self) -> Vec<Dependency> {
        self.dependencies.clone()
    }

    fn dependency_constraints(&self) -> Vec<DependencyConstraint> {
        self.dependency_constraints.clone()
    }

    fn capabilities(&self) -> Vec<Capability> {
        self.capabilities.clone()
    }

    fn secondary_variants(&self) -> Vec<ConfigurationVariant> {
        self.variants.clone()
    }
}

impl fmt::Display for OutgoingConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} artifacts, {} secondary variants)",
            self.name,
            self.artifacts.len(),
            self.variants.len()
        )
    }
}

/// Builder for [`OutgoingConfiguration`].
#[derive(Debug, Clone)]
pub struct OutgoingConfigurationBuilder {
    inner: OutgoingConfiguration,
}

impl OutgoingConfigurationBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            inner: OutgoingConfiguration {
                name: name.into(),
                attributes: Attributes::new(),
                artifacts: Vec::new(),
                dependencies: Vec::new(),
                dependency_constraints: Vec::new(),
                capabilities: Vec::new(),
                variants: Vec::new(),
            },
        }
    }

    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.inner.attributes.insert(key.into(), value.into());
        self
    }

    pub fn artifact(mut self, artifact: Artifact) -> Self {
        self.inner.artifacts.push(artifact);
        self
    }

    pub fn dependency(mut self, dependency: Dependency) -> Self {
        self.inner.dependencies.push(dependency);
        self
    }

    pub fn constraint(mut self, constraint: DependencyConstraint) -> Self {
        self.inner.dependency_constraints.push(constraint);
        self
    }

    pub fn capability(mut self, capability: Capability) -> Self {
        self.inner.capabilities.push(capability);
        self
    }

    pub fn variant(mut self, variant: ConfigurationVariant) -> Self {
        self.inner.variants.push(variant);
        self
    }

    pub fn build(self) -> OutgoingConfiguration {
        self.inner
    }
}
