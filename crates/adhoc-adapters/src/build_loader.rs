//! Declarative build file loader.
//!
//! Parses a `build.toml` describing outgoing configurations and the components
//! that publish them, then wires everything into a [`PublicationService`].
//!
//! # `build.toml` format
//!
//! ```toml
//! # Optional: consumer ecosystems declared on the build's attribute schema.
//! [[ecosystems]]
//! name = "java"
//!
//! [[configurations]]
//! name         = "runtimeElements"
//! attributes   = { usage = "java-runtime" }
//! artifacts    = [{ name = "lib", extension = "jar" }]
//! dependencies = ["org.example:core:1.0"]
//! constraints  = []                         # optional
//! capabilities = []                         # optional
//!
//! [[configurations.variants]]
//! name       = "classes"
//! attributes = { libraryelements = "classes" }
//! artifacts  = [{ name = "classes", extension = "dir" }]
//!
//! [[components]]
//! name       = "java"
//! ecosystems = [{ name = "jvm", description = "JVM" }]  # overrides the defaults
//!
//! [[components.variants]]
//! configuration  = "runtimeElements"
//! scope          = "runtime"    # compile | runtime
//! optional       = false
//! skip           = false        # drop every variant of this binding
//! skip_secondary = true         # drop only the secondary variants
//! rename         = "runtime"    # new name for the primary variant
//! capabilities   = ["org.example:lib-extra:1.0"]
//! fail           = "reason"     # make the customizer fail when materialized
//! ```

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
    str::FromStr,
    sync::Arc,
};

use serde::Deserialize;
use tracing::{debug, instrument};

use adhoc_core::{
    application::{ComponentFactory, PublicationService},
    domain::{
        Artifact, ArtifactSet, Attributes, Capability, ConfigurationVariant, Coordinates,
        CustomizeError, OutgoingConfiguration, Scope, VariantDetails, VariantKind,
    },
    error::{AdhocError, AdhocResult, Context},
};

use crate::schema::InMemorySchema;

// ── File model ────────────────────────────────────────────────────────────────

/// Deserialised representation of a `build.toml` file.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct BuildFile {
    /// Consumer ecosystems declared on the schema.
    #[serde(default)]
    pub ecosystems: Vec<EcosystemEntry>,
    #[serde(default)]
    pub configurations: Vec<ConfigurationEntry>,
    #[serde(default)]
    pub components: Vec<ComponentEntry>,
}

/// An ecosystem reference, `{ name, description? }`.
#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct EcosystemEntry {
    pub name: String,
    pub description: Option<String>,
}

/// One entry under `[[configurations]]`.
#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct ConfigurationEntry {
    pub name: String,
    #[serde(default)]
    pub attributes: Attributes,
    #[serde(default)]
    pub artifacts: Vec<Artifact>,
    /// `group:name[:version]` strings.
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default)]
    pub constraints: Vec<String>,
    #[serde(default)]
    pub capabilities: Vec<String>,
    /// Secondary variants.
    #[serde(default)]
    pub variants: Vec<ConfigurationVariant>,
}

/// One entry under `[[components]]`.
#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct ComponentEntry {
    pub name: String,
    /// Explicit ecosystems. Leaving this empty keeps the schema defaults.
    #[serde(default)]
    pub ecosystems: Vec<EcosystemEntry>,
    #[serde(default)]
    pub variants: Vec<VariantRule>,
}

/// One entry under `[[components.variants]]`: a configuration reference plus
/// the customization applied when it is materialized.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct VariantRule {
    pub configuration: String,
    #[serde(default)]
    pub skip: bool,
    #[serde(default)]
    pub skip_secondary: bool,
    pub scope: Option<Scope>,
    #[serde(default)]
    pub optional: bool,
    /// Applies to the primary variant only.
    pub rename: Option<String>,
    #[serde(default)]
    pub capabilities: Vec<String>,
    pub fail: Option<String>,
}

impl FromStr for BuildFile {
    type Err = AdhocError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str::<Self>(s).context("failed to parse build file")
    }
}

impl BuildFile {
    /// Build a [`PublicationService`] from this file.
    ///
    /// Ecosystems listed at the top level are declared on `schema`; every
    /// component is created through a [`ComponentFactory`] sharing it.
    ///
    /// # Errors
    ///
    /// Returns [`AdhocError::Configuration`] for duplicate configuration names,
    /// unknown configuration references and malformed coordinates. Invalid
    /// component or ecosystem names surface as domain errors.
    #[instrument(skip_all, fields(components = self.components.len()))]
    pub fn into_service(self, schema: &InMemorySchema) -> AdhocResult<PublicationService> {
        for ecosystem in &self.ecosystems {
            schema.declare(&ecosystem.name, ecosystem.description.as_deref())?;
        }

        let configurations = self.configuration_index()?;
        let factory = ComponentFactory::new(Arc::new(schema.clone()));
        let mut service = PublicationService::new();

        for entry in self.components {
            let mut component = factory.adhoc(&entry.name)?;

            for ecosystem in &entry.ecosystems {
                component.register_ecosystem(&ecosystem.name, ecosystem.description.as_deref())?;
            }

            for rule in entry.variants {
                let source = configurations.get(&rule.configuration).ok_or_else(|| {
                    AdhocError::Configuration {
                        message: format!(
                            "component '{}' references unknown configuration '{}'",
                            entry.name, rule.configuration
                        ),
                    }
                })?;
                let capabilities = parse_coordinates(&rule.capabilities)
                    .context(format!("component '{}'", entry.name))?;

                component.add_variant(Arc::clone(source), move |details| {
                    apply_rule(&rule, &capabilities, details)
                });
            }

            debug!(component = %component, "Component loaded");
            service.register(component)?;
        }

        Ok(service)
    }

    fn configuration_index(&self) -> AdhocResult<HashMap<String, Arc<dyn ArtifactSet>>> {
        let mut index: HashMap<String, Arc<dyn ArtifactSet>> = HashMap::new();
        for entry in &self.configurations {
            if index.contains_key(&entry.name) {
                return Err(AdhocError::Configuration {
                    message: format!("configuration '{}' is declared twice", entry.name),
                });
            }
            let configuration = entry
                .to_configuration()
                .context(format!("configuration '{}'", entry.name))?;
            index.insert(entry.name.clone(), Arc::new(configuration));
        }
        Ok(index)
    }
}

impl ConfigurationEntry {
    fn to_configuration(&self) -> Result<OutgoingConfiguration, adhoc_core::domain::DomainError> {
        let mut builder = OutgoingConfiguration::builder(&self.name);
        for (key, value) in &self.attributes {
            builder = builder.attribute(key, value);
        }
        for artifact in &self.artifacts {
            builder = builder.artifact(artifact.clone());
        }
        for dependency in parse_coordinates(&self.dependencies)? {
            builder = builder.dependency(dependency);
        }
        for constraint in parse_coordinates(&self.constraints)? {
            builder = builder.constraint(constraint);
        }
        for capability in parse_coordinates(&self.capabilities)? {
            builder = builder.capability(capability);
        }
        for variant in &self.variants {
            builder = builder.variant(variant.clone());
        }
        Ok(builder.build())
    }
}

fn parse_coordinates(
    raw: &[String],
) -> Result<Vec<Coordinates>, adhoc_core::domain::DomainError> {
    raw.iter().map(|s| s.parse()).collect()
}

fn apply_rule(
    rule: &VariantRule,
    capabilities: &[Capability],
    details: &mut VariantDetails<'_>,
) -> Result<(), CustomizeError> {
    if let Some(reason) = &rule.fail {
        return Err(reason.clone().into());
    }

    let primary = details.variant() == VariantKind::Primary;
    if rule.skip || (rule.skip_secondary && !primary) {
        details.skip();
        return Ok(());
    }

    if let (true, Some(name)) = (primary, &rule.rename) {
        details.rename(name.clone());
    }
    if let Some(scope) = rule.scope {
        details.map_to_scope(scope);
    }
    if rule.optional {
        details.map_to_optional();
    }
    for capability in capabilities {
        details.add_capability(capability.clone());
    }
    Ok(())
}

// ── Loader ────────────────────────────────────────────────────────────────────

/// Reads [`BuildFile`]s from disk.
///
/// # Example
///
/// ```no_run
/// use adhoc_adapters::{BuildFileLoader, InMemorySchema};
///
/// let schema = InMemorySchema::new();
/// let service = BuildFileLoader::new("build.toml").load()?.into_service(&schema)?;
/// println!("Loaded {} components", service.len());
/// # Ok::<(), adhoc_core::error::AdhocError>(())
/// ```
#[derive(Debug, Clone)]
pub struct BuildFileLoader {
    path: PathBuf,
}

impl BuildFileLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the build file.
    ///
    /// # Errors
    ///
    /// Returns [`AdhocError::Configuration`] if the file is missing, unreadable
    /// or not valid `build.toml`.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> AdhocResult<BuildFile> {
        let raw = fs::read_to_string(&self.path)
            .context(format!("failed to read '{}'", self.path.display()))?;
        let build: BuildFile = toml::from_str(&raw)
            .context(format!("failed to parse '{}'", self.path.display()))?;

        debug!(
            configurations = build.configurations.len(),
            components = build.components.len(),
            "Build file loaded"
        );
        Ok(build)
    }
}
