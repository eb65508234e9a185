//! Publication Service - the metadata-generation pass.
//!
//! This service owns the components of one build and, once configuration is
//! done, turns each of them into a [`Publication`]:
//! 1. Materialize usages (replaying every variant binding)
//! 2. Resolve ecosystems (explicit list, or the build's defaults)
//! 3. Optionally hand the result to a [`MetadataWriter`]
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::{
    application::{ApplicationError, ports::MetadataWriter},
    domain::{DomainValidator as validator, Ecosystem, SoftwareComponent, UsageSet},
    error::{AdhocError, AdhocResult},
};

/// Metadata format version stamped on every publication.
pub const FORMAT_VERSION: &str = "1.1";

/// Snapshot of one component, taken during a publication pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Publication {
    pub format_version: &'static str,
    pub build_id: Uuid,
    pub component: String,
    pub ecosystems: Vec<Ecosystem>,
    /// `true` when `ecosystems` were registered on the component rather than
    /// taken from the build's defaults.
    pub explicit_ecosystems: bool,
    pub usages: UsageSet,
}

/// Main publication service.
///
/// Components are kept in registration order; publishing every component
/// follows that order.
#[derive(Debug)]
pub struct PublicationService {
    build_id: Uuid,
    components: IndexMap<String, SoftwareComponent>,
}

impl PublicationService {
    /// Create a service with a fresh build id.
    pub fn new() -> Self {
        Self::with_build_id(Uuid::new_v4())
    }

    /// Create a service with a known build id.
    pub fn with_build_id(build_id: Uuid) -> Self {
        Self {
            build_id,
            components: IndexMap::new(),
        }
    }

    pub fn build_id(&self) -> Uuid {
        self.build_id
    }

    /// Register a component. Names must be unique.
    #[instrument(skip_all, fields(component = %component.name()))]
    pub fn register(&mut self, component: SoftwareComponent) -> AdhocResult<()> {
        let name = component.name().to_owned();
        if self.components.contains_key(&name) {
            return Err(ApplicationError::DuplicateComponent { name }.into());
        }
        debug!(variants = component.variant_count(), "Component registered");
        self.components.insert(name, component);
        Ok(())
    }

    pub fn component(&self, name: &str) -> AdhocResult<&SoftwareComponent> {
        self.components
            .get(name)
            .ok_or_else(|| not_found(name))
    }

    /// Mutable access for further configuration.
    pub fn component_mut(&mut self, name: &str) -> AdhocResult<&mut SoftwareComponent> {
        self.components
            .get_mut(name)
            .ok_or_else(|| not_found(name))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.components.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Publish one component.
    ///
    /// Customizer failures abort this component's publication and surface as
    /// [`AdhocError::Domain`].
    #[instrument(skip(self), fields(build_id = %self.build_id))]
    pub fn publish(&self, name: &str) -> AdhocResult<Publication> {
        let component = self.component(name)?;

        let usages = validator::validate_component(component).map_err(AdhocError::Domain)?;
        let ecosystems = component.ecosystems();

        info!(
            usages = usages.len(),
            ecosystems = ecosystems.len(),
            explicit = component.has_explicit_ecosystems(),
            "Component published"
        );

        Ok(Publication {
            format_version: FORMAT_VERSION,
            build_id: self.build_id,
            component: component.name().to_owned(),
            ecosystems,
            explicit_ecosystems: component.has_explicit_ecosystems(),
            usages,
        })
    }

    /// Publish every component in registration order, stopping at the first
    /// failure.
    pub fn publish_all(&self) -> AdhocResult<Vec<Publication>> {
        self.components
            .keys()
            .map(|name| self.publish(name))
            .collect()
    }

    /// Publish one component and render it with `writer`.
    #[instrument(skip(self, writer), fields(format = writer.format()))]
    pub fn render(&self, name: &str, writer: &dyn MetadataWriter) -> AdhocResult<String> {
        let publication = self.publish(name)?;
        let rendered = writer.write(&publication)?;
        debug!(bytes = rendered.len(), "Publication rendered");
        Ok(rendered)
    }
}

impl Default for PublicationService {
    fn default() -> Self {
        Self::new()
    }
}

fn not_found(name: &str) -> AdhocError {
    ApplicationError::ComponentNotFound {
        name: name.to_owned(),
    }
    .into()
}
