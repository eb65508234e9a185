//! Component Factory - creates ad-hoc components for one build unit.
//!
//! Every component made by the same factory shares the unit's default
//! ecosystem source. The source is consulted lazily, so ecosystems declared
//! on it after a component was created are still seen by that component.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::{
    application::ports::EcosystemSource,
    domain::{DomainValidator as validator, SoftwareComponent},
    error::AdhocResult,
};

/// Factory for [`SoftwareComponent`]s, scoped per build unit.
#[derive(Clone)]
pub struct ComponentFactory {
    ecosystems: Arc<dyn EcosystemSource>,
}

impl ComponentFactory {
    /// Create a factory whose components default to `ecosystems`.
    pub fn new(ecosystems: Arc<dyn EcosystemSource>) -> Self {
        Self { ecosystems }
    }

    /// Create an empty ad-hoc component named `name`.
    #[instrument(skip(self))]
    pub fn adhoc(&self, name: &str) -> AdhocResult<SoftwareComponent> {
        validator::validate_name("component name", name)?;
        debug!("Creating ad-hoc component");
        Ok(SoftwareComponent::new(name, Arc::clone(&self.ecosystems)))
    }
}

impl std::fmt::Debug for ComponentFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentFactory").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DomainError, Ecosystem};
    use crate::error::AdhocError;
    use std::sync::RwLock;

    #[test]
    fn adhoc_components_share_default_source() {
        let factory = ComponentFactory::new(Arc::new(|| {
            vec![Ecosystem::new("java", None).unwrap()]
        }));

        let api = factory.adhoc("api").unwrap();
        let impl_ = factory.adhoc("impl").unwrap();

        assert_eq!(api.name(), "api");
        assert_eq!(api.ecosystems(), impl_.ecosystems());
    }

    #[test]
    fn blank_component_name_is_rejected() {
        let factory = ComponentFactory::new(Arc::new(crate::domain::NoEcosystems));

        let err = factory.adhoc("").unwrap_err();
        assert!(matches!(
            err,
            AdhocError::Domain(DomainError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn defaults_declared_after_creation_are_visible() {
        let schema = Arc::new(RwLock::new(Vec::<Ecosystem>::new()));
        let reader = Arc::clone(&schema);
        let factory = ComponentFactory::new(Arc::new(move || {
            reader.read().map(|e| e.clone()).unwrap_or_default()
        }));

        let component = factory.adhoc("lib").unwrap();
        assert!(component.ecosystems().is_empty());

        schema
            .write()
            .unwrap()
            .push(Ecosystem::new("native", None).unwrap());
        assert_eq!(component.ecosystems()[0].name(), "native");
    }
}
